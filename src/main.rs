//! Binary entry point for comptoir.
//!
//! This binary provides the CLI interface for the comptoir storefront engine.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

mod commands;

use clap::{Parser, Subcommand};
use comptoir::config::ComptoirConfig;
use comptoir::observability::{self, InitOptions};
use std::process::ExitCode;

/// Comptoir - a storefront cart and order relay engine.
#[derive(Parser)]
#[command(name = "comptoir")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "COMPTOIR_CONFIG_PATH")]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Add a product to the cart.
    Add {
        /// Product name as displayed on the storefront.
        product: String,
    },

    /// Show the cart.
    Status,

    /// Validate the order and hand it off via the deep link.
    Checkout {
        /// Open the deep link in the system browser.
        #[arg(long)]
        open: bool,
    },

    /// Submit the contact form.
    Contact {
        /// Message body.
        message: String,

        /// Sender name.
        #[arg(short, long)]
        name: Option<String>,

        /// Sender email.
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Manage configuration.
    Config {
        /// Show current configuration.
        #[arg(long)]
        show: bool,
    },

    /// Run an interactive storefront session.
    Session,
}

/// Main entry point.
#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = observability::init_from_config(
        config.logging.as_ref(),
        InitOptions {
            verbose: cli.verbose,
        },
    ) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the selected command.
async fn run_command(cli: Cli, config: ComptoirConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Add { product } => commands::cmd_add(&config, &product).await,

        Commands::Status => commands::cmd_status(&config),

        Commands::Checkout { open } => commands::cmd_checkout(&config, open).await,

        Commands::Contact {
            message,
            name,
            email,
        } => commands::cmd_contact(&config, message, name, email).await,

        Commands::Config { show } => commands::cmd_config(&config, show),

        Commands::Session => commands::cmd_session(&config).await,
    }
}

/// Loads configuration.
fn load_config(path: Option<&str>) -> Result<ComptoirConfig, Box<dyn std::error::Error>> {
    // If a path is provided (flag or COMPTOIR_CONFIG_PATH), load from that file
    if let Some(config_path) = path {
        return ComptoirConfig::load_from_file(std::path::Path::new(config_path))
            .map_err(std::convert::Into::into);
    }

    // Otherwise, load from default location
    Ok(ComptoirConfig::load_default())
}
