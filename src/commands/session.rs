//! Interactive storefront session.
//!
//! A line-oriented loop on stdin: each line is a storefront interaction,
//! notifications surface asynchronously between prompts.

use super::core::open_storefront;
use comptoir::config::ComptoirConfig;
use comptoir::handoff::{BrowserOpener, LinkOpener};
use comptoir::models::OrderSummary;
use comptoir::rendering::render_summary_table;
use comptoir::services::CheckoutOutcome;
use comptoir::ContactSubmission;
use std::io::Write as _;
use tokio::io::AsyncBufReadExt;

const HELP: &str = "Commandes : add <produit> | status | checkout | contact <message> | help | quit";

/// Session command: runs the interactive loop until EOF or `quit`.
pub async fn cmd_session(config: &ComptoirConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut storefront = open_storefront(config)?;

    println!("{} — session interactive", config.store.name);
    println!("{HELP}");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => {}
            "quit" | "exit" => break,
            "add" => match storefront.cart_mut().add(rest) {
                Ok(count) => println!("Panier : {count} article(s)"),
                Err(e) => println!("{e}"),
            },
            "status" => {
                let cart = storefront.cart().cart();
                if cart.is_empty() {
                    println!("Panier vide.");
                } else {
                    println!("Panier : {} article(s)", cart.count());
                    let summary = OrderSummary::from_items(cart.items());
                    print!("{}", render_summary_table(&summary));
                }
            }
            "checkout" => match storefront.cart().checkout()? {
                CheckoutOutcome::EmptyCart => {
                    // Notice raised through the notifier.
                }
                CheckoutOutcome::Validated(handoff) => {
                    println!("Lien de validation : {}", handoff.link);
                    if let Err(e) = BrowserOpener::new().open(&handoff.link) {
                        tracing::warn!("could not open deep link: {e}");
                    }
                }
            },
            "contact" => {
                if rest.is_empty() {
                    println!("Usage : contact <message>");
                } else {
                    storefront.contact().submit(&ContactSubmission::new(rest))?;
                }
            }
            _ => println!("{HELP}"),
        }

        prompt()?;
    }

    // Let pending notifications finish before tearing the session down.
    storefront.drain_notifications().await;
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}
