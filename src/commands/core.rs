//! Core command handlers.
//!
//! Contains the implementation of the one-shot CLI commands:
//! add, status, checkout, contact, config.

use super::terminal::TerminalRenderer;
use comptoir::config::ComptoirConfig;
use comptoir::handoff::{BrowserOpener, LinkOpener};
use comptoir::models::OrderSummary;
use comptoir::rendering::render_summary_table;
use comptoir::services::{CheckoutOutcome, Storefront};
use comptoir::ContactSubmission;
use std::sync::Arc;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Opens a storefront session wired to the terminal renderer.
pub(crate) fn open_storefront(config: &ComptoirConfig) -> comptoir::Result<Storefront> {
    Storefront::open(config.clone(), Arc::new(TerminalRenderer::new()))
}

/// Add command.
pub async fn cmd_add(config: &ComptoirConfig, product: &str) -> CmdResult {
    let mut storefront = open_storefront(config)?;

    let count = storefront.cart_mut().add(product)?;
    println!("Panier : {count} article(s)");

    // Let the item-added notification run its full lifecycle before exit.
    storefront.drain_notifications().await;
    Ok(())
}

/// Status command.
pub fn cmd_status(config: &ComptoirConfig) -> CmdResult {
    let storefront = open_storefront(config)?;
    let cart = storefront.cart().cart();

    if cart.is_empty() {
        println!("Panier vide.");
        return Ok(());
    }

    println!("Panier : {} article(s)", cart.count());
    let summary = OrderSummary::from_items(cart.items());
    print!("{}", render_summary_table(&summary));
    Ok(())
}

/// Checkout command.
pub async fn cmd_checkout(config: &ComptoirConfig, open: bool) -> CmdResult {
    let storefront = open_storefront(config)?;

    match storefront.cart().checkout()? {
        CheckoutOutcome::EmptyCart => {
            // The empty-cart notice is raised through the notifier.
        }
        CheckoutOutcome::Validated(handoff) => {
            println!("{}", handoff.message);
            println!();
            println!("Lien de validation : {}", handoff.link);

            if open {
                BrowserOpener::new().open(&handoff.link)?;
            }
        }
    }

    storefront.drain_notifications().await;
    Ok(())
}

/// Contact command.
pub async fn cmd_contact(
    config: &ComptoirConfig,
    message: String,
    name: Option<String>,
    email: Option<String>,
) -> CmdResult {
    let storefront = open_storefront(config)?;

    let mut submission = ContactSubmission::new(message);
    if let Some(name) = name {
        submission = submission.with_name(name);
    }
    if let Some(email) = email {
        submission = submission.with_email(email);
    }

    storefront.contact().submit(&submission)?;
    storefront.drain_notifications().await;
    Ok(())
}

/// Config command.
pub fn cmd_config(config: &ComptoirConfig, _show: bool) -> CmdResult {
    println!("data_dir = {}", config.data_dir.display());
    println!("store.name = {}", config.store.name);
    println!("store.whatsapp_recipient = {}", config.store.whatsapp_recipient);
    println!(
        "notifications.item_added_ms = {}",
        config.notifications.item_added_visible.as_millis()
    );
    println!(
        "notifications.contact_ms = {}",
        config.notifications.contact_visible.as_millis()
    );
    println!(
        "notifications.empty_cart_ms = {}",
        config.notifications.empty_cart_visible.as_millis()
    );
    println!(
        "notifications.fade_ms = {}",
        config.notifications.fade.as_millis()
    );
    Ok(())
}
