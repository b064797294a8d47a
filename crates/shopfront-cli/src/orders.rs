use anyhow::Context as _;
use clap::Subcommand;

use shopfront_client::CheckoutOutcome;
use shopfront_ui::{Component, Storefront};

use crate::pages::{checkout_page, print_page, PageOptions};

/// Sub-commands available under `orders`.
#[derive(Debug, Subcommand)]
pub enum OrderCommands {
    /// Show the open order's line items
    Summary,
    /// Show every placed order
    History,
    /// Check out the current cart
    Checkout,
}

pub(crate) async fn run(storefront: &Storefront, command: OrderCommands) -> anyhow::Result<()> {
    let component = match command {
        OrderCommands::Summary => Component::OrderSummary,
        OrderCommands::History => Component::OrderHistory,
        OrderCommands::Checkout => return run_checkout(storefront).await,
    };
    crate::run_component(storefront, component, &PageOptions::default()).await
}

async fn run_checkout(storefront: &Storefront) -> anyhow::Result<()> {
    let mut page = checkout_page();
    let result = storefront.checkout(&mut page).await;
    print_page(&mut page);

    match result.context("checkout request failed")? {
        CheckoutOutcome::Placed { order_number } => {
            println!("order placed: {order_number}");
            Ok(())
        }
        CheckoutOutcome::Redirect { url } => {
            println!("payment required: {url}");
            Ok(())
        }
        CheckoutOutcome::Rejected { error } => anyhow::bail!("checkout rejected: {error}"),
    }
}
