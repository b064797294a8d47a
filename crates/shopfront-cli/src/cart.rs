use anyhow::Context as _;
use clap::Subcommand;

use shopfront_ui::{Component, Storefront};

use crate::pages::{build_page, print_page, PageOptions};

/// Sub-commands available under `cart`.
#[derive(Debug, Subcommand)]
pub enum CartCommands {
    /// Show the cart item count
    Count,
    /// Add a product to the cart
    Add {
        /// Product slug
        slug: String,
        /// Variant to add; the backend picks the default when omitted
        #[arg(long)]
        variant_id: Option<i64>,
    },
}

pub(crate) async fn run(storefront: &Storefront, command: CartCommands) -> anyhow::Result<()> {
    match command {
        CartCommands::Count => {
            crate::run_component(storefront, Component::CartCount, &PageOptions::default()).await
        }
        CartCommands::Add { slug, variant_id } => {
            let mut page = build_page(&[Component::CartCount], &PageOptions::default());
            let result = storefront.add_to_cart(&mut page, &slug, variant_id).await;
            print_page(&mut page);
            let added = result.with_context(|| format!("failed to add {slug} to cart"))?;
            if added.refreshed_count.is_none() {
                tracing::warn!("cart count could not be refreshed");
            }
            Ok(())
        }
    }
}
