use anyhow::Context as _;
use clap::Subcommand;

use shopfront_ui::{Component, Page, Storefront};

use crate::pages::{print_page, PageOptions};

/// Sub-commands available under `reviews`.
#[derive(Debug, Subcommand)]
pub enum ReviewCommands {
    /// Show the reviews for a product
    List {
        /// Product slug
        slug: String,
    },
    /// Post a review for a product
    Submit {
        /// Product slug
        slug: String,
        /// Star rating, 1-5
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
        /// Review text
        #[arg(long, default_value = "")]
        comment: String,
    },
}

pub(crate) async fn run(storefront: &Storefront, command: ReviewCommands) -> anyhow::Result<()> {
    match command {
        ReviewCommands::List { slug } => {
            let options = PageOptions {
                product_slug: Some(slug),
                ..PageOptions::default()
            };
            crate::run_component(storefront, Component::Reviews, &options).await
        }
        ReviewCommands::Submit {
            slug,
            rating,
            comment,
        } => {
            let mut page = Page::new();
            let result = storefront
                .submit_review(&mut page, &slug, rating, &comment)
                .await;
            print_page(&mut page);
            result
                .map(drop)
                .with_context(|| format!("failed to submit review for {slug}"))
        }
    }
}
