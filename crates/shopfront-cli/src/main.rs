mod cart;
mod orders;
mod pages;
mod reviews;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shopfront_client::StorefrontClient;
use shopfront_ui::{Component, Storefront};

use crate::cart::CartCommands;
use crate::orders::OrderCommands;
use crate::pages::{build_page, print_page, PageOptions};
use crate::reviews::ReviewCommands;

#[derive(Debug, Parser)]
#[command(name = "shopfront")]
#[command(about = "Render storefront pages against a live backend")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Cart badge and add-to-cart
    Cart {
        #[command(subcommand)]
        command: CartCommands,
    },
    /// Order summary, history, and checkout
    Orders {
        #[command(subcommand)]
        command: OrderCommands,
    },
    /// List products for the current category
    Products {
        /// List one subcategory instead (slug)
        #[arg(long)]
        subcategory: Option<String>,
    },
    /// List or submit product reviews
    Reviews {
        #[command(subcommand)]
        command: ReviewCommands,
    },
    /// Type into the search box one keystroke state at a time
    Search {
        /// Successive contents of the search input; pass "" for a cleared box
        #[arg(required = true)]
        keystrokes: Vec<String>,
    },
    /// Render the navigation bar
    Navbar,
    /// Bootstrap a page containing the given marker elements
    Render {
        /// Marker element id (e.g. cart-count, product-list); repeatable
        #[arg(long = "marker", required = true, value_delimiter = ',')]
        markers: Vec<String>,
        /// Product slug for the reviews-list marker
        #[arg(long)]
        product_slug: Option<String>,
        /// Subcategory slug for the product-list marker
        #[arg(long)]
        subcategory: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = shopfront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(?config, "loaded configuration");
    let client = StorefrontClient::from_config(&config)
        .with_context(|| format!("failed to build client for {}", config.api_base_url))?;
    tracing::debug!(
        base_url = %client.context().base_url(),
        env = %config.env,
        "storefront client ready"
    );
    let storefront = Storefront::new(client);

    match cli.command {
        Commands::Cart { command } => cart::run(&storefront, command).await,
        Commands::Orders { command } => orders::run(&storefront, command).await,
        Commands::Reviews { command } => reviews::run(&storefront, command).await,
        Commands::Products { subcategory } => {
            let options = PageOptions {
                subcategory,
                ..PageOptions::default()
            };
            run_component(&storefront, Component::Products, &options).await
        }
        Commands::Navbar => {
            run_component(&storefront, Component::Navbar, &PageOptions::default()).await
        }
        Commands::Search { keystrokes } => run_search(&storefront, &keystrokes).await,
        Commands::Render {
            markers,
            product_slug,
            subcategory,
        } => {
            let components = parse_markers(&markers)?;
            let options = PageOptions {
                product_slug,
                subcategory,
            };
            run_render(&storefront, &components, &options).await
        }
    }
}

/// Builds a page holding one component's marker, loads it, and prints it.
async fn run_component(
    storefront: &Storefront,
    component: Component,
    options: &PageOptions,
) -> anyhow::Result<()> {
    let mut page = build_page(&[component], options);
    let result = storefront.load(&mut page, component).await;
    print_page(&mut page);
    result.with_context(|| format!("failed to load {component}"))
}

async fn run_search(storefront: &Storefront, keystrokes: &[String]) -> anyhow::Result<()> {
    let mut page = build_page(&[Component::Search], &PageOptions::default());
    let search = shopfront_ui::SearchBox::attach(&page)
        .context("search page has no search input")?;

    for text in keystrokes {
        let applied = storefront
            .search(&search, &mut page, text)
            .await
            .with_context(|| format!("search for {text:?} failed"))?;
        println!("{text:?}: {applied:?}");
    }
    print_page(&mut page);
    Ok(())
}

async fn run_render(
    storefront: &Storefront,
    components: &[Component],
    options: &PageOptions,
) -> anyhow::Result<()> {
    let mut page = build_page(components, options);
    let report = storefront.bootstrap(&mut page).await;
    print_page(&mut page);

    let names = |list: &[Component]| {
        list.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("ran: {}", names(&report.ran));
    if !report.failed.is_empty() {
        anyhow::bail!("failed: {}", names(&report.failed));
    }
    Ok(())
}

fn parse_markers(markers: &[String]) -> anyhow::Result<Vec<Component>> {
    markers
        .iter()
        .map(|marker| {
            Component::from_marker(marker).with_context(|| {
                let known = Component::ALL.map(Component::marker).join(", ");
                format!("unknown marker {marker:?} (expected one of: {known})")
            })
        })
        .collect()
}
