//! Fetch-and-render components.
//!
//! Each component borrows the [`shopfront_client::StorefrontClient`] it was
//! built with and splits its work in two: an async fetch that returns typed
//! data, and a synchronous render into [`crate::view::Node`]s that is then
//! placed into the [`crate::Page`]. Responses are parsed completely before
//! the page is touched.

mod cart;
mod navbar;
mod orders;
mod products;
mod reviews;
mod search;

pub use cart::{AddedToCart, Cart};
pub use navbar::{render_navbar, Navigation};
pub use orders::{render_order_history, render_order_summary, Orders};
pub use products::{render_products, Products};
pub use reviews::{render_reviews, Reviews};
pub use search::{render_search_results, SearchApplied, SearchBox, SearchTicket};

pub(crate) use cart::apply_count;
pub(crate) use navbar::apply_navbar;
pub(crate) use orders::{apply_order_history, apply_order_summary};
pub(crate) use products::apply_products;
pub(crate) use reviews::apply_reviews;
