//! Storefront presentation layer.
//!
//! Components fetch JSON through [`shopfront_client::StorefrontClient`],
//! project it into declarative [`view::Node`] trees, and place those into an
//! in-memory [`page::Page`]. The [`Storefront`] facade probes a page for
//! marker elements, runs the matching components, and turns their typed
//! results into user-visible [`Notice`]s.

pub mod components;
pub mod error;
pub mod ids;
pub mod notice;
pub mod page;
pub mod storefront;
pub mod view;

pub use components::{
    AddedToCart, Cart, Navigation, Orders, Products, Reviews, SearchApplied, SearchBox,
    SearchTicket,
};
pub use error::UiError;
pub use notice::Notice;
pub use page::Page;
pub use storefront::{BootstrapReport, Component, Storefront};
pub use view::{Action, ElementNode, Node};
