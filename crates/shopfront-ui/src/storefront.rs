//! Page bootstrap and the user-facing policy layer.
//!
//! Components return typed results and never decide what the shopper sees.
//! [`Storefront`] does: request and parse failures are logged and leave the
//! page as it was, while application-level answers from the backend
//! (add-to-cart messages, checkout rejections, review acknowledgements)
//! become [`Notice`]s on the page.

use std::fmt;

use futures::future::OptionFuture;

use shopfront_client::{CheckoutOutcome, StorefrontClient};

use crate::components::{
    self, AddedToCart, Cart, Navigation, Orders, Products, Reviews, SearchApplied, SearchBox,
};
use crate::error::UiError;
use crate::ids;
use crate::notice::Notice;
use crate::page::Page;
use crate::view::Action;

/// A unit of work the bootstrap can run for a marker element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    CartCount,
    Navbar,
    OrderSummary,
    OrderHistory,
    Products,
    Reviews,
    Search,
}

impl Component {
    /// Every component, in the order bootstrap applies them.
    pub const ALL: [Component; 7] = [
        Component::CartCount,
        Component::Navbar,
        Component::OrderSummary,
        Component::OrderHistory,
        Component::Products,
        Component::Reviews,
        Component::Search,
    ];

    /// Id of the element whose presence enables this component.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Component::CartCount => ids::CART_COUNT,
            Component::Navbar => ids::NAVBAR,
            Component::OrderSummary => ids::ORDER_ITEMS,
            Component::OrderHistory => ids::ORDER_LIST,
            Component::Products => ids::PRODUCT_LIST,
            Component::Reviews => ids::REVIEWS_LIST,
            Component::Search => ids::SEARCH_QUERY,
        }
    }

    /// Looks a component up by its marker id.
    #[must_use]
    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.marker() == marker)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// What [`Storefront::bootstrap`] did to a page.
#[derive(Debug, Default)]
pub struct BootstrapReport {
    /// Components that loaded and rendered, in apply order.
    pub ran: Vec<Component>,
    /// Components whose marker was present but which failed.
    pub failed: Vec<Component>,
    /// Search wiring, when the page has a search box.
    pub search: Option<SearchBox>,
}

/// Facade over every component, applying one error and notice policy.
pub struct Storefront {
    client: StorefrontClient,
}

impl Storefront {
    #[must_use]
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &StorefrontClient {
        &self.client
    }

    /// Probes `page` for marker elements and loads each matching component.
    ///
    /// Requests go out concurrently; results are applied one at a time in
    /// [`Component::ALL`] order once all of them have settled. Failures are
    /// logged, recorded in the report, and leave their element unchanged.
    pub async fn bootstrap(&self, page: &mut Page) -> BootstrapReport {
        let client = &self.client;
        let wants = |component: Component| page.contains(component.marker());

        let product_subcategory = page
            .attr(ids::PRODUCT_LIST, ids::SUBCATEGORY_SLUG_ATTR)
            .map(str::to_owned);
        let review_slug = page
            .attr(ids::REVIEWS_LIST, ids::PRODUCT_SLUG_ATTR)
            .map(str::to_owned);

        let cart_count: OptionFuture<_> = wants(Component::CartCount)
            .then(|| client.cart_count())
            .into();
        let navbar: OptionFuture<_> = wants(Component::Navbar).then(|| client.navbar()).into();
        let summary: OptionFuture<_> = wants(Component::OrderSummary)
            .then(|| client.order_summary())
            .into();
        let history: OptionFuture<_> = wants(Component::OrderHistory)
            .then(|| client.order_history())
            .into();
        let products: OptionFuture<_> = wants(Component::Products)
            .then(|| async move {
                match product_subcategory.as_deref() {
                    Some(slug) => client.products_by_subcategory(slug).await,
                    None => client.products_by_category().await,
                }
            })
            .into();
        let reviews: OptionFuture<_> = review_slug
            .as_deref()
            .filter(|_| wants(Component::Reviews))
            .map(|slug| client.reviews(slug))
            .into();

        let (cart_count, navbar, summary, history, products, reviews) =
            futures::join!(cart_count, navbar, summary, history, products, reviews);

        let mut report = BootstrapReport::default();
        if let Some(result) = cart_count {
            let outcome = result
                .map_err(UiError::from)
                .and_then(|count| components::apply_count(page, count));
            report.record(Component::CartCount, outcome);
        }
        if let Some(result) = navbar {
            let outcome = result
                .map_err(UiError::from)
                .and_then(|navbar| components::apply_navbar(page, &navbar));
            report.record(Component::Navbar, outcome);
        }
        if let Some(result) = summary {
            let outcome = result
                .map_err(UiError::from)
                .and_then(|summary| components::apply_order_summary(page, &summary));
            report.record(Component::OrderSummary, outcome);
        }
        if let Some(result) = history {
            let outcome = result
                .map_err(UiError::from)
                .and_then(|orders| components::apply_order_history(page, &orders));
            report.record(Component::OrderHistory, outcome);
        }
        if let Some(result) = products {
            let outcome = result
                .map_err(UiError::from)
                .and_then(|products| components::apply_products(page, &products));
            report.record(Component::Products, outcome);
        }
        match reviews {
            Some(result) => {
                let outcome = result
                    .map_err(UiError::from)
                    .and_then(|reviews| components::apply_reviews(page, &reviews));
                report.record(Component::Reviews, outcome);
            }
            None if page.contains(ids::REVIEWS_LIST) => {
                report.record::<()>(Component::Reviews, Err(missing_review_slug()));
            }
            None => {}
        }

        report.search = SearchBox::attach(page);
        if report.search.is_some() {
            report.ran.push(Component::Search);
        }

        tracing::info!(
            ran = report.ran.len(),
            failed = report.failed.len(),
            "storefront bootstrap complete"
        );
        report
    }

    /// Runs a single component against `page`.
    ///
    /// # Errors
    ///
    /// Returns the component's error after logging it. `Search` only checks
    /// for the search input; use [`Storefront::search`] to run a query.
    pub async fn load(&self, page: &mut Page, component: Component) -> Result<(), UiError> {
        let result = match component {
            Component::CartCount => self.cart().fetch_cart_count(page).await.map(drop),
            Component::Navbar => Navigation::new(&self.client).fetch_navbar(page).await,
            Component::OrderSummary => self.orders().fetch_order_summary(page).await.map(drop),
            Component::OrderHistory => self.orders().fetch_order_history(page).await.map(drop),
            Component::Products => {
                let products = Products::new(&self.client);
                let subcategory = page
                    .attr(ids::PRODUCT_LIST, ids::SUBCATEGORY_SLUG_ATTR)
                    .map(str::to_owned);
                let listed = match subcategory {
                    Some(slug) => products.fetch_products_by_subcategory(page, &slug).await,
                    None => products.fetch_products_by_category(page).await,
                };
                listed.map(drop)
            }
            Component::Reviews => {
                let slug = page
                    .attr(ids::REVIEWS_LIST, ids::PRODUCT_SLUG_ATTR)
                    .map(str::to_owned);
                match slug {
                    Some(slug) => self.reviews().fetch_reviews(page, &slug).await.map(drop),
                    None => Err(missing_review_slug()),
                }
            }
            Component::Search => page.require(ids::SEARCH_QUERY).map(drop),
        };
        if let Err(error) = &result {
            log_failure(component, error);
        }
        result
    }

    /// Adds a product to the cart and queues the backend's message.
    ///
    /// # Errors
    ///
    /// Returns the request error after logging it; no notice is queued.
    pub async fn add_to_cart(
        &self,
        page: &mut Page,
        slug: &str,
        fallback_variant_id: Option<i64>,
    ) -> Result<AddedToCart, UiError> {
        match self.cart().add_to_cart(page, slug, fallback_variant_id).await {
            Ok(added) => {
                page.notify(Notice::Info(added.message.clone()));
                Ok(added)
            }
            Err(error) => {
                tracing::warn!(%error, slug, "add to cart failed");
                Err(error)
            }
        }
    }

    /// Checks out and reports the outcome to the shopper.
    ///
    /// A rejection is queued as an error notice carrying the backend's
    /// message verbatim; a payment hand-off is queued as an info notice.
    ///
    /// # Errors
    ///
    /// Returns the request error after logging it.
    pub async fn checkout(&self, page: &mut Page) -> Result<CheckoutOutcome, UiError> {
        let outcome = match self.orders().checkout(page).await {
            Ok(outcome) => outcome,
            Err(error) => {
                tracing::warn!(%error, "checkout failed");
                return Err(error);
            }
        };
        match &outcome {
            CheckoutOutcome::Placed { order_number } => {
                tracing::info!(%order_number, "order placed");
            }
            CheckoutOutcome::Redirect { url } => {
                page.notify(Notice::Info(format!("Continue to payment: {url}")));
            }
            CheckoutOutcome::Rejected { error } => {
                page.notify(Notice::Error(error.clone()));
            }
        }
        Ok(outcome)
    }

    /// Posts a review and queues the backend's acknowledgement.
    ///
    /// # Errors
    ///
    /// Returns the request error after logging it.
    pub async fn submit_review(
        &self,
        page: &mut Page,
        slug: &str,
        rating: u8,
        comment: &str,
    ) -> Result<String, UiError> {
        match self.reviews().submit_review(slug, rating, comment).await {
            Ok(message) => {
                page.notify(Notice::Info(message.clone()));
                Ok(message)
            }
            Err(error) => {
                tracing::warn!(%error, slug, rating, "review submission failed");
                Err(error)
            }
        }
    }

    /// Feeds one keystroke's worth of input to a wired search box.
    ///
    /// # Errors
    ///
    /// Returns the search error after logging it; prior results stay.
    pub async fn search(
        &self,
        search: &SearchBox,
        page: &mut Page,
        text: &str,
    ) -> Result<SearchApplied, UiError> {
        let result = search.on_input(&self.client, page, text).await;
        if let Err(error) = &result {
            log_failure(Component::Search, error);
        }
        result
    }

    /// Runs the handler for an action bound in a rendered view.
    ///
    /// # Errors
    ///
    /// As for [`Storefront::add_to_cart`] and [`Storefront::checkout`].
    pub async fn dispatch(&self, page: &mut Page, action: &Action) -> Result<(), UiError> {
        match action {
            Action::AddToCart { slug } => self.add_to_cart(page, slug, None).await.map(drop),
            Action::Checkout => self.checkout(page).await.map(drop),
        }
    }

    fn cart(&self) -> Cart<'_> {
        Cart::new(&self.client)
    }

    fn orders(&self) -> Orders<'_> {
        Orders::new(&self.client)
    }

    fn reviews(&self) -> Reviews<'_> {
        Reviews::new(&self.client)
    }
}

impl BootstrapReport {
    fn record<T>(&mut self, component: Component, result: Result<T, UiError>) {
        match result {
            Ok(_) => self.ran.push(component),
            Err(error) => {
                log_failure(component, &error);
                self.failed.push(component);
            }
        }
    }
}

fn missing_review_slug() -> UiError {
    UiError::MissingAttribute {
        id: ids::REVIEWS_LIST.to_owned(),
        attr: ids::PRODUCT_SLUG_ATTR.to_owned(),
    }
}

fn log_failure(component: Component, error: &UiError) {
    tracing::warn!(%component, %error, "storefront component failed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_map_to_their_markers() {
        for component in Component::ALL {
            assert_eq!(Component::from_marker(component.marker()), Some(component));
        }
        assert_eq!(Component::from_marker("order-success"), None);
    }

    #[test]
    fn apply_order_starts_with_cart_and_ends_with_search() {
        assert_eq!(Component::ALL[0], Component::CartCount);
        assert_eq!(Component::ALL[6], Component::Search);
        assert_eq!(Component::Products.to_string(), "product-list");
    }
}
