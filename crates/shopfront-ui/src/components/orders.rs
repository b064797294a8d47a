use shopfront_client::{CheckoutOutcome, StorefrontClient};
use shopfront_core::{Order, OrderItem, OrderSummary};

use crate::error::UiError;
use crate::ids;
use crate::page::Page;
use crate::view::{ElementNode, Node};

/// Order summary, order history, and checkout.
pub struct Orders<'a> {
    client: &'a StorefrontClient,
}

impl<'a> Orders<'a> {
    #[must_use]
    pub fn new(client: &'a StorefrontClient) -> Self {
        Self { client }
    }

    /// Renders the open order into `order-items`. Returns the line count.
    ///
    /// # Errors
    ///
    /// - [`UiError::MissingElement`] if the page has no `order-items`.
    /// - [`UiError::Client`] if the request fails; the page is untouched.
    pub async fn fetch_order_summary(&self, page: &mut Page) -> Result<usize, UiError> {
        page.require(ids::ORDER_ITEMS)?;
        let summary = self.client.order_summary().await?;
        apply_order_summary(page, &summary)
    }

    /// Renders every placed order into `order-list`. Returns the order count.
    ///
    /// # Errors
    ///
    /// - [`UiError::MissingElement`] if the page has no `order-list`.
    /// - [`UiError::Client`] if the request fails; the page is untouched.
    pub async fn fetch_order_history(&self, page: &mut Page) -> Result<usize, UiError> {
        page.require(ids::ORDER_LIST)?;
        let orders = self.client.order_history().await?;
        apply_order_history(page, &orders)
    }

    /// Submits the cart for checkout.
    ///
    /// On [`CheckoutOutcome::Placed`] the `order-success` block is revealed
    /// and `order-number` shows the new order number. Rejections and payment
    /// redirects leave the page untouched; the caller decides what to show.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Client`] on network failure or an unusable response.
    pub async fn checkout(&self, page: &mut Page) -> Result<CheckoutOutcome, UiError> {
        let outcome = self.client.checkout().await?;
        if let CheckoutOutcome::Placed { order_number } = &outcome {
            if let Err(error) = show_confirmation(page, order_number) {
                tracing::warn!(
                    %error,
                    %order_number,
                    "order placed but page has no confirmation block"
                );
            }
        }
        Ok(outcome)
    }
}

pub(crate) fn apply_order_summary(
    page: &mut Page,
    summary: &OrderSummary,
) -> Result<usize, UiError> {
    page.replace_children(ids::ORDER_ITEMS, render_order_summary(summary))?;
    Ok(summary.items.len())
}

pub(crate) fn apply_order_history(page: &mut Page, orders: &[Order]) -> Result<usize, UiError> {
    page.replace_children(ids::ORDER_LIST, render_order_history(orders))?;
    Ok(orders.len())
}

fn show_confirmation(page: &mut Page, order_number: &str) -> Result<(), UiError> {
    page.require(ids::ORDER_NUMBER)?;
    page.set_hidden(ids::ORDER_SUCCESS, false)?;
    page.set_text(ids::ORDER_NUMBER, order_number)
}

/// One `name (qty) - total` line per item.
#[must_use]
pub fn render_order_summary(summary: &OrderSummary) -> Vec<Node> {
    summary
        .items
        .iter()
        .map(|item| {
            let line = match &item.total_price {
                Some(total) => format!("{} - {total}", item_label(item)),
                None => item_label(item),
            };
            ElementNode::new("div")
                .child(ElementNode::new("p").text(line))
                .into()
        })
        .collect()
}

/// Per order: number, status, total, then the nested item list.
#[must_use]
pub fn render_order_history(orders: &[Order]) -> Vec<Node> {
    orders
        .iter()
        .map(|order| {
            let items = order
                .items
                .iter()
                .map(|item| Node::from(ElementNode::new("p").text(item_label(item))));
            ElementNode::new("div")
                .class("order")
                .child(ElementNode::new("h3").text(format!("Order #{}", order.order_number)))
                .child(ElementNode::new("p").text(format!("Status: {}", order.status)))
                .child(ElementNode::new("p").text(format!("Total: {}", order.total)))
                .child(ElementNode::new("div").class("order-items").children(items))
                .into()
        })
        .collect()
}

fn item_label(item: &OrderItem) -> String {
    format!("{} ({})", item.product_name, item.quantity)
}
