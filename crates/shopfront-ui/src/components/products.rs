use shopfront_client::StorefrontClient;
use shopfront_core::{Product, Variant};

use crate::error::UiError;
use crate::ids;
use crate::page::Page;
use crate::view::{Action, ElementNode, Node};

/// Width, in pixels, of product thumbnails.
const THUMBNAIL_WIDTH: &str = "150";

/// Category and subcategory product listings.
pub struct Products<'a> {
    client: &'a StorefrontClient,
}

impl<'a> Products<'a> {
    #[must_use]
    pub fn new(client: &'a StorefrontClient) -> Self {
        Self { client }
    }

    /// Lists the current category's products into `product-list`.
    ///
    /// # Errors
    ///
    /// - [`UiError::MissingElement`] if the page has no `product-list`.
    /// - [`UiError::Client`] if the request fails; the page is untouched.
    pub async fn fetch_products_by_category(&self, page: &mut Page) -> Result<usize, UiError> {
        page.require(ids::PRODUCT_LIST)?;
        let products = self.client.products_by_category().await?;
        apply_products(page, &products)
    }

    /// Lists one subcategory's products into `product-list`.
    ///
    /// # Errors
    ///
    /// As for [`Self::fetch_products_by_category`], plus
    /// [`UiError::Client`] wrapping `InvalidSlug` for a malformed `slug`.
    pub async fn fetch_products_by_subcategory(
        &self,
        page: &mut Page,
        slug: &str,
    ) -> Result<usize, UiError> {
        page.require(ids::PRODUCT_LIST)?;
        let products = self.client.products_by_subcategory(slug).await?;
        apply_products(page, &products)
    }
}

pub(crate) fn apply_products(page: &mut Page, products: &[Product]) -> Result<usize, UiError> {
    page.replace_children(ids::PRODUCT_LIST, render_products(products))?;
    Ok(products.len())
}

/// Renders one card per product.
///
/// Each card holds the name, thumbnail, price, an optional discount line, a
/// `variant-select-{slug}` control, and an add-to-cart button bound to
/// [`Action::AddToCart`].
#[must_use]
pub fn render_products(products: &[Product]) -> Vec<Node> {
    products.iter().map(product_card).collect()
}

fn product_card(product: &Product) -> Node {
    let mut image = ElementNode::new("img")
        .attr("alt", product.name.as_str())
        .attr("width", THUMBNAIL_WIDTH);
    if let Some(src) = &product.image {
        image = image.attr("src", src.as_str());
    }

    let mut card = ElementNode::new("div")
        .class("product")
        .child(ElementNode::new("h2").text(product.name.as_str()))
        .child(image)
        .child(ElementNode::new("p").text(product.price.as_str()));
    if let Some(discount) = &product.discount_price {
        card = card.child(ElementNode::new("p").text(format!("Discount: {discount}")));
    }

    card.child(
        ElementNode::new("select")
            .id(&ids::variant_select(&product.slug))
            .children(product.variants.iter().map(variant_option)),
    )
    .child(
        ElementNode::new("button")
            .on(Action::AddToCart {
                slug: product.slug.clone(),
            })
            .text("Add to Cart"),
    )
    .into()
}

fn variant_option(variant: &Variant) -> Node {
    ElementNode::new("option")
        .attr("value", variant.id.to_string())
        .text(format!("{} - {}", variant.title, variant.price))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product {
            slug: "tee".to_string(),
            name: "Plain Tee".to_string(),
            image: Some("/media/tee.jpg".to_string()),
            price: "12.00".to_string(),
            discount_price: Some("9.00".to_string()),
            variants: vec![
                Variant {
                    id: 4,
                    title: "Small".to_string(),
                    price: "12.00".to_string(),
                },
                Variant {
                    id: 5,
                    title: "Large".to_string(),
                    price: "14.00".to_string(),
                },
            ],
        }
    }

    #[test]
    fn card_layout() {
        let html = render_products(&[tee()])[0].to_html();
        assert_eq!(
            html,
            concat!(
                r#"<div class="product"><h2>Plain Tee</h2>"#,
                r#"<img alt="Plain Tee" width="150" src="/media/tee.jpg">"#,
                r#"<p>12.00</p><p>Discount: 9.00</p>"#,
                r#"<select id="variant-select-tee">"#,
                r#"<option value="4">Small - 12.00</option>"#,
                r#"<option value="5">Large - 14.00</option></select>"#,
                r#"<button data-action="add-to-cart" data-slug="tee">Add to Cart</button></div>"#
            )
        );
    }

    #[test]
    fn no_discount_line_without_discount_price() {
        let product = Product {
            discount_price: None,
            ..tee()
        };
        let text = render_products(&[product])[0].text_content();
        assert!(!text.contains("Discount"));
    }

    #[test]
    fn missing_image_omits_src() {
        let product = Product { image: None, ..tee() };
        let html = render_products(&[product])[0].to_html();
        assert!(html.contains(r#"<img alt="Plain Tee" width="150">"#));
    }

    #[test]
    fn markup_in_product_name_is_escaped() {
        let product = Product {
            name: "<b>Bold</b> \"Tee\"".to_string(),
            ..tee()
        };
        let html = render_products(&[product])[0].to_html();
        assert!(html.contains("<h2>&lt;b&gt;Bold&lt;/b&gt; &quot;Tee&quot;</h2>"));
        assert!(html.contains(r#"alt="&lt;b&gt;Bold&lt;/b&gt; &quot;Tee&quot;""#));
    }

    #[test]
    fn rendering_twice_matches_rendering_once() {
        let mut page = Page::new().with(ElementNode::new("div").id(ids::PRODUCT_LIST));
        apply_products(&mut page, &[tee()]).unwrap();
        let once = page.to_html();
        apply_products(&mut page, &[tee()]).unwrap();
        assert_eq!(page.to_html(), once);
    }
}
