//! Page skeletons standing in for the storefront's HTML templates.

use shopfront_ui::{ids, Component, ElementNode, Page};

/// Data attributes a template would put on its marker elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct PageOptions {
    pub(crate) product_slug: Option<String>,
    pub(crate) subcategory: Option<String>,
}

/// Builds a page with one marker element per component, in the given order.
pub(crate) fn build_page(components: &[Component], options: &PageOptions) -> Page {
    let mut page = Page::new();
    for &component in components {
        for element in marker_elements(component, options) {
            page.insert(element);
        }
    }
    page
}

fn marker_elements(component: Component, options: &PageOptions) -> Vec<ElementNode> {
    let marker = component.marker();
    match component {
        Component::CartCount => vec![ElementNode::new("span").id(marker).text("0")],
        Component::Navbar => vec![ElementNode::new("nav").id(marker)],
        Component::OrderSummary | Component::OrderHistory => {
            vec![ElementNode::new("div").id(marker)]
        }
        Component::Products => {
            let mut list = ElementNode::new("div").id(marker);
            if let Some(slug) = &options.subcategory {
                list = list.attr(ids::SUBCATEGORY_SLUG_ATTR, slug.as_str());
            }
            vec![list]
        }
        Component::Reviews => {
            let mut list = ElementNode::new("div").id(marker);
            if let Some(slug) = &options.product_slug {
                list = list.attr(ids::PRODUCT_SLUG_ATTR, slug.as_str());
            }
            vec![list]
        }
        Component::Search => vec![
            ElementNode::new("input").id(marker).attr("type", "search"),
            ElementNode::new("div").id(ids::SEARCH_RESULTS),
        ],
    }
}

/// Cart badge plus the hidden order confirmation block.
pub(crate) fn checkout_page() -> Page {
    build_page(&[Component::CartCount], &PageOptions::default()).with(
        ElementNode::new("div")
            .id(ids::ORDER_SUCCESS)
            .attr("hidden", "")
            .text("Order placed: ")
            .child(ElementNode::new("span").id(ids::ORDER_NUMBER)),
    )
}

/// Prints the page markup, then drains and prints its notices.
pub(crate) fn print_page(page: &mut Page) {
    println!("{}", page.to_html());
    for notice in page.take_notices() {
        if notice.is_error() {
            eprintln!("{notice}");
        } else {
            println!("{notice}");
        }
    }
}
