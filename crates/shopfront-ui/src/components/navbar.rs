use shopfront_client::StorefrontClient;
use shopfront_core::{NavUser, Navbar};

use crate::error::UiError;
use crate::ids;
use crate::page::Page;
use crate::view::{ElementNode, Node};

/// Site navigation bar.
pub struct Navigation<'a> {
    client: &'a StorefrontClient,
}

impl<'a> Navigation<'a> {
    #[must_use]
    pub fn new(client: &'a StorefrontClient) -> Self {
        Self { client }
    }

    /// Renders categories, the cart badge, and account links into `navbar`.
    ///
    /// # Errors
    ///
    /// - [`UiError::MissingElement`] if the page has no `navbar`.
    /// - [`UiError::Client`] if the request fails; the page is untouched.
    pub async fn fetch_navbar(&self, page: &mut Page) -> Result<(), UiError> {
        page.require(ids::NAVBAR)?;
        let navbar = self.client.navbar().await?;
        apply_navbar(page, &navbar)
    }
}

pub(crate) fn apply_navbar(page: &mut Page, navbar: &Navbar) -> Result<(), UiError> {
    page.replace_children(ids::NAVBAR, render_navbar(navbar))
}

#[must_use]
pub fn render_navbar(navbar: &Navbar) -> Vec<Node> {
    let categories = navbar.categories.iter().map(|category| {
        Node::from(
            ElementNode::new("li").child(
                ElementNode::new("a")
                    .attr("href", category.url.as_str())
                    .attr("data-slug", category.slug.as_str())
                    .text(category.name.as_str()),
            ),
        )
    });

    vec![
        ElementNode::new("ul")
            .class("nav-categories")
            .children(categories)
            .into(),
        ElementNode::new("span")
            .class("cart-badge")
            .text(navbar.cart_item_count.to_string())
            .into(),
        ElementNode::new("div")
            .class("nav-account")
            .children(account_links(&navbar.user_data))
            .into(),
    ]
}

fn account_links(user: &NavUser) -> Vec<Node> {
    let links = if user.is_authenticated {
        [(&user.profile_url, "Profile"), (&user.logout_url, "Logout")]
    } else {
        [(&user.login_url, "Login"), (&user.signup_url, "Sign up")]
    };
    links
        .into_iter()
        .filter_map(|(url, label)| {
            let url = url.as_deref()?;
            Some(Node::from(
                ElementNode::new("a").attr("href", url).text(label),
            ))
        })
        .collect()
}
