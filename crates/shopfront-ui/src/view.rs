//! Declarative view nodes.
//!
//! Render functions return trees of [`Node`] instead of HTML strings. Event
//! handlers are never spelled out as markup: an element carries a typed
//! [`Action`], and the caller decides what to run for it
//! (see [`crate::Storefront::dispatch`]). [`Node::to_html`] is only a
//! serialization of the tree, with all text and attribute values escaped.

use std::fmt::Write as _;

/// Something the shopper can trigger from a rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddToCart { slug: String },
    Checkout,
}

impl Action {
    /// Name written to the `data-action` attribute.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddToCart { .. } => "add-to-cart",
            Action::Checkout => "checkout",
        }
    }
}

/// A node in a rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(ElementNode),
    Text(String),
}

impl Node {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Concatenated text of this node and all descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => {
                for child in &el.children {
                    child.collect_text(out);
                }
            }
        }
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(el) => el.write_html(out),
        }
    }
}

impl From<ElementNode> for Node {
    fn from(el: ElementNode) -> Self {
        Node::Element(el)
    }
}

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["img", "input", "br", "hr"];

/// An element with attributes, children, and an optional bound [`Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementNode {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
    action: Option<Action>,
}

impl ElementNode {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
            action: None,
        }
    }

    /// Sets an attribute, replacing any previous value.
    #[must_use]
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Binds an action to this element.
    #[must_use]
    pub fn on(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn element_id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Element children only, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &ElementNode> {
        self.children.iter().filter_map(Node::as_element)
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    #[must_use]
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name.to_owned(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(key, _)| key != name);
    }

    /// Replaces every child with `children`.
    pub fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    pub(crate) fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut ElementNode> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search for an element by id, including `self`.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&ElementNode> {
        if self.element_id() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|el| el.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut ElementNode> {
        if self.element_id() == Some(id) {
            return Some(self);
        }
        self.child_elements_mut().find_map(|el| el.find_by_id_mut(id))
    }

    /// Bound actions of this element and its descendants, in document order.
    pub(crate) fn collect_actions<'a>(&'a self, out: &mut Vec<&'a Action>) {
        if let Some(action) = &self.action {
            out.push(action);
        }
        for el in self.child_elements() {
            el.collect_actions(out);
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {name}=\"{}\"", escape_html(value));
        }
        if let Some(action) = &self.action {
            let _ = write!(out, " data-action=\"{}\"", action.name());
            if let Action::AddToCart { slug } = action {
                let _ = write!(out, " data-slug=\"{}\"", escape_html(slug));
            }
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

/// Escapes text for use in HTML content and double-quoted attributes.
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
