//! In-memory page the components render into.
//!
//! A [`Page`] is a forest of [`ElementNode`] roots addressed by element id,
//! plus a queue of [`Notice`]s for the shopper. Components only ever replace
//! the children of an element they own, toggle its `hidden` attribute, or
//! read form-control values; they never restructure the page.

use crate::error::UiError;
use crate::notice::Notice;
use crate::view::{Action, ElementNode, Node};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    roots: Vec<ElementNode>,
    notices: Vec<Notice>,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a root element (builder form of [`Page::insert`]).
    #[must_use]
    pub fn with(mut self, element: ElementNode) -> Self {
        self.insert(element);
        self
    }

    pub fn insert(&mut self, element: ElementNode) {
        self.roots.push(element);
    }

    /// Whether an element with `id` exists anywhere in the page.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ElementNode> {
        self.roots.iter().find_map(|root| root.find_by_id(id))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut ElementNode, UiError> {
        self.roots
            .iter_mut()
            .find_map(|root| root.find_by_id_mut(id))
            .ok_or_else(|| UiError::MissingElement(id.to_owned()))
    }

    /// Returns an error unless the page has an element with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] if no element matches.
    pub fn require(&self, id: &str) -> Result<&ElementNode, UiError> {
        self.get(id)
            .ok_or_else(|| UiError::MissingElement(id.to_owned()))
    }

    /// Attribute `name` of the element with `id`.
    #[must_use]
    pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
        self.get(id).and_then(|el| el.get_attr(name))
    }

    /// Text content of the element with `id`.
    #[must_use]
    pub fn text(&self, id: &str) -> Option<String> {
        self.get(id).map(ElementNode::text_content)
    }

    /// Replaces the children of `id` with a single text node.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] if no element matches.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), UiError> {
        self.replace_children(id, vec![Node::Text(text.into())])
    }

    /// Clears `id` and fills it with `children`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] if no element matches.
    pub fn replace_children(&mut self, id: &str, children: Vec<Node>) -> Result<(), UiError> {
        self.get_mut(id)?.set_children(children);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] if no element matches.
    pub fn set_hidden(&mut self, id: &str, hidden: bool) -> Result<(), UiError> {
        let el = self.get_mut(id)?;
        if hidden {
            el.set_attr("hidden", "");
        } else {
            el.remove_attr("hidden");
        }
        Ok(())
    }

    /// Whether `id` carries the `hidden` attribute. Missing elements count
    /// as hidden.
    #[must_use]
    pub fn is_hidden(&self, id: &str) -> bool {
        self.get(id)
            .is_none_or(|el| el.get_attr("hidden").is_some())
    }

    /// Current value of a form control.
    ///
    /// For a `select` this is the value of the option marked `selected`, or
    /// of the first option when none is. Any other element reports its
    /// `value` attribute.
    #[must_use]
    pub fn control_value(&self, id: &str) -> Option<String> {
        let el = self.get(id)?;
        if el.tag() != "select" {
            return el.get_attr("value").map(str::to_owned);
        }
        let is_option = |opt: &&ElementNode| opt.tag() == "option";
        let first = el.child_elements().find(is_option);
        el.child_elements()
            .filter(is_option)
            .find(|opt| opt.get_attr("selected").is_some())
            .or(first)
            .and_then(|opt| opt.get_attr("value"))
            .map(str::to_owned)
    }

    /// Marks the option with `value` as selected in the select control `id`.
    ///
    /// # Errors
    ///
    /// - [`UiError::MissingElement`] if no element matches `id`.
    /// - [`UiError::MissingOption`] if the control has no such option; the
    ///   current selection is left unchanged.
    pub fn select_option(&mut self, id: &str, value: &str) -> Result<(), UiError> {
        let select = self.get_mut(id)?;
        let has_option = select
            .child_elements()
            .any(|opt| opt.tag() == "option" && opt.get_attr("value") == Some(value));
        if !has_option {
            return Err(UiError::MissingOption {
                select: id.to_owned(),
                value: value.to_owned(),
            });
        }
        for opt in select.child_elements_mut() {
            if opt.tag() != "option" {
                continue;
            }
            if opt.get_attr("value") == Some(value) {
                opt.set_attr("selected", "");
            } else {
                opt.remove_attr("selected");
            }
        }
        Ok(())
    }

    /// Sets the `value` attribute of an input control.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::MissingElement`] if no element matches.
    pub fn set_value(&mut self, id: &str, value: &str) -> Result<(), UiError> {
        self.get_mut(id)?.set_attr("value", value);
        Ok(())
    }

    /// Every action bound in the page, in document order.
    #[must_use]
    pub fn actions(&self) -> Vec<&Action> {
        let mut out = Vec::new();
        for root in &self.roots {
            root.collect_actions(&mut out);
        }
        out
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drains the notice queue.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        self.roots.iter().map(ElementNode::to_html).collect()
    }
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
