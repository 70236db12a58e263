/*
SPDX-License-Identifier: MPL-2.0
*/

//! Owned document tree: elements, text leaves, and the text-safety predicate.

pub mod djot;

/// Attribute stamped on every anchor the linker generates.
///
/// The traversal predicate treats elements carrying it as non-text-safe,
/// so running the linker a second time over the same tree is a no-op
/// rather than a double-wrap.
pub const REF_MARKER_ATTR: &str = "data-ref";

/// Element names whose textual payload is never user-visible prose.
const NON_TEXT_SAFE: &[&str] = &["script", "style", "raw-block", "raw-inline"];

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn element(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element with a tag name, attributes in insertion order, and children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attrs.iter_mut().find(|(k, _)| *k == name) {
            existing.1 = value;
        } else {
            self.attrs.push((name, value));
        }
    }

    /// Whether this element contributes rendered text at all.
    pub fn is_rendered(&self) -> bool {
        !NON_TEXT_SAFE.contains(&self.name.as_str())
    }

    /// Whether the linker may scan this element's text content.
    ///
    /// Script/style equivalents and raw markup blocks are excluded, as are
    /// anchors the linker already produced (see [`REF_MARKER_ATTR`]), which
    /// is what makes the transform idempotent.
    pub fn is_text_safe(&self) -> bool {
        self.is_rendered() && self.attr(REF_MARKER_ATTR).is_none()
    }
}

/// A rendered document: a single root element owning the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Default for Document {
    fn default() -> Self {
        Document {
            root: Element::new("body"),
        }
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Concatenated text of all rendered leaves, in document order.
    ///
    /// Script/style equivalents and raw blocks are excluded. Anchors the
    /// linker generated are included: their labels are the literal marker
    /// text, so this string is stable across the linking transform. No
    /// separators are inserted.
    pub fn visible_text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.root, &mut out);
        out
    }
}

fn collect_text(el: &Element, out: &mut String) {
    if !el.is_rendered() {
        return;
    }
    for child in &el.children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(child_el) => collect_text(child_el, out),
        }
    }
}
