/*
SPDX-License-Identifier: MPL-2.0
*/

//! Plain-text rendering: visible text with blank lines between blocks.

use crate::document::{Document, Element, Node};

const BLOCK_ELEMENTS: &[&str] = &[
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "li", "blockquote", "pre", "caption", "tr", "dt",
    "dd",
];

/// Render the visible text of a document, one line per block element.
pub fn document_to_plain(doc: &Document) -> String {
    let mut out = String::new();
    element_to_plain(&doc.root, &mut out);
    while out.ends_with('\n') {
        out.pop();
    }
    out
}

fn element_to_plain(el: &Element, out: &mut String) {
    if !el.is_rendered() {
        return;
    }
    for child in &el.children {
        match child {
            Node::Text(text) => out.push_str(text),
            Node::Element(child_el) => element_to_plain(child_el, out),
        }
    }
    if BLOCK_ELEMENTS.contains(&el.name.as_str()) && !out.ends_with('\n') {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::djot::document_from_djot;

    #[test]
    fn blocks_are_separated_by_newlines() {
        let doc = document_from_djot("# Robotics\n\nFirst paragraph.\n\nSecond paragraph.");
        assert_eq!(
            document_to_plain(&doc),
            "Robotics\nFirst paragraph.\nSecond paragraph."
        );
    }

    #[test]
    fn inline_markup_stays_on_one_line() {
        let doc = document_from_djot("Robots _help_ in surgery[9].");
        assert_eq!(document_to_plain(&doc), "Robots help in surgery[9].");
    }
}
