/*
SPDX-License-Identifier: MPL-2.0
*/

//! HTML serialization of the document tree.

use crate::document::{Document, Element, Node};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img"];

/// Serialize a document to an HTML string.
///
/// Text and attribute values are escaped; raw markup blocks pass their
/// payload through verbatim, without a wrapper tag.
pub fn document_to_html(doc: &Document) -> String {
    let mut out = String::new();
    element_to_html(&doc.root, &mut out);
    out
}

fn element_to_html(el: &Element, out: &mut String) {
    if el.name == "raw-block" || el.name == "raw-inline" {
        for child in &el.children {
            if let Node::Text(text) = child {
                out.push_str(text);
            }
        }
        return;
    }

    out.push('<');
    out.push_str(&el.name);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.name.as_str()) {
        return;
    }

    for child in &el.children {
        match child {
            Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
            Node::Element(child_el) => element_to_html(child_el, out),
        }
    }

    out.push_str("</");
    out.push_str(&el.name);
    out.push('>');
}
