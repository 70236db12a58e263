/*
SPDX-License-Identifier: MPL-2.0
*/

//! Appends a numbered reference list section to a linked document.

use crate::document::{Document, Element, Node};
use crate::references::References;

/// Append a `References` section: an `h2` heading followed by an ordered
/// list with one entry per table row, in table order. Each entry gets the
/// id `ref-<n>` and links to its URL in a new browsing context.
///
/// An empty table appends nothing.
pub fn append_reference_list(doc: &mut Document, refs: &References) {
    if refs.is_empty() {
        return;
    }

    let mut heading = Element::new("h2");
    heading.children.push(Node::text("References"));

    let mut list = Element::new("ol");
    for (number, url) in refs.iter() {
        let mut link = Element::new("a");
        link.set_attr("href", url);
        link.set_attr("target", "_blank");
        link.set_attr("rel", "noopener");
        link.children.push(Node::text(url));

        let mut item = Element::new("li");
        item.set_attr("id", format!("ref-{number}"));
        item.children.push(Node::Element(link));
        list.children.push(Node::Element(item));
    }

    let mut section = Element::new("section");
    section.set_attr("id", "references");
    section.children.push(Node::Element(heading));
    section.children.push(Node::Element(list));
    doc.root.children.push(Node::Element(section));
}
