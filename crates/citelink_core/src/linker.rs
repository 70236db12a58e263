/*
SPDX-License-Identifier: MPL-2.0
*/

//! The reference linker: rewrites `[N]` markers in visible text into anchors.

use crate::document::{Document, Element, Node, REF_MARKER_ATTR};
use crate::references::References;
use regex::Regex;

/// Rewrites bracketed citation markers into hyperlinks.
///
/// The linker makes a single pass over every text-bearing leaf of the
/// tree, in document order, skipping non-text-safe containers. Each
/// `[N]` occurrence whose number has a table entry is replaced by an
/// anchor labeled with the literal marker text; everything else is left
/// byte-for-byte unchanged. A text node is swapped for a `span` only
/// when at least one of its markers produced a link.
pub struct ReferenceLinker {
    marker: Regex,
}

impl Default for ReferenceLinker {
    fn default() -> Self {
        Self {
            marker: Regex::new(r"\[(\d+)\]").unwrap(),
        }
    }
}

impl ReferenceLinker {
    /// Link every mapped citation marker reachable from the document root.
    ///
    /// Generated anchors carry [`REF_MARKER_ATTR`], which the traversal
    /// predicate treats as non-text-safe, so a repeat invocation leaves
    /// the tree untouched.
    pub fn link(&self, doc: &mut Document, refs: &References) {
        self.link_element(&mut doc.root, refs);
    }

    fn link_element(&self, el: &mut Element, refs: &References) {
        if !el.is_text_safe() {
            return;
        }
        for child in el.children.iter_mut() {
            match child {
                Node::Element(child_el) => self.link_element(child_el, refs),
                Node::Text(text) => {
                    if let Some(replacement) = self.link_text(text, refs) {
                        *child = Node::Element(replacement);
                    }
                }
            }
        }
    }

    /// Scan one text leaf. Returns the replacement container if at least
    /// one marker was linked, `None` to leave the node in place.
    fn link_text(&self, text: &str, refs: &References) -> Option<Element> {
        let mut span = Element::new("span");
        let mut last = 0;
        let mut linked = false;

        for caps in self.marker.captures_iter(text) {
            let m = caps.get(0).unwrap();
            // Numbers too large for u32 cannot have a table entry.
            let number: u32 = match caps[1].parse() {
                Ok(n) => n,
                Err(_) => continue,
            };
            let Some(url) = refs.url(number) else {
                // No mapping: the literal marker stays in the surrounding text run.
                continue;
            };

            if m.start() > last {
                span.children.push(Node::text(&text[last..m.start()]));
            }
            span.children
                .push(Node::Element(anchor(m.as_str(), number, url)));
            last = m.end();
            linked = true;
        }

        if !linked {
            return None;
        }
        if last < text.len() {
            span.children.push(Node::text(&text[last..]));
        }
        Some(span)
    }
}

/// Build the anchor for one linked marker. The label is the literal
/// matched substring, brackets included; `rel="noopener"` keeps the new
/// browsing context from reaching back into this page.
fn anchor(label: &str, number: u32, url: &str) -> Element {
    let mut a = Element::new("a");
    a.set_attr("href", url);
    a.set_attr("target", "_blank");
    a.set_attr("rel", "noopener");
    a.set_attr(REF_MARKER_ATTR, number.to_string());
    a.children.push(Node::text(label));
    a
}

/// Convenience entry point: link with the default marker pattern.
pub fn link_references(doc: &mut Document, refs: &References) {
    ReferenceLinker::default().link(doc, refs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> References {
        let mut refs = References::new();
        refs.insert(12, "https://a.example");
        refs.insert(9, "https://b.example");
        refs
    }

    fn paragraph(text: &str) -> Document {
        let mut p = Element::new("p");
        p.children.push(Node::text(text));
        let mut doc = Document::new();
        doc.root.children.push(Node::Element(p));
        doc
    }

    fn first_paragraph(doc: &Document) -> &Element {
        match &doc.root.children[0] {
            Node::Element(el) => el,
            other => panic!("expected element, got {other:?}"),
        }
    }

    #[test]
    fn adjacent_markers_become_separate_anchors() {
        let mut doc = paragraph("Robots help in surgery[9][12].");
        link_references(&mut doc, &table());

        let span = match &first_paragraph(&doc).children[0] {
            Node::Element(el) => el,
            other => panic!("expected span, got {other:?}"),
        };
        assert_eq!(span.name, "span");
        assert_eq!(span.children.len(), 4);
        assert_eq!(span.children[0], Node::text("Robots help in surgery"));

        let a9 = match &span.children[1] {
            Node::Element(el) => el,
            other => panic!("expected anchor, got {other:?}"),
        };
        assert_eq!(a9.attr("href"), Some("https://b.example"));
        assert_eq!(a9.children, vec![Node::text("[9]")]);

        let a12 = match &span.children[2] {
            Node::Element(el) => el,
            other => panic!("expected anchor, got {other:?}"),
        };
        assert_eq!(a12.attr("href"), Some("https://a.example"));
        assert_eq!(a12.children, vec![Node::text("[12]")]);

        assert_eq!(span.children[3], Node::text("."));
    }

    #[test]
    fn unmapped_marker_left_as_literal_text() {
        let mut refs = References::new();
        refs.insert(5, "https://x.example");
        let mut doc = paragraph("See [99] for details.");
        let before = doc.clone();
        link_references(&mut doc, &refs);
        assert_eq!(doc, before);
    }

    #[test]
    fn node_without_markers_is_untouched() {
        let mut doc = paragraph("No citations here.");
        let before = doc.clone();
        link_references(&mut doc, &table());
        assert_eq!(doc, before);
    }

    #[test]
    fn mixed_mapped_and_unmapped_markers() {
        let mut doc = paragraph("mapped[9] and unmapped[99] here");
        link_references(&mut doc, &table());

        let span = match &first_paragraph(&doc).children[0] {
            Node::Element(el) => el,
            other => panic!("expected span, got {other:?}"),
        };
        // [99] stays inside the trailing text run, unwrapped.
        assert_eq!(span.children[0], Node::text("mapped"));
        assert_eq!(span.children[2], Node::text(" and unmapped[99] here"));
    }

    #[test]
    fn script_content_is_never_linked() {
        let mut script = Element::new("script");
        script.children.push(Node::text("let refs = [12];"));
        let mut doc = Document::new();
        doc.root.children.push(Node::Element(script));
        let before = doc.clone();
        link_references(&mut doc, &table());
        assert_eq!(doc, before);
    }

    #[test]
    fn marker_split_across_nodes_never_matches() {
        let mut p = Element::new("p");
        p.children.push(Node::text("text [1"));
        p.children.push(Node::text("2]"));
        let mut doc = Document::new();
        doc.root.children.push(Node::Element(p));
        let before = doc.clone();
        link_references(&mut doc, &table());
        assert_eq!(doc, before);
    }

    #[test]
    fn malformed_brackets_never_match() {
        let mut doc = paragraph("not numeric [a12], unterminated [9");
        let before = doc.clone();
        link_references(&mut doc, &table());
        assert_eq!(doc, before);
    }

    #[test]
    fn second_invocation_is_a_no_op() {
        let mut doc = paragraph("surgery[9] today");
        link_references(&mut doc, &table());
        let after_first = doc.clone();
        link_references(&mut doc, &table());
        assert_eq!(doc, after_first);
    }

    #[test]
    fn visible_text_order_is_preserved() {
        let mut doc = paragraph("Robots help in surgery[9][12]. See [99] too.");
        let before = doc.visible_text();
        link_references(&mut doc, &table());
        assert_eq!(doc.visible_text(), before);
    }

    #[test]
    fn oversized_numbers_are_passed_through() {
        let mut doc = paragraph("ancient [99999999999999999999] scroll");
        let before = doc.clone();
        link_references(&mut doc, &table());
        assert_eq!(doc, before);
    }
}
