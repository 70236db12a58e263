/*
SPDX-License-Identifier: MPL-2.0
*/

//! Djot parsing: builds a [`Document`] tree from djot markup via jotdown.

use super::{Document, Element, Node};
use jotdown::{Container, Event, ListKind, Parser};

/// Parse djot markup into a document tree.
///
/// Raw markup blocks map to non-text-safe elements, so their payload is
/// invisible to the linker and to [`Document::visible_text`].
pub fn document_from_djot(input: &str) -> Document {
    let mut stack: Vec<Element> = vec![Element::new("body")];

    for event in Parser::new(input) {
        match event {
            Event::Start(container, _attrs) => {
                stack.push(element_for(&container));
            }
            Event::End(_) => {
                // jotdown guarantees balanced events; the root never pops.
                if stack.len() > 1 {
                    if let Some(el) = stack.pop() {
                        attach(&mut stack, Node::Element(el));
                    }
                }
            }
            Event::Str(s) => push_text(&mut stack, &s),
            Event::Softbreak => push_text(&mut stack, " "),
            Event::Hardbreak => attach(&mut stack, Node::Element(Element::new("br"))),
            Event::NonBreakingSpace => push_text(&mut stack, "\u{a0}"),
            Event::ThematicBreak(_) => attach(&mut stack, Node::Element(Element::new("hr"))),
            Event::LeftSingleQuote => push_text(&mut stack, "\u{2018}"),
            Event::RightSingleQuote => push_text(&mut stack, "\u{2019}"),
            Event::LeftDoubleQuote => push_text(&mut stack, "\u{201c}"),
            Event::RightDoubleQuote => push_text(&mut stack, "\u{201d}"),
            Event::Ellipsis => push_text(&mut stack, "\u{2026}"),
            Event::EnDash => push_text(&mut stack, "\u{2013}"),
            Event::EmDash => push_text(&mut stack, "\u{2014}"),
            _ => {}
        }
    }

    // Unbalanced input leaves open elements; fold them into the root.
    while stack.len() > 1 {
        if let Some(el) = stack.pop() {
            attach(&mut stack, Node::Element(el));
        }
    }

    Document {
        root: stack.pop().unwrap_or_else(|| Element::new("body")),
    }
}

fn attach(stack: &mut Vec<Element>, node: Node) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    }
}

fn push_text(stack: &mut Vec<Element>, text: &str) {
    if let Some(parent) = stack.last_mut() {
        // Merge adjacent runs so each leaf holds the longest contiguous text.
        if let Some(Node::Text(existing)) = parent.children.last_mut() {
            existing.push_str(text);
            return;
        }
        parent.children.push(Node::Text(text.to_string()));
    }
}

fn element_for(container: &Container) -> Element {
    match container {
        Container::Paragraph => Element::new("p"),
        Container::Heading { level, .. } => Element::new(format!("h{}", (*level).min(6))),
        Container::Section { id } => {
            let mut el = Element::new("section");
            el.set_attr("id", id.to_string());
            el
        }
        Container::Blockquote => Element::new("blockquote"),
        Container::List {
            kind: ListKind::Ordered { .. },
            ..
        } => Element::new("ol"),
        Container::List { .. } => Element::new("ul"),
        Container::ListItem => Element::new("li"),
        Container::DescriptionList => Element::new("dl"),
        Container::DescriptionTerm => Element::new("dt"),
        Container::DescriptionDetails => Element::new("dd"),
        Container::Table => Element::new("table"),
        Container::TableRow { .. } => Element::new("tr"),
        Container::TableCell { .. } => Element::new("td"),
        Container::Caption => Element::new("caption"),
        Container::Footnote { .. } => Element::new("aside"),
        Container::Div { .. } => Element::new("div"),
        Container::CodeBlock { .. } => Element::new("pre"),
        Container::Verbatim => Element::new("code"),
        Container::RawBlock { .. } => Element::new("raw-block"),
        Container::RawInline { .. } => Element::new("raw-inline"),
        Container::Link(target, _) => {
            let mut el = Element::new("a");
            el.set_attr("href", target.to_string());
            el
        }
        Container::Image(target, _) => {
            let mut el = Element::new("img");
            el.set_attr("src", target.to_string());
            el
        }
        Container::Strong => Element::new("strong"),
        Container::Emphasis => Element::new("em"),
        Container::Mark => Element::new("mark"),
        Container::Insert => Element::new("ins"),
        Container::Delete => Element::new("del"),
        Container::Superscript => Element::new("sup"),
        Container::Subscript => Element::new("sub"),
        Container::Span => Element::new("span"),
        _ => Element::new("span"),
    }
}
