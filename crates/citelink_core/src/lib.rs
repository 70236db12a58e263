/*
SPDX-License-Identifier: MPL-2.0
*/

//! Citelink Core
//!
//! Post-processes a rendered article: bracketed citation markers like
//! `[12]` in visible text become hyperlinks resolved against a static
//! number-to-URL table. The transform is a single pass over the document
//! tree; markers without a table entry stay literal text, and containers
//! that never hold prose (script/style equivalents, raw markup) are not
//! scanned.
//!
//! # Example
//!
//! ```rust
//! use citelink_core::{document_from_djot, link_references, References};
//! use citelink_core::render::html::document_to_html;
//!
//! let mut refs = References::new();
//! refs.insert(9, "https://b.example");
//!
//! let mut doc = document_from_djot("Robots help in surgery[9].");
//! link_references(&mut doc, &refs);
//!
//! let html = document_to_html(&doc);
//! assert!(html.contains(r#"<a href="https://b.example" target="_blank" rel="noopener" data-ref="9">[9]</a>"#));
//! ```

pub mod document;
pub mod error;
pub mod io;
pub mod linker;
pub mod references;
pub mod reflist;
pub mod render;

pub use document::djot::document_from_djot;
pub use document::{Document, Element, Node, REF_MARKER_ATTR};
pub use error::LinkerError;
pub use io::load_references;
pub use linker::{link_references, ReferenceLinker};
pub use references::References;
pub use reflist::append_reference_list;
