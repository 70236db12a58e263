/*
SPDX-License-Identifier: MPL-2.0
*/

//! The reference table: citation number to URL.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An insertion-ordered mapping from citation number to destination URL.
///
/// The table is a build-time artifact supplied by content authoring: it is
/// read-only for the life of the process and URL well-formedness is not
/// validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct References {
    entries: IndexMap<u32, String>,
}

impl References {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, number: u32, url: impl Into<String>) {
        self.entries.insert(number, url.into());
    }

    /// The URL for a citation number, if the table has one.
    pub fn url(&self, number: u32) -> Option<&str> {
        self.entries.get(&number).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.entries.iter().map(|(n, url)| (*n, url.as_str()))
    }
}

impl FromIterator<(u32, String)> for References {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        References {
            entries: iter.into_iter().collect(),
        }
    }
}
