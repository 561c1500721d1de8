//! Bible index parsing
//!
//! The index is a plain text file of `title = url` lines:
//!
//! ```text
//! King James Bible = https://openbible.com/textfiles/kjv.txt
//! World English Bible = https://openbible.com/textfiles/web.txt
//! ```
//!
//! Each line is split on its first `=`, so URLs with query strings survive.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    pub title: String,
    pub url: String,
}

/// Parse an index body. Lines without `=`, or with an empty title or URL, are
/// ignored. A repeated title keeps its first position and takes the last URL.
pub fn parse_index(body: &str) -> Vec<IndexEntry> {
    let mut entries: Vec<IndexEntry> = Vec::new();

    for line in body.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let (title, url) = (key.trim(), value.trim());
        if title.is_empty() || url.is_empty() {
            continue;
        }

        match entries.iter_mut().find(|entry| entry.title == title) {
            Some(existing) => existing.url = url.to_string(),
            None => entries.push(IndexEntry {
                title: title.to_string(),
                url: url.to_string(),
            }),
        }
    }

    entries
}
