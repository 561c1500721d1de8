//! Verse line parser
//!
//! Every verse line of a plain-text translation has the shape
//!
//! ```text
//! <book> <chapter>:<verse>\t<text>
//! Genesis 1:1\tIn the beginning God created the heaven and the earth.
//! 1 Corinthians 13:4\tCharity suffereth long, and is kind;
//! ```
//!
//! The book is everything before the last space that precedes the
//! `chapter:verse` token, so multi-word names come through intact. The text is
//! everything after the first tab following the verse number.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Book capture cannot contain a tab, which pins the match to the first tab.
static VERSE_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^\t]+) ([0-9]+):([0-9]+)\t(.*)$").unwrap());

/// One parsed verse line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseRecord {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line is not `<book> <chapter>:<verse><TAB><text>`.
    #[error("line does not match `<book> <chapter>:<verse><TAB><text>`: {line:?}")]
    PatternMismatch { line: String },

    /// The digits matched but do not form a positive `u32`.
    #[error("{field} number {value:?} is not a positive integer")]
    InvalidNumber { field: &'static str, value: String },
}

/// Parse one verse line.
pub fn parse_verse_line(line: &str) -> Result<VerseRecord, ParseError> {
    let caps = VERSE_LINE_REGEX
        .captures(line)
        .ok_or_else(|| ParseError::PatternMismatch {
            line: line.to_string(),
        })?;

    Ok(VerseRecord {
        book: caps[1].to_string(),
        chapter: positive_number("chapter", &caps[2])?,
        verse: positive_number("verse", &caps[3])?,
        text: caps[4].to_string(),
    })
}

fn positive_number(field: &'static str, digits: &str) -> Result<u32, ParseError> {
    match digits.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseError::InvalidNumber {
            field,
            value: digits.to_string(),
        }),
    }
}
