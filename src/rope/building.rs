//! Verse table construction
//!
//! A translation's raw text is two header lines followed by one verse per
//! line. The header is dropped without looking at it; every other non-blank
//! line goes through [`parse_verse_line`] and into a fresh [`VerseTable`].

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::rope::parsing::{parse_verse_line, ParseError};
use crate::rope::table::VerseTable;

/// Leading lines of every translation that carry metadata, not verses.
pub const HEADER_LINES: usize = 2;

/// What to do with a verse line that does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseFailurePolicy {
    /// Stop at the first bad line and hand the error back.
    #[default]
    Abort,
    /// Log the bad line and keep going.
    SkipLine,
}

/// A populated table plus counts for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub table: VerseTable,
    /// Every line seen, header included.
    pub lines_read: usize,
    pub verses_inserted: usize,
    pub lines_skipped: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line_number}: {source}")]
pub struct BuildError {
    /// 1-based, counting the header.
    pub line_number: usize,
    pub source: ParseError,
}

pub fn build_table(source: &str, policy: ParseFailurePolicy) -> Result<BuildReport, BuildError> {
    let mut table = VerseTable::new();
    let mut lines_read = 0;
    let mut verses_inserted = 0;
    let mut lines_skipped = 0;

    for (idx, line) in source.lines().enumerate() {
        lines_read += 1;
        if idx < HEADER_LINES || line.trim().is_empty() {
            continue;
        }

        match parse_verse_line(line) {
            Ok(record) => {
                table.insert_record(record);
                verses_inserted += 1;
            }
            Err(source) => match policy {
                ParseFailurePolicy::Abort => {
                    return Err(BuildError {
                        line_number: idx + 1,
                        source,
                    })
                }
                ParseFailurePolicy::SkipLine => {
                    warn!(line_number = idx + 1, error = %source, "skipping unparsable line");
                    lines_skipped += 1;
                }
            },
        }
    }

    debug!(lines_read, verses_inserted, lines_skipped, "built verse table");

    Ok(BuildReport {
        table,
        lines_read,
        verses_inserted,
        lines_skipped,
    })
}
