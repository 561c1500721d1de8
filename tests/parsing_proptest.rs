//! Property-based tests for verse line parsing and table building
//!
//! These tests ensure the parser recovers every field of a well-formed line,
//! whatever the book name looks like, and that a built table answers for
//! exactly the references it was given.

use bible_rope::rope::{build_table, parse_verse_line, ParseError, ParseFailurePolicy};
use proptest::prelude::*;
use std::collections::HashMap;

/// Book names: one or more words, optionally with a leading ordinal
fn book_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Z][a-z]{1,12}",
        "[1-3] [A-Z][a-z]{1,12}",
        "[A-Z][a-z]{1,8}( [a-z]{2,4})? [A-Z][a-z]{1,8}",
    ]
}

/// Verse text: anything without a line break
fn text_strategy() -> impl Strategy<Value = String> {
    "[^\r\n]{0,80}"
}

proptest! {
    #[test]
    fn well_formed_lines_parse_back(
        book in book_strategy(),
        chapter in 1u32..200,
        verse in 1u32..200,
        text in text_strategy(),
    ) {
        let line = format!("{book} {chapter}:{verse}\t{text}");
        let record = parse_verse_line(&line).unwrap();
        prop_assert_eq!(record.book, book);
        prop_assert_eq!(record.chapter, chapter);
        prop_assert_eq!(record.verse, verse);
        prop_assert_eq!(record.text, text);
    }

    #[test]
    fn lines_without_tab_never_parse(line in "[^\t\r\n]{0,80}") {
        let is_mismatch = matches!(
            parse_verse_line(&line),
            Err(ParseError::PatternMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }

    #[test]
    fn table_holds_one_entry_per_distinct_reference(
        verses in prop::collection::vec(
            (prop_oneof![Just("Genesis"), Just("1 John"), Just("Song of Solomon")], 1u32..5, 1u32..5, "[a-z ]{1,20}"),
            0..40,
        )
    ) {
        let mut source = String::from("header one\nheader two\n");
        let mut expected = HashMap::new();
        for (book, chapter, verse, text) in &verses {
            source.push_str(&format!("{book} {chapter}:{verse}\t{text}\n"));
            expected.insert((*book, *chapter, *verse), text.clone());
        }

        let report = build_table(&source, ParseFailurePolicy::Abort).unwrap();
        prop_assert_eq!(report.verses_inserted, verses.len());
        prop_assert_eq!(report.table.len(), expected.len());
        for ((book, chapter, verse), text) in &expected {
            prop_assert_eq!(report.table.get(book, *chapter, *verse), Some(text.as_str()));
        }
    }
}
