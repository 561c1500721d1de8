//! Verse table: book → chapter → verse → text
//!
//! Chapters and verses are kept in ordered maps so their key sets come out
//! sorted, which is how they are shown to the user on a rejected entry.

use std::collections::{BTreeMap, HashMap};

use crate::rope::parsing::VerseRecord;

type Chapter = BTreeMap<u32, String>;
type Book = BTreeMap<u32, Chapter>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseTable {
    books: HashMap<String, Book>,
    len: usize,
}

impl VerseTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a verse. A second insert for the same reference replaces the
    /// text and returns the previous one.
    pub fn insert(
        &mut self,
        book: impl Into<String>,
        chapter: u32,
        verse: u32,
        text: impl Into<String>,
    ) -> Option<String> {
        let previous = self
            .books
            .entry(book.into())
            .or_default()
            .entry(chapter)
            .or_default()
            .insert(verse, text.into());
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub fn insert_record(&mut self, record: VerseRecord) -> Option<String> {
        self.insert(record.book, record.chapter, record.verse, record.text)
    }

    /// Point lookup. A reference that was never inserted is simply absent.
    pub fn get(&self, book: &str, chapter: u32, verse: u32) -> Option<&str> {
        self.books
            .get(book)?
            .get(&chapter)?
            .get(&verse)
            .map(String::as_str)
    }

    pub fn contains_book(&self, book: &str) -> bool {
        self.books.contains_key(book)
    }

    /// Chapter numbers present for `book`, ascending. Empty for an unknown book.
    pub fn chapters(&self, book: &str) -> Vec<u32> {
        self.books
            .get(book)
            .map(|chapters| chapters.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Verse numbers present for `book` `chapter`, ascending.
    pub fn verses(&self, book: &str, chapter: u32) -> Vec<u32> {
        self.books
            .get(book)
            .and_then(|chapters| chapters.get(&chapter))
            .map(|verses| verses.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Book names present in the table, sorted.
    pub fn books(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.books.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of distinct verse references.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
