//! Interactive verse lookup
//!
//! A [`Session`] narrows a reference one level at a time against the
//! reference translation (the first one loaded):
//!
//! 1. the book must be one of the 66 canonical names,
//! 2. the chapter must exist for that book,
//! 3. the verse must exist for that chapter.
//!
//! A rejected entry prints what would have been accepted and asks again; there
//! is no retry limit. Values supplied on the command line are treated as
//! answers to the matching prompt, so a valid seed skips it.
//!
//! The validators are plain functions so they can be used without a console.

use std::fmt;
use std::io::{self, BufRead, Write};

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::rope::books::{is_canonical_book, CANONICAL_BOOKS};
use crate::rope::error::Error as RopeError;
use crate::rope::library::{Library, VerseHit};
use crate::rope::table::VerseTable;

const BOOK_PROMPT: &str = "Enter the book, like 'Genesis' or '2 Corinthians': ";
const CHAPTER_PROMPT: &str = "Enter the chapter number: ";
const VERSE_PROMPT: &str = "Enter the verse number: ";

/// A validated verse reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseRef {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Answers given up front, e.g. from `--book`, `--chapterNumber`, `--verseNumber`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupSeed {
    pub book: Option<String>,
    pub chapter: Option<u32>,
    pub verse: Option<u32>,
}

/// Why an entry was not accepted. Recoverable: the session asks again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{input} is NOT in the list of valid books:\n{}", CANONICAL_BOOKS.join(", "))]
    UnknownBook { input: String },

    #[error("{book} is not in the loaded text, please choose one of:\n{}", .loaded.join(", "))]
    BookNotLoaded { book: String, loaded: Vec<String> },

    #[error("{input} is NOT in the list of valid chapters of {book}:\n{valid:?}")]
    UnknownChapter {
        input: String,
        book: String,
        valid: Vec<u32>,
    },

    #[error(
        "{input} is NOT in the list of valid verse numbers of {book}:{chapter}, \
         and so please enter a verse number from this list:\n{valid:?}"
    )]
    UnknownVerse {
        input: String,
        book: String,
        chapter: u32,
        valid: Vec<u32>,
    },
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("input ended before a verse was chosen")]
    InputClosed,

    #[error("could not write JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

/// How the final report is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<book> <chapter>:<verse>` then `<text>:    <title>` per translation.
    #[default]
    Text,
    /// One pretty-printed JSON document.
    Json,
}

pub fn validate_book(reference: &VerseTable, input: &str) -> Result<String, Rejection> {
    let input = input.trim();
    if !is_canonical_book(input) {
        return Err(Rejection::UnknownBook {
            input: input.to_string(),
        });
    }
    if !reference.contains_book(input) {
        return Err(Rejection::BookNotLoaded {
            book: input.to_string(),
            loaded: reference.books().into_iter().map(str::to_string).collect(),
        });
    }
    Ok(input.to_string())
}

pub fn validate_chapter(reference: &VerseTable, book: &str, input: &str) -> Result<u32, Rejection> {
    let input = input.trim();
    let valid = reference.chapters(book);
    match input.parse::<u32>() {
        Ok(chapter) if valid.binary_search(&chapter).is_ok() => Ok(chapter),
        _ => Err(Rejection::UnknownChapter {
            input: input.to_string(),
            book: book.to_string(),
            valid,
        }),
    }
}

pub fn validate_verse(
    reference: &VerseTable,
    book: &str,
    chapter: u32,
    input: &str,
) -> Result<u32, Rejection> {
    let input = input.trim();
    let valid = reference.verses(book, chapter);
    match input.parse::<u32>() {
        Ok(verse) if valid.binary_search(&verse).is_ok() => Ok(verse),
        _ => Err(Rejection::UnknownVerse {
            input: input.to_string(),
            book: book.to_string(),
            chapter,
            valid,
        }),
    }
}

#[derive(Serialize)]
struct Report<'a> {
    reference: &'a VerseRef,
    verses: &'a [VerseHit],
}

/// A prompt loop over a line reader.
///
/// Prompts and rejections go to `prompts`; only the final report goes to
/// `output`, so a JSON report stays a single document.
pub struct Session<R, P, W> {
    input: R,
    prompts: P,
    output: W,
}

impl<R: BufRead, P: Write, W: Write> Session<R, P, W> {
    pub fn new(input: R, prompts: P, output: W) -> Self {
        Self {
            input,
            prompts,
            output,
        }
    }

    /// Hand back the prompt and report writers.
    pub fn into_writers(self) -> (P, W) {
        (self.prompts, self.output)
    }

    /// Resolve a reference, then report it from every translation.
    pub fn run(
        &mut self,
        library: &Library,
        seed: &LookupSeed,
        format: OutputFormat,
    ) -> Result<Vec<VerseHit>, RopeError> {
        let reference = library.reference().ok_or(RopeError::NoTranslations)?;
        debug!(reference = %reference.title, "validating against reference translation");
        let verse_ref = self.resolve(&reference.table, seed)?;
        Ok(self.report(library, &verse_ref, format)?)
    }

    /// Narrow book, chapter and verse against `reference`.
    pub fn resolve(
        &mut self,
        reference: &VerseTable,
        seed: &LookupSeed,
    ) -> Result<VerseRef, LookupError> {
        let book = self.settle(seed.book.clone(), BOOK_PROMPT, |input| {
            validate_book(reference, input)
        })?;
        let chapter = self.settle(seed.chapter.map(|n| n.to_string()), CHAPTER_PROMPT, |input| {
            validate_chapter(reference, &book, input)
        })?;
        let verse = self.settle(seed.verse.map(|n| n.to_string()), VERSE_PROMPT, |input| {
            validate_verse(reference, &book, chapter, input)
        })?;

        Ok(VerseRef {
            book,
            chapter,
            verse,
        })
    }

    /// Write the verse from every translation that has it and return the hits.
    pub fn report(
        &mut self,
        library: &Library,
        verse_ref: &VerseRef,
        format: OutputFormat,
    ) -> Result<Vec<VerseHit>, LookupError> {
        let hits = library.lookup(verse_ref);
        match format {
            OutputFormat::Text => {
                writeln!(self.output, "{}", verse_ref)?;
                for hit in &hits {
                    writeln!(self.output, "{}:    {}", hit.text, hit.translation)?;
                }
            }
            OutputFormat::Json => {
                let report = Report {
                    reference: verse_ref,
                    verses: &hits,
                };
                serde_json::to_writer_pretty(&mut self.output, &report)?;
                writeln!(self.output)?;
            }
        }
        self.output.flush()?;
        Ok(hits)
    }

    fn settle<T>(
        &mut self,
        seed: Option<String>,
        prompt: &str,
        validate: impl Fn(&str) -> Result<T, Rejection>,
    ) -> Result<T, LookupError> {
        if let Some(seed) = seed {
            match validate(&seed) {
                Ok(value) => {
                    debug!(%seed, "accepted value from command line");
                    return Ok(value);
                }
                Err(rejection) => writeln!(self.prompts, "{}\n", rejection)?,
            }
        }

        loop {
            let answer = self.prompt(prompt)?;
            match validate(&answer) {
                Ok(value) => return Ok(value),
                Err(rejection) => writeln!(self.prompts, "{}\n", rejection)?,
            }
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, LookupError> {
        write!(self.prompts, "{}", prompt)?;
        self.prompts.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(LookupError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}
