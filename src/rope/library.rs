//! The collection of loaded translations.
//!
//! Order is load order. The first translation is the reference used to
//! validate chapter and verse numbers; every translation is consulted when a
//! verse is reported.

use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::rope::building::{build_table, ParseFailurePolicy};
use crate::rope::error::Error;
use crate::rope::index::IndexEntry;
use crate::rope::lookup::VerseRef;
use crate::rope::source::{Fetcher, SourceLocation};
use crate::rope::table::VerseTable;

/// A translation to load: a display title and where its text lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSource {
    pub title: String,
    pub location: SourceLocation,
}

impl TranslationSource {
    /// A local file, titled by its file stem (`testdata/kjv.txt` → `kjv`).
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let title = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            title,
            location: SourceLocation::File(path.to_path_buf()),
        }
    }
}

impl From<IndexEntry> for TranslationSource {
    fn from(entry: IndexEntry) -> Self {
        Self {
            title: entry.title,
            location: SourceLocation::Url(entry.url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub title: String,
    pub table: VerseTable,
}

/// One translation's text for a looked-up verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseHit {
    pub translation: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
    translations: Vec<Translation>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch and build every source in order. A fetch error, or a parse error
    /// under [`ParseFailurePolicy::Abort`], stops the whole load.
    pub fn load(
        sources: &[TranslationSource],
        fetcher: &Fetcher,
        policy: ParseFailurePolicy,
    ) -> Result<Self, Error> {
        let mut library = Self::new();
        for source in sources {
            info!(title = %source.title, location = %source.location, "loading translation");
            let text = fetcher.fetch_text(&source.location)?;
            let report = build_table(&text, policy).map_err(|err| Error::Build {
                title: source.title.clone(),
                source: err,
            })?;
            info!(
                title = %source.title,
                lines = report.lines_read,
                verses = report.table.len(),
                skipped = report.lines_skipped,
                "loaded translation"
            );
            library.push(source.title.clone(), report.table);
        }
        Ok(library)
    }

    pub fn push(&mut self, title: impl Into<String>, table: VerseTable) {
        self.translations.push(Translation {
            title: title.into(),
            table,
        });
    }

    /// The first loaded translation.
    pub fn reference(&self) -> Option<&Translation> {
        self.translations.first()
    }

    /// The verse from every translation that has it, in load order.
    pub fn lookup(&self, verse_ref: &VerseRef) -> Vec<VerseHit> {
        self.translations
            .iter()
            .filter_map(|translation| {
                translation
                    .table
                    .get(&verse_ref.book, verse_ref.chapter, verse_ref.verse)
                    .map(|text| VerseHit {
                        translation: translation.title.clone(),
                        text: text.to_string(),
                    })
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Translation> {
        self.translations.iter()
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}
