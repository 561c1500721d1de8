//! Main module for bible-rope library functionality
//!
//! The pipeline runs in one direction:
//! 1. **Sources**: read the index and each translation's raw text ([`source`], [`index`])
//! 2. **Parsing**: turn one verse line into a [`parsing::VerseRecord`]
//! 3. **Building**: fill a [`table::VerseTable`] from a whole translation ([`building`])
//! 4. **Library**: keep every loaded translation in load order ([`library`])
//! 5. **Lookup**: narrow book, chapter and verse interactively, then report ([`lookup`])
//!
//! Despite the name there is no rope here. A translation is a three-level
//! mapping from book to chapter to verse to text.

pub mod books;
pub mod building;
pub mod config;
pub mod error;
pub mod index;
pub mod library;
pub mod lookup;
pub mod parsing;
pub mod source;
pub mod table;

pub use building::{build_table, BuildError, BuildReport, ParseFailurePolicy, HEADER_LINES};
pub use error::Error;
pub use library::{Library, Translation, TranslationSource, VerseHit};
pub use lookup::{OutputFormat, Rejection, Session, VerseRef};
pub use parsing::{parse_verse_line, ParseError, VerseRecord};
pub use table::VerseTable;
