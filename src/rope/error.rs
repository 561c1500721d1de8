//! Crate-level error type. Only the binary decides to exit on one of these.

use thiserror::Error;

use crate::rope::building::BuildError;
use crate::rope::lookup::LookupError;
use crate::rope::source::FetchError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("could not load {title}: {source}")]
    Build { title: String, source: BuildError },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("no translations were loaded")]
    NoTranslations,
}

impl Error {
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Fetch(err) => err.hint(),
            Error::Build { .. } => Some("Pass --skip-bad-lines to load the remaining verses anyway."),
            _ => None,
        }
    }
}
