//! Error types for robin.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level result type for robin operations.
pub type Result<T> = std::result::Result<T, RobinError>;

/// Top-level error type for robin.
///
/// Everything here is fatal for a batch: floor numbering depends on the
/// seed file, so the run stops before any file is touched.
#[derive(Debug, Error)]
pub enum RobinError {
    #[error(transparent)]
    Header(#[from] HeaderError),

    #[error(transparent)]
    Numeral(#[from] NumeralError),

    #[error("no files to rename ({already_renamed} already renamed)")]
    EmptyBatch { already_renamed: usize },

    #[error("failed to read directory {}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reading a Chinese floor numeral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    #[error("floor word is empty")]
    Empty,

    #[error("unrecognized numeral '{ch}' in floor word '{word}'")]
    UnrecognizedDigit { ch: char, word: String },

    #[error("floor word '{word}' is too large")]
    Overflow { word: String },
}

/// Errors raised while reading the `( site floor层 )` header of a file name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    #[error("failed to parse '{0}': no `()` found")]
    MissingParentheses(String),

    #[error("failed to parse '{0}': `)` appears before `(`")]
    UnbalancedParentheses(String),

    #[error("failed to parse '{0}': no space between site name and floor")]
    MissingSiteSeparator(String),

    #[error("failed to parse '{0}': floor has no '层' marker")]
    MissingFloorSuffix(String),
}
