//! Error types for index construction.
//!
//! Configuration problems are detected once, before any page is read.
//! Extraction and document failures abort the whole run; there is no
//! partial-success mode.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Invalid book layout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one book must be configured")]
    NoBooks,

    #[error(
        "book-starts, skip-first and skip-last must have the same length \
         (got {starts}, {skip_first} and {skip_last})"
    )]
    LengthMismatch {
        starts: usize,
        skip_first: usize,
        skip_last: usize,
    },

    #[error("book {book}: invalid start page {start} (pages are numbered from 1)")]
    InvalidStart { book: u32, start: i64 },

    #[error("book {book}: start page {start} must be greater than the previous book's start {previous}")]
    NonIncreasingStart { book: u32, start: u32, previous: u32 },

    #[error("book {book}: {field} must not be negative (got {value})")]
    NegativeSkip {
        book: u32,
        field: &'static str,
        value: i64,
    },

    #[error("book {book}: start page {start} is beyond the last page of the document ({page_count})")]
    StartBeyondDocument { book: u32, start: u32, page_count: u32 },
}

/// Errors raised while building an index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to open document {path}: {reason}")]
    Document { path: PathBuf, reason: String },

    #[error("failed to extract text from page {page}: {reason}")]
    Extraction { page: u32, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Malformed page reference string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRefParseError {
    #[error("expected '(' after book number in {0:?}")]
    MissingOpenParen(String),

    #[error("expected ')' at the end of {0:?}")]
    MissingCloseParen(String),

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("book {0} has no pages")]
    EmptyBook(u32),
}
