use serde::{Deserialize, Serialize};
use std::fmt;

/// 1-based page index as it exists in the underlying document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysicalPage(pub u32);

/// 1-based ordinal of a book within the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookNumber(pub u32);

/// 1-based page number within a book, counted after front matter is skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookPage(pub u32);

impl fmt::Display for PhysicalPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for BookNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for BookPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Logical coordinate of an indexed page
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogicalPage {
    pub book: BookNumber,
    pub page: BookPage,
}

impl LogicalPage {
    pub fn new(book: u32, page: u32) -> Self {
        Self {
            book: BookNumber(book),
            page: BookPage(page),
        }
    }
}

/// One book of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookRange {
    /// First physical page of the book (inclusive)
    pub start_page: PhysicalPage,
    /// Leading pages excluded from indexing
    pub skip_first: u32,
    /// Trailing pages excluded from indexing
    pub skip_last: u32,
}

impl BookRange {
    pub fn new(start_page: u32, skip_first: u32, skip_last: u32) -> Self {
        Self {
            start_page: PhysicalPage(start_page),
            skip_first,
            skip_last,
        }
    }
}

/// Configuration for the indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Words shorter than this (in characters) are dropped
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,

    /// Drop words referenced on this many pages or more (None keeps all)
    #[serde(default)]
    pub max_references: Option<usize>,

    /// Tokenize pages in parallel and merge partial indexes
    #[serde(default)]
    pub parallel: bool,
}

fn default_min_word_len() -> usize {
    3
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            min_word_len: default_min_word_len(),
            max_references: None,
            parallel: false,
        }
    }
}

/// Counters collected while building an index
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    /// Pages in the document
    pub page_count: u32,
    /// Pages whose text was indexed
    pub pages_indexed: u32,
    /// Front/back matter pages skipped
    pub pages_skipped: u32,
    /// Pages before the first book
    pub pages_unassigned: u32,
    /// Words recorded (after filtering, before deduplication)
    pub words_recorded: u64,
    /// Distinct indexable words found, before any reference cap
    pub unique_words: usize,
}
