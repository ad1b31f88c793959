use crate::index::types::{BookNumber, BookPage, LogicalPage};
use ahash::AHashMap;
use std::collections::{BTreeMap, BTreeSet};

/// Pages of one book on which a word occurs, ascending and unique
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookPages {
    pub book: BookNumber,
    pub pages: Vec<BookPage>,
}

/// A word and every page it occurs on, books ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub word: String,
    pub books: Vec<BookPages>,
}

impl IndexEntry {
    /// Total number of page references across all books
    pub fn reference_count(&self) -> usize {
        self.books.iter().map(|b| b.pages.len()).sum()
    }
}

/// Accumulates word -> book -> page-set occurrences
#[derive(Debug, Default)]
pub struct IndexBuilder {
    words: AHashMap<String, BTreeMap<BookNumber, BTreeSet<BookPage>>>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `word` occurs on `page`; recording a triple twice is a no-op
    pub fn record(&mut self, word: &str, page: LogicalPage) {
        // Avoid allocating a key for words already present
        if let Some(books) = self.words.get_mut(word) {
            books.entry(page.book).or_default().insert(page.page);
            return;
        }

        self.words
            .entry(word.to_owned())
            .or_default()
            .entry(page.book)
            .or_default()
            .insert(page.page);
    }

    /// Union another partial index into this one
    pub fn merge(&mut self, other: IndexBuilder) {
        for (word, books) in other.words {
            let target = self.words.entry(word).or_default();
            for (book, pages) in books {
                target.entry(book).or_default().extend(pages);
            }
        }
    }

    /// Number of distinct words recorded so far
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Freeze the builder into per-word, per-book sorted page lists
    pub fn finalize(self) -> FinalizedIndex {
        let entries = self
            .words
            .into_iter()
            .map(|(word, books)| IndexEntry {
                word,
                books: books
                    .into_iter()
                    .map(|(book, pages)| BookPages {
                        book,
                        pages: pages.into_iter().collect(),
                    })
                    .collect(),
            })
            .collect();

        FinalizedIndex { entries }
    }
}

/// Frozen index ready for formatting; word order is unspecified
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalizedIndex {
    entries: Vec<IndexEntry>,
}

impl FinalizedIndex {
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a word's page references
    pub fn get(&self, word: &str) -> Option<&IndexEntry> {
        self.entries.iter().find(|e| e.word == word)
    }

    /// Drop words referenced on `max` or more pages in total
    pub fn without_common(mut self, max: usize) -> Self {
        self.entries.retain(|e| e.reference_count() < max);
        self
    }

    /// Entries sorted by word, case-insensitively
    pub fn sorted_entries(&self) -> Vec<&IndexEntry> {
        let mut sorted: Vec<&IndexEntry> = self.entries.iter().collect();
        sorted.sort_by_cached_key(|e| (e.word.to_lowercase(), e.word.clone()));
        sorted
    }
}
