//! Physical to logical page mapping.
//!
//! A [`BookLayout`] is the only way to map pages, and it can only be built
//! from a configuration that passed validation. Mapping itself is a pure
//! function of the layout and the physical page.

use crate::error::ConfigError;
use crate::index::types::{BookNumber, BookPage, BookRange, LogicalPage, PhysicalPage};

/// Why a page inside a book is not indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Within the book's leading `skip_first` pages
    FrontMatter,
    /// Within the book's trailing `skip_last` pages
    BackMatter,
}

/// Result of mapping one physical page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMapping {
    Indexed(LogicalPage),
    Skipped { book: BookNumber, reason: SkipReason },
    /// Before the first book, or outside the document
    Unassigned,
}

impl PageMapping {
    pub fn logical(&self) -> Option<LogicalPage> {
        match self {
            PageMapping::Indexed(logical) => Some(*logical),
            _ => None,
        }
    }
}

/// Validated book ranges of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookLayout {
    books: Vec<BookRange>,
    page_count: u32,
}

impl BookLayout {
    /// Validate book ranges against the document's page count
    pub fn new(books: Vec<BookRange>, page_count: u32) -> Result<Self, ConfigError> {
        if books.is_empty() {
            return Err(ConfigError::NoBooks);
        }

        let mut previous: Option<u32> = None;
        for (i, book) in books.iter().enumerate() {
            let number = i as u32 + 1;
            let start = book.start_page.0;

            if start == 0 {
                return Err(ConfigError::InvalidStart {
                    book: number,
                    start: 0,
                });
            }
            if let Some(prev) = previous {
                if start <= prev {
                    return Err(ConfigError::NonIncreasingStart {
                        book: number,
                        start,
                        previous: prev,
                    });
                }
            }
            if start > page_count {
                return Err(ConfigError::StartBeyondDocument {
                    book: number,
                    start,
                    page_count,
                });
            }
            previous = Some(start);
        }

        Ok(Self { books, page_count })
    }

    /// Build a layout from the three parallel lists accepted on the command line
    pub fn from_lists(
        starts: &[i64],
        skip_first: &[i64],
        skip_last: &[i64],
        page_count: u32,
    ) -> Result<Self, ConfigError> {
        if starts.len() != skip_first.len() || starts.len() != skip_last.len() {
            return Err(ConfigError::LengthMismatch {
                starts: starts.len(),
                skip_first: skip_first.len(),
                skip_last: skip_last.len(),
            });
        }

        let mut books = Vec::with_capacity(starts.len());
        for (i, ((&start, &first), &last)) in starts.iter().zip(skip_first).zip(skip_last).enumerate() {
            let book = i as u32 + 1;
            let start = u32::try_from(start)
                .ok()
                .filter(|&s| s >= 1)
                .ok_or(ConfigError::InvalidStart { book, start })?;
            let skip_first = skip_count(book, "skip-first", first)?;
            let skip_last = skip_count(book, "skip-last", last)?;
            books.push(BookRange::new(start, skip_first, skip_last));
        }

        Self::new(books, page_count)
    }

    pub fn books(&self) -> &[BookRange] {
        &self.books
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// First physical page that belongs to a book
    pub fn first_page(&self) -> PhysicalPage {
        self.books[0].start_page
    }

    /// Physical pages covered by the books, ascending
    pub fn pages(&self) -> impl Iterator<Item = PhysicalPage> {
        (self.first_page().0..=self.page_count).map(PhysicalPage)
    }

    /// First and last physical page of the book at `index` (0-based)
    pub fn book_extent(&self, index: usize) -> (PhysicalPage, PhysicalPage) {
        let start = self.books[index].start_page;
        let end = match self.books.get(index + 1) {
            Some(next) => next.start_page.0 - 1,
            None => self.page_count,
        };
        (start, PhysicalPage(end))
    }

    /// Map a physical page to its logical coordinate
    pub fn map(&self, page: PhysicalPage) -> PageMapping {
        if page.0 == 0 || page.0 > self.page_count {
            return PageMapping::Unassigned;
        }

        let index = match self.books.partition_point(|b| b.start_page <= page) {
            0 => return PageMapping::Unassigned,
            n => n - 1,
        };

        let range = &self.books[index];
        let book = BookNumber(index as u32 + 1);
        let (start, end) = self.book_extent(index);
        let length = end.0 - start.0 + 1;
        let position = page.0 - start.0 + 1;

        if position <= range.skip_first {
            PageMapping::Skipped {
                book,
                reason: SkipReason::FrontMatter,
            }
        } else if position > length.saturating_sub(range.skip_last) {
            PageMapping::Skipped {
                book,
                reason: SkipReason::BackMatter,
            }
        } else {
            PageMapping::Indexed(LogicalPage {
                book,
                page: BookPage(position - range.skip_first),
            })
        }
    }
}

fn skip_count(book: u32, field: &'static str, value: i64) -> Result<u32, ConfigError> {
    if value < 0 {
        return Err(ConfigError::NegativeSkip { book, field, value });
    }
    // Skipping more pages than a book has just skips the whole book
    Ok(u32::try_from(value).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn two_books() -> BookLayout {
        BookLayout::new(vec![BookRange::new(1, 2, 0), BookRange::new(5, 0, 1)], 8).unwrap()
    }

    #[test]
    fn test_map_skips_front_and_back_matter() {
        let layout = two_books();
        let mapped: Vec<_> = layout.pages().map(|p| layout.map(p)).collect();

        assert_eq!(
            mapped,
            vec![
                PageMapping::Skipped { book: BookNumber(1), reason: SkipReason::FrontMatter },
                PageMapping::Skipped { book: BookNumber(1), reason: SkipReason::FrontMatter },
                PageMapping::Indexed(LogicalPage::new(1, 1)),
                PageMapping::Indexed(LogicalPage::new(1, 2)),
                PageMapping::Indexed(LogicalPage::new(2, 1)),
                PageMapping::Indexed(LogicalPage::new(2, 2)),
                PageMapping::Indexed(LogicalPage::new(2, 3)),
                PageMapping::Skipped { book: BookNumber(2), reason: SkipReason::BackMatter },
            ]
        );
    }

    #[test]
    fn test_book_extent() {
        let layout = two_books();
        assert_eq!(layout.book_extent(0), (PhysicalPage(1), PhysicalPage(4)));
        assert_eq!(layout.book_extent(1), (PhysicalPage(5), PhysicalPage(8)));
    }

    #[test]
    fn test_pages_before_first_book_are_unassigned() {
        let layout = BookLayout::new(vec![BookRange::new(3, 0, 0)], 5).unwrap();
        assert_eq!(layout.map(PhysicalPage(1)), PageMapping::Unassigned);
        assert_eq!(layout.map(PhysicalPage(2)), PageMapping::Unassigned);
        assert_eq!(layout.map(PhysicalPage(3)), PageMapping::Indexed(LogicalPage::new(1, 1)));
        assert_eq!(layout.map(PhysicalPage(6)), PageMapping::Unassigned);
        assert_eq!(layout.pages().next(), Some(PhysicalPage(3)));
    }

    #[test]
    fn test_oversized_skips_skip_whole_book() {
        let layout = BookLayout::new(vec![BookRange::new(1, 3, 2), BookRange::new(5, 0, 0)], 6).unwrap();
        for page in 1..=4 {
            assert!(layout.map(PhysicalPage(page)).logical().is_none());
        }
        assert_eq!(layout.map(PhysicalPage(5)), PageMapping::Indexed(LogicalPage::new(2, 1)));
    }

    #[test]
    fn test_from_lists_length_mismatch() {
        let err = BookLayout::from_lists(&[1, 5], &[0], &[0, 0], 10).unwrap_err();
        assert_eq!(
            err,
            ConfigError::LengthMismatch { starts: 2, skip_first: 1, skip_last: 2 }
        );
    }

    #[test]
    fn test_from_lists_rejects_bad_values() {
        assert!(matches!(
            BookLayout::from_lists(&[0], &[0], &[0], 10),
            Err(ConfigError::InvalidStart { book: 1, start: 0 })
        ));
        assert!(matches!(
            BookLayout::from_lists(&[1, 3], &[0, -1], &[0, 0], 10),
            Err(ConfigError::NegativeSkip { book: 2, field: "skip-first", value: -1 })
        ));
        assert!(matches!(
            BookLayout::from_lists(&[4, 4], &[0, 0], &[0, 0], 10),
            Err(ConfigError::NonIncreasingStart { book: 2, start: 4, previous: 4 })
        ));
        assert!(matches!(
            BookLayout::from_lists(&[1, 11], &[0, 0], &[0, 0], 10),
            Err(ConfigError::StartBeyondDocument { book: 2, start: 11, page_count: 10 })
        ));
        assert_eq!(BookLayout::from_lists(&[], &[], &[], 10), Err(ConfigError::NoBooks));
    }

    fn layout_strategy() -> impl Strategy<Value = BookLayout> {
        (1u32..60, prop::collection::vec((1u32..12, 0u32..6, 0u32..6), 1..6)).prop_map(
            |(first, books)| {
                let mut start = first;
                let mut ranges = Vec::new();
                for (len, skip_first, skip_last) in books {
                    ranges.push(BookRange::new(start, skip_first, skip_last));
                    start += len;
                }
                BookLayout::new(ranges, start - 1).unwrap()
            },
        )
    }

    proptest! {
        #[test]
        fn prop_every_page_maps_once_and_skips_hold(layout in layout_strategy()) {
            for (i, range) in layout.books().iter().enumerate() {
                let (start, end) = layout.book_extent(i);
                let length = end.0 - start.0 + 1;
                let mut expected_logical = 1;

                for page in start.0..=end.0 {
                    let position = page - start.0 + 1;
                    let in_skip = position <= range.skip_first
                        || position > length.saturating_sub(range.skip_last);

                    match layout.map(PhysicalPage(page)) {
                        PageMapping::Indexed(logical) => {
                            prop_assert!(!in_skip);
                            prop_assert_eq!(logical.book, BookNumber(i as u32 + 1));
                            prop_assert_eq!(logical.page, BookPage(expected_logical));
                            expected_logical += 1;
                        }
                        PageMapping::Skipped { book, .. } => {
                            prop_assert!(in_skip);
                            prop_assert_eq!(book, BookNumber(i as u32 + 1));
                        }
                        PageMapping::Unassigned => prop_assert!(false, "page {} unassigned", page),
                    }
                }
            }
        }
    }
}
