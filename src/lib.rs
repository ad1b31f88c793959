//! # bookdex - Keyword index builder for multi-book documents
//!
//! bookdex reads the text of every page of a document that bundles several
//! books (a course PDF split into numbered books, for example) and produces
//! a back-of-the-book style index: every indexable word with the book and
//! page numbers it appears on.
//!
//! ## Architecture
//!
//! - [`index`] - Page mapping, index building and the page-iteration driver
//! - [`source`] - Page text sources (PDF, form-feed separated text, memory)
//! - [`output`] - Plain-text and CSV rendering, page reference parsing
//! - [`utils`] - Tokenizer, stopwords, configuration and progress bars
//! - [`error`] - Error types
//!
//! ## Quick Start
//!
//! ```
//! use bookdex::index::{build_index, BookLayout, IndexConfig};
//! use bookdex::output::format_text;
//! use bookdex::source::MemorySource;
//! use bookdex::utils::StopwordSet;
//!
//! let source = MemorySource::new(["", "", "kerberos", "kerberos token", "splunk"]);
//! let layout = BookLayout::from_lists(&[1, 5], &[2, 0], &[0, 0], 5).unwrap();
//! let stopwords: StopwordSet = ["token"].into_iter().collect();
//!
//! let output = build_index(&source, &layout, &stopwords, &IndexConfig::default()).unwrap();
//! assert_eq!(format_text(&output.index), "kerberos: 1(1, 2)\nsplunk: 2(1)\n");
//! ```
//!
//! Book pages are numbered from 1 starting at the first page after the
//! book's skipped front matter.

pub mod error;
pub mod index;
pub mod output;
pub mod source;
pub mod utils;
