//! Utility functions shared by the indexer.
//!
//! ## Modules
//!
//! - [`config`] - Indexer configuration loading (per-user JSON file)
//! - [`progress`] - Progress bars, no-op without the `progress` feature
//! - [`stopwords`] - Stopword sets (built-in or loaded from a wordlist)
//! - [`tokenizer`] - Word extraction and normalization
//!
//! ## Key Functions
//!
//! ```no_run
//! use bookdex::utils::{tokenize, StopwordSet};
//!
//! let stopwords = StopwordSet::builtin();
//! let words: Vec<String> = tokenize("Kerberoasting the KDC", 3)
//!     .filter(|w| stopwords.is_indexable(w))
//!     .collect();
//! // Returns: ["kerberoasting", "kdc"]
//! ```

pub mod config;
pub mod progress;
pub mod stopwords;
pub mod tokenizer;

pub use config::*;
pub use stopwords::*;
pub use tokenizer::*;
