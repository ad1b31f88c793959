pub mod build;
pub mod builder;
pub mod mapper;
pub mod types;

pub use build::{build_index, build_index_with_progress, BuildOutput};
pub use builder::{BookPages, FinalizedIndex, IndexBuilder, IndexEntry};
pub use mapper::{BookLayout, PageMapping, SkipReason};
pub use types::*;
