use crate::error::Result;
use crate::index::builder::{FinalizedIndex, IndexBuilder};
use crate::index::mapper::{BookLayout, PageMapping};
use crate::index::types::{IndexConfig, IndexStats, LogicalPage, PhysicalPage};
use crate::source::PageSource;
use crate::utils::progress::{ProgressBar, ProgressStyle};
use crate::utils::{tokenize, StopwordSet};
use rayon::prelude::*;

/// Finished index together with the counters collected while building it
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub index: FinalizedIndex,
    pub stats: IndexStats,
}

/// Build the index for every book page of `source`
pub fn build_index<S: PageSource + ?Sized>(
    source: &S,
    layout: &BookLayout,
    stopwords: &StopwordSet,
    config: &IndexConfig,
) -> Result<BuildOutput> {
    build_index_with_progress(source, layout, stopwords, config, true)
}

/// Build the index, showing a progress bar unless `silent`
pub fn build_index_with_progress<S: PageSource + ?Sized>(
    source: &S,
    layout: &BookLayout,
    stopwords: &StopwordSet,
    config: &IndexConfig,
    silent: bool,
) -> Result<BuildOutput> {
    let mut stats = IndexStats {
        page_count: layout.page_count(),
        pages_unassigned: layout.first_page().0 - 1,
        ..IndexStats::default()
    };

    let total = u64::from(layout.page_count() - stats.pages_unassigned);
    let progress_bar = if !silent {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pages {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░  "),
        );
        pb.set_message(if config.parallel {
            "Extracting text..."
        } else {
            "Indexing pages..."
        });
        Some(pb)
    } else {
        None
    };

    // Pages are read in order; sequential runs tokenize each page as soon as it is read
    let mut builder = IndexBuilder::new();
    let mut pending: Vec<(LogicalPage, String)> = Vec::new();
    for page in layout.pages() {
        match layout.map(page) {
            PageMapping::Indexed(logical) => {
                let text = source.page_text(page)?;
                stats.pages_indexed += 1;
                if config.parallel {
                    pending.push((logical, text));
                } else {
                    stats.words_recorded += index_page(&mut builder, &text, logical, stopwords, config);
                }
            }
            PageMapping::Skipped { book, reason } => {
                log::debug!("page {}: skipped ({:?} of book {})", page, reason, book);
                stats.pages_skipped += 1;
            }
            // Layout pages start at the first book, counted above
            PageMapping::Unassigned => {}
        }

        if let Some(ref pb) = progress_bar {
            pb.inc(1);
        }
    }

    if config.parallel {
        if let Some(ref pb) = progress_bar {
            pb.set_message("Indexing words...");
        }

        let (merged, recorded) = pending
            .par_iter()
            .fold(
                || (IndexBuilder::new(), 0u64),
                |(mut builder, recorded), (logical, text)| {
                    let count = index_page(&mut builder, text, *logical, stopwords, config);
                    (builder, recorded + count)
                },
            )
            .reduce(
                || (IndexBuilder::new(), 0u64),
                |(mut left, left_count), (right, right_count)| {
                    left.merge(right);
                    (left, left_count + right_count)
                },
            );
        builder = merged;
        stats.words_recorded = recorded;
    }

    let mut index = builder.finalize();
    stats.unique_words = index.len();
    if let Some(max) = config.max_references {
        index = index.without_common(max);
        log::debug!(
            "dropped {} words referenced on {} or more pages",
            stats.unique_words - index.len(),
            max
        );
    }

    if let Some(pb) = progress_bar {
        pb.finish_with_message(format!("{} index entries", index.len()));
    }

    if index.is_empty() {
        log::warn!(
            "no indexable words found in {} indexed pages",
            stats.pages_indexed
        );
    }

    Ok(BuildOutput { index, stats })
}

/// Record every indexable word of one page, returning how many were recorded
fn index_page(
    builder: &mut IndexBuilder,
    text: &str,
    page: LogicalPage,
    stopwords: &StopwordSet,
    config: &IndexConfig,
) -> u64 {
    let mut count = 0;
    for word in tokenize(text, config.min_word_len) {
        if stopwords.is_indexable(&word) {
            builder.record(&word, page);
            count += 1;
        }
    }
    count
}

/// Map every page of a layout, for inspection
pub fn page_table(layout: &BookLayout) -> Vec<(PhysicalPage, PageMapping)> {
    (1..=layout.page_count())
        .map(PhysicalPage)
        .map(|page| (page, layout.map(page)))
        .collect()
}
