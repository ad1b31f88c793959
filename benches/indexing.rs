//! Tokenization and index building benchmarks on synthetic course text.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use bookdex::index::{build_index, BookLayout, IndexConfig};
use bookdex::output::format_text;
use bookdex::source::MemorySource;
use bookdex::utils::{tokenize, StopwordSet};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const VOCABULARY: &[&str] = &[
    "kerberos", "ticket", "granting", "mimikatz", "lsass", "volatility", "plugin", "pslist",
    "netscan", "timeline", "prefetch", "shimcache", "amcache", "registry", "hive", "ntuser",
    "powershell", "wmi", "persistence", "lateral", "movement", "psexec", "smb", "beacon",
];

/// Generate `pages` pages of roughly 400 words each
fn synthetic_pages(pages: usize) -> Vec<String> {
    (0..pages)
        .map(|p| {
            (0..400)
                .map(|w| {
                    let word = VOCABULARY[(p * 31 + w * 7) % VOCABULARY.len()];
                    if w % 13 == 0 {
                        format!("{}{}, the", word, w % 5)
                    } else {
                        word.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_tokenize(c: &mut Criterion) {
    let page = synthetic_pages(1).remove(0);

    c.bench_function("tokenize_page", |b| {
        b.iter(|| tokenize(black_box(&page), 3).count())
    });
}

fn bench_build(c: &mut Criterion) {
    let source = MemorySource::new(synthetic_pages(600));
    let layout = BookLayout::from_lists(&[1, 121, 241, 361, 481], &[2; 5], &[3; 5], 600).unwrap();
    let stopwords = StopwordSet::builtin();

    let mut group = c.benchmark_group("build");
    group.sample_size(20);

    group.bench_function("sequential_600_pages", |b| {
        let config = IndexConfig::default();
        b.iter(|| build_index(black_box(&source), &layout, &stopwords, &config))
    });

    group.bench_function("parallel_600_pages", |b| {
        let config = IndexConfig {
            parallel: true,
            ..IndexConfig::default()
        };
        b.iter(|| build_index(black_box(&source), &layout, &stopwords, &config))
    });

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let source = MemorySource::new(synthetic_pages(600));
    let layout = BookLayout::from_lists(&[1], &[0], &[0], 600).unwrap();
    let output = build_index(&source, &layout, &StopwordSet::empty(), &IndexConfig::default()).unwrap();

    c.bench_function("format_text", |b| {
        b.iter(|| format_text(black_box(&output.index)))
    });
}

criterion_group!(benches, bench_tokenize, bench_build, bench_format);
criterion_main!(benches);
