use anyhow::{Context, Result};
use bookdex::index::{build_index_with_progress, BookLayout, IndexConfig};
use bookdex::output::{default_output_path, print_page_table, write_index, OutputFormat};
use bookdex::source::open_source;
use bookdex::utils::{load_config, StopwordSet};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bookdex")]
#[command(about = "Generate a keyword index from a multi-book PDF")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the keyword index
    Index {
        /// Input document (.pdf, or text with form-feed page breaks)
        #[arg(short, long = "input-file")]
        input: PathBuf,

        /// Output file (defaults to the input name with .index.txt or .csv)
        #[arg(short, long = "output-file")]
        output: Option<PathBuf>,

        /// Write the index as CSV
        #[arg(long)]
        csv: bool,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Word list to exclude, one word per line (replaces the built-in list)
        #[arg(long, conflicts_with = "no_stopwords")]
        wordlist: Option<PathBuf>,

        /// Do not exclude any words
        #[arg(long)]
        no_stopwords: bool,

        /// Minimum word length in characters
        #[arg(long)]
        min_len: Option<usize>,

        /// Drop words that appear on this many pages or more
        #[arg(long)]
        max_refs: Option<usize>,

        /// Tokenize pages in parallel
        #[arg(long)]
        parallel: bool,

        /// Config file (defaults to the per-user bookdex/config.json)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Only print errors
        #[arg(short, long)]
        quiet: bool,
    },
    /// Show which book and page each physical page maps to
    Pages {
        /// Input document (.pdf, or text with form-feed page breaks)
        #[arg(short, long = "input-file")]
        input: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Start page of each book in the document (1-based)
    #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
    book_starts: Vec<i64>,

    /// Pages to skip at the start of each book (blank or unnumbered)
    #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
    skip_first: Vec<i64>,

    /// Pages to skip at the end of each book
    #[arg(long, num_args = 1.., required = true, allow_negative_numbers = true)]
    skip_last: Vec<i64>,
}

impl LayoutArgs {
    fn resolve(&self, page_count: u32) -> Result<BookLayout> {
        BookLayout::from_lists(&self.book_starts, &self.skip_first, &self.skip_last, page_count)
            .context("Invalid book layout")
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Index {
            input,
            output,
            csv,
            layout,
            wordlist,
            no_stopwords,
            min_len,
            max_refs,
            parallel,
            config,
            quiet,
        } => {
            let mut index_config = load_config(config.as_deref())?;
            if let Some(min_len) = min_len {
                index_config.min_word_len = min_len;
            }
            if max_refs.is_some() {
                index_config.max_references = max_refs;
            }
            index_config.parallel |= parallel;

            let stopwords = load_stopwords(wordlist.as_deref(), no_stopwords, quiet)?;
            let format = if csv { OutputFormat::Csv } else { OutputFormat::Text };
            let output = output.unwrap_or_else(|| default_output_path(&input, format));

            run_index(&input, &output, format, &layout, &stopwords, &index_config, quiet)?;
        }
        Commands::Pages {
            input,
            layout,
            no_color,
        } => {
            let source = open_source(&input)
                .with_context(|| format!("Failed to open {}", input.display()))?;
            let layout = layout.resolve(source.page_count())?;
            let table = bookdex::index::build::page_table(&layout);
            print_page_table(&table, !no_color)?;
        }
    }

    Ok(())
}

fn load_stopwords(wordlist: Option<&Path>, none: bool, quiet: bool) -> Result<StopwordSet> {
    if let Some(path) = wordlist {
        if !quiet {
            println!("Loading word list from: {}", path.display());
        }
        return StopwordSet::from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display()));
    }

    if none {
        Ok(StopwordSet::empty())
    } else {
        Ok(StopwordSet::builtin())
    }
}

fn run_index(
    input: &Path,
    output: &Path,
    format: OutputFormat,
    layout: &LayoutArgs,
    stopwords: &StopwordSet,
    config: &IndexConfig,
    quiet: bool,
) -> Result<()> {
    let source =
        open_source(input).with_context(|| format!("Failed to open {}", input.display()))?;
    let layout = layout.resolve(source.page_count())?;

    if !quiet {
        println!(
            "Indexing: {} ({} pages, {} books)",
            input.display(),
            layout.page_count(),
            layout.books().len()
        );
    }

    let result = build_index_with_progress(&*source, &layout, stopwords, config, quiet)
        .with_context(|| format!("Failed to index {}", input.display()))?;

    if !quiet {
        println!(
            "Found {} unique words across {} indexed pages",
            result.stats.unique_words, result.stats.pages_indexed
        );
    }

    write_index(&result.index, format, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if !quiet {
        println!("Index written to: {} ({} entries)", output.display(), result.index.len());
    }

    Ok(())
}
