//! Output formatting for finished indexes
//!
//! Two representations share the same page reference string
//! (`1(3, 7) | 2(1)`): plain text lines `word: refs` and a two-column CSV
//! table. [`parse_page_refs`] is the inverse of [`format_page_refs`].

use crate::error::PageRefParseError;
use crate::index::builder::{BookPages, FinalizedIndex};
use crate::index::mapper::{PageMapping, SkipReason};
use crate::index::types::{BookNumber, BookPage, PhysicalPage};
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

const BOOK_SEPARATOR: &str = " | ";
const PAGE_SEPARATOR: &str = ", ";
const CSV_HEADER: [&str; 2] = ["word", "page_refs"];

/// Output representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `word: refs` lines
    Text,
    /// Header plus `word,refs` rows
    Csv,
}

impl OutputFormat {
    /// Suffix appended to the input name when no output path is given
    pub fn default_suffix(&self) -> &'static str {
        match self {
            OutputFormat::Text => ".index.txt",
            OutputFormat::Csv => ".csv",
        }
    }
}

/// Default output path: the input without its `.pdf`/`.txt` extension plus the format suffix
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let has_doc_ext = input
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf") || e.eq_ignore_ascii_case("txt"));
    let stem = if has_doc_ext {
        input.with_extension("")
    } else {
        input.to_path_buf()
    };

    let mut name = stem.into_os_string();
    name.push(format.default_suffix());
    PathBuf::from(name)
}

/// Render a word's books as `B(p, p) | B(p)`
pub fn format_page_refs(books: &[BookPages]) -> String {
    let mut out = String::new();
    for (i, book) in books.iter().enumerate() {
        if i > 0 {
            out.push_str(BOOK_SEPARATOR);
        }
        let _ = write!(out, "{}(", book.book);
        for (j, page) in book.pages.iter().enumerate() {
            if j > 0 {
                out.push_str(PAGE_SEPARATOR);
            }
            let _ = write!(out, "{}", page);
        }
        out.push(')');
    }
    out
}

/// Parse a page reference string produced by [`format_page_refs`]
pub fn parse_page_refs(refs: &str) -> Result<Vec<BookPages>, PageRefParseError> {
    if refs.is_empty() {
        return Ok(Vec::new());
    }

    refs.split(BOOK_SEPARATOR)
        .map(|part| {
            let (book, rest) = part
                .split_once('(')
                .ok_or_else(|| PageRefParseError::MissingOpenParen(part.to_string()))?;
            let pages = rest
                .strip_suffix(')')
                .ok_or_else(|| PageRefParseError::MissingCloseParen(part.to_string()))?;

            let book = BookNumber(parse_number(book)?);
            if pages.is_empty() {
                return Err(PageRefParseError::EmptyBook(book.0));
            }

            let pages = pages
                .split(PAGE_SEPARATOR)
                .map(|p| parse_number(p).map(BookPage))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(BookPages { book, pages })
        })
        .collect()
}

fn parse_number(s: &str) -> Result<u32, PageRefParseError> {
    // Signs and leading zeros parse as u32 but are never emitted by format_page_refs
    let padded = s.len() > 1 && s.starts_with('0');
    if s.is_empty() || padded || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PageRefParseError::InvalidNumber(s.to_string()));
    }
    s.parse()
        .map_err(|_| PageRefParseError::InvalidNumber(s.to_string()))
}

/// Plain-text form, one `word: refs` line per word
pub fn format_text(index: &FinalizedIndex) -> String {
    let mut out = String::new();
    for entry in index.sorted_entries() {
        out.push_str(&entry.word);
        out.push_str(": ");
        out.push_str(&format_page_refs(&entry.books));
        out.push('\n');
    }
    out
}

/// Write the CSV form (`word,page_refs` header, CRLF line endings) to `writer`
pub fn write_csv<W: Write>(index: &FinalizedIndex, writer: W) -> csv::Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for entry in index.sorted_entries() {
        let refs = format_page_refs(&entry.books);
        csv_writer.write_record([entry.word.as_str(), refs.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// CSV form rendered to a string
pub fn format_csv(index: &FinalizedIndex) -> io::Result<String> {
    let mut buf = Vec::new();
    write_csv(index, &mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Write the rendered index to `path`
pub fn write_index(index: &FinalizedIndex, format: OutputFormat, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    match format {
        OutputFormat::Text => writer.write_all(format_text(index).as_bytes())?,
        OutputFormat::Csv => write_csv(index, &mut writer)?,
    }
    writer.flush()
}

/// Print a physical -> logical page table
pub fn print_page_table(table: &[(PhysicalPage, PageMapping)], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    writeln!(stdout, "{:>8}  {:>4}  {:>6}", "physical", "book", "page")?;
    for (page, mapping) in table {
        write!(stdout, "{:>8}  ", page)?;
        match mapping {
            PageMapping::Indexed(logical) => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                writeln!(stdout, "{:>4}  {:>6}", logical.book, logical.page)?;
                stdout.reset()?;
            }
            PageMapping::Skipped { book, reason } => {
                let label = match reason {
                    SkipReason::FrontMatter => "skip (front)",
                    SkipReason::BackMatter => "skip (back)",
                };
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
                writeln!(stdout, "{:>4}  {}", book, label)?;
                stdout.reset()?;
            }
            PageMapping::Unassigned => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
                writeln!(stdout, "{:>4}  {}", "-", "not in a book")?;
                stdout.reset()?;
            }
        }
    }

    Ok(())
}
