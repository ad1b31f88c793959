/// Words longer than this are dropped.
/// They are almost always hashes, base64 runs or mangled extraction output.
pub const MAX_WORD_LENGTH: usize = 64;

/// Default minimum word length in characters.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Split page text into normalized candidate words.
///
/// Rule:
/// - whitespace-separated chunks starting with `http://` or `https://` are dropped whole
/// - a word is a maximal run of alphanumeric characters; a single hyphen
///   between two alphanumerics stays inside the word (`man-in-the-middle`)
/// - every other character, apostrophes included, separates words
/// - words are lowercased
/// - words shorter than `min_len` or longer than [`MAX_WORD_LENGTH`]
///   characters are dropped
/// - words starting with a digit are dropped (covers purely numeric tokens)
pub fn tokenize(text: &str, min_len: usize) -> Words<'_> {
    Words {
        chunks: text.split_whitespace(),
        current: "",
        min_len: min_len.max(1),
    }
}

/// Lazy iterator over the words of a page, see [`tokenize`]
pub struct Words<'a> {
    chunks: std::str::SplitWhitespace<'a>,
    current: &'a str,
    min_len: usize,
}

impl<'a> Words<'a> {
    /// Take the next raw word from the current chunk
    fn next_raw(&mut self) -> Option<&'a str> {
        loop {
            if self.current.is_empty() {
                let chunk = self.chunks.next()?;
                if is_url(chunk) {
                    continue;
                }
                self.current = chunk;
            }

            let rest = self.current;
            let Some(start) = rest.find(char::is_alphanumeric) else {
                self.current = "";
                continue;
            };

            let end = word_end(rest, start);
            self.current = &rest[end..];
            return Some(&rest[start..end]);
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some(raw) = self.next_raw() {
            if raw.starts_with(|c: char| c.is_numeric()) {
                continue;
            }

            let word = raw.to_lowercase();
            let len = word.chars().count();
            if len < self.min_len || len > MAX_WORD_LENGTH {
                continue;
            }

            return Some(word);
        }
        None
    }
}

/// Byte offset one past the word starting at `start`
fn word_end(s: &str, start: usize) -> usize {
    let mut end = start;
    let mut chars = s[start..].char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if ch.is_alphanumeric() {
            end = start + i + ch.len_utf8();
        } else if ch == '-' && chars.peek().is_some_and(|&(_, next)| next.is_alphanumeric()) {
            // Internal hyphen, the following alphanumeric extends the word
            continue;
        } else {
            break;
        }
    }

    end
}

fn is_url(chunk: &str) -> bool {
    let lower = chunk.get(..8).unwrap_or(chunk).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
