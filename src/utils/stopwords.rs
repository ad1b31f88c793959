use ahash::AHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Common English words excluded when no wordlist is supplied.
const DEFAULT_STOPWORDS: &[&str] = &[
    "about", "above", "across", "after", "again", "against", "all", "almost", "along", "already",
    "also", "although", "always", "among", "and", "another", "any", "anyone", "anything", "are",
    "around", "as", "ask", "at", "away", "back", "based", "be", "because", "become", "been",
    "before", "begin", "being", "below", "best", "better", "between", "both", "but", "by", "call",
    "can", "cannot", "case", "cause", "certain", "change", "chapter", "check", "clear", "come",
    "common", "could", "course", "current", "data", "day", "did", "different", "does", "doing",
    "done", "down", "during", "each", "early", "easy", "either", "else", "end", "enough", "even",
    "ever", "every", "example", "far", "few", "figure", "find", "first", "following", "for",
    "form", "found", "four", "free", "from", "full", "further", "general", "get", "give", "given",
    "good", "great", "had", "has", "have", "having", "he", "her", "here", "high", "him", "his",
    "how", "however", "important", "include", "included", "including", "information", "into",
    "is", "it", "its", "itself", "just", "keep", "kind", "know", "known", "large", "last", "later",
    "least", "less", "let", "like", "likely", "line", "list", "little", "long", "look", "made",
    "main", "make", "making", "many", "may", "means", "might", "more", "most", "much", "must",
    "name", "near", "need", "needed", "never", "new", "next", "not", "note", "now", "number",
    "off", "often", "old", "once", "one", "only", "open", "other", "others", "our", "out", "over",
    "own", "page", "part", "per", "place", "point", "possible", "present", "provide", "provides",
    "put", "rather", "really", "reason", "related", "right", "run", "same", "second", "section",
    "see", "seen", "set", "several", "shall", "she", "should", "show", "shown", "similar",
    "simple", "since", "small", "some", "something", "sometimes", "specific", "still", "such",
    "sure", "take", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "thing", "things", "this", "those", "though", "three", "through", "thus", "time", "to",
    "together", "too", "two", "under", "until", "upon", "use", "used", "useful", "uses", "using",
    "very", "want", "was", "way", "ways", "well", "were", "what", "when", "where", "whether",
    "which", "while", "who", "whole", "whose", "why", "will", "with", "within", "without", "work",
    "would", "yet", "you", "your",
];

/// Set of lowercase words excluded from the index
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: AHashSet<String>,
}

impl StopwordSet {
    /// Built-in list of common English words
    pub fn builtin() -> Self {
        DEFAULT_STOPWORDS.iter().copied().collect()
    }

    /// Set that excludes nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load a wordlist with one word per line; blank lines are ignored
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(Self::parse(&content))
    }

    /// Parse wordlist text with one word per line
    pub fn parse(content: &str) -> Self {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Whether `word` may appear in the index
    ///
    /// A word is excluded when it or its `s` plural is in the set, so a
    /// dictionary wordlist listing only `tickets` still excludes `ticket`.
    pub fn is_indexable(&self, word: &str) -> bool {
        let mut key = word.to_lowercase();
        if self.words.contains(&key) {
            return false;
        }
        key.push('s');
        !self.words.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_excludes_common_words() {
        let stopwords = StopwordSet::builtin();
        assert!(!stopwords.is_indexable("the"));
        assert!(!stopwords.is_indexable("because"));
        assert!(stopwords.is_indexable("kerberos"));
        assert_eq!(stopwords.len(), DEFAULT_STOPWORDS.len());
    }

    #[test]
    fn test_case_insensitive() {
        let stopwords: StopwordSet = ["Token"].into_iter().collect();
        assert!(!stopwords.is_indexable("token"));
        assert!(!stopwords.is_indexable("TOKEN"));
        assert!(stopwords.is_indexable("tokens"));
    }

    #[test]
    fn test_plural_in_set_excludes_singular() {
        let stopwords: StopwordSet = ["Tickets", "hash"].into_iter().collect();
        assert!(!stopwords.is_indexable("ticket"));
        assert!(!stopwords.is_indexable("TICKET"));
        assert!(!stopwords.is_indexable("tickets"));
        assert!(stopwords.is_indexable("ticketss"));
        // Only the singular is derived, never the plural
        assert!(stopwords.is_indexable("hashes"));
        assert!(!stopwords.is_indexable("hash"));
    }

    #[test]
    fn test_parse_wordlist() {
        let stopwords = StopwordSet::parse("  Alpha \n\nbeta\r\n\t\ngamma");
        assert_eq!(stopwords.len(), 3);
        assert!(!stopwords.is_indexable("alpha"));
        assert!(!stopwords.is_indexable("beta"));
        assert!(!stopwords.is_indexable("gamma"));
    }

    #[test]
    fn test_empty_set_keeps_everything() {
        let stopwords = StopwordSet::empty();
        assert!(stopwords.is_empty());
        assert!(stopwords.is_indexable("the"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "splunk\nzeek\n").unwrap();

        let stopwords = StopwordSet::from_file(&path).unwrap();
        assert!(!stopwords.is_indexable("zeek"));
        assert!(stopwords.is_indexable("suricata"));
    }

    #[test]
    fn test_from_missing_file() {
        assert!(StopwordSet::from_file(Path::new("/nonexistent/words.txt")).is_err());
    }
}
