//! Case-insensitive word membership set.

use ahash::AHashSet;

/// A set of lowercase words supporting case-insensitive lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: AHashSet<String>,
}

impl WordSet {
    /// Create a new empty word set.
    pub fn new() -> Self {
        WordSet {
            words: AHashSet::new(),
        }
    }

    /// Add a word, normalized to lowercase. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_lowercase())
    }

    /// Check if a word exists, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Get the total number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Parse a newline-delimited word list.
    ///
    /// Both `\n` and `\r\n` line endings are accepted; blank lines are skipped.
    pub fn from_text(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Merge another set into this one.
    pub fn merge(&mut self, other: &WordSet) {
        self.words.extend(other.words.iter().cloned());
    }
}

impl<'a> FromIterator<&'a str> for WordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = WordSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> Extend<&'a str> for WordSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_set_basic_operations() {
        let mut set = WordSet::new();
        assert!(set.is_empty());
        assert!(!set.contains("hello"));

        assert!(set.insert("hello"));
        assert!(!set.insert("hello"));
        assert!(set.contains("hello"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_word_set_case_insensitive() {
        let mut set = WordSet::new();
        set.insert("Hello");

        assert!(set.contains("hello"));
        assert!(set.contains("HELLO"));
        assert!(set.contains("HeLLo"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["hello"]);
    }

    #[test]
    fn test_from_text_handles_line_endings() {
        let set = WordSet::from_text("a\r\naa\n\naah\r\n\r\nzyzzyva\n");
        assert_eq!(set.len(), 4);
        assert!(set.contains("AAH"));
        assert!(set.contains("zyzzyva"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_merge() {
        let mut left: WordSet = ["cat", "dog"].into_iter().collect();
        let right: WordSet = ["dog", "fox"].into_iter().collect();
        left.merge(&right);

        assert_eq!(left.len(), 3);
        assert!(left.contains("fox"));
    }
}
