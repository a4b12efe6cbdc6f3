//! A small embedded English vocabulary.

use std::sync::Arc;

use async_trait::async_trait;

use crate::dictionary::provider::DictionaryProvider;
use crate::dictionary::word_set::WordSet;
use crate::error::Result;

const ENGLISH_WORDS: &[&str] = &[
    "a", "able", "about", "above", "act", "add", "after", "again", "age", "ago", "air", "all",
    "also", "am", "an", "and", "any", "are", "arm", "art", "as", "ask", "at", "away", "back",
    "bad", "bag", "ball", "bat", "be", "bed", "bee", "best", "big", "bird", "bit", "blue", "boat",
    "body", "book", "box", "boy", "bus", "but", "buy", "by", "cab", "cake", "call", "came", "can",
    "car", "care", "case", "cat", "city", "cold", "come", "cook", "cool", "cow", "cup", "cut",
    "dad", "day", "dear", "did", "die", "do", "does", "dog", "done", "door", "down", "dry", "ear",
    "east", "eat", "egg", "end", "eye", "face", "fact", "fall", "far", "fat", "feel", "few",
    "find", "fine", "fire", "fish", "fit", "five", "fly", "food", "for", "four", "fox", "free",
    "from", "fun", "game", "gas", "get", "girl", "give", "go", "god", "gold", "good", "got",
    "gun", "had", "hair", "half", "hand", "has", "hat", "have", "he", "head", "hear", "heat",
    "hello", "help", "her", "here", "hi", "him", "his", "hit", "hold", "home", "hope", "hot",
    "how", "i", "ice", "idea", "if", "in", "into", "is", "it", "its", "job", "joy", "just",
    "keep", "key", "kid", "kind", "king", "know", "lady", "lake", "land", "last", "late", "law",
    "lay", "leg", "let", "lie", "life", "like", "line", "lip", "list", "live", "long", "look",
    "lost", "lot", "love", "low", "mad", "made", "make", "man", "many", "map", "may", "me",
    "meet", "men", "mind", "miss", "mom", "moon", "more", "most", "move", "much", "must", "my",
    "name", "near", "need", "net", "new", "next", "nice", "night", "no", "none", "nor", "not",
    "now", "nut", "of", "off", "oil", "old", "on", "one", "only", "open", "or", "our", "out",
    "own", "page", "pan", "part", "pay", "pen", "pet", "phone", "pie", "pig", "pin", "place",
    "plan", "play", "pot", "put", "rain", "ran", "rat", "read", "real", "red", "rest", "rich",
    "ride", "road", "rock", "room", "run", "sad", "said", "salt", "same", "sat", "saw", "say",
    "sea", "see", "set", "she", "ship", "shop", "show", "sit", "six", "sky", "so", "some",
    "son", "soon", "stop", "sun", "take", "talk", "tall", "tea", "tell", "ten", "than", "that",
    "the", "them", "then", "they", "this", "tie", "time", "to", "toe", "too", "top", "toy",
    "tree", "try", "two", "up", "us", "use", "very", "wall", "want", "war", "was", "way", "we",
    "well", "went", "were", "wet", "what", "when", "who", "why", "will", "win", "wish", "with",
    "word", "work", "world", "yes", "yet", "you", "young", "your", "zoo",
];

/// The embedded English vocabulary as a provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDictionary;

impl BuiltinDictionary {
    /// Create a word set with common English words.
    pub fn english() -> WordSet {
        ENGLISH_WORDS.iter().copied().collect()
    }
}

#[async_trait]
impl DictionaryProvider for BuiltinDictionary {
    async fn load(&self) -> Result<Arc<WordSet>> {
        Ok(Arc::new(Self::english()))
    }

    fn name(&self) -> &str {
        "builtin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dictionary() {
        let words = BuiltinDictionary::english();
        assert!(words.contains("cat"));
        assert!(words.contains("HELLO"));
        assert!(words.len() > 300);
        assert!(words.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn test_builtin_provider() {
        let words = tokio_test::block_on(BuiltinDictionary.load()).unwrap();
        assert_eq!(words.len(), ENGLISH_WORDS.len());
        assert_eq!(BuiltinDictionary.name(), "builtin");
    }
}
