//! The dictionary provider abstraction.

use std::sync::Arc;

use async_trait::async_trait;

use crate::dictionary::word_set::WordSet;
use crate::error::Result;

/// Source of the word list used for filtering.
///
/// Implementations either return the complete set or fail with
/// [`KeypadError::DictionaryLoad`](crate::error::KeypadError::DictionaryLoad);
/// a failed load must never be reported as an empty set.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use async_trait::async_trait;
/// use keypad_words::dictionary::{DictionaryProvider, WordSet};
/// use keypad_words::error::Result;
///
/// struct Animals;
///
/// #[async_trait]
/// impl DictionaryProvider for Animals {
///     async fn load(&self) -> Result<Arc<WordSet>> {
///         Ok(Arc::new(["cat", "dog"].into_iter().collect()))
///     }
///
///     fn name(&self) -> &str {
///         "animals"
///     }
/// }
/// ```
#[async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Load the complete word set.
    async fn load(&self) -> Result<Arc<WordSet>>;

    /// Short name used in log messages.
    fn name(&self) -> &str;
}

#[async_trait]
impl<P: DictionaryProvider + ?Sized> DictionaryProvider for Arc<P> {
    async fn load(&self) -> Result<Arc<WordSet>> {
        (**self).load().await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// A fixed in-memory word set.
#[derive(Debug, Clone)]
pub struct StaticDictionary {
    words: Arc<WordSet>,
}

impl StaticDictionary {
    pub fn new(words: WordSet) -> Self {
        StaticDictionary {
            words: Arc::new(words),
        }
    }

    /// Build from a list of words.
    pub fn from_words<'a, I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        Self::new(words.into_iter().collect())
    }
}

#[async_trait]
impl DictionaryProvider for StaticDictionary {
    async fn load(&self) -> Result<Arc<WordSet>> {
        Ok(Arc::clone(&self.words))
    }

    fn name(&self) -> &str {
        "static"
    }
}
