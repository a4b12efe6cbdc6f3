//! The keypad engine: the three public entry points over a dictionary.
//!
//! [`KeypadEngine`] owns a [`DictionaryProvider`] and a [`KeypadConfig`].
//! `expand` needs no dictionary; `filter_valid` and `resolve` await the
//! word list first, bounded by the configured timeout, and fail if it cannot
//! be loaded.
//!
//! # Examples
//!
//! ```
//! use keypad_words::dictionary::StaticDictionary;
//! use keypad_words::engine::KeypadEngine;
//!
//! # async fn example() -> keypad_words::error::Result<()> {
//! let engine = KeypadEngine::new(StaticDictionary::from_words(["cat", "act", "bat"]));
//!
//! let resolution = engine.resolve("228").await?;
//! assert_eq!(resolution.final_results, vec!["ACT", "BAT", "CAT"]);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::{debug, warn};

use crate::config::{DictionarySource, KeypadConfig};
use crate::dictionary::{
    BuiltinDictionary, CachedDictionary, DictionaryProvider, FileDictionary, WordSet,
};
use crate::error::{KeypadError, Result};
use crate::filter::filter_valid_with;
use crate::keypad;
use crate::permutation::{self, Expansion};
use crate::resolve::{Resolution, resolve_with};

/// Entry point for expanding, filtering and resolving digit strings.
#[derive(Clone)]
pub struct KeypadEngine {
    provider: Arc<dyn DictionaryProvider>,
    config: KeypadConfig,
}

impl std::fmt::Debug for KeypadEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeypadEngine")
            .field("provider", &self.provider.name())
            .field("config", &self.config)
            .finish()
    }
}

impl KeypadEngine {
    /// Create an engine over `provider` with the default configuration.
    pub fn new<P: DictionaryProvider + 'static>(provider: P) -> Self {
        Self::with_config(provider, KeypadConfig::default())
    }

    /// Create an engine over `provider` with an explicit configuration.
    ///
    /// The provider is used as given; `config.dictionary` and
    /// `config.cache_dictionary` only apply to [`KeypadEngine::from_config`].
    pub fn with_config<P: DictionaryProvider + 'static>(provider: P, config: KeypadConfig) -> Self {
        KeypadEngine {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Build the provider described by `config`.
    pub fn from_config(config: KeypadConfig) -> Result<Self> {
        config.validate()?;

        let provider: Arc<dyn DictionaryProvider> = match &config.dictionary {
            DictionarySource::Builtin => wrap(BuiltinDictionary, config.cache_dictionary),
            DictionarySource::File { path } => {
                wrap(FileDictionary::new(path), config.cache_dictionary)
            }
            #[cfg(feature = "http")]
            DictionarySource::Url { url } => wrap(
                crate::dictionary::HttpDictionary::new(url.as_str()),
                config.cache_dictionary,
            ),
            #[cfg(not(feature = "http"))]
            DictionarySource::Url { .. } => {
                return Err(KeypadError::invalid_config(
                    "url dictionaries require the `http` feature",
                ));
            }
        };

        Ok(KeypadEngine { provider, config })
    }

    pub fn config(&self) -> &KeypadConfig {
        &self.config
    }

    /// Every letter combination per run. Needs no dictionary.
    pub fn expand(&self, digits: &str) -> Result<Expansion> {
        self.check_input(digits)?;
        Ok(permutation::expand(digits))
    }

    /// Combinations per run that are dictionary words. Literal runs are kept as-is.
    pub async fn filter_valid(&self, digits: &str) -> Result<Expansion> {
        self.check_input(digits)?;
        if digits.is_empty() {
            return Ok(Expansion::Empty);
        }
        let words = self.words().await?;
        Ok(filter_valid_with(digits, &words))
    }

    /// Full recursive resolution into a tree and a list of phrases.
    pub async fn resolve(&self, digits: &str) -> Result<Resolution> {
        self.check_input(digits)?;
        if digits.is_empty() {
            return Ok(resolve_with(digits, &WordSet::new()));
        }
        let words = self.words().await?;
        Ok(resolve_with(digits, &words))
    }

    /// Load the word list, bounded by the configured timeout.
    pub async fn words(&self) -> Result<Arc<WordSet>> {
        let timeout = self.config.fetch_timeout;
        match tokio::time::timeout(timeout, self.provider.load()).await {
            Ok(Ok(words)) => {
                debug!(
                    "Dictionary {} ready with {} words",
                    self.provider.name(),
                    words.len()
                );
                Ok(words)
            }
            Ok(Err(e)) => Err(e),
            Err(_) => {
                warn!(
                    "Dictionary {} did not load within {:?}",
                    self.provider.name(),
                    timeout
                );
                Err(KeypadError::DictionaryTimeout(timeout))
            }
        }
    }

    fn check_input(&self, digits: &str) -> Result<()> {
        if self.config.strict_input {
            keypad::validate(digits)?;
        }
        Ok(())
    }
}

fn wrap<P: DictionaryProvider + 'static>(provider: P, cache: bool) -> Arc<dyn DictionaryProvider> {
    if cache {
        Arc::new(CachedDictionary::new(provider))
    } else {
        Arc::new(provider)
    }
}
