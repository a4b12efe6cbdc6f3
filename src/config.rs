//! Engine configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{KeypadError, Result};

/// Where the word list comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DictionarySource {
    /// The embedded English vocabulary.
    #[default]
    Builtin,
    /// A newline-delimited file on disk.
    File { path: PathBuf },
    /// A newline-delimited list fetched over HTTP.
    Url { url: String },
}

/// Configuration for [`KeypadEngine`](crate::engine::KeypadEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeypadConfig {
    /// Word list source.
    pub dictionary: DictionarySource,

    /// Upper bound on loading the word list.
    pub fetch_timeout: Duration,

    /// Reject input containing characters other than `0`-`9` instead of
    /// treating them as digits without letters.
    pub strict_input: bool,

    /// Keep the loaded word list for later calls.
    pub cache_dictionary: bool,
}

impl Default for KeypadConfig {
    fn default() -> Self {
        Self {
            dictionary: DictionarySource::Builtin,
            fetch_timeout: Duration::from_secs(30),
            strict_input: false,
            cache_dictionary: true,
        }
    }
}

impl KeypadConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: KeypadConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the word list source.
    pub fn with_dictionary(mut self, dictionary: DictionarySource) -> Self {
        self.dictionary = dictionary;
        self
    }

    /// Set the word list load timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    pub fn with_strict_input(mut self, strict: bool) -> Self {
        self.strict_input = strict;
        self
    }

    pub fn with_cache_dictionary(mut self, cache: bool) -> Self {
        self.cache_dictionary = cache;
        self
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.fetch_timeout.is_zero() {
            return Err(KeypadError::invalid_config("fetch_timeout must be positive"));
        }
        match &self.dictionary {
            DictionarySource::Url { url } if url.trim().is_empty() => {
                Err(KeypadError::invalid_config("dictionary url is empty"))
            }
            DictionarySource::File { path } if path.as_os_str().is_empty() => {
                Err(KeypadError::invalid_config("dictionary path is empty"))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = KeypadConfig::default();
        assert_eq!(config.dictionary, DictionarySource::Builtin);
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
        assert!(!config.strict_input);
        assert!(config.cache_dictionary);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_with_partial_fields() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        write!(
            file,
            r#"{{"dictionary": {{"type": "file", "path": "/usr/share/dict/words"}}, "strict_input": true}}"#
        )?;
        file.flush()?;

        let config = KeypadConfig::from_file(file.path())?;
        assert_eq!(
            config.dictionary,
            DictionarySource::File {
                path: PathBuf::from("/usr/share/dict/words")
            }
        );
        assert!(config.strict_input);
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));

        Ok(())
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = KeypadConfig::default().with_fetch_timeout(Duration::ZERO);
        assert!(matches!(config.validate(), Err(KeypadError::InvalidConfig(_))));

        let config = KeypadConfig::default().with_dictionary(DictionarySource::Url {
            url: "  ".to_string(),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_round_trip_through_json() -> Result<()> {
        let config = KeypadConfig::default()
            .with_dictionary(DictionarySource::Url {
                url: "https://example.com/words.txt".to_string(),
            })
            .with_cache_dictionary(false);
        let json = serde_json::to_string(&config)?;
        assert!(json.contains(r#""type":"url""#));
        let parsed: KeypadConfig = serde_json::from_str(&json)?;
        assert_eq!(parsed, config);
        Ok(())
    }
}
