//! Word lists fetched over HTTP.
//!
//! Requires the `http` feature (enabled by default).

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::dictionary::DEFAULT_WORD_LIST_URL;
use crate::dictionary::provider::DictionaryProvider;
use crate::dictionary::word_set::WordSet;
use crate::error::{KeypadError, Result};

/// A newline-delimited word list served over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDictionary {
    client: Client,
    url: String,
}

impl HttpDictionary {
    /// Create a provider for `url`.
    pub fn new<S: Into<String>>(url: S) -> Self {
        HttpDictionary {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Use an existing client (shared connection pool, custom timeouts, etc.).
    pub fn with_client<S: Into<String>>(client: Client, url: S) -> Self {
        HttpDictionary {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpDictionary {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_LIST_URL)
    }
}

#[async_trait]
impl DictionaryProvider for HttpDictionary {
    async fn load(&self) -> Result<Arc<WordSet>> {
        debug!("Fetching word list from {}", self.url);

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            KeypadError::dictionary_load(
                e.status().map(|s| s.as_u16()),
                format!("Failed to fetch words: {e}"),
            )
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(KeypadError::dictionary_load(
                Some(status.as_u16()),
                format!(
                    "Failed to fetch words: {} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                ),
            ));
        }

        let text = response.text().await.map_err(|e| {
            KeypadError::dictionary_load(
                Some(status.as_u16()),
                format!("Failed to read word list body: {e}"),
            )
        })?;

        let words = WordSet::from_text(&text);
        if words.is_empty() {
            return Err(KeypadError::dictionary_load(
                Some(status.as_u16()),
                format!("Word list at {} is empty", self.url),
            ));
        }

        debug!("Loaded {} words from {}", words.len(), self.url);
        Ok(Arc::new(words))
    }

    fn name(&self) -> &str {
        "http"
    }
}
