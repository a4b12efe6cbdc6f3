//! Word lists read from disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use crate::dictionary::provider::DictionaryProvider;
use crate::dictionary::word_set::WordSet;
use crate::error::{KeypadError, Result};

/// A newline-delimited word list file.
#[derive(Debug, Clone)]
pub struct FileDictionary {
    path: PathBuf,
}

impl FileDictionary {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileDictionary {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DictionaryProvider for FileDictionary {
    async fn load(&self) -> Result<Arc<WordSet>> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            KeypadError::dictionary_load(
                None,
                format!("Failed to read {}: {e}", self.path.display()),
            )
        })?;

        let words = WordSet::from_text(&text);
        if words.is_empty() {
            return Err(KeypadError::dictionary_load(
                None,
                format!("Word list {} is empty", self.path.display()),
            ));
        }

        debug!("Loaded {} words from {}", words.len(), self.path.display());
        Ok(Arc::new(words))
    }

    fn name(&self) -> &str {
        "file"
    }
}
