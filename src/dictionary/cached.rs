//! Process-wide caching of a loaded word set.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::sync::Mutex;

use crate::dictionary::provider::DictionaryProvider;
use crate::dictionary::word_set::WordSet;
use crate::error::Result;

/// Loads the wrapped provider once and hands out the shared set afterwards.
///
/// Concurrent callers wait for the first load instead of starting their own.
/// A failed load leaves the cache empty, so the next call retries.
pub struct CachedDictionary<P> {
    inner: P,
    cache: Mutex<Option<Arc<WordSet>>>,
}

impl<P: DictionaryProvider> CachedDictionary<P> {
    pub fn new(inner: P) -> Self {
        CachedDictionary {
            inner,
            cache: Mutex::new(None),
        }
    }

    /// Drop the cached set; the next load goes back to the provider.
    pub async fn invalidate(&self) {
        self.cache.lock().await.take();
    }

    pub async fn is_loaded(&self) -> bool {
        self.cache.lock().await.is_some()
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: DictionaryProvider> DictionaryProvider for CachedDictionary<P> {
    async fn load(&self) -> Result<Arc<WordSet>> {
        let mut cache = self.cache.lock().await;
        if let Some(words) = cache.as_ref() {
            debug!("Using cached {} dictionary", self.inner.name());
            return Ok(Arc::clone(words));
        }

        match self.inner.load().await {
            Ok(words) => {
                *cache = Some(Arc::clone(&words));
                Ok(words)
            }
            Err(e) => {
                warn!("Loading {} dictionary failed: {e}", self.inner.name());
                *cache = None;
                Err(e)
            }
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeypadError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails on the first `failures` loads, then succeeds.
    struct FlakyProvider {
        calls: AtomicUsize,
        failures: usize,
    }

    #[async_trait]
    impl DictionaryProvider for FlakyProvider {
        async fn load(&self) -> Result<Arc<WordSet>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(KeypadError::dictionary_load(Some(503), "Service Unavailable"))
            } else {
                Ok(Arc::new(["go"].into_iter().collect()))
            }
        }

        fn name(&self) -> &str {
            "flaky"
        }
    }

    #[tokio::test]
    async fn test_loads_once() -> Result<()> {
        let cached = CachedDictionary::new(FlakyProvider {
            calls: AtomicUsize::new(0),
            failures: 0,
        });

        let first = cached.load().await?;
        let second = cached.load().await?;
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 1);

        cached.invalidate().await;
        assert!(!cached.is_loaded().await);
        cached.load().await?;
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() -> Result<()> {
        let cached = CachedDictionary::new(FlakyProvider {
            calls: AtomicUsize::new(0),
            failures: 1,
        });

        let err = cached.load().await.unwrap_err();
        assert!(err.is_dictionary_failure());
        assert!(!cached.is_loaded().await);

        let words = cached.load().await?;
        assert!(words.contains("go"));
        assert!(cached.is_loaded().await);

        Ok(())
    }
}
