//! Word lists used to decide which letter combinations are real words.
//!
//! A [`DictionaryProvider`] yields a shared, read-only [`WordSet`]. Providers
//! exist for in-memory lists, files on disk, a remote newline-delimited word
//! list, and a small built-in English vocabulary. [`CachedDictionary`] wraps
//! any of them so the list is loaded once and reused.

pub mod builtin;
pub mod cached;
pub mod file;
#[cfg(feature = "http")]
pub mod http;
pub mod provider;
pub mod word_set;

/// The dwyl English word list, one lowercase word per line.
pub const DEFAULT_WORD_LIST_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/master/words_alpha.txt";

// Re-export commonly used types
pub use builtin::*;
pub use cached::*;
pub use file::*;
#[cfg(feature = "http")]
pub use http::*;
pub use provider::*;
pub use word_set::*;
