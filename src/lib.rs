//! # keypad-words
//!
//! Turn telephone keypad digits into dictionary words and phrases.
//!
//! ## Pipeline
//!
//! - Split the input into runs of letter digits (`2`-`9`) and literal
//!   digits (`0`, `1`)
//! - Expand each run into every letter combination
//! - Keep the combinations that are dictionary words
//! - Bisect runs with no word and resolve the halves, joining the pieces
//!   into space-separated phrases
//!
//! ```
//! use keypad_words::prelude::*;
//!
//! let words: WordSet = ["cat", "act", "bat", "go"].into_iter().collect();
//! let resolution = resolve_with("228146", &words);
//! assert_eq!(resolution.final_results[0], "ACT 1 GO");
//! ```

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod filter;
pub mod keypad;
pub mod map;
pub mod permutation;
pub mod resolve;
pub mod segment;

pub mod prelude {
    pub use crate::config::{DictionarySource, KeypadConfig};
    pub use crate::dictionary::{
        BuiltinDictionary, CachedDictionary, DictionaryProvider, FileDictionary,
        StaticDictionary, WordSet,
    };
    pub use crate::engine::KeypadEngine;
    pub use crate::error::{KeypadError, Result};
    pub use crate::filter::filter_valid_with;
    pub use crate::map::RunMap;
    pub use crate::permutation::{Expansion, expand};
    pub use crate::resolve::{Resolution, ResolutionTree, resolve_with};
    pub use crate::segment::{Run, RunKind, segment};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
