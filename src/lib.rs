pub mod checker;
pub mod cli;
pub mod config;
pub mod dict;
pub mod error;

pub use checker::Checker;
pub use config::Config;
pub use dict::Trie;
pub use error::{CheckError, Result};

use serde::Serialize;

/// A token the checker could not find in the dictionary, with its
/// zero-based line number and token position within that line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SpellingError {
    pub word: String,
    pub row: usize,
    pub col: usize,
}
