use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckError>;

/// Fatal failures of a check run. A word missing from the dictionary is
/// never an error; it is reported as a [`crate::SpellingError`] finding.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The dictionary or target file could not be opened, or a read failed
    /// mid-stream. Never retried; the whole check aborts with no partial
    /// results.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dictionary file yielded no usable words.
    #[error("dictionary {} contains no usable words", path.display())]
    EmptyDictionary { path: PathBuf },
}
