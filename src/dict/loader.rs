use crate::dict::trie::Trie;
use crate::error::{CheckError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load a line-delimited word file into a trie.
///
/// One word per line, stored verbatim (dictionary words are lowercase by
/// convention, but nothing here enforces it). Blank lines are skipped, and
/// a word containing a byte outside printable ASCII is dropped by
/// [`Trie::insert`].
pub fn load_dictionary(path: &Path) -> Result<Trie> {
    let file = File::open(path).map_err(|source| CheckError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut trie = Trie::new();
    for line in BufReader::new(file).lines() {
        let word = line.map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if word.is_empty() {
            continue;
        }
        trie.insert(&word);
    }

    if trie.is_empty() {
        return Err(CheckError::EmptyDictionary {
            path: path.to_path_buf(),
        });
    }

    Ok(trie)
}
