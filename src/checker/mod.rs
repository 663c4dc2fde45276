pub mod matcher;
pub mod scanner;

use crate::config::Config;
use crate::dict::Trie;
use crate::error::{CheckError, Result};
use crate::SpellingError;
use rayon::prelude::*;
use regex::Regex;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Owns the scan policy (ignore-list, casing) and fans line scanning out
/// across a thread pool. Holds no other state between calls; every
/// `check_*` invocation is a fresh scan-and-aggregate episode.
#[derive(Default)]
pub struct Checker {
    ignored: HashSet<String>,
    ignore_patterns: Vec<Regex>,
    ignore_uppercase: bool,
}

impl Checker {
    pub fn new(config: &Config) -> Self {
        // Compile ignore patterns
        let mut ignore_patterns = Vec::new();
        for pattern in &config.ignore_patterns {
            match Regex::new(pattern) {
                Ok(re) => ignore_patterns.push(re),
                Err(e) => eprintln!("Warning: Invalid ignore pattern '{}': {}", pattern, e),
            }
        }

        Self {
            ignored: config.ignored_words.iter().cloned().collect(),
            ignore_patterns,
            ignore_uppercase: config.ignore_uppercase,
        }
    }

    /// Treat `word` as always correct. Adding the same word again is a
    /// no-op. Safe before a check begins, not concurrently with one.
    pub fn ignore_word(&mut self, word: &str) {
        self.ignored.insert(word.to_string());
    }

    /// Lowercase every token before matching, which disables the
    /// interior-capital-is-wrong rule.
    pub fn set_ignore_uppercase(&mut self, ignore: bool) {
        self.ignore_uppercase = ignore;
    }

    pub(crate) fn is_ignored(&self, token: &str) -> bool {
        self.ignored.contains(token) || self.ignore_patterns.iter().any(|re| re.is_match(token))
    }

    pub(crate) fn ignore_uppercase(&self) -> bool {
        self.ignore_uppercase
    }

    /// Check a whole file and return its findings sorted by `(row, col)`.
    ///
    /// Lines are dispatched in file-read order, one scan task per line;
    /// the trie and the policy are read-only, so tasks share nothing
    /// mutable and each publishes only its own finding list. The collect
    /// is the completion barrier: the aggregated result is exactly the
    /// union of per-line findings, no duplicates, none dropped.
    ///
    /// Any open or read failure aborts the whole check with
    /// [`CheckError::Io`] before scanning starts; no partial results.
    pub fn check_file(&self, trie: &Trie, path: &Path) -> Result<Vec<SpellingError>> {
        let file = File::open(path).map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|source| CheckError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let mut findings: Vec<SpellingError> = lines
            .par_iter()
            .enumerate()
            .flat_map_iter(|(row, line)| scanner::scan_line(trie, self, line, row))
            .collect();

        findings.sort_by_key(|e| (e.row, e.col));
        Ok(findings)
    }

    /// Apply the same policy to a flat in-memory word list; returns the
    /// misspelled words after any casing normalization. Useful for
    /// embedding the checker in other tools.
    pub fn check_words<I, S>(&self, trie: &Trie, words: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut misspelled = Vec::new();
        for word in words {
            let token = word.as_ref();
            if self.is_ignored(token) {
                continue;
            }

            let word = if self.ignore_uppercase {
                token.to_lowercase()
            } else {
                token.to_string()
            };

            if !matcher::matches(trie, &word) {
                misspelled.push(word);
            }
        }
        misspelled
    }
}
