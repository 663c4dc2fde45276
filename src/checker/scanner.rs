use crate::checker::{matcher, Checker};
use crate::dict::Trie;
use crate::SpellingError;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

lazy_static! {
    // A word ends at any Unicode punctuation character or whitespace.
    static ref WORD_BOUNDARY: Regex = Regex::new(r"[\p{P}\s]+").unwrap();
}

/// Scan one line of text and return the findings for that line only.
///
/// Tokens are the non-empty substrings between boundary characters; `col`
/// is the token's index among them. The ignore-list is consulted on the
/// raw token before any casing normalization, matching what the checker
/// promises for `--ignore`.
pub fn scan_line(trie: &Trie, checker: &Checker, line: &str, row: usize) -> Vec<SpellingError> {
    let mut findings = Vec::new();

    let tokens = WORD_BOUNDARY.split(line).filter(|t| !t.is_empty());
    for (col, token) in tokens.enumerate() {
        if checker.is_ignored(token) {
            continue;
        }

        let word: Cow<str> = if checker.ignore_uppercase() {
            Cow::Owned(token.to_lowercase())
        } else {
            Cow::Borrowed(token)
        };

        if !matcher::matches(trie, &word) {
            findings.push(SpellingError {
                word: word.into_owned(),
                row,
                col,
            });
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Checker {
        Checker::default()
    }

    #[test]
    fn reports_misspelled_token_with_position() {
        let trie = Trie::from_words(["a", "memorable", "day"]);
        let findings = scan_line(&trie, &plain(), "a memmorable day", 0);

        assert_eq!(
            findings,
            vec![SpellingError {
                word: "memmorable".to_string(),
                row: 0,
                col: 1,
            }]
        );
    }

    #[test]
    fn punctuation_is_a_boundary_not_part_of_the_word() {
        let trie = Trie::from_words(["it", "was"]);
        let findings = scan_line(&trie, &plain(), "it, was.", 3);
        assert!(findings.is_empty());
    }

    #[test]
    fn consecutive_separators_do_not_shift_columns() {
        let trie = Trie::from_words(["it", "was"]);
        let findings = scan_line(&trie, &plain(), "it,,  wsa", 0);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].word, "wsa");
        assert_eq!(findings[0].col, 1);
    }

    #[test]
    fn tab_is_a_boundary() {
        let trie = Trie::from_words(["it", "was"]);
        let findings = scan_line(&trie, &plain(), "it\twas", 0);
        assert!(findings.is_empty());
    }

    #[test]
    fn ignored_word_is_skipped_before_normalization() {
        let trie = Trie::from_words(["it", "was"]);
        let mut checker = plain();
        checker.ignore_word("wasx");

        let findings = scan_line(&trie, &checker, "it wasx", 0);
        assert!(findings.is_empty());
    }

    #[test]
    fn ignore_uppercase_lowercases_the_whole_token() {
        let trie = Trie::from_words(["think"]);
        let mut checker = plain();
        checker.set_ignore_uppercase(true);

        let findings = scan_line(&trie, &checker, "tHINk", 0);
        assert!(findings.is_empty());
    }

    #[test]
    fn reported_word_is_the_normalized_form() {
        let trie = Trie::from_words(["think"]);
        let mut checker = plain();
        checker.set_ignore_uppercase(true);

        let findings = scan_line(&trie, &checker, "tHINKx", 0);
        assert_eq!(findings[0].word, "thinkx");
    }

    #[test]
    fn empty_line_yields_no_findings() {
        let trie = Trie::from_words(["word"]);
        assert!(scan_line(&trie, &plain(), "", 0).is_empty());
        assert!(scan_line(&trie, &plain(), " ,. ", 0).is_empty());
    }
}
