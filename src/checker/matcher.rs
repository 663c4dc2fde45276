use crate::dict::trie::{Trie, FIRST_PRINTABLE, LAST_PRINTABLE};

/// Check a single word against the dictionary under the default casing
/// policy: a leading capital is tolerated (it matches only an entry stored
/// with that exact capital), a capital anywhere else is always an error.
///
/// The walk is a pure read-only traversal and total over arbitrary input;
/// it is safe to call concurrently from many tasks against the same trie,
/// and a malformed token is simply a non-match.
pub fn matches(trie: &Trie, word: &str) -> bool {
    let mut node = trie.root();

    for (i, byte) in word.bytes().enumerate() {
        if !(FIRST_PRINTABLE..=LAST_PRINTABLE).contains(&byte) {
            return false;
        }

        if byte.is_ascii_uppercase() && i > 0 {
            return false;
        }

        node = match node.child(byte) {
            Some(next) => next,
            None => return false,
        };
    }

    node.is_terminal()
}
