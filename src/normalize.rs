//! Case folding applied to every word and prefix before it touches the trie.

/// Folds `input` to its canonical lowercase characters.
///
/// Uses full Unicode lowercasing, so a single input character may expand to
/// several (e.g. `'İ'`).
pub fn fold_chars(input: &str) -> impl Iterator<Item = char> + '_ {
    input.chars().flat_map(char::to_lowercase)
}

/// Returns the case-folded form of `input`.
pub fn fold_case(input: &str) -> String {
    fold_chars(input).collect()
}

/// Returns true if `word` only contains ASCII letters (`[A-Za-z]*`).
pub fn is_ascii_alphabetic(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_alphabetic())
}
