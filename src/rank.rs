use serde::Serialize;

use crate::trie::Popularity;

/// A completion found under a prefix, with the popularity it was stored with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub word: String,
    pub popularity: Popularity,
}

impl Candidate {
    pub fn new(word: impl Into<String>, popularity: Popularity) -> Self {
        Self {
            word: word.into(),
            popularity,
        }
    }
}

/// Orders `candidates` by descending popularity and keeps at most `n`.
///
/// The sort is stable: candidates with equal popularity keep the order they
/// were discovered in.
pub fn top_n(mut candidates: Vec<Candidate>, n: usize) -> Vec<Candidate> {
    if n == 0 {
        return Vec::new();
    }
    candidates.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    candidates.truncate(n);
    candidates
}
