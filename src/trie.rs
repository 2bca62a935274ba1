use crate::normalize::{fold_case, fold_chars};
use crate::rank::{self, Candidate};

/// Score attached to a stored word. Higher means preferred.
pub type Popularity = i64;

/// Popularity given to words inserted without an explicit score.
pub const DEFAULT_POPULARITY: Popularity = 0;

/// A node of the trie.
///
/// `terminal` is `Some(popularity)` when a word ends here. Children keep the
/// order their labels were first inserted in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    children: Vec<Child>,
    terminal: Option<Popularity>,
}

/// An edge from a node to one of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    label: char,
    node: Node,
}

impl Child {
    /// The character labelling this edge.
    pub fn label(&self) -> char {
        self.label
    }

    /// The node this edge leads to.
    pub fn node(&self) -> &Node {
        &self.node
    }
}

/// Outcome of removing a word below a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Removal {
    NotFound,
    /// The word was removed. `prunable` is set when the node the call was
    /// made on has neither children nor a terminal marker left, so its
    /// parent should unlink it.
    Removed { prunable: bool },
}

impl Node {
    /// Children in insertion order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    pub fn child(&self, label: char) -> Option<&Node> {
        self.children
            .iter()
            .find(|child| child.label == label)
            .map(|child| &child.node)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The popularity of the word ending at this node, if any.
    pub fn popularity(&self) -> Option<Popularity> {
        self.terminal
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    fn is_prunable(&self) -> bool {
        self.children.is_empty() && self.terminal.is_none()
    }

    fn child_or_insert(&mut self, label: char) -> &mut Node {
        let idx = match self.children.iter().position(|child| child.label == label) {
            Some(idx) => idx,
            None => {
                self.children.push(Child {
                    label,
                    node: Node::default(),
                });
                self.children.len() - 1
            }
        };
        &mut self.children[idx].node
    }

    /// Raises the terminal popularity to `popularity`, marking the node as a
    /// word end if it was not one. Returns true if anything changed.
    fn mark_terminal(&mut self, popularity: Popularity) -> bool {
        match self.terminal {
            Some(existing) if existing >= popularity => false,
            _ => {
                self.terminal = Some(popularity);
                true
            }
        }
    }

    /// Follows `path` down from this node.
    fn descend(&self, path: impl Iterator<Item = char>) -> Option<&Node> {
        let mut node = self;
        for label in path {
            node = node.child(label)?;
        }
        Some(node)
    }

    /// Removes the word spelled by `path` below this node.
    ///
    /// A child that reports itself prunable is unlinked before this node
    /// reports its own state, so the cascade moves up exactly one edge per
    /// level.
    pub(crate) fn remove(&mut self, mut path: impl Iterator<Item = char>) -> Removal {
        let Some(label) = path.next() else {
            return match self.terminal.take() {
                Some(_) => Removal::Removed {
                    prunable: self.is_prunable(),
                },
                None => Removal::NotFound,
            };
        };

        let Some(idx) = self.children.iter().position(|child| child.label == label) else {
            return Removal::NotFound;
        };

        match self.children[idx].node.remove(path) {
            Removal::NotFound => Removal::NotFound,
            Removal::Removed { prunable } => {
                if prunable {
                    self.children.remove(idx);
                }
                Removal::Removed {
                    prunable: self.is_prunable(),
                }
            }
        }
    }

    /// Pushes every word at or below this node onto `out`, depth first,
    /// children in insertion order. `prefix` holds the path to this node.
    fn collect(&self, prefix: &mut String, out: &mut Vec<Candidate>) {
        if let Some(popularity) = self.terminal {
            out.push(Candidate::new(prefix.as_str(), popularity));
        }
        for child in &self.children {
            prefix.push(child.label);
            child.node.collect(prefix, out);
            prefix.pop();
        }
    }

    fn longest_path(&self, path: &mut String, path_len: usize, best: &mut (usize, String)) {
        if path_len > best.0 {
            *best = (path_len, path.clone());
        }
        for child in &self.children {
            path.push(child.label);
            child.node.longest_path(path, path_len + 1, best);
            path.pop();
        }
    }
}

/// A case-insensitive prefix tree mapping words to popularity scores.
///
/// The root stands for the empty prefix and always exists. After every
/// operation, each non-root node either ends a word or has children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trie {
    root: Node,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node, for read-only traversal.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Returns true if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_prunable()
    }

    /// Inserts `word` with [`DEFAULT_POPULARITY`].
    pub fn insert(&mut self, word: &str) -> bool {
        self.insert_with_popularity(word, DEFAULT_POPULARITY)
    }

    /// Inserts `word`, keeping the larger of its current and given popularity.
    ///
    /// Returns true if the word was new or its popularity went up.
    pub fn insert_with_popularity(&mut self, word: &str, popularity: Popularity) -> bool {
        let mut node = &mut self.root;
        for label in fold_chars(word) {
            node = node.child_or_insert(label);
        }
        node.mark_terminal(popularity)
    }

    /// Removes `word`, unlinking every node that no longer leads to a word.
    ///
    /// Returns false, leaving the trie untouched, if `word` is not stored.
    pub fn remove(&mut self, word: &str) -> bool {
        matches!(self.root.remove(fold_chars(word)), Removal::Removed { .. })
    }

    /// Returns true if `word` is stored. A bare prefix of a stored word does
    /// not count.
    pub fn contains(&self, word: &str) -> bool {
        self.popularity(word).is_some()
    }

    /// The popularity `word` is stored with.
    pub fn popularity(&self, word: &str) -> Option<Popularity> {
        self.root.descend(fold_chars(word))?.popularity()
    }

    /// The most popular word starting with `prefix`.
    pub fn predict(&self, prefix: &str) -> Option<String> {
        self.predict_n(prefix, 1).into_iter().next()
    }

    /// Up to `n` words starting with `prefix`, most popular first.
    ///
    /// Words of equal popularity come out in traversal order, which follows
    /// the order characters were first inserted at each node rather than
    /// alphabetical order. An unknown prefix yields an empty list.
    pub fn predict_n(&self, prefix: &str, n: usize) -> Vec<String> {
        self.predict_ranked(prefix, n)
            .into_iter()
            .map(|candidate| candidate.word)
            .collect()
    }

    /// Like [`Trie::predict_n`] but keeps each word's popularity.
    pub fn predict_ranked(&self, prefix: &str, n: usize) -> Vec<Candidate> {
        let mut prefix = fold_case(prefix);
        let Some(subtree) = self.root.descend(prefix.chars()) else {
            return Vec::new();
        };
        let mut found = Vec::new();
        subtree.collect(&mut prefix, &mut found);
        rank::top_n(found, n)
    }

    /// Every stored word, depth first in insertion order.
    pub fn words(&self) -> Vec<String> {
        let mut found = Vec::new();
        self.root.collect(&mut String::new(), &mut found);
        found.into_iter().map(|candidate| candidate.word).collect()
    }

    /// The longest root-to-leaf path. The first one found wins ties.
    pub fn longest_word(&self) -> String {
        let mut best = (0, String::new());
        self.root.longest_path(&mut String::new(), 0, &mut best);
        best.1
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        for word in iter {
            trie.insert(word.as_ref());
        }
        trie
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trie {
        ["hello", "hey", "at", "atlas", "attention"].into_iter().collect()
    }

    fn ranked_sample() -> Trie {
        let mut trie = Trie::new();
        for (word, popularity) in [
            ("hello", 10),
            ("hey", 4),
            ("at", 200),
            ("atlas", 100),
            ("attention", 0),
            ("aty", 1),
        ] {
            trie.insert_with_popularity(word, popularity);
        }
        trie
    }

    #[test]
    fn contains_after_insert() {
        let mut trie = Trie::new();
        assert!(!trie.contains("word"));
        trie.insert("word");
        assert!(trie.contains("word"));
    }

    #[test]
    fn contains_ignores_bare_prefixes() {
        let trie = sample();
        assert!(trie.contains("attention"));
        assert!(!trie.contains("atten"));
        assert!(!trie.contains("blam"));
        assert!(!trie.contains(""));
    }

    #[test]
    fn case_is_folded() {
        let mut trie = Trie::new();
        trie.insert("HeLLo");
        assert!(trie.contains("hello"));
        assert!(trie.contains("HELLO"));
        assert_eq!(trie.words(), ["hello"]);
        assert_eq!(trie.predict("HE").as_deref(), Some("hello"));
    }

    #[test]
    fn empty_word_marks_root() {
        let mut trie = Trie::new();
        assert!(trie.is_empty());
        trie.insert("");
        assert!(trie.contains(""));
        assert!(trie.root().is_terminal());
        assert!(!trie.is_empty());
        assert!(trie.remove(""));
        assert!(trie.is_empty());
    }

    #[test]
    fn popularity_only_increases() {
        let mut trie = Trie::new();
        assert!(trie.insert_with_popularity("hey", 4));
        assert!(!trie.insert_with_popularity("hey", 2));
        assert_eq!(trie.popularity("hey"), Some(4));
        assert!(trie.insert_with_popularity("hey", 12));
        assert_eq!(trie.popularity("hey"), Some(12));
        assert!(!trie.insert_with_popularity("hey", 12));
    }

    #[test]
    fn repeated_insert_raises_ranking() {
        let mut trie = Trie::new();
        trie.insert_with_popularity("hello", 10);
        trie.insert_with_popularity("hey", 4);
        assert_eq!(trie.predict("he").as_deref(), Some("hello"));
        trie.insert_with_popularity("hey", 12);
        assert_eq!(trie.predict("he").as_deref(), Some("hey"));
    }

    #[test]
    fn remove_keeps_other_words() {
        let mut trie = sample();
        assert!(trie.remove("atlas"));
        assert!(!trie.contains("atlas"));
        assert!(trie.contains("at"));
        assert!(trie.contains("attention"));
        assert!(trie.root().child('a').and_then(|a| a.child('t')).is_some());
        assert!(trie.root().descend("atl".chars()).is_none());
    }

    #[test]
    fn remove_prefix_word_keeps_longer_word() {
        let mut trie: Trie = ["at", "atlas"].into_iter().collect();
        assert!(trie.remove("at"));
        assert!(!trie.contains("at"));
        assert!(trie.contains("atlas"));
        assert_eq!(trie.words(), ["atlas"]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut trie = sample();
        let before = trie.clone();
        assert!(!trie.remove("blam"));
        assert!(!trie.remove("atl"));
        assert!(!trie.remove("attentions"));
        assert_eq!(trie, before);
    }

    #[test]
    fn remove_prunes_back_to_branch_point() {
        let mut trie: Trie = ["hello", "hey"].into_iter().collect();
        assert!(trie.remove("hello"));
        let he = trie.root().descend("he".chars()).unwrap();
        assert_eq!(he.child_count(), 1);
        assert!(he.child('l').is_none());
        assert!(trie.remove("hey"));
        assert!(trie.is_empty());
        assert_eq!(trie.root().child_count(), 0);
    }

    #[test]
    fn remove_preserves_sibling_order() {
        let mut trie: Trie = ["ab", "ac", "ad"].into_iter().collect();
        trie.remove("ac");
        assert_eq!(trie.words(), ["ab", "ad"]);
    }

    #[test]
    fn insert_remove_round_trip() {
        let mut trie = sample();
        let before = trie.clone();
        trie.insert("atomic");
        trie.insert("zebra");
        assert!(trie.remove("atomic"));
        assert!(trie.remove("zebra"));
        assert!(!trie.contains("zebra"));
        assert_eq!(trie, before);
    }

    #[test]
    fn predict_prefers_popularity() {
        let trie = ranked_sample();
        assert_eq!(trie.predict("a").as_deref(), Some("at"));
        assert_eq!(trie.predict_n("a", 10), ["at", "atlas", "aty", "attention"]);
    }

    #[test]
    fn predict_ties_follow_insertion_order() {
        let trie: Trie = ["zoo", "zap", "zebra"].into_iter().collect();
        assert_eq!(trie.predict_n("z", 3), ["zoo", "zap", "zebra"]);
    }

    #[test]
    fn predict_includes_prefix_itself() {
        let trie = ranked_sample();
        assert_eq!(trie.predict_n("at", 1), ["at"]);
        assert_eq!(trie.predict("attention").as_deref(), Some("attention"));
    }

    #[test]
    fn predict_unknown_prefix_is_empty() {
        let trie = sample();
        assert_eq!(trie.predict("xyz"), None);
        assert!(trie.predict_n("xyz", 5).is_empty());
        assert!(trie.predict_n("he", 0).is_empty());
    }

    #[test]
    fn predict_ranked_carries_popularity() {
        let trie = ranked_sample();
        let ranked = trie.predict_ranked("he", 2);
        assert_eq!(ranked, [Candidate::new("hello", 10), Candidate::new("hey", 4)]);
    }

    #[test]
    fn empty_prefix_predicts_over_whole_trie() {
        let trie = ranked_sample();
        assert_eq!(trie.predict("").as_deref(), Some("at"));
    }

    #[test]
    fn words_in_traversal_order() {
        let trie = sample();
        assert_eq!(trie.words(), ["hello", "hey", "at", "atlas", "attention"]);
    }

    #[test]
    fn longest_word() {
        assert_eq!(Trie::new().longest_word(), "");
        assert_eq!(sample().longest_word(), "attention");
        let tied: Trie = ["abc", "xyz"].into_iter().collect();
        assert_eq!(tied.longest_word(), "abc");
    }
}
