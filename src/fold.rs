//! Bottom-up folds over the trie.
//!
//! Every whole-tree aggregate is one [`Aggregate`] run through the same
//! post-order traversal: each child is folded first, in stored order, and
//! the node combines itself with the collected child results.

use serde::Serialize;

use crate::trie::{Node, Trie};

impl Node {
    /// Folds the subtree rooted at this node with `f`.
    ///
    /// `f` receives the node and the results of folding each of its children,
    /// in insertion order.
    pub fn fold<A, F>(&self, f: &F) -> A
    where
        F: Fn(&Node, Vec<A>) -> A,
    {
        let results = self
            .children()
            .iter()
            .map(|child| child.node().fold(f))
            .collect();
        f(self, results)
    }
}

/// A per-node combining step for [`Trie::aggregate`].
pub trait Aggregate {
    type Output;

    fn combine(&self, node: &Node, children: Vec<Self::Output>) -> Self::Output;
}

/// Number of nodes, root included.
#[derive(Debug, Clone, Copy, Default)]
pub struct Size;

impl Aggregate for Size {
    type Output = usize;

    fn combine(&self, _node: &Node, children: Vec<usize>) -> usize {
        1 + children.into_iter().sum::<usize>()
    }
}

/// Length of the longest root-to-leaf path. A lone root has height 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Height;

impl Aggregate for Height {
    type Output = usize;

    fn combine(&self, _node: &Node, children: Vec<usize>) -> usize {
        children.into_iter().max().map_or(0, |deepest| deepest + 1)
    }
}

/// Number of stored words that are not a prefix of another stored word.
#[derive(Debug, Clone, Copy, Default)]
pub struct Leaves;

impl Aggregate for Leaves {
    type Output = usize;

    fn combine(&self, node: &Node, children: Vec<usize>) -> usize {
        if node.is_terminal() && node.child_count() == 0 {
            1
        } else {
            children.into_iter().sum()
        }
    }
}

/// Largest number of children held by any node.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxBranching;

impl Aggregate for MaxBranching {
    type Output = usize;

    fn combine(&self, node: &Node, children: Vec<usize>) -> usize {
        children.into_iter().fold(node.child_count(), usize::max)
    }
}

/// Structural summary of a trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrieStats {
    pub size: usize,
    pub leaves: usize,
    pub height: usize,
    pub max_branching: usize,
    pub longest_word_len: usize,
}

impl Trie {
    /// Folds the whole trie with `f`. See [`Node::fold`].
    pub fn fold<A, F>(&self, f: F) -> A
    where
        F: Fn(&Node, Vec<A>) -> A,
    {
        self.root().fold(&f)
    }

    /// Runs `aggregate` over every node.
    pub fn aggregate<G: Aggregate>(&self, aggregate: G) -> G::Output {
        self.fold(|node, children| aggregate.combine(node, children))
    }

    /// Number of nodes. An empty trie has size 1 (the root).
    pub fn size(&self) -> usize {
        self.aggregate(Size)
    }

    /// Height of the tree. An empty trie has height 0.
    pub fn height(&self) -> usize {
        self.aggregate(Height)
    }

    pub fn num_leaves(&self) -> usize {
        self.aggregate(Leaves)
    }

    pub fn maximum_branching(&self) -> usize {
        self.aggregate(MaxBranching)
    }

    pub fn stats(&self) -> TrieStats {
        TrieStats {
            size: self.size(),
            leaves: self.num_leaves(),
            height: self.height(),
            max_branching: self.maximum_branching(),
            longest_word_len: self.longest_word().chars().count(),
        }
    }
}
