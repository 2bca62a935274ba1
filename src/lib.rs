//! Popularity-ranked word prediction over a case-insensitive prefix tree.
//!
//! ```
//! use prefix_predict::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert_with_popularity("hello", 10);
//! trie.insert_with_popularity("hey", 4);
//! assert_eq!(trie.predict("He").as_deref(), Some("hello"));
//! assert_eq!(trie.size(), 7);
//! ```

pub mod fold;
pub mod loader;
pub mod normalize;
pub mod rank;
pub mod repl;
pub mod trie;

pub use fold::{Aggregate, Height, Leaves, MaxBranching, Size, TrieStats};
pub use loader::{
    load_into, load_trie, CharsetPolicy, FileSource, InvalidWordAction, LoadError, LoadReport,
    LoaderOptions, MemorySource, WordSource,
};
pub use rank::Candidate;
pub use trie::{Child, Node, Popularity, Trie, DEFAULT_POPULARITY};
