//! Data structures for the Lanai Trie crate.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Exclusive ownership of every node, no shared or back references
//! - Explicit results instead of silently ignored failures

pub mod lanai_trie;

// Re-export common data structures
pub use lanai_trie::{LanaiTrie, LanaiTrieConfig, LanaiTrieError, LanaiTrieResult, RemoveOutcome};
