// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Configuration for the Lanai Trie.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Configuration for the Lanai Trie.
///
/// Both limits are unset by default, which gives an unbounded trie. A zero
/// limit cannot be built or deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LanaiTrieConfig {
    /// Maximum number of live nodes, root included.
    /// Node creation past this budget fails, which is how the trie models
    /// allocation failure.
    max_nodes: Option<NonZeroUsize>,

    /// Maximum length of an insertable word.
    max_word_len: Option<NonZeroUsize>,
}

impl LanaiTrieConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - max_nodes: None (unbounded)
    /// - max_word_len: None (unbounded)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node budget.
    ///
    /// The budget counts the root, so it must be at least 1.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        match NonZeroUsize::new(max_nodes) {
            Some(max_nodes) => self.max_nodes = Some(max_nodes),
            None => panic!("Node budget must be at least 1 to hold the root"),
        }
        self
    }

    /// Set the maximum word length accepted by insertion.
    pub fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        match NonZeroUsize::new(max_word_len) {
            Some(max_word_len) => self.max_word_len = Some(max_word_len),
            None => panic!("Maximum word length must be greater than 0"),
        }
        self
    }

    /// Get the node budget, if any
    pub fn max_nodes(&self) -> Option<usize> {
        self.max_nodes.map(NonZeroUsize::get)
    }

    /// Get the maximum word length, if any
    pub fn max_word_len(&self) -> Option<usize> {
        self.max_word_len.map(NonZeroUsize::get)
    }

    /// Whether a word of `len` characters fits within the length limit.
    pub fn accepts_len(&self, len: usize) -> bool {
        self.max_word_len().map_or(true, |max| len <= max)
    }
}
