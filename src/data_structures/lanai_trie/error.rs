// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Error types for the Lanai Trie.
//!
//! This module defines the error types that can occur during Lanai Trie operations.
//! Only mutations can fail; lookups report a missing word as `false`.

/// Errors that can occur in Lanai Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LanaiTrieError {
    /// The word contains a character outside `a..=z`.
    #[error("Word '{word}' contains characters outside a-z")]
    InvalidWord {
        /// The rejected word.
        word: String,
    },

    /// The word exceeds the configured maximum length.
    #[error("Word of length {len} exceeds maximum word length of {max}")]
    WordTooLong {
        /// Length of the rejected word.
        len: usize,
        /// The configured maximum.
        max: usize,
    },

    /// No node could be created because the node budget is exhausted.
    #[error("Node limit of {limit} reached")]
    NodeLimitReached {
        /// The configured node budget.
        limit: usize,
    },
}

/// Result type for Lanai Trie operations
pub type LanaiTrieResult<T> = Result<T, LanaiTrieError>;
