//! Test modules for the Lanai Trie crate.
//!
//! This module contains crate-level testing infrastructure, including:
//! - Model-based property tests for the trie using proptest
//! - Configuration loading tests against temporary files and the environment
//! - Error type and error reporting tests
//! - Shared strategies and fixtures

pub mod lanai_trie_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{
    invalid_word_strategy, small_alphabet_word_strategy, word_strategy, TestFixture,
};
