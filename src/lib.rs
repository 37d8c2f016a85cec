//! Lanai Trie Library
//!
//! A prefix tree over lowercase ASCII words with self-pruning removal, plus the
//! configuration, error reporting and logging glue used by the `lanai_trie`
//! command-line tool.
//!
//! # Architecture
//!
//! - [`data_structures::lanai_trie`] holds the trie and its nodes
//! - [`config`] loads layered configuration from files and the environment
//! - [`error`] defines the crate-wide error type and error reporting

pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Lanai Trie crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
