//! Trie limits configuration module.
//!
//! This module defines the resource limits applied to tries built from the
//! application configuration.

use super::{ConfigResult, Validate};
use crate::data_structures::LanaiTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Resource limits for a trie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrieLimits {
    /// Maximum number of live nodes, root included (None for unbounded)
    pub max_nodes: Option<usize>,

    /// Maximum length of an insertable word (None for unbounded)
    pub max_word_len: Option<usize>,
}

impl TrieLimits {
    /// Builds the trie configuration these limits describe.
    ///
    /// Fails with the validation error if a limit is zero.
    pub fn to_trie_config(&self) -> ConfigResult<LanaiTrieConfig> {
        self.validate()?;
        let mut config = LanaiTrieConfig::new();
        if let Some(max_nodes) = self.max_nodes {
            config = config.with_max_nodes(max_nodes);
        }
        if let Some(max_word_len) = self.max_word_len {
            config = config.with_max_word_len(max_word_len);
        }
        Ok(config)
    }
}

impl Validate for TrieLimits {
    fn validate(&self) -> ConfigResult<()> {
        // The root alone takes one node
        if self.max_nodes == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_nodes".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.max_word_len == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_word_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
