// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Lanai Trie Implementation
//!
//! A prefix tree over lowercase ASCII words (`a` through `z`). Every node has
//! 26 uniquely owned child slots and an end-of-word marker. Removal prunes the
//! maximal dead suffix of the removed word's path, so the tree never keeps a
//! childless node that does not end a word.
//!
//! # Example
//!
//! ```
//! use lanai_trie_lib::data_structures::lanai_trie::LanaiTrie;
//!
//! let mut trie = LanaiTrie::new();
//! trie.insert("cat").unwrap();
//! trie.insert("car").unwrap();
//!
//! assert!(trie.search("cat"));
//! assert!(trie.starts_with("ca"));
//!
//! trie.remove("cat");
//! assert!(!trie.search("cat"));
//! assert!(trie.search("car"));
//! ```

mod config;
mod error;
mod node;
mod word;

use tracing::{debug, trace};

pub use config::LanaiTrieConfig;
pub use error::{LanaiTrieError, LanaiTrieResult};
pub use node::{child_of, TrieNode, ALPHABET_SIZE};
pub use word::is_valid_lowercase_word;

/// What a call to [`LanaiTrie::remove`] changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveOutcome {
    /// Whether the word was stored and its end marker was cleared
    pub was_present: bool,

    /// Number of nodes pruned from the tree
    pub released: usize,
}

/// Tracks live nodes against the configured budget.
#[derive(Debug)]
struct NodeBudget {
    live: usize,
    limit: Option<usize>,
}

impl NodeBudget {
    /// Hands out a fresh node, or fails once the budget is spent.
    fn allocate(&mut self) -> LanaiTrieResult<Box<TrieNode>> {
        if let Some(limit) = self.limit {
            if self.live >= limit {
                return Err(LanaiTrieError::NodeLimitReached { limit });
            }
        }
        self.live += 1;
        trace!(live = self.live, "allocated trie node");
        Ok(Box::new(TrieNode::new()))
    }

    fn release(&mut self, count: usize) {
        self.live = self.live.saturating_sub(count);
    }
}

/// Lanai Trie stores a set of lowercase words by sharing common prefixes.
///
/// Key features:
/// * Fixed 26-way fan-out with O(word length) insert, lookup and removal
/// * Self-pruning removal that never leaves dead branches behind
/// * Optional node budget and word-length limit
/// * Iterative tear-down, so very deep tries drop without recursion
#[derive(Debug)]
pub struct LanaiTrie {
    /// The root node. Removal prunes it once the tree is emptied.
    root: Option<Box<TrieNode>>,

    /// Live node accounting
    budget: NodeBudget,

    /// Configuration options
    config: LanaiTrieConfig,
}

impl LanaiTrie {
    /// Creates a new empty `LanaiTrie` with default configuration.
    ///
    /// # Returns
    ///
    /// A new `LanaiTrie` instance holding only its root.
    pub fn new() -> Self {
        Self::with_config(LanaiTrieConfig::default())
    }

    /// Creates a new empty `LanaiTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    ///
    /// # Returns
    ///
    /// A new `LanaiTrie` instance holding only its root.
    pub fn with_config(config: LanaiTrieConfig) -> Self {
        debug!(
            max_nodes = ?config.max_nodes(),
            max_word_len = ?config.max_word_len(),
            "creating trie"
        );
        Self {
            root: Some(Box::new(TrieNode::new())),
            budget: NodeBudget {
                live: 1,
                limit: config.max_nodes(),
            },
            config,
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Nodes are created along the word's path as needed and the last one is
    /// marked as the end of a word. If the node budget runs out part way, the
    /// nodes already linked stay in place.
    ///
    /// The empty word is accepted but never marked, since no node is visited.
    /// Like any other word it re-creates a root that removal pruned, so
    /// `starts_with("")` holds afterwards even though nothing was stored.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(bool)` - `true` if the word was newly stored, `false` if it was already present.
    /// * `Err(LanaiTrieError)` - If the word was rejected or a node could not be created.
    pub fn insert(&mut self, word: &str) -> LanaiTrieResult<bool> {
        if !is_valid_lowercase_word(word) {
            debug!(word, "rejected word with characters outside a-z");
            return Err(LanaiTrieError::InvalidWord {
                word: word.to_string(),
            });
        }

        if let Some(max) = self.config.max_word_len() {
            if word.len() > max {
                debug!(len = word.len(), max, "rejected word over length limit");
                return Err(LanaiTrieError::WordTooLong {
                    len: word.len(),
                    max,
                });
            }
        }

        let root = match self.root.take() {
            Some(root) => root,
            None => self.budget.allocate()?,
        };
        let mut current: &mut TrieNode = self.root.insert(root);

        let bytes = word.as_bytes();
        let mut newly_marked = false;

        for (index, &letter) in bytes.iter().enumerate() {
            let Some(slot) = current.slot_mut(letter) else {
                return Err(LanaiTrieError::InvalidWord {
                    word: word.to_string(),
                });
            };

            let child = match slot {
                Some(child) => child,
                vacant => vacant.insert(self.budget.allocate()?),
            };

            if index + 1 == bytes.len() && !child.is_end() {
                child.set_end(true);
                newly_marked = true;
            }

            current = &mut **child;
        }

        Ok(newly_marked)
    }

    /// Checks whether `word` is stored in the trie.
    ///
    /// Characters outside `a..=z` simply never match.
    pub fn search(&self, word: &str) -> bool {
        self.last_node_of(word).map_or(false, TrieNode::is_end)
    }

    /// Checks whether any path in the trie begins with `prefix`.
    ///
    /// The empty prefix matches whenever the root is present. A trie whose
    /// root was pruned matches nothing.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.last_node_of(prefix).is_some()
    }

    /// Walks `word` from the root and returns the node it ends on.
    fn last_node_of(&self, word: &str) -> Option<&TrieNode> {
        let root = self.root.as_deref()?;
        word.bytes().try_fold(root, |node, letter| node.child_at(letter))
    }

    /// Removes a word from the trie, pruning every node that no longer leads
    /// to a stored word.
    ///
    /// Pruning stops at the first node that either ends another word or has
    /// another child. Removing a word that is not stored leaves the tree as
    /// it was, except that an otherwise empty root is released.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to remove.
    ///
    /// # Returns
    ///
    /// A [`RemoveOutcome`] describing whether the word was present and how
    /// many nodes were released.
    pub fn remove(&mut self, word: &str) -> RemoveOutcome {
        let mut outcome = RemoveOutcome::default();

        // Such a word can never have been inserted.
        if !self.config.accepts_len(word.len()) {
            return outcome;
        }

        let Some(cut) = self.mark_removed(word.as_bytes(), &mut outcome) else {
            return outcome;
        };

        outcome.released = self.prune(word.as_bytes(), cut);
        self.budget.release(outcome.released);

        if self.root.is_none() {
            debug!("root pruned, trie is now empty");
        }
        trace!(
            was_present = outcome.was_present,
            released = outcome.released,
            "removed word"
        );

        outcome
    }

    /// Walks `word` from the root, clears its end marker if it is stored and
    /// works out where pruning has to start.
    ///
    /// Returns the depth of the first node to prune, or `None` when every
    /// node on the walked path stays. Letters outside a-z stop the walk the
    /// same way a missing child does.
    fn mark_removed(&mut self, word: &[u8], outcome: &mut RemoveOutcome) -> Option<usize> {
        let mut node = self.root.as_deref()?;
        let mut depth = 0;
        // Deepest node above the walk's end that must survive.
        let mut anchor: Option<usize> = None;

        for &letter in word {
            let keeps = node.is_end() || node.child_count() > 1;
            let Some(child) = node.child_at(letter) else {
                break;
            };
            if keeps {
                anchor = Some(depth);
            }
            node = child;
            depth += 1;
        }

        let reached = depth == word.len();
        outcome.was_present = reached && node.is_end();
        let dead = node.is_empty() && (outcome.was_present || !node.is_end());

        if outcome.was_present {
            if let Some(end) = self.root.as_deref_mut().and_then(|root| descend_mut(root, word)) {
                end.set_end(false);
            }
        }

        if !dead {
            return None;
        }
        Some(anchor.map_or(0, |keep| keep + 1))
    }

    /// Detaches the dead chain starting at depth `cut` on `word`'s path and
    /// returns how many nodes it held.
    fn prune(&mut self, word: &[u8], cut: usize) -> usize {
        let detached = match cut.checked_sub(1) {
            None => self.root.take(),
            Some(parent_depth) => self
                .root
                .as_deref_mut()
                .and_then(|root| descend_mut(root, &word[..parent_depth]))
                .and_then(|parent| parent.slot_mut(word[parent_depth]))
                .and_then(Option::take),
        };

        let released = detached.map_or(0, TrieNode::destroy);
        trace!(depth = cut, released, "pruned dead branch");
        released
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.budget.live
    }

    /// Whether the root node is present.
    pub fn has_root(&self) -> bool {
        self.root.is_some()
    }

    /// True iff no word is stored.
    ///
    /// The root is never an end node, so a root without children means the
    /// trie holds nothing.
    pub fn is_empty(&self) -> bool {
        self.root.as_deref().map_or(true, TrieNode::is_empty)
    }

    /// Returns the configuration the trie was built with.
    pub fn config(&self) -> &LanaiTrieConfig {
        &self.config
    }

    /// Releases every node and installs a fresh root.
    pub fn clear(&mut self) {
        let released = self.root.take().map_or(0, TrieNode::destroy);
        self.budget.release(released);
        self.root = Some(Box::new(TrieNode::new()));
        self.budget.live += 1;
        debug!(released, "cleared trie");
    }

    /// Consumes the trie, releasing every node.
    ///
    /// # Returns
    ///
    /// The number of nodes released.
    pub fn destroy(self) -> usize {
        let released = self.root.map_or(0, TrieNode::destroy);
        debug!(released, "destroyed trie");
        released
    }
}

impl Default for LanaiTrie {
    fn default() -> Self {
        Self::new()
    }
}

/// Follows `path` down from `node`, returning the node it ends on.
fn descend_mut<'a>(mut node: &'a mut TrieNode, path: &[u8]) -> Option<&'a mut TrieNode> {
    for &letter in path {
        node = node.child_at_mut(letter)?;
    }
    Some(node)
}
