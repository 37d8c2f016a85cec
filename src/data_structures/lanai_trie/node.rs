// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Node implementation for the Lanai Trie.
//!
//! Each [`TrieNode`] owns a fixed array of 26 child slots, one per lowercase
//! ASCII letter, plus a flag marking whether a stored word ends at the node.
//! Children are uniquely owned `Box`es, so a subtree is released exactly once,
//! when its owning slot lets go of it.

/// Number of child slots per node (`a` through `z`).
pub const ALPHABET_SIZE: usize = 26;

/// Maps a letter to its child slot, or `None` if it is not in `a..=z`.
#[inline]
pub(crate) fn slot_index(letter: u8) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some(usize::from(letter - b'a'))
    } else {
        None
    }
}

/// A node in the Lanai Trie.
#[derive(Debug)]
pub struct TrieNode {
    /// Child slots indexed by `letter - b'a'`
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],

    /// Whether a stored word ends at this node
    is_end: bool,
}

impl TrieNode {
    /// Creates a node with every child slot absent and the end marker cleared.
    pub fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            is_end: false,
        }
    }

    /// Returns the child reached through `letter`, if any.
    ///
    /// Letters outside `a..=z` never have a child.
    pub fn child_at(&self, letter: u8) -> Option<&TrieNode> {
        slot_index(letter).and_then(|i| self.children[i].as_deref())
    }

    /// Mutable counterpart of [`TrieNode::child_at`].
    pub fn child_at_mut(&mut self, letter: u8) -> Option<&mut TrieNode> {
        slot_index(letter).and_then(move |i| self.children[i].as_deref_mut())
    }

    /// Returns the slot for `letter` itself, so callers can link or unlink a child.
    pub(crate) fn slot_mut(&mut self, letter: u8) -> Option<&mut Option<Box<TrieNode>>> {
        slot_index(letter).map(move |i| &mut self.children[i])
    }

    /// True iff every child slot is absent. The end marker is not considered.
    pub fn is_empty(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    /// Whether a stored word ends here.
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    /// Sets or clears the end marker.
    pub fn set_end(&mut self, is_end: bool) {
        self.is_end = is_end;
    }

    /// Number of present children.
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|slot| slot.is_some()).count()
    }

    /// Counts this node and every node beneath it.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter().filter_map(|slot| slot.as_deref()));
        }
        count
    }

    /// Releases this node and its whole subtree, returning how many nodes were freed.
    ///
    /// Children are detached before their parent is released, and the walk uses
    /// an explicit stack so arbitrarily deep chains do not overflow the call stack.
    pub fn destroy(self: Box<Self>) -> usize {
        let mut released = 0;
        let mut pending = vec![self];
        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_children());
            released += 1;
        }
        released
    }

    /// Detaches every present child.
    fn take_children(&mut self) -> impl Iterator<Item = Box<TrieNode>> + '_ {
        self.children.iter_mut().filter_map(Option::take)
    }
}

/// Looks up `letter` below an optional node. An absent node has no children.
pub fn child_of(node: Option<&TrieNode>, letter: u8) -> Option<&TrieNode> {
    node.and_then(|n| n.child_at(letter))
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TrieNode {
    // Flatten the subtree so dropping a long chain never recurses.
    fn drop(&mut self) {
        let mut pending: Vec<Box<TrieNode>> = self.take_children().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_children());
        }
    }
}
