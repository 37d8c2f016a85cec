// Copyright (c) 2025 Lanai Trie Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Input validation for words stored in the trie.

/// Returns true iff every character of `word` is a lowercase ASCII letter.
///
/// The empty string is valid.
pub fn is_valid_lowercase_word(word: &str) -> bool {
    word.bytes().all(|b| b.is_ascii_lowercase())
}
