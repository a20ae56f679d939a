use std::fmt::{Debug, Formatter};

use crate::alphabet::ALPHABET;

#[derive(Default)]
pub(crate) struct TrieNode {
    children: [Option<Box<TrieNode>>; ALPHABET.len()],
    pub(crate) is_word: bool,
}

impl TrieNode {
    pub(crate) fn get_child(&self, idx: usize) -> Option<&TrieNode> {
        self.children[idx].as_deref()
    }

    /// Descends into the child at `idx`, allocating it first if no word so
    /// far continues with that symbol here.
    pub(crate) fn get_or_create_child(&mut self, idx: usize) -> &mut TrieNode {
        self.children[idx].get_or_insert_with(Default::default)
    }
}

// Dropping a node drops its children first; the recursion is bounded by
// the longest stored word, which the loader caps at max_word_length.

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("is_word", &self.is_word)
            .field("children", &self.children.iter()
                .enumerate()
                .filter(|(_, x)| x.is_some())
                .map(|(i, _)| ALPHABET[i] as char)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
