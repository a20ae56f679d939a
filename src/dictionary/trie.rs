use std::fmt::{Debug, Formatter};

use crate::alphabet::get_idx;
use crate::dictionary::index::Index;
use crate::dictionary::trienode::TrieNode;

pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Index for Trie {
    fn add(&mut self, word: &str) {
        self.insert_line(word);
    }

    fn contains(&self, word: &str) -> bool {
        Trie::contains(self, word)
    }
}

impl Trie {
    pub fn new() -> Trie {
        Trie {
            root: Default::default(),
            word_count: 0,
        }
    }

    /// Walks one vocabulary line into the trie. The first character with no
    /// canonical code ends the entry and the rest of the line is ignored;
    /// reaching the end of the line ends it too. The node where the entry
    /// ends is marked as a word and the counter is bumped, once per line
    /// processed (a duplicate line counts again). A line whose first
    /// character does not map stores nothing, so the root never becomes a
    /// word. Returns whether an entry was stored.
    pub(crate) fn insert_line(&mut self, line: &str) -> bool {
        let mut current = &mut self.root;
        let mut advanced = false;
        for c in line.chars() {
            match get_idx(c) {
                Some(idx) => {
                    current = current.get_or_create_child(idx);
                    advanced = true;
                }
                None => break,
            }
        }
        if !advanced {
            return false;
        }
        current.is_word = true;
        self.word_count += 1;
        true
    }

    /// Exact membership: case-insensitive for letters, apostrophe literal.
    /// A character with no canonical code, or an empty child slot, fails
    /// the lookup immediately. The cursor is local to the call.
    pub fn contains(&self, word: &str) -> bool {
        let mut current = &self.root;
        for c in word.chars() {
            match get_idx(c).and_then(|idx| current.get_child(idx)) {
                Some(child) => current = child,
                None => return false,
            }
        }
        current.is_word
    }

    /// Word-lines processed while building, not recomputed by traversal.
    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

impl Debug for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("word_count", &self.word_count)
            .field("root", &self.root)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::dictionary::index::Index;
    use crate::dictionary::trie::Trie;

    #[test]
    fn finds_words_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let mut trie = Trie::new();
        trie.add_all(words.iter().map(|x| *x));
        (&words).iter().for_each(|word| assert!(trie.contains(word)));
    }

    #[test]
    fn doesnt_find_words_not_in_trie() {
        let words = vec!["hello", "help", "goodbye", "good"];
        let bad_words = vec!["he", "h", "lol", "banana"];
        let mut trie = Trie::new();
        trie.add_all(words.iter().map(|x| *x));
        (&bad_words).iter().for_each(|word| assert!(!trie.contains(word)));
    }

    #[test]
    fn prefixes_are_not_words() {
        let mut trie = Trie::new();
        trie.add_all(vec!["cat", "car", "cart"]);
        assert!(!trie.contains("ca"));
        assert!(trie.contains("cat"));
        assert!(!trie.contains("care"));
        assert!(trie.contains("cart"));
        assert_eq!(trie.word_count(), 3);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut trie = Trie::new();
        trie.add("hello");
        assert!(trie.contains("HELLO"));
        assert!(trie.contains("Hello"));
        assert!(trie.contains("hElLo"));
    }

    #[test]
    fn apostrophe_is_literal() {
        let mut trie = Trie::new();
        trie.add("don't");
        assert!(trie.contains("don't"));
        assert!(trie.contains("DON'T"));
        assert!(!trie.contains("dont"));
    }

    #[test]
    fn unmapped_character_fails_lookup() {
        let mut trie = Trie::new();
        trie.add("cat");
        assert!(!trie.contains("cat!"));
        assert!(!trie.contains("c-t"));
        assert!(!trie.contains("ca t"));
    }

    #[test]
    fn empty_token_is_never_a_word() {
        let mut trie = Trie::new();
        trie.add("cat");
        assert!(!trie.contains(""));
    }

    #[test]
    fn line_stops_at_first_unmapped_character() {
        let mut trie = Trie::new();
        assert!(trie.insert_line("ab1cd"));
        assert!(trie.contains("ab"));
        assert!(!trie.contains("ab1cd"));
        assert!(!trie.contains("abcd"));
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn line_with_unmapped_first_character_stores_nothing() {
        let mut trie = Trie::new();
        assert!(!trie.insert_line("1abc"));
        assert!(!trie.insert_line(""));
        assert_eq!(trie.word_count(), 0);
        assert!(!trie.contains(""));
        assert!(!trie.contains("abc"));
    }

    #[test]
    fn duplicate_lines_count_twice() {
        let mut trie = Trie::new();
        trie.add("cat");
        trie.add("cat");
        assert!(trie.contains("cat"));
        assert_eq!(trie.word_count(), 2);
    }
}
