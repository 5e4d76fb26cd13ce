use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

/// The user's vocabulary as a prefix tree.
///
/// Each node is owned by its parent, so the structure is a true tree with no
/// sharing. `word_count` always equals the number of distinct words for which
/// `search` returns true, and no non-root node is ever left childless and
/// non-terminal (`remove` prunes those on the way back up).
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a word, creating one node per character.
    /// Empty input is a no-op; repeat insertion has no effect.
    /// O(k) where k is word length.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.terminal {
            node.terminal = true;
            self.word_count += 1;
        }
    }

    fn walk(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    /// True iff `word` was stored as a complete word. O(k).
    pub fn search(&self, word: &str) -> bool {
        !word.is_empty() && self.walk(word).is_some_and(|node| node.terminal)
    }

    /// True iff any stored word starts with `prefix`. O(k).
    pub fn starts_with(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.walk(prefix).is_some()
    }

    /// Removes a word (matched case-insensitively), pruning any nodes the
    /// deletion leaves childless and non-terminal so that prefixes shared
    /// with other words survive but nothing dangles. Returns false without
    /// touching the structure when the word is not stored. O(k).
    pub fn remove(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let chars: Vec<char> = word.to_lowercase().chars().collect();
        let mut removed = false;
        Self::remove_at(&mut self.root, &chars, 0, &mut removed);
        if removed {
            self.word_count -= 1;
        }
        removed
    }

    // Returns true when the caller should delete its edge to `node`.
    fn remove_at(node: &mut TrieNode, chars: &[char], depth: usize, removed: &mut bool) -> bool {
        if depth == chars.len() {
            if !node.terminal {
                // Path exists but only as a prefix of longer words.
                return false;
            }
            node.terminal = false;
            *removed = true;
            return node.children.is_empty();
        }
        let ch = chars[depth];
        let Some(child) = node.children.get_mut(&ch) else {
            return false;
        };
        if Self::remove_at(child, chars, depth + 1, removed) {
            // Backtracking: the child is now useless, drop the edge.
            node.children.remove(&ch);
            return node.children.is_empty() && !node.terminal;
        }
        false
    }

    /// Every stored word, materialized by depth-first traversal.
    /// Order is not meaningful. O(total stored characters).
    pub fn all_words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut path = String::new();
        Self::collect(&self.root, &mut path, &mut words);
        words
    }

    fn collect(node: &TrieNode, path: &mut String, out: &mut Vec<String>) {
        if node.terminal {
            out.push(path.clone());
        }
        for (&ch, child) in &node.children {
            path.push(ch);
            Self::collect(child, path, out);
            path.pop();
        }
    }

    /// Clears the trie and inserts every entry of `words`; used to rebuild
    /// from a persisted list. Empty entries are skipped and duplicates
    /// collapse, per the `insert` contract.
    pub fn from_words<I>(&mut self, words: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.clear();
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Resets to an empty trie.
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
        self.word_count = 0;
    }

    /// Number of stored words. O(1).
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    #[cfg(test)]
    fn root_child_count(&self) -> usize {
        self.root.children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_search() {
        let mut trie = Trie::new();
        trie.insert("apple");
        assert!(trie.search("apple"));
        assert!(!trie.search("app"));
        assert!(!trie.search("apples"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut trie = Trie::new();
        trie.insert("apple");
        trie.insert("apple");
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut trie = Trie::new();
        trie.insert("");
        assert_eq!(trie.len(), 0);
        assert!(!trie.search(""));
        assert!(!trie.starts_with(""));
        assert!(!trie.remove(""));
    }

    #[test]
    fn starts_with_ignores_terminal_marking() {
        let mut trie = Trie::new();
        trie.insert("apple");
        assert!(trie.starts_with("app"));
        assert!(trie.starts_with("apple"));
        assert!(!trie.starts_with("apples"));
        assert!(!trie.starts_with("b"));
    }

    #[test]
    fn remove_prunes_back_to_shared_prefix() {
        let mut trie = Trie::new();
        trie.insert("cat");
        trie.insert("car");
        assert!(trie.remove("cat"));
        assert!(!trie.search("cat"));
        assert!(trie.search("car"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn remove_keeps_shorter_word_on_same_path() {
        let mut trie = Trie::new();
        trie.insert("app");
        trie.insert("apple");
        assert!(trie.remove("apple"));
        assert!(trie.search("app"));
        // "appl" must have been pruned along with "apple".
        assert!(!trie.starts_with("appl"));
    }

    #[test]
    fn remove_of_inner_word_keeps_longer_word() {
        let mut trie = Trie::new();
        trie.insert("apple");
        trie.insert("app");
        trie.insert("apt");
        assert_eq!(trie.len(), 3);
        assert!(trie.remove("app"));
        assert_eq!(trie.len(), 2);
        assert!(!trie.search("app"));
        assert!(trie.search("apple"));
        assert!(trie.search("apt"));
    }

    #[test]
    fn remove_absent_word_changes_nothing() {
        let mut trie = Trie::new();
        trie.insert("apple");
        assert!(!trie.remove("app"));
        assert!(!trie.remove("apples"));
        assert!(!trie.remove("banana"));
        assert_eq!(trie.len(), 1);
        assert!(trie.search("apple"));
    }

    #[test]
    fn remove_is_case_insensitive() {
        let mut trie = Trie::new();
        trie.insert("apple");
        assert!(trie.remove("APPLE"));
        assert!(!trie.search("apple"));
    }

    #[test]
    fn removing_every_word_leaves_no_dangling_nodes() {
        let mut trie = Trie::new();
        let words = ["cat", "car", "card", "care", "dog"];
        for w in words {
            trie.insert(w);
        }
        for w in words {
            assert!(trie.remove(w));
        }
        assert_eq!(trie.len(), 0);
        assert_eq!(trie.root_child_count(), 0);
    }

    #[test]
    fn all_words_round_trips_through_from_words() {
        let mut trie = Trie::new();
        for w in ["apple", "app", "apt", "banana"] {
            trie.insert(w);
        }
        let exported = trie.all_words();
        assert_eq!(exported.len(), 4);

        let mut rebuilt = Trie::new();
        rebuilt.from_words(&exported);
        assert_eq!(rebuilt.len(), trie.len());
        for w in ["apple", "app", "apt", "banana"] {
            assert!(rebuilt.search(w));
        }
    }

    #[test]
    fn from_words_replaces_previous_contents() {
        let mut trie = Trie::new();
        trie.insert("old");
        trie.from_words(["new", "words", "", "words"]);
        assert!(!trie.search("old"));
        assert!(trie.search("new"));
        assert!(trie.search("words"));
        assert_eq!(trie.len(), 2);
    }
}
