use crate::core::trie::Trie;
use crate::persistence::{BlobStore, DICTIONARY_KEY};
use crate::wordlist::{DEFAULT_WORDS, FALLBACK_WORD};
use rand::Rng;
use std::collections::HashSet;

/// The process-wide word store: one trie plus the blob store it persists to.
///
/// Construct one instance at startup, call [`Dictionary::load`] before
/// anything else, and hand it by reference to whatever drives the UI. Every
/// mutation saves through the injected store as a side effect; a failed save
/// is logged and swallowed, and the in-memory trie stays the source of truth.
pub struct Dictionary {
    trie: Trie,
    store: Box<dyn BlobStore>,
    seed_words: &'static [&'static str],
}

impl Dictionary {
    pub fn new(store: Box<dyn BlobStore>) -> Self {
        Self::with_seed(store, DEFAULT_WORDS)
    }

    /// Same as [`Dictionary::new`] with a custom seed vocabulary; tests use
    /// this to exercise the empty-pool fallback.
    pub fn with_seed(store: Box<dyn BlobStore>, seed_words: &'static [&'static str]) -> Self {
        Self {
            trie: Trie::new(),
            store,
            seed_words,
        }
    }

    /// Ingests free text: lowercases it, strips everything that is not an
    /// ASCII letter or whitespace, and inserts each remaining token. Returns
    /// the number of tokens inserted (repeats of an existing word still
    /// count). Saves when at least one token went in.
    pub fn add_words(&mut self, free_text: &str) -> usize {
        let cleaned: String = free_text
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
            .collect();
        let mut count = 0;
        for token in cleaned.split_whitespace() {
            self.trie.insert(token);
            count += 1;
        }
        if count > 0 {
            self.save();
        }
        count
    }

    /// Removes one word (case-insensitively); saves only when the trie
    /// actually changed. Returns whether it did.
    pub fn delete_word(&mut self, word: &str) -> bool {
        let success = self.trie.remove(&word.to_lowercase());
        if success {
            self.save();
        }
        success
    }

    /// Drops every stored word and persists the now-empty list.
    pub fn reset(&mut self) {
        self.trie.clear();
        self.save();
    }

    /// Number of stored words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// True iff `word` is a stored user word.
    pub fn contains(&self, word: &str) -> bool {
        self.trie.search(&word.to_lowercase())
    }

    /// True iff some stored user word starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.trie.starts_with(&prefix.to_lowercase())
    }

    /// Every stored user word, in no particular order.
    pub fn all_words(&self) -> Vec<String> {
        self.trie.all_words()
    }

    /// Restores the trie from the persisted word list. Returns false and
    /// leaves the trie untouched when the slot is absent, unreadable or not
    /// a JSON array of strings (a first-time user looks the same as a
    /// corrupted slot). Run once at startup, before any other call matters.
    pub fn load(&mut self) -> bool {
        let raw = match self.store.read(DICTIONARY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                eprintln!("[ERROR] Failed to read dictionary: {e}");
                return false;
            }
        };
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(words) => {
                self.trie.from_words(&words);
                true
            }
            Err(e) => {
                eprintln!("[ERROR] Persisted dictionary is malformed: {e}");
                false
            }
        }
    }

    /// Exports the word list and writes it as a JSON array. Called after
    /// every mutation; failures are logged, never propagated, so gameplay is
    /// never blocked on storage.
    pub fn save(&mut self) {
        let words = self.trie.all_words();
        let json = match serde_json::to_string(&words) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("[ERROR] Failed to serialize dictionary: {e}");
                return;
            }
        };
        if let Err(e) = self.store.write(DICTIONARY_KEY, &json) {
            eprintln!("[ERROR] Failed to save dictionary: {e}");
        }
    }

    /// Draws one word uniformly from the candidate pool: the set union of
    /// the seed vocabulary and the user's stored words, duplicates
    /// collapsed. Seed and user words have equal probability. Falls back to
    /// a fixed word when the pool is empty rather than failing.
    pub fn random_word(&self) -> String {
        let mut pool: HashSet<String> = self
            .seed_words
            .iter()
            .map(|word| (*word).to_string())
            .collect();
        pool.extend(self.trie.all_words());
        if pool.is_empty() {
            return FALLBACK_WORD.to_string();
        }
        let mut pool: Vec<String> = pool.into_iter().collect();
        let idx = rand::rng().random_range(0..pool.len());
        pool.swap_remove(idx)
    }
}
