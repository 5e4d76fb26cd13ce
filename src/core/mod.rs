pub mod dictionary;
pub mod trie;
pub mod types;
