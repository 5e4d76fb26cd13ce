//! The built-in seed vocabulary. Loaded once, never mutated; every game mode
//! draws from the union of this list and the user's stored words.

/// Returned by word selection when the candidate pool is somehow empty.
pub const FALLBACK_WORD: &str = "apple";

pub const DEFAULT_WORDS: &[&str] = &[
    "apple", "banana", "cherry", "orange", "grape", "melon", "lemon", "peach",
    "house", "table", "chair", "window", "garden", "bridge", "castle", "tower",
    "river", "mountain", "forest", "ocean", "island", "desert", "valley", "meadow",
    "tiger", "eagle", "dolphin", "rabbit", "turtle", "spider", "falcon", "badger",
    "silver", "golden", "purple", "yellow", "bright", "shadow", "sparkle", "glimmer",
    "rocket", "planet", "galaxy", "comet", "meteor", "orbit", "lunar", "solar",
    "puzzle", "riddle", "secret", "whisper", "thunder", "breeze", "ember", "frost",
    "violin", "trumpet", "guitar", "piano", "rhythm", "melody", "chorus", "anthem",
];
