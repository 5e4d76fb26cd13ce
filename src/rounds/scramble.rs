use rand::Rng;

/// Scrambles a word for the unscramble puzzle with a Fisher-Yates shuffle,
/// re-shuffling until the result differs from the input so the player never
/// sees an already-solved puzzle. Words of length <= 1, and words whose
/// characters are all identical (no differing permutation exists), come back
/// unchanged.
pub fn shuffle_word(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.len() <= 1 || chars.iter().all(|&c| c == chars[0]) {
        return word.to_string();
    }
    let mut rng = rand::rng();
    loop {
        for i in (1..chars.len()).rev() {
            let j = rng.random_range(0..=i);
            chars.swap(i, j);
        }
        let scrambled: String = chars.iter().collect();
        if scrambled != word {
            return scrambled;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_chars(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn shuffle_never_returns_the_input_for_multi_char_words() {
        for word in ["ab", "cat", "puzzle", "mountain"] {
            for _ in 0..100 {
                assert_ne!(shuffle_word(word), word);
            }
        }
    }

    #[test]
    fn shuffle_preserves_the_character_multiset() {
        for word in ["banana", "letter", "xyz"] {
            for _ in 0..50 {
                assert_eq!(sorted_chars(&shuffle_word(word)), sorted_chars(word));
            }
        }
    }

    #[test]
    fn trivial_inputs_come_back_unchanged() {
        assert_eq!(shuffle_word(""), "");
        assert_eq!(shuffle_word("a"), "a");
        // No permutation of a repeated letter can differ.
        assert_eq!(shuffle_word("aaa"), "aaa");
    }
}
