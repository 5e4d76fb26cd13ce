use crate::core::dictionary::Dictionary;
use crate::core::types::RushRound;
use rand::Rng;

/// Builds one real-or-fake round: draws a word from the candidate pool, then
/// with probability 0.5 hands it over unmodified, otherwise applies a single
/// random mutation and marks the round fake.
pub fn generate_rush_round(dict: &Dictionary) -> RushRound {
    let word = dict.random_word().to_lowercase();
    let mut rng = rand::rng();
    if rng.random_bool(0.5) {
        return RushRound {
            word,
            is_real: true,
        };
    }
    let word = make_fake(&word, &mut rng);
    RushRound {
        word,
        is_real: false,
    }
}

// One character-level edit: delete a letter (words longer than 3), duplicate
// a letter, or swap two adjacent letters (words longer than 1). The mutation
// kind is drawn uniformly; when its length guard fails the word goes out
// unmodified, so a "fake" round can occasionally show a real word. That
// matches the shipped behavior and the intended policy is still undecided,
// so it is preserved rather than patched over.
fn make_fake(word: &str, rng: &mut impl Rng) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    match rng.random_range(0..3) {
        0 if chars.len() > 3 => {
            let idx = rng.random_range(0..chars.len());
            chars.remove(idx);
        }
        1 => {
            let idx = rng.random_range(0..chars.len());
            chars.insert(idx, chars[idx]);
        }
        2 if chars.len() > 1 => {
            let idx = rng.random_range(0..chars.len() - 1);
            chars.swap(idx, idx + 1);
        }
        _ => {}
    }
    chars.into_iter().collect()
}
