use serde::{Deserialize, Serialize};

/// One unit of Rush-mode gameplay: a word and whether it really belongs to
/// the candidate pool. Consumed once by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RushRound {
    pub word: String,
    pub is_real: bool,
}

/// The persisted player profile. Lives in its own storage slot, next to but
/// independent of the dictionary blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_name: String,
    /// Always a whole number; fractional scores are floored before storage.
    pub score: i64,
    pub is_dark_mode: bool,
}
