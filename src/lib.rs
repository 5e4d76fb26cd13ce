pub mod core;
pub mod persistence;
pub mod rounds;
pub mod wordlist;

pub use crate::core::dictionary::Dictionary;
pub use crate::core::types::{RushRound, UserProfile};
