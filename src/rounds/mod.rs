pub mod rush;
pub mod scramble;

pub use rush::generate_rush_round;
pub use scramble::shuffle_word;
