pub mod config;
pub mod hangul;
pub mod romanization;

pub use hangul::{decode, encode, is_syllable, HangulError, Phonemes};
pub use romanization::{romanize, romanize_codepoint, romanize_text, RomanizeError};
