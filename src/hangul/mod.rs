//! 한글 자모 테이블과 완성형 음절 분해
//!
//! ```
//! use romaja::hangul::{decode, encode, is_syllable};
//!
//! let phonemes = decode('값').unwrap();
//! assert_eq!(phonemes.to_string(), "ㄱㅏㅄ");
//! assert_eq!(encode(&phonemes), Ok('값'));
//! assert!(is_syllable("가"));
//! ```

pub mod alphabet;
pub mod syllable;

pub use alphabet::{
    build_alphabet, consonants, leading_consonants, trailing_consonants, vowels, Alphabet,
    Consonant, Vowel,
};
pub use syllable::{
    build_syllable_codec, decode, decode_codepoint, encode, is_syllable, is_syllable_char,
    is_syllable_codepoint, HangulError, Phonemes, SyllableCodec, SYLLABLE_COUNT, SYLLABLE_OFFSET,
};
