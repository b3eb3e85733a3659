//! 완성형 한글 음절 <-> 자모 분해 테이블
//!
//! 초성(19) × 중성(21) × 종성(28, 없음 포함) 순서로 11,172개 음절을 열거해
//! U+AC00부터 차례대로 코드포인트를 부여합니다.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use super::alphabet::{Alphabet, Consonant, Vowel, ALPHABET};

/// 한글 음절 시작 코드포인트 (가)
pub const SYLLABLE_OFFSET: u32 = 0xAC00;
/// 완성형 음절 개수 (19 × 21 × 28)
pub const SYLLABLE_COUNT: u32 = 11172;
/// 음절 범위 끝 (포함하지 않음)
pub const SYLLABLE_OFFSET_END: u32 = SYLLABLE_OFFSET + SYLLABLE_COUNT;

/// 음절 분해/조합 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HangulError {
    /// 완성형 한글 음절 한 글자가 아님
    NotSyllable(String),
    /// 음절 범위 밖 코드포인트
    CodepointOutOfRange(u32),
    /// 초성/종성 자리에 올 수 없는 자음 조합
    InvalidPhonemes(Phonemes),
}

impl fmt::Display for HangulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HangulError::NotSyllable(s) => write!(f, "완성형 한글 음절이 아님: {:?}", s),
            HangulError::CodepointOutOfRange(code) => {
                write!(f, "음절 범위 밖 코드포인트: U+{:04X}", code)
            }
            HangulError::InvalidPhonemes(p) => write!(f, "조합할 수 없는 자모: {}", p),
        }
    }
}

impl std::error::Error for HangulError {}

/// 음절 하나의 자모 분해 결과 (초성, 중성, 종성)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Phonemes {
    pub leading: Consonant,
    pub vowel: Vowel,
    /// 받침이 없으면 None
    pub trailing: Option<Consonant>,
}

impl fmt::Display for Phonemes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.leading, self.vowel)?;
        if let Some(trailing) = self.trailing {
            write!(f, "{}", trailing)?;
        }
        Ok(())
    }
}

/// 음절 <-> 자모 양방향 테이블
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableCodec {
    /// (코드포인트 - SYLLABLE_OFFSET) 인덱스 -> 자모
    by_code: Vec<Phonemes>,
    /// 자모 -> 음절
    by_phonemes: HashMap<Phonemes, char>,
}

impl SyllableCodec {
    /// 음절 분해
    pub fn decode(&self, syllable: char) -> Result<Phonemes, HangulError> {
        self.decode_codepoint(syllable as u32)
            .map_err(|_| HangulError::NotSyllable(syllable.to_string()))
    }

    /// 코드포인트로 음절 분해
    pub fn decode_codepoint(&self, code: u32) -> Result<Phonemes, HangulError> {
        if !is_syllable_codepoint(code) {
            return Err(HangulError::CodepointOutOfRange(code));
        }
        self.by_code
            .get((code - SYLLABLE_OFFSET) as usize)
            .copied()
            .ok_or(HangulError::CodepointOutOfRange(code))
    }

    /// 자모를 음절로 조합
    pub fn encode(&self, phonemes: &Phonemes) -> Result<char, HangulError> {
        self.by_phonemes
            .get(phonemes)
            .copied()
            .ok_or(HangulError::InvalidPhonemes(*phonemes))
    }

    /// 음절과 자모를 코드포인트 순서대로 순회
    pub fn iter(&self) -> impl Iterator<Item = (char, Phonemes)> + '_ {
        self.by_code.iter().enumerate().filter_map(|(i, p)| {
            char::from_u32(SYLLABLE_OFFSET + i as u32).map(|c| (c, *p))
        })
    }

    /// 모든 음절 (코드포인트 순서)
    pub fn syllables(&self) -> Vec<char> {
        self.iter().map(|(c, _)| c).collect()
    }

    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }
}

/// 자모 테이블로부터 음절 테이블 생성
///
/// 초성 → 중성 → 종성(없음 먼저) 순서로 중첩 열거하며,
/// 열거 순서가 곧 코드포인트 순서입니다.
pub fn build_syllable_codec(alphabet: &Alphabet) -> SyllableCodec {
    let trailing_options: Vec<Option<Consonant>> = std::iter::once(None)
        .chain(alphabet.trailing().iter().copied().map(Some))
        .collect();

    let mut by_code = Vec::with_capacity(SYLLABLE_COUNT as usize);
    for &leading in alphabet.leading() {
        for &vowel in alphabet.vowels() {
            for &trailing in &trailing_options {
                by_code.push(Phonemes {
                    leading,
                    vowel,
                    trailing,
                });
            }
        }
    }
    assert_eq!(by_code.len(), SYLLABLE_COUNT as usize);

    let by_phonemes = by_code
        .iter()
        .enumerate()
        .filter_map(|(i, p)| char::from_u32(SYLLABLE_OFFSET + i as u32).map(|c| (*p, c)))
        .collect();

    log::debug!("음절 테이블 생성: {}개", by_code.len());
    SyllableCodec {
        by_code,
        by_phonemes,
    }
}

/// 프로세스 전역 음절 테이블
pub static SYLLABLES: LazyLock<SyllableCodec> =
    LazyLock::new(|| build_syllable_codec(&ALPHABET));

/// 정확히 한 글자이고 완성형 한글 음절인지 확인
pub fn is_syllable(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => is_syllable_char(c),
        _ => false,
    }
}

pub fn is_syllable_char(c: char) -> bool {
    is_syllable_codepoint(c as u32)
}

/// 코드포인트가 [U+AC00, U+AC00 + 11172) 범위인지 확인
pub fn is_syllable_codepoint(code: u32) -> bool {
    (SYLLABLE_OFFSET..SYLLABLE_OFFSET_END).contains(&code)
}

/// 전역 테이블로 음절 분해
pub fn decode(syllable: char) -> Result<Phonemes, HangulError> {
    SYLLABLES.decode(syllable)
}

/// 전역 테이블로 코드포인트 분해
pub fn decode_codepoint(code: u32) -> Result<Phonemes, HangulError> {
    SYLLABLES.decode_codepoint(code)
}

/// 전역 테이블로 자모 조합
pub fn encode(phonemes: &Phonemes) -> Result<char, HangulError> {
    SYLLABLES.encode(phonemes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hangul::alphabet::build_alphabet;

    fn consonant(c: char) -> Consonant {
        Consonant::from_char(c).unwrap()
    }

    fn vowel(c: char) -> Vowel {
        Vowel::from_char(c).unwrap()
    }

    #[test]
    fn test_decode_basic() {
        // 가 = ㄱ + ㅏ
        assert_eq!(
            decode('가'),
            Ok(Phonemes {
                leading: consonant('ㄱ'),
                vowel: vowel('ㅏ'),
                trailing: None,
            })
        );
        // 값 = ㄱ + ㅏ + ㅄ
        assert_eq!(
            decode('값'),
            Ok(Phonemes {
                leading: consonant('ㄱ'),
                vowel: vowel('ㅏ'),
                trailing: Some(consonant('ㅄ')),
            })
        );
        // 힣 = 마지막 음절
        assert_eq!(
            decode('힣'),
            Ok(Phonemes {
                leading: consonant('ㅎ'),
                vowel: vowel('ㅣ'),
                trailing: Some(consonant('ㅎ')),
            })
        );
    }

    #[test]
    fn test_decode_example_word() {
        let decoded: Vec<String> = "케플러"
            .chars()
            .map(|c| decode(c).unwrap().to_string())
            .collect();
        assert_eq!(decoded, vec!["ㅋㅔ", "ㅍㅡㄹ", "ㄹㅓ"]);
    }

    #[test]
    fn test_decode_rejects_non_syllables() {
        assert_eq!(
            decode('ㄱ'),
            Err(HangulError::NotSyllable("ㄱ".to_string()))
        );
        assert!(decode('a').is_err());
        assert_eq!(
            decode_codepoint(SYLLABLE_OFFSET_END),
            Err(HangulError::CodepointOutOfRange(SYLLABLE_OFFSET_END))
        );
        assert!(decode_codepoint(SYLLABLE_OFFSET - 1).is_err());
    }

    #[test]
    fn test_first_syllables_in_order() {
        let first: String = SYLLABLES.syllables().into_iter().take(10).collect();
        assert_eq!(first, "가각갂갃간갅갆갇갈갉");
        assert_eq!(SYLLABLES.len(), 11172);
    }

    #[test]
    fn test_roundtrip_every_codepoint() {
        for code in SYLLABLE_OFFSET..SYLLABLE_OFFSET_END {
            let phonemes = decode_codepoint(code).unwrap();
            assert_eq!(encode(&phonemes).map(|c| c as u32), Ok(code));
        }
    }

    #[test]
    fn test_roundtrip_every_triple() {
        let alphabet = build_alphabet();
        for &leading in alphabet.leading() {
            for &vowel in alphabet.vowels() {
                let trailing = std::iter::once(None)
                    .chain(alphabet.trailing().iter().copied().map(Some));
                for trailing in trailing {
                    let phonemes = Phonemes {
                        leading,
                        vowel,
                        trailing,
                    };
                    let syllable = encode(&phonemes).unwrap();
                    assert_eq!(decode(syllable), Ok(phonemes));
                }
            }
        }
    }

    #[test]
    fn test_encode_rejects_ineligible_consonants() {
        // ㄳ은 초성 불가
        let bad_leading = Phonemes {
            leading: consonant('ㄳ'),
            vowel: vowel('ㅏ'),
            trailing: None,
        };
        assert_eq!(
            encode(&bad_leading),
            Err(HangulError::InvalidPhonemes(bad_leading))
        );

        // ㄸ은 종성 불가
        let bad_trailing = Phonemes {
            leading: consonant('ㄱ'),
            vowel: vowel('ㅏ'),
            trailing: Some(consonant('ㄸ')),
        };
        assert!(encode(&bad_trailing).is_err());
    }

    #[test]
    fn test_matches_arithmetic_composition() {
        // 테이블 순서가 표준 조합 공식과 일치해야 함
        for (c, p) in SYLLABLES.iter() {
            let cho = leading_consonants_index(p.leading);
            let jung = p.vowel.index();
            let jong = p
                .trailing
                .map(|t| trailing_consonants_index(t) + 1)
                .unwrap_or(0);
            let code = SYLLABLE_OFFSET + (cho * 21 + jung) * 28 + jong;
            assert_eq!(c as u32, code);
        }
    }

    fn leading_consonants_index(c: Consonant) -> u32 {
        ALPHABET.leading().iter().position(|x| *x == c).unwrap() as u32
    }

    fn trailing_consonants_index(c: Consonant) -> u32 {
        ALPHABET.trailing().iter().position(|x| *x == c).unwrap() as u32
    }

    #[test]
    fn test_is_syllable() {
        assert!(is_syllable("가"));
        assert!(is_syllable("힣"));
        assert!(!is_syllable("가나"));
        assert!(!is_syllable(""));
        assert!(!is_syllable("ㄱ"));
        assert!(!is_syllable("a"));

        let count = (SYLLABLE_OFFSET - 100..SYLLABLE_OFFSET_END + 100)
            .filter(|&code| is_syllable_codepoint(code))
            .count();
        assert_eq!(count, 11172);
    }

    #[test]
    fn test_range_agrees_with_table() {
        for code in SYLLABLE_OFFSET - 10..SYLLABLE_OFFSET_END + 10 {
            assert_eq!(is_syllable_codepoint(code), decode_codepoint(code).is_ok());
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        let alphabet = build_alphabet();
        assert_eq!(build_syllable_codec(&alphabet), build_syllable_codec(&alphabet));
    }
}
