//! 한글 음절열 -> 로마자 변환기
//!
//! 왼쪽에서 오른쪽으로 한 번 훑으면서 다음 음절 하나를 미리 봅니다.
//! 받침과 다음 초성이 특수 규칙에 있으면 규칙 표기를 두 음절에 나눠 붙이고,
//! 다음 음절의 초성을 지워 기본 초성 표기가 중복되지 않게 합니다.

use std::fmt;

use crate::hangul::alphabet::{Consonant, Vowel};
use crate::hangul::syllable::{is_syllable_char, Phonemes, SyllableCodec, SYLLABLES};

use super::rules::{RuleTables, RULES};

/// 로마자 변환 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RomanizeError {
    /// 완성형 한글 음절이 아닌 입력 (position: 문자 단위 위치)
    InvalidInput { position: usize, found: char },
    /// 음절 범위 밖 코드포인트
    InvalidCodepoint(u32),
    /// 규칙 테이블에 없는 자모 (테이블 생성 버그)
    MissingRule { table: &'static str, jamo: char },
}

impl fmt::Display for RomanizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RomanizeError::InvalidInput { position, found } => {
                // position은 0부터, 메시지는 1부터
                write!(
                    f,
                    "{}번째 문자 {:?}는 완성형 한글 음절이 아님",
                    position + 1,
                    found
                )
            }
            RomanizeError::InvalidCodepoint(code) => {
                write!(f, "음절 범위 밖 코드포인트: U+{:04X}", code)
            }
            RomanizeError::MissingRule { table, jamo } => {
                write!(f, "{} 규칙에 {} 항목이 없음", table, jamo)
            }
        }
    }
}

impl std::error::Error for RomanizeError {}

/// 변환 중인 음절 하나
///
/// 앞 음절의 특수 규칙이 적용되면 `leading`이 None으로 지워집니다.
#[derive(Debug, Clone, Copy)]
struct Slot {
    leading: Option<Consonant>,
    vowel: Vowel,
    trailing: Option<Consonant>,
}

impl From<Phonemes> for Slot {
    fn from(p: Phonemes) -> Self {
        Self {
            leading: Some(p.leading),
            vowel: p.vowel,
            trailing: p.trailing,
        }
    }
}

fn vowel_form(rules: &RuleTables, vowel: Vowel) -> Result<&str, RomanizeError> {
    rules.vowel(vowel).ok_or(RomanizeError::MissingRule {
        table: "vowel",
        jamo: vowel.as_char(),
    })
}

fn onset_form(rules: &RuleTables, consonant: Consonant) -> Result<&str, RomanizeError> {
    rules
        .consonant(consonant)
        .map(|forms| forms.onset.as_str())
        .ok_or(RomanizeError::MissingRule {
            table: "consonant",
            jamo: consonant.as_char(),
        })
}

fn coda_form(rules: &RuleTables, consonant: Consonant) -> Result<&str, RomanizeError> {
    rules
        .consonant(consonant)
        .map(|forms| forms.coda.as_str())
        .ok_or(RomanizeError::MissingRule {
            table: "consonant",
            jamo: consonant.as_char(),
        })
}

/// 한글 음절열을 음절별 로마자로 변환
///
/// 입력 전체가 완성형 음절이어야 하며, 하나라도 아니면 아무 결과 없이 실패합니다.
///
/// # Examples
/// ```
/// use romaja::romanize;
/// assert_eq!(romanize("케플러").unwrap(), vec!["ke", "peul", "leo"]);
/// assert!(romanize("가a").is_err());
/// ```
pub fn romanize(input: &str) -> Result<Vec<String>, RomanizeError> {
    romanize_with(&SYLLABLES, &RULES, input)
}

/// 주어진 음절 테이블과 규칙으로 변환
pub fn romanize_with(
    codec: &SyllableCodec,
    rules: &RuleTables,
    input: &str,
) -> Result<Vec<String>, RomanizeError> {
    // 출력 전에 전부 분해 (부분 결과 없음)
    let mut slots = input
        .chars()
        .enumerate()
        .map(|(position, c)| {
            codec
                .decode(c)
                .map(Slot::from)
                .map_err(|_| RomanizeError::InvalidInput { position, found: c })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut output = vec![String::new(); slots.len()];
    for i in 0..slots.len() {
        let current = slots[i];

        if let Some(leading) = current.leading {
            output[i].push_str(onset_form(rules, leading)?);
        }
        output[i].push_str(vowel_form(rules, current.vowel)?);

        let Some(trailing) = current.trailing else {
            continue;
        };

        let next_leading = slots.get(i + 1).and_then(|next| next.leading);
        // 후보가 여럿이면 첫 번째 표기 사용
        let special = next_leading
            .and_then(|next| rules.special().get(trailing, next))
            .and_then(|candidates| candidates.first());

        match (special, next_leading) {
            (Some(realization), Some(next)) => {
                let (suffix, prefix) = rules.split_realization(realization);
                log::trace!(
                    "특수 규칙 {}+{} -> {:?} ({:?} | {:?})",
                    trailing,
                    next,
                    realization,
                    suffix,
                    prefix
                );
                output[i].push_str(suffix);
                output[i + 1].push_str(prefix);
                // 다음 음절의 기본 초성 표기를 막음
                slots[i + 1].leading = None;
            }
            _ => output[i].push_str(coda_form(rules, trailing)?),
        }
    }

    Ok(output)
}

/// 음절 하나를 동화 규칙 없이 변환 (초성 + 중성 + 종성 기본 표기)
pub fn romanize_codepoint(code: u32) -> Result<String, RomanizeError> {
    let phonemes = SYLLABLES
        .decode_codepoint(code)
        .map_err(|_| RomanizeError::InvalidCodepoint(code))?;
    romanize_phonemes(&RULES, &phonemes)
}

/// 완성형 음절 문자 하나를 동화 규칙 없이 변환
pub fn romanize_syllable(syllable: char) -> Result<String, RomanizeError> {
    romanize_codepoint(syllable as u32).map_err(|_| RomanizeError::InvalidInput {
        position: 0,
        found: syllable,
    })
}

fn romanize_phonemes(rules: &RuleTables, phonemes: &Phonemes) -> Result<String, RomanizeError> {
    let mut result = String::with_capacity(8);
    result.push_str(onset_form(rules, phonemes.leading)?);
    result.push_str(vowel_form(rules, phonemes.vowel)?);
    if let Some(trailing) = phonemes.trailing {
        result.push_str(coda_form(rules, trailing)?);
    }
    Ok(result)
}

/// 섞인 텍스트 변환
///
/// 연속된 한글 음절 구간마다 `romanize`를 적용하고(구간 안에서만 동화 적용),
/// 그 밖의 문자는 그대로 둡니다. `separator`는 같은 구간의 음절 사이에 들어갑니다.
///
/// # Examples
/// ```
/// use romaja::romanize_text;
/// assert_eq!(romanize_text("서울, 부산!", "").unwrap(), "seoul, busan!");
/// assert_eq!(romanize_text("한국어", "-").unwrap(), "han-gu-geo");
/// ```
pub fn romanize_text(input: &str, separator: &str) -> Result<String, RomanizeError> {
    let mut result = String::with_capacity(input.len());
    let mut run = String::new();

    for c in input.chars() {
        if is_syllable_char(c) {
            run.push(c);
            continue;
        }
        flush_run(&mut run, separator, &mut result)?;
        result.push(c);
    }
    flush_run(&mut run, separator, &mut result)?;

    Ok(result)
}

fn flush_run(run: &mut String, separator: &str, result: &mut String) -> Result<(), RomanizeError> {
    if run.is_empty() {
        return Ok(());
    }
    result.push_str(&romanize(run)?.join(separator));
    run.clear();
    Ok(())
}
