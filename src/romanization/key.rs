//! 로마자 표기 규칙표 (외부 표시용)
//!
//! 규칙 테이블을 데이터 순서 그대로 직렬화 가능한 형태로 내보냅니다.

use serde::Serialize;

use crate::hangul::alphabet::{Consonant, Vowel};

use super::rules::{ConsonantForms, RuleTables, RULES};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VowelKey {
    pub jamo: Vowel,
    pub latin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsonantKey {
    pub jamo: Consonant,
    #[serde(flatten)]
    pub forms: ConsonantForms,
}

/// 받침 하나에 대한 특수 규칙 행
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialRow {
    pub prev: Consonant,
    /// `SpecialKey::next` 순서의 표기 후보 목록
    pub cells: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecialKey {
    pub next: Vec<Consonant>,
    pub rows: Vec<SpecialRow>,
}

/// 전체 규칙표
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomanizationKey {
    pub vowels: Vec<VowelKey>,
    pub consonants: Vec<ConsonantKey>,
    pub special: SpecialKey,
}

impl RomanizationKey {
    pub fn from_rules(rules: &RuleTables) -> Self {
        let vowels = rules
            .vowel_entries()
            .map(|(jamo, latin)| VowelKey {
                jamo,
                latin: latin.to_string(),
            })
            .collect();

        let consonants = rules
            .consonant_entries()
            .map(|(jamo, forms)| ConsonantKey {
                jamo,
                forms: forms.clone(),
            })
            .collect();

        let special = rules.special();
        let rows = special
            .prev_finals()
            .iter()
            .map(|&prev| SpecialRow {
                prev,
                cells: special
                    .next_initials()
                    .iter()
                    .map(|&next| {
                        special
                            .get(prev, next)
                            .map(<[String]>::to_vec)
                            .unwrap_or_default()
                    })
                    .collect(),
            })
            .collect();

        Self {
            vowels,
            consonants,
            special: SpecialKey {
                next: special.next_initials().to_vec(),
                rows,
            },
        }
    }
}

/// 전역 규칙 테이블의 규칙표
pub fn romanization_key() -> RomanizationKey {
    RomanizationKey::from_rules(&RULES)
}
