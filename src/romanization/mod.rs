//! 국어의 로마자 표기
//!
//! 자모별 기본 표기에 더해, 받침과 다음 음절 초성 사이의 동화·연음을
//! 특수 규칙 테이블로 처리합니다.
//!
//! ```
//! use romaja::romanization::{romanize, romanize_codepoint};
//!
//! assert_eq!(romanize("종로").unwrap().concat(), "jongno");
//! // 단일 음절은 동화 없이 표기
//! assert_eq!(romanize_codepoint('종' as u32).unwrap(), "jong");
//! ```

mod key;
mod romanizer;
mod rules;

// 공개 인터페이스
pub use key::{romanization_key, ConsonantKey, RomanizationKey, SpecialKey, SpecialRow, VowelKey};
pub use romanizer::{
    romanize, romanize_codepoint, romanize_syllable, romanize_text, romanize_with, RomanizeError,
};
pub use rules::{
    build_rule_tables, ConsonantForms, RuleError, RuleTables, SpecialRule, EMPTY_PLACEHOLDER,
    RULES, SPLIT_MARKER,
};
