//! 통합 테스트 - 음절 분해와 로마자 변환

use romaja::hangul::{
    consonants, leading_consonants, trailing_consonants, vowels, Consonant, Vowel,
    SYLLABLE_COUNT, SYLLABLE_OFFSET,
};
use romaja::romanization::{build_rule_tables, romanization_key, RomanizeError, RULES};
use romaja::{decode, encode, is_syllable, romanize, romanize_codepoint, romanize_text, Phonemes};

#[test]
fn test_decode_examples() {
    let ga = decode('가').unwrap();
    assert_eq!(ga.leading.as_char(), 'ㄱ');
    assert_eq!(ga.vowel.as_char(), 'ㅏ');
    assert_eq!(ga.trailing, None);

    let gap = decode('값').unwrap();
    assert_eq!(gap.leading.as_char(), 'ㄱ');
    assert_eq!(gap.vowel.as_char(), 'ㅏ');
    assert_eq!(gap.trailing.map(Consonant::as_char), Some('ㅄ'));
}

#[test]
fn test_bijection() {
    for code in SYLLABLE_OFFSET..SYLLABLE_OFFSET + SYLLABLE_COUNT {
        let c = char::from_u32(code).unwrap();
        let phonemes = decode(c).unwrap();
        assert_eq!(encode(&phonemes), Ok(c));
    }
}

#[test]
fn test_encode_from_parts() {
    let phonemes = Phonemes {
        leading: Consonant::from_char('ㅎ').unwrap(),
        vowel: Vowel::from_char('ㅏ').unwrap(),
        trailing: Consonant::from_char('ㄴ'),
    };
    assert_eq!(encode(&phonemes), Ok('한'));
}

#[test]
fn test_table_sizes() {
    assert_eq!(consonants().len(), 30);
    assert_eq!(leading_consonants().len(), 19);
    assert_eq!(trailing_consonants().len(), 27);
    assert_eq!(vowels().len(), 21);
}

#[test]
fn test_is_syllable_range() {
    assert!(is_syllable("가"));
    assert!(is_syllable("힣"));
    assert!(!is_syllable("ㄱ"));
    assert!(!is_syllable("k"));
    assert!(!is_syllable("가가"));
}

#[test]
fn test_romanize_kepler() {
    let result = romanize("케플러").unwrap();
    assert_eq!(result, vec!["ke", "peul", "leo"]);
    assert_eq!(result.concat(), "kepeulleo");
}

#[test]
fn test_romanize_final_without_following_syllable() {
    assert_eq!(romanize("각").unwrap(), vec!["gak"]);
}

#[test]
fn test_romanize_ieung_giyeok_assimilation() {
    // 강 + 가: ㅇ+ㄱ 특수 규칙 ngg가 ng | g로 나뉨
    let ieung = Consonant::from_char('ㅇ').unwrap();
    let giyeok = Consonant::from_char('ㄱ').unwrap();
    let candidates = RULES.special().get(ieung, giyeok).unwrap();
    assert!(candidates[0].starts_with("ngg"));
    assert_eq!(RULES.split_realization("ngg"), ("ng", "g"));

    let result = romanize("강가").unwrap();
    assert_eq!(result, vec!["gang", "ga"]);
    assert_eq!(result.concat(), "gangga");
}

#[test]
fn test_romanize_rejects_non_syllables() {
    assert!(matches!(
        romanize("ㄱ"),
        Err(RomanizeError::InvalidInput { position: 0, found: 'ㄱ' })
    ));
    assert!(matches!(
        romanize("한k"),
        Err(RomanizeError::InvalidInput { position: 1, found: 'k' })
    ));
}

#[test]
fn test_place_names() {
    let joined = |s: &str| romanize(s).unwrap().concat();
    assert_eq!(joined("서울"), "seoul");
    assert_eq!(joined("부산"), "busan");
    assert_eq!(joined("신라"), "silla");
    assert_eq!(joined("종로"), "jongno");
    assert_eq!(joined("한국어"), "hangugeo");
}

#[test]
fn test_romanize_codepoint_has_no_assimilation() {
    assert_eq!(romanize_codepoint('신' as u32).unwrap(), "sin");
    assert_eq!(romanize_codepoint('라' as u32).unwrap(), "ra");
}

#[test]
fn test_romanize_text_passthrough() {
    assert_eq!(
        romanize_text("안녕하세요, Kepler!", "").unwrap(),
        "annyeonghaseyo, Kepler!"
    );
}

#[test]
fn test_rule_tables_are_deterministic() {
    let rebuilt = build_rule_tables().unwrap();
    assert_eq!(&rebuilt, &*RULES);
}

#[test]
fn test_romanization_key_serializes() {
    let json = serde_json::to_string(&romanization_key()).unwrap();
    assert!(json.contains("\"latin\":\"eo\""));
}
