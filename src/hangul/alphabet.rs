//! 한글 호환용 자모 테이블
//!
//! 자음 30개와 모음 21개를 코드포인트 순서대로 제공하고,
//! 초성에 올 수 있는 자음(19개)과 종성에 올 수 있는 자음(27개)을 구분합니다.

use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

/// 호환용 자음 시작 코드포인트 (ㄱ)
pub const CONSONANT_OFFSET: u32 = 0x3131;
/// 호환용 자음 개수 (ㄱ ~ ㅎ)
pub const CONSONANT_COUNT: u32 = 30;
/// 호환용 모음 시작 코드포인트 (ㅏ)
pub const VOWEL_OFFSET: u32 = 0x314F;
/// 호환용 모음 개수 (ㅏ ~ ㅣ)
pub const VOWEL_COUNT: u32 = 21;

/// 초성에 올 수 없는 겹받침 (11개)
const FINAL_ONLY: [char; 11] = [
    'ㄳ', 'ㄵ', 'ㄶ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅄ',
];

/// 종성에 올 수 없는 된소리 (3개)
const INITIAL_ONLY: [char; 3] = ['ㄸ', 'ㅃ', 'ㅉ'];

/// 호환용 자음 (U+3131 ~ U+314E)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Consonant(char);

impl Consonant {
    /// 문자가 호환용 자음이면 `Consonant` 반환
    pub fn from_char(c: char) -> Option<Self> {
        let code = c as u32;
        (CONSONANT_OFFSET..CONSONANT_OFFSET + CONSONANT_COUNT)
            .contains(&code)
            .then_some(Self(c))
    }

    /// 자음 순서 인덱스 (0 ~ 29)
    pub fn index(self) -> u32 {
        self.0 as u32 - CONSONANT_OFFSET
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// 초성으로 쓸 수 있는 자음인지 확인
    pub fn is_leading(self) -> bool {
        !FINAL_ONLY.contains(&self.0)
    }

    /// 종성으로 쓸 수 있는 자음인지 확인
    pub fn is_trailing(self) -> bool {
        !INITIAL_ONLY.contains(&self.0)
    }
}

impl fmt::Display for Consonant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 호환용 모음 (U+314F ~ U+3163)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Vowel(char);

impl Vowel {
    /// 문자가 호환용 모음이면 `Vowel` 반환
    pub fn from_char(c: char) -> Option<Self> {
        let code = c as u32;
        (VOWEL_OFFSET..VOWEL_OFFSET + VOWEL_COUNT)
            .contains(&code)
            .then_some(Self(c))
    }

    /// 모음 순서 인덱스 (0 ~ 20)
    pub fn index(self) -> u32 {
        self.0 as u32 - VOWEL_OFFSET
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Vowel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 순서가 고정된 자모 테이블
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    consonants: Vec<Consonant>,
    vowels: Vec<Vowel>,
    leading: Vec<Consonant>,
    trailing: Vec<Consonant>,
}

impl Alphabet {
    pub fn consonants(&self) -> &[Consonant] {
        &self.consonants
    }

    pub fn vowels(&self) -> &[Vowel] {
        &self.vowels
    }

    /// 초성 가능 자음 (19개, 코드포인트 순서)
    pub fn leading(&self) -> &[Consonant] {
        &self.leading
    }

    /// 종성 가능 자음 (27개, 코드포인트 순서)
    pub fn trailing(&self) -> &[Consonant] {
        &self.trailing
    }
}

/// 코드포인트 범위에서 자모 테이블 생성
pub fn build_alphabet() -> Alphabet {
    let consonants: Vec<Consonant> = (CONSONANT_OFFSET..CONSONANT_OFFSET + CONSONANT_COUNT)
        .filter_map(char::from_u32)
        .filter_map(Consonant::from_char)
        .collect();
    let vowels: Vec<Vowel> = (VOWEL_OFFSET..VOWEL_OFFSET + VOWEL_COUNT)
        .filter_map(char::from_u32)
        .filter_map(Vowel::from_char)
        .collect();

    // 범위 설정이 틀렸다면 프로그래밍 오류
    assert_eq!(consonants.len(), CONSONANT_COUNT as usize);
    assert_eq!(vowels.len(), VOWEL_COUNT as usize);

    let leading = consonants.iter().copied().filter(|c| c.is_leading()).collect();
    let trailing = consonants.iter().copied().filter(|c| c.is_trailing()).collect();

    Alphabet {
        consonants,
        vowels,
        leading,
        trailing,
    }
}

/// 프로세스 전역 자모 테이블
pub static ALPHABET: LazyLock<Alphabet> = LazyLock::new(build_alphabet);

/// 호환용 자음 30개
pub fn consonants() -> &'static [Consonant] {
    ALPHABET.consonants()
}

/// 호환용 모음 21개
pub fn vowels() -> &'static [Vowel] {
    ALPHABET.vowels()
}

/// 초성 가능 자음 19개
pub fn leading_consonants() -> &'static [Consonant] {
    ALPHABET.leading()
}

/// 종성 가능 자음 27개
pub fn trailing_consonants() -> &'static [Consonant] {
    ALPHABET.trailing()
}
