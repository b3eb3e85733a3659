//! 국어의 로마자 표기법 규칙 테이블
//!
//! 탭으로 구분된 규칙 데이터를 파싱해 세 가지 조회 테이블을 만듭니다.
//! - 모음 규칙: 모음 -> 로마자
//! - 자음 규칙: 자음 -> (초성 표기, 종성 표기)
//! - 특수 규칙: (앞 음절 받침, 뒤 음절 초성) -> 동화/연음 표기 후보 목록
//!
//! 참고: https://en.wikipedia.org/wiki/Revised_Romanization_of_Korean

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::Serialize;

use crate::hangul::alphabet::{consonants, vowels, Consonant, Vowel};

/// 빈 칸 표시 (en dash)
pub const EMPTY_PLACEHOLDER: &str = "–";
/// 특수 규칙 표기에서 앞 음절 몫과 뒤 음절 몫을 나누는 구분자
pub const SPLIT_MARKER: char = '-';
/// 특수 규칙 한 칸에 여러 후보가 있을 때의 구분자
const ALTERNATIVE_DELIMITER: &str = ", ";

const VOWEL_DATA: &str = r#"
Hangul	ㅏ	ㅐ	ㅑ	ㅒ	ㅓ	ㅔ	ㅕ	ㅖ	ㅗ	ㅘ	ㅙ	ㅚ	ㅛ	ㅜ	ㅝ	ㅞ	ㅟ	ㅠ	ㅡ	ㅢ	ㅣ
Romanization	a	ae	ya	yae	eo	e	yeo	ye	o	wa	wae	oe	yo	u	wo	we	wi	yu	eu	ui	i
"#;

// 겹받침은 초성 표기가 없고, 대표음으로 종성 표기
const CONSONANT_DATA: &str = r#"
Hangul	ㄱ	ㄲ	ㄳ	ㄴ	ㄵ	ㄶ	ㄷ	ㄸ	ㄹ	ㄺ	ㄻ	ㄼ	ㄽ	ㄾ	ㄿ	ㅀ	ㅁ	ㅂ	ㅃ	ㅄ	ㅅ	ㅆ	ㅇ	ㅈ	ㅉ	ㅊ	ㅋ	ㅌ	ㅍ	ㅎ
Initial	g	kk	–	n	–	–	d	tt	r	–	–	–	–	–	–	–	m	b	pp	–	s	ss	–	j	jj	ch	k	t	p	h
Final	k	k	k	n	n	n	t	–	l	k	m	l	l	l	p	l	m	p	–	p	t	t	ng	t	–	t	k	t	p	t
"#;

// 첫 줄: 뒤 음절 초성, 둘째 줄: 그 초성의 기본 표기
// 이후 각 줄: 앞 음절 받침, 받침의 기본 표기, 초성별 표기
const SPECIAL_DATA: &str = r#"
ㅇ	ㄱ	ㄴ	ㄷ	ㄹ	ㅁ	ㅂ	ㅅ	ㅈ	ㅊ	ㅋ	ㅌ	ㅍ	ㅎ
–	g	n	d	r	m	b	s	j	ch	k	t	p	h
ㄱ	k	g	kg	ngn	kd	ngn	ngm	kb	ks	kj	kch	k-k	kt	kp	kh, k
ㄴ	n	n	n-g	nn	nd	ll	nm	nb	ns	nj	nch	nk	nt	np	nh
ㄷ	t	d, j	tg	nn	td	nn	nm	tb	ts	tj	tch	tk	t-t	tp	th, t, ch
ㄹ	l	r	lg	ln	ld	ll	lm	lb	ls	lj	lch	lk	lt	lp	lh
ㅁ	m	m	mg	mn	md	mn	mm	mb	ms	mj	mch	mk	mt	mp	mh
ㅂ	p	b	pg	mn	pd	mn	mm	pb	ps	pj	pch	pk	pt	p-p	ph, p
ㅅ	t	s	tg	nn	td	nn	nm	tb	ts	tj	tch	tk	t-t	tp	th, t, ch
ㅇ	ng	ng-	ngg	ngn	ngd	ngn	ngm	ngb	ngs	ngj	ngch	ngk	ngt	ngp	ngh
ㅈ	t	j	tg	nn	td	nn	nm	tb	ts	tj	tch	tk	t-t	tp	th, t, ch
ㅊ	t	ch	tg	nn	td	nn	nm	tb	ts	tj	tch	tk	t-t	tp	th, t, ch
ㅌ	t	t, ch	tg	nn	td	nn	nm	tb	ts	tj	tch	tk	t-t	tp	th, t, ch
ㅎ	t	h	k	nn	t	nn	nm	p	hs	ch	tch	tk	t	tp	t
"#;

/// 규칙 데이터 파싱 에러 (초기화 시점의 설정 오류)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// 행/열 개수 불일치
    ShapeMismatch {
        table: &'static str,
        expected: usize,
        found: usize,
    },
    /// 자모가 아닌 기호
    UnknownJamo { table: &'static str, symbol: String },
    /// 값이 비어 있으면 안 되는 칸이 비어 있음
    EmptyCell { table: &'static str, symbol: char },
    /// 테이블에 빠진 자모
    MissingEntry { table: &'static str, symbol: char },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::ShapeMismatch {
                table,
                expected,
                found,
            } => write!(
                f,
                "{} 규칙 열 개수 불일치: expected {}, found {}",
                table, expected, found
            ),
            RuleError::UnknownJamo { table, symbol } => {
                write!(f, "{} 규칙에 알 수 없는 자모: {:?}", table, symbol)
            }
            RuleError::EmptyCell { table, symbol } => {
                write!(f, "{} 규칙의 빈 칸: {}", table, symbol)
            }
            RuleError::MissingEntry { table, symbol } => {
                write!(f, "{} 규칙에 없는 자모: {}", table, symbol)
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// 자음 하나의 초성/종성 표기 (없으면 빈 문자열)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsonantForms {
    pub onset: String,
    pub coda: String,
}

/// 받침 × 다음 초성 특수 규칙
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialRule {
    /// 행 키: 앞 음절 받침 (데이터 순서)
    prev_finals: Vec<Consonant>,
    /// 열 키: 뒤 음절 초성 (데이터 순서)
    next_initials: Vec<Consonant>,
    cells: HashMap<(Consonant, Consonant), Vec<String>>,
}

impl SpecialRule {
    /// 표기 후보 목록 (첫 번째가 관례적인 우선 표기)
    pub fn get(&self, prev_final: Consonant, next_initial: Consonant) -> Option<&[String]> {
        self.cells
            .get(&(prev_final, next_initial))
            .map(Vec::as_slice)
    }

    pub fn prev_finals(&self) -> &[Consonant] {
        &self.prev_finals
    }

    pub fn next_initials(&self) -> &[Consonant] {
        &self.next_initials
    }
}

/// 로마자 표기 규칙 전체
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTables {
    vowel_order: Vec<Vowel>,
    vowels: HashMap<Vowel, String>,
    consonant_order: Vec<Consonant>,
    consonants: HashMap<Consonant, ConsonantForms>,
    special: SpecialRule,
}

impl RuleTables {
    pub fn vowel(&self, vowel: Vowel) -> Option<&str> {
        self.vowels.get(&vowel).map(String::as_str)
    }

    pub fn consonant(&self, consonant: Consonant) -> Option<&ConsonantForms> {
        self.consonants.get(&consonant)
    }

    pub fn special(&self) -> &SpecialRule {
        &self.special
    }

    /// 모음 규칙 (데이터 순서)
    pub fn vowel_entries(&self) -> impl Iterator<Item = (Vowel, &str)> + '_ {
        self.vowel_order
            .iter()
            .filter_map(|v| self.vowel(*v).map(|latin| (*v, latin)))
    }

    /// 자음 규칙 (데이터 순서)
    pub fn consonant_entries(&self) -> impl Iterator<Item = (Consonant, &ConsonantForms)> + '_ {
        self.consonant_order
            .iter()
            .filter_map(|c| self.consonant(*c).map(|forms| (*c, forms)))
    }

    /// 특수 규칙 표기를 (현재 음절 몫, 다음 음절 몫)으로 분리
    ///
    /// 구분자가 있으면 구분자 기준으로 나눕니다. 없으면 종성 표기 중
    /// 가장 긴 접두사를 현재 음절에 남기고 나머지를 다음 음절로 넘깁니다.
    pub fn split_realization<'a>(&self, realization: &'a str) -> (&'a str, &'a str) {
        if let Some(parts) = realization.split_once(SPLIT_MARKER) {
            return parts;
        }
        let keep = self
            .consonants
            .values()
            .map(|forms| forms.coda.as_str())
            .filter(|coda| !coda.is_empty() && realization.starts_with(coda))
            .map(str::len)
            .max()
            .unwrap_or(0);
        realization.split_at(keep)
    }
}

/// 탭 구분 데이터를 행 단위로 분리 (빈 줄 제외)
fn parse_rows(data: &str) -> Vec<Vec<&str>> {
    data.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split('\t').collect())
        .collect()
}

/// 빈 칸 표시를 빈 문자열로
fn cell(raw: &str) -> &str {
    let raw = raw.trim();
    if raw == EMPTY_PLACEHOLDER {
        ""
    } else {
        raw
    }
}

fn expect_len(table: &'static str, expected: usize, found: usize) -> Result<(), RuleError> {
    if expected == found {
        Ok(())
    } else {
        Err(RuleError::ShapeMismatch {
            table,
            expected,
            found,
        })
    }
}

/// 자모 한 글자 파싱
fn parse_jamo<T>(
    table: &'static str,
    symbol: &str,
    from_char: fn(char) -> Option<T>,
) -> Result<T, RuleError> {
    let mut chars = symbol.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => from_char(c),
        _ => None,
    }
    .ok_or_else(|| RuleError::UnknownJamo {
        table,
        symbol: symbol.to_string(),
    })
}

/// 첫 칸(행 이름)을 뗀 나머지 칸
fn values<'r, 'a>(
    table: &'static str,
    rows: &'r [Vec<&'a str>],
    index: usize,
) -> Result<&'r [&'a str], RuleError> {
    rows.get(index)
        .and_then(|row| row.get(1..))
        .ok_or(RuleError::ShapeMismatch {
            table,
            expected: index + 1,
            found: rows.len(),
        })
}

fn parse_vowel_rule(data: &str) -> Result<(Vec<Vowel>, HashMap<Vowel, String>), RuleError> {
    const TABLE: &str = "vowel";
    let rows = parse_rows(data);
    expect_len(TABLE, 2, rows.len())?;
    let from = values(TABLE, &rows, 0)?;
    let to = values(TABLE, &rows, 1)?;
    expect_len(TABLE, from.len(), to.len())?;

    let mut order = Vec::with_capacity(from.len());
    let mut map = HashMap::with_capacity(from.len());
    for (symbol, latin) in from.iter().zip(to) {
        let vowel = parse_jamo(TABLE, symbol.trim(), Vowel::from_char)?;
        let latin = cell(latin);
        if latin.is_empty() {
            return Err(RuleError::EmptyCell {
                table: TABLE,
                symbol: vowel.as_char(),
            });
        }
        order.push(vowel);
        map.insert(vowel, latin.to_string());
    }

    if let Some(missing) = vowels().iter().find(|v| !map.contains_key(v)) {
        return Err(RuleError::MissingEntry {
            table: TABLE,
            symbol: missing.as_char(),
        });
    }
    Ok((order, map))
}

fn parse_consonant_rule(
    data: &str,
) -> Result<(Vec<Consonant>, HashMap<Consonant, ConsonantForms>), RuleError> {
    const TABLE: &str = "consonant";
    let rows = parse_rows(data);
    expect_len(TABLE, 3, rows.len())?;
    let from = values(TABLE, &rows, 0)?;
    let onsets = values(TABLE, &rows, 1)?;
    let codas = values(TABLE, &rows, 2)?;
    expect_len(TABLE, from.len(), onsets.len())?;
    expect_len(TABLE, from.len(), codas.len())?;

    let mut order = Vec::with_capacity(from.len());
    let mut map = HashMap::with_capacity(from.len());
    for ((symbol, onset), coda) in from.iter().zip(onsets).zip(codas) {
        let consonant = parse_jamo(TABLE, symbol.trim(), Consonant::from_char)?;
        let forms = ConsonantForms {
            onset: cell(onset).to_string(),
            coda: cell(coda).to_string(),
        };
        if forms.onset.is_empty() && forms.coda.is_empty() {
            return Err(RuleError::EmptyCell {
                table: TABLE,
                symbol: consonant.as_char(),
            });
        }
        order.push(consonant);
        map.insert(consonant, forms);
    }

    if let Some(missing) = consonants().iter().find(|c| !map.contains_key(c)) {
        return Err(RuleError::MissingEntry {
            table: TABLE,
            symbol: missing.as_char(),
        });
    }
    Ok((order, map))
}

fn parse_special_rule(data: &str) -> Result<SpecialRule, RuleError> {
    const TABLE: &str = "special";
    let rows = parse_rows(data);
    let (header, rest) = rows.split_first().ok_or(RuleError::ShapeMismatch {
        table: TABLE,
        expected: 2,
        found: 0,
    })?;
    let next_initials = header
        .iter()
        .map(|symbol| parse_jamo(TABLE, symbol.trim(), Consonant::from_char))
        .collect::<Result<Vec<_>, _>>()?;

    // 둘째 줄은 초성 기본 표기 (자음 규칙과 중복이므로 모양만 확인)
    let (plain_initials, rows) = rest.split_first().ok_or(RuleError::ShapeMismatch {
        table: TABLE,
        expected: 2,
        found: 1,
    })?;
    expect_len(TABLE, next_initials.len(), plain_initials.len())?;

    let mut prev_finals = Vec::with_capacity(rows.len());
    let mut cells = HashMap::new();
    for row in rows {
        // 받침, 받침 기본 표기, 초성별 표기
        expect_len(TABLE, next_initials.len() + 2, row.len())?;
        let prev = parse_jamo(TABLE, row[0].trim(), Consonant::from_char)?;
        for (next, raw) in next_initials.iter().zip(&row[2..]) {
            let raw = cell(raw);
            if raw.is_empty() {
                return Err(RuleError::EmptyCell {
                    table: TABLE,
                    symbol: prev.as_char(),
                });
            }
            let candidates = raw
                .split(ALTERNATIVE_DELIMITER)
                .map(str::to_string)
                .collect();
            cells.insert((prev, *next), candidates);
        }
        prev_finals.push(prev);
    }

    Ok(SpecialRule {
        prev_finals,
        next_initials,
        cells,
    })
}

/// 규칙 데이터 파싱
pub fn build_rule_tables() -> Result<RuleTables, RuleError> {
    let (vowel_order, vowels) = parse_vowel_rule(VOWEL_DATA)?;
    let (consonant_order, consonants) = parse_consonant_rule(CONSONANT_DATA)?;
    let special = parse_special_rule(SPECIAL_DATA)?;
    log::debug!(
        "로마자 규칙 생성: 모음 {}, 자음 {}, 특수 {}×{}",
        vowels.len(),
        consonants.len(),
        special.prev_finals.len(),
        special.next_initials.len()
    );
    Ok(RuleTables {
        vowel_order,
        vowels,
        consonant_order,
        consonants,
        special,
    })
}

/// 프로세스 전역 규칙 테이블 (데이터가 잘못되면 초기화 시 중단)
pub static RULES: LazyLock<RuleTables> = LazyLock::new(|| {
    build_rule_tables().unwrap_or_else(|e| panic!("로마자 규칙 데이터 오류: {}", e))
});
