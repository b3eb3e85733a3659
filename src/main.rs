//! romaja - 한글 로마자 변환 CLI
//!
//! 사용법: romaja [--key] [--init-config] [TEXT...]
//! TEXT가 없으면 표준 입력을 한 줄씩 변환합니다.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use romaja::config::{load_config, save_config, RomajaConfig};
use romaja::romanization::{romanization_key, romanize, romanize_text, RomanizeError};

/// 명령행 동작
#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// 규칙표 JSON 출력
    PrintKey,
    /// 기본 설정 파일 생성
    InitConfig,
    /// 인자로 받은 텍스트 변환
    Text(String),
    /// 표준 입력 변환
    Stdin,
}

fn parse_args(args: impl Iterator<Item = String>) -> Command {
    let mut words = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--key" => return Command::PrintKey,
            "--init-config" => return Command::InitConfig,
            _ => words.push(arg),
        }
    }
    if words.is_empty() {
        Command::Stdin
    } else {
        Command::Text(words.join(" "))
    }
}

/// 설정에 따라 한 줄 변환
fn convert_line(line: &str, config: &RomajaConfig) -> Result<String, RomanizeError> {
    if !config.strict {
        return romanize_text(line, &config.separator);
    }

    // 공백은 그대로 두고, 공백 사이 단어는 전부 한글 음절이어야 함
    let mut result = String::with_capacity(line.len());
    let mut word = String::new();
    let mut word_start = 0;
    for (position, c) in line.chars().enumerate() {
        if c.is_whitespace() {
            flush_word(&mut word, word_start, config, &mut result)?;
            result.push(c);
        } else {
            if word.is_empty() {
                word_start = position;
            }
            word.push(c);
        }
    }
    flush_word(&mut word, word_start, config, &mut result)?;
    Ok(result)
}

/// 단어 하나 변환 (에러 위치는 줄 기준으로 보정)
fn flush_word(
    word: &mut String,
    start: usize,
    config: &RomajaConfig,
    result: &mut String,
) -> Result<(), RomanizeError> {
    if word.is_empty() {
        return Ok(());
    }
    let parts = romanize(word).map_err(|e| match e {
        RomanizeError::InvalidInput { position, found } => RomanizeError::InvalidInput {
            position: start + position,
            found,
        },
        other => other,
    })?;
    result.push_str(&parts.join(config.separator.as_str()));
    word.clear();
    Ok(())
}

fn run(command: Command, config: &RomajaConfig) -> Result<(), String> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::PrintKey => {
            let json = serde_json::to_string_pretty(&romanization_key())
                .map_err(|e| format!("직렬화 실패: {}", e))?;
            writeln!(out, "{}", json).map_err(|e| e.to_string())?;
        }
        Command::InitConfig => {
            let path = save_config(&RomajaConfig::default())?;
            log::info!("설정 파일 생성: {}", path.display());
            writeln!(out, "{}", path.display()).map_err(|e| e.to_string())?;
        }
        Command::Text(text) => {
            let latin = convert_line(&text, config).map_err(|e| e.to_string())?;
            writeln!(out, "{}", latin).map_err(|e| e.to_string())?;
        }
        Command::Stdin => {
            for line in io::stdin().lock().lines() {
                let line = line.map_err(|e| format!("표준 입력 읽기 실패: {}", e))?;
                let latin = convert_line(&line, config).map_err(|e| e.to_string())?;
                writeln!(out, "{}", latin).map_err(|e| e.to_string())?;
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config();
    let command = parse_args(std::env::args().skip(1));

    match run(command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("변환 실패: {}", e);
            eprintln!("romaja: {}", e);
            ExitCode::FAILURE
        }
    }
}
