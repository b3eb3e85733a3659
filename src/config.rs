//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// romaja 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RomajaConfig {
    /// 같은 단어 안의 음절 사이에 넣을 구분자
    #[serde(default = "default_separator")]
    pub separator: String,
    /// true면 한글 음절이 아닌 문자가 있을 때 변환 실패
    #[serde(default = "default_strict")]
    pub strict: bool,
}

fn default_separator() -> String {
    String::new()
}

fn default_strict() -> bool {
    false
}

impl Default for RomajaConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            strict: default_strict(),
        }
    }
}

/// 설정 파일 경로: $XDG_CONFIG_HOME/romaja/config.json (없으면 ~/.config)
pub fn config_path() -> PathBuf {
    let absolute_dir = |key: &str| {
        std::env::var(key)
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute() && p.is_dir())
    };
    let base = absolute_dir("XDG_CONFIG_HOME")
        .or_else(|| absolute_dir("HOME").map(|home| home.join(".config")))
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    base.join("romaja").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> RomajaConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            RomajaConfig::default()
        }),
        Err(_) => RomajaConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &RomajaConfig) -> Result<PathBuf, String> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("설정 디렉토리 생성 실패: {}", e))?;
    }
    let json = serde_json::to_string_pretty(config).map_err(|e| format!("직렬화 실패: {}", e))?;
    fs::write(&path, json).map_err(|e| format!("설정 파일 저장 실패: {}", e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RomajaConfig::default();
        assert_eq!(config.separator, "");
        assert!(!config.strict);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = RomajaConfig {
            separator: "-".to_string(),
            strict: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: RomajaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let json = r#"{"strict": true}"#;
        let config: RomajaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.separator, "");
        assert!(config.strict);
    }

    #[test]
    fn test_config_path_file_name() {
        let path = config_path();
        assert!(path.ends_with("romaja/config.json"));
    }
}
