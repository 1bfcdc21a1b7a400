//! 설정 파일 로드
//!
//! 위치: `PRINTFLOW_SETTINGS_FILE` 또는 `<config_dir>/printflow/settings.toml`.
//! 파일이 없으면 기본값을 쓰고, 형식이 잘못되면 시작하지 않는다.

use crate::system::catalog::UnreadablePolicy;
use crate::utils::error::{PrintFlowError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_ENV: &str = "PRINTFLOW_SETTINGS_FILE";
pub const FILES_DIR_ENV: &str = "PRINTFLOW_FILES_DIR";
pub const PRINTERS_DIR_ENV: &str = "PRINTFLOW_PRINTERS_DIR";

/// 앱 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 라벨 파일 폴더
    pub files_dir: PathBuf,
    /// 프린터 디렉토리 루트
    pub printers_dir: PathBuf,
    /// 테마 이름
    pub theme: String,
    /// 읽을 수 없는 파일 처리
    pub on_unreadable: UnreadablePolicy,
    /// 로그 디렉토리 (없으면 캐시 디렉토리)
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        let base = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("PrintFlow");
        Self {
            files_dir: base.join("Label_Data_Load"),
            printers_dir: base.join("Printers"),
            theme: "dark".to_string(),
            on_unreadable: UnreadablePolicy::default(),
            log_dir: None,
        }
    }
}

impl Settings {
    /// 설정 파일 경로 결정
    pub fn settings_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(SETTINGS_FILE_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::config_dir().map(|dir| dir.join("printflow").join("settings.toml"))
    }

    /// 설정 로드 (파일 + 환경변수)
    pub fn load() -> Result<Self> {
        let mut settings = match Self::settings_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        settings.apply_env_overrides(|key| env::var(key).ok());
        Ok(settings)
    }

    /// 파일에서 로드. 파일이 없으면 기본값.
    pub fn from_file(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(data) => Self::parse(&data)
                .map_err(|e| PrintFlowError::Config(format!("{}: {}", path.display(), e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(PrintFlowError::Io(e)),
        }
    }

    pub fn parse(data: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(data)
    }

    /// 환경변수로 경로 덮어쓰기
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(FILES_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            self.files_dir = PathBuf::from(dir.trim());
        }
        if let Some(dir) = lookup(PRINTERS_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            self.printers_dir = PathBuf::from(dir.trim());
        }
    }

    /// 로그 디렉토리
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(env::temp_dir)
                .join("printflow")
        })
    }
}
