//! 로그 초기화
//!
//! 화면은 TUI가 쓰고 있으므로 로그는 일자별 파일로만 남긴다.
//! 레벨은 `RUST_LOG`, 없으면 `info`.

use crate::utils::error::Result;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// 오늘 날짜 로그 파일 경로
pub fn log_file_path(log_dir: &Path, date: chrono::NaiveDate) -> PathBuf {
    log_dir.join(format!("printflow-{}.log", date.format("%Y-%m-%d")))
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// 전역 tracing subscriber 설정
///
/// 로그 파일 경로를 반환한다. 이미 초기화된 경우에도 에러로 보지 않는다.
pub fn init(log_dir: &Path) -> Result<PathBuf> {
    let path = log_file_path(log_dir, chrono::Local::now().date_naive());
    let file = open_log_file(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init();

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_file_name_uses_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        let path = log_file_path(Path::new("/var/log/printflow"), date);
        assert_eq!(
            path,
            PathBuf::from("/var/log/printflow/printflow-2026-03-07.log")
        );
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("logs").join("a.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
