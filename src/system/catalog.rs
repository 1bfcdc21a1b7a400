//! 라벨 파일/프린터 카탈로그
//!
//! 디렉토리 목록을 읽어 `PrintableItem`, `Printer`로 변환합니다.
//! 순서는 파일 시스템이 돌려준 순서 그대로이며 따로 정렬하지 않습니다.

use crate::models::{PrintableItem, Printer};
use crate::utils::error::{PrintFlowError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// 읽을 수 없는 파일 처리 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnreadablePolicy {
    /// 전체 로드 중단
    #[default]
    Abort,
    /// 경고 로그 후 건너뛰기
    Skip,
}

/// 카탈로그 서비스
#[allow(async_fn_in_trait)]
pub trait FileCatalog {
    /// 폴더 안의 출력 대상 파일 목록
    async fn list_items(&self, folder: &Path) -> Result<Vec<PrintableItem>>;

    /// 루트 아래의 프린터 디렉토리 목록
    async fn list_printers(&self, root: &Path) -> Result<Vec<Printer>>;
}

/// 파일 시스템 기반 카탈로그
#[derive(Debug, Clone, Default)]
pub struct FsCatalog {
    policy: UnreadablePolicy,
}

impl FsCatalog {
    pub fn new(policy: UnreadablePolicy) -> Self {
        Self { policy }
    }

    /// 디렉토리 엔트리 경로 목록 (파일 또는 디렉토리만)
    async fn read_entries(dir: &Path, want_dirs: bool) -> Result<Vec<PathBuf>> {
        let catalog_err = |source| PrintFlowError::Catalog {
            path: dir.to_path_buf(),
            source,
        };

        let mut read_dir = fs::read_dir(dir).await.map_err(catalog_err)?;
        let mut paths = Vec::new();
        while let Some(entry) = read_dir.next_entry().await.map_err(catalog_err)? {
            let file_type = match entry.file_type().await {
                Ok(file_type) => file_type,
                Err(e) => {
                    debug!(path = %entry.path().display(), error = %e, "entry type unavailable");
                    continue;
                }
            };
            let matches = if want_dirs {
                file_type.is_dir()
            } else {
                file_type.is_file()
            };
            if matches {
                paths.push(entry.path());
            }
        }
        Ok(paths)
    }
}

/// 라인 수 계산
///
/// 마지막 줄에 개행이 없어도 한 줄로 센다. 빈 파일은 0.
pub fn count_lines(bytes: &[u8]) -> u64 {
    if bytes.is_empty() {
        return 0;
    }
    let newlines = bytes.iter().filter(|&&b| b == b'\n').count() as u64;
    if bytes.ends_with(b"\n") {
        newlines
    } else {
        newlines + 1
    }
}

/// 파일 라벨 수 측정
pub async fn measure_units(path: &Path) -> Result<u64> {
    let bytes = fs::read(path)
        .await
        .map_err(|source| PrintFlowError::Catalog {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(count_lines(&bytes))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

impl FileCatalog for FsCatalog {
    async fn list_items(&self, folder: &Path) -> Result<Vec<PrintableItem>> {
        let paths = Self::read_entries(folder, false).await?;
        let mut items = Vec::with_capacity(paths.len());

        for path in paths {
            let unit_count = match measure_units(&path).await {
                Ok(count) => count,
                Err(e) if self.policy == UnreadablePolicy::Skip => {
                    warn!(error = %e, "skipping unreadable file");
                    continue;
                }
                Err(e) => return Err(e),
            };
            let id = items.len() + 1;
            items.push(PrintableItem::new(id, display_name(&path), path, unit_count));
        }

        debug!(folder = %folder.display(), count = items.len(), "items listed");
        Ok(items)
    }

    async fn list_printers(&self, root: &Path) -> Result<Vec<Printer>> {
        let paths = Self::read_entries(root, true).await?;
        let printers: Vec<Printer> = paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| {
                let name = Printer::name_from_dir(&display_name(&path)).to_string();
                Printer::new(i + 1, name, path)
            })
            .collect();

        debug!(root = %root.display(), count = printers.len(), "printers listed");
        Ok(printers)
    }
}
