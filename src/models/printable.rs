use std::fmt;
use std::path::PathBuf;

/// 출력 대상 파일
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintableItem {
    /// 카탈로그 로드 순서 기반 ID (1부터 시작)
    pub id: usize,
    /// 파일 이름
    pub name: String,
    /// 전체 경로
    pub source_path: PathBuf,
    /// 라벨 수 (라인 수)
    pub unit_count: u64,
    /// 프린터 큐에 들어갔는지 여부
    pub queued: bool,
}

impl PrintableItem {
    /// 새 항목 생성
    pub fn new(id: usize, name: impl Into<String>, source_path: PathBuf, unit_count: u64) -> Self {
        Self {
            id,
            name: name.into(),
            source_path,
            unit_count,
            queued: false,
        }
    }
}

impl fmt::Display for PrintableItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.unit_count)
    }
}

/// 프린터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Printer {
    /// 세션 내 고정 ID (1부터 시작)
    pub id: usize,
    /// 프린터 이름
    pub name: String,
    /// 프린터 디렉토리 경로
    pub source_path: PathBuf,
}

impl Printer {
    pub fn new(id: usize, name: impl Into<String>, source_path: PathBuf) -> Self {
        Self {
            id,
            name: name.into(),
            source_path,
        }
    }

    /// 디렉토리 이름에서 프린터 이름 추출
    ///
    /// `03-Zebra-HP` 처럼 `-`로 구분된 이름은 마지막 조각을 사용합니다.
    pub fn name_from_dir(dir_name: &str) -> &str {
        dir_name.rsplit('-').next().unwrap_or(dir_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_display_label() {
        let item = PrintableItem::new(1, "a.txt", PathBuf::from("/tmp/a.txt"), 5);
        assert_eq!(item.to_string(), "a.txt (5)");
        assert!(!item.queued);
    }

    #[test]
    fn test_printer_name_from_dir() {
        assert_eq!(Printer::name_from_dir("03-Zebra-HP"), "HP");
        assert_eq!(Printer::name_from_dir("Canon"), "Canon");
        assert_eq!(Printer::name_from_dir("Epson-"), "");
    }
}
