//! 표시 계층에 전달되는 불변 스냅샷
//!
//! 워크플로는 변경이 일어날 때마다 이 타입들을 만들어 `Display`에 넘기고,
//! 렌더링 계층은 스냅샷만 보고 화면을 그립니다.

#![allow(dead_code)]

use crate::core::panel_layout::PanelPlacement;
use crate::models::printable::PrintableItem;

/// 리스트 한 줄
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub id: usize,
    pub label: String,
    pub unit_count: u64,
}

impl From<&PrintableItem> for ItemRow {
    fn from(item: &PrintableItem) -> Self {
        Self {
            id: item.id,
            label: item.to_string(),
            unit_count: item.unit_count,
        }
    }
}

/// 파일 선택 화면 스냅샷
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileSelectionView {
    /// "Found N Files"
    pub status: String,
    pub rows: Vec<ItemRow>,
    /// 마킹된 인덱스 (마킹 순서)
    pub marked: Vec<usize>,
}

/// 프린터 패널 스냅샷
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterPanelView {
    pub order: usize,
    pub title: String,
    /// "LabelCount: N"
    pub label_count: String,
    pub unit_total: u64,
    pub rows: Vec<ItemRow>,
    pub placement: PanelPlacement,
}

/// 모달 선택 다이얼로그 스냅샷
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogView {
    #[default]
    Hidden,
    Options { title: String, options: Vec<String> },
}

impl DialogView {
    pub fn is_visible(&self) -> bool {
        matches!(self, DialogView::Options { .. })
    }

    pub fn option_count(&self) -> usize {
        match self {
            DialogView::Hidden => 0,
            DialogView::Options { options, .. } => options.len(),
        }
    }
}

/// 워크플로가 내보내는 화면 갱신 단위
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewUpdate {
    Files(FileSelectionView),
    Panel(PrinterPanelView),
    Dialog(DialogView),
}
