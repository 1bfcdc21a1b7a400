use crate::core::panel_layout::PanelPlacement;
use crate::core::selectable_list::SelectableList;
use crate::models::printable::PrintableItem;

/// 프린터별 작업 큐 패널
#[derive(Debug, Clone)]
pub struct PrinterPanel {
    /// 생성 순서 (0부터)
    pub order: usize,
    /// 프린터 이름 (패널 키)
    pub printer_name: String,
    /// 작업 큐
    pub queue: SelectableList<PrintableItem>,
    /// 큐 전체 라벨 수
    pub unit_total: u64,
    /// 배치 정보
    pub placement: PanelPlacement,
}

impl PrinterPanel {
    pub fn new(order: usize, printer_name: impl Into<String>, placement: PanelPlacement) -> Self {
        Self {
            order,
            printer_name: printer_name.into(),
            queue: SelectableList::new(),
            unit_total: 0,
            placement,
        }
    }

    /// 큐 끝에 항목 추가 후 합계 재계산
    pub fn append_all(&mut self, items: impl IntoIterator<Item = PrintableItem>) {
        for item in items {
            self.queue.push(item);
        }
        self.recompute_total();
    }

    /// 합계는 항상 현재 큐 내용에서 다시 계산한다
    fn recompute_total(&mut self) {
        self.unit_total = self.queue.iter().map(|item| item.unit_count).sum();
    }

    /// "LabelCount: N" 표시 문자열
    pub fn label_count_text(&self) -> String {
        format!("LabelCount: {}", self.unit_total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::panel_layout::{Column, VerticalAnchor};
    use std::path::PathBuf;

    fn item(id: usize, count: u64) -> PrintableItem {
        PrintableItem::new(id, format!("f{id}.txt"), PathBuf::from(format!("/f{id}.txt")), count)
    }

    fn placement() -> PanelPlacement {
        PanelPlacement {
            column: Column::Left,
            anchor: VerticalAnchor::Top,
        }
    }

    #[test]
    fn test_unit_total_tracks_queue() {
        let mut panel = PrinterPanel::new(0, "HP", placement());
        panel.append_all(vec![item(1, 3), item(2, 5), item(3, 2)]);
        assert_eq!(panel.unit_total, 10);

        panel.append_all(vec![item(4, 4)]);
        assert_eq!(panel.unit_total, 14);
        assert_eq!(panel.label_count_text(), "LabelCount: 14");
        assert_eq!(panel.queue.len(), 4);
    }

    #[test]
    fn test_empty_append_keeps_zero() {
        let mut panel = PrinterPanel::new(1, "Canon", placement());
        panel.append_all(Vec::new());
        assert_eq!(panel.unit_total, 0);
    }
}
