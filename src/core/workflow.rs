//! 파일 출력 워크플로 상태 머신
//!
//! 흐름: 파일 선택 → 작업 선택 → (프린터 배정일 때) 프린터 선택 → 큐 갱신 → 파일 선택.
//!
//! 상태 전이 자체는 `transition` 순수 함수이고, `PrintFilesWorkflow`가
//! 그 결과(Effect)를 자신이 소유한 리스트/패널에 적용한 뒤 스냅샷을 내보낸다.

use crate::core::display::Display;
use crate::core::panel_layout::PanelLayoutEngine;
use crate::core::selectable_list::SelectableList;
use crate::models::view_model::{
    DialogView, FileSelectionView, ItemRow, PrinterPanelView, ViewUpdate,
};
use crate::models::{PrintableItem, Printer, PrinterPanel};
use crate::system::catalog::FileCatalog;
use crate::utils::error::{PrintFlowError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// 작업 선택 다이얼로그 제목
pub const OPERATION_DIALOG_TITLE: &str = "File Operation";
/// 프린터 선택 다이얼로그 제목
pub const PRINTER_DIALOG_TITLE: &str = "Select Printer";

/// 마킹된 파일에 적용할 작업
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AssignToPrinter,
    Duplicate,
    Split,
    Delete,
}

impl Operation {
    /// 다이얼로그에 표시되는 순서
    pub const ALL: [Operation; 4] = [
        Operation::AssignToPrinter,
        Operation::Duplicate,
        Operation::Split,
        Operation::Delete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::AssignToPrinter => "Select Printer",
            Operation::Duplicate => "Duplicate",
            Operation::Split => "Split",
            Operation::Delete => "Delete",
        }
    }

    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(PrintFlowError::IndexOutOfRange {
                index,
                len: Self::ALL.len(),
            })
    }
}

/// 워크플로 상태
///
/// 선택 이후 단계는 작업 대상인 마킹 인덱스를 함께 들고 다닌다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Selecting,
    ChoosingOperation {
        marked: Vec<usize>,
    },
    ChoosingPrinter {
        marked: Vec<usize>,
    },
}

impl WorkflowState {
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Selecting => "selecting",
            WorkflowState::ChoosingOperation { .. } => "choosing_operation",
            WorkflowState::ChoosingPrinter { .. } => "choosing_printer",
        }
    }
}

/// 사용자 입력 이벤트 (인덱스 하나 또는 없음)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowEvent {
    ToggleMark(usize),
    MarkAll,
    UnmarkAll,
    Accept,
    /// 현재 다이얼로그의 항목 선택 (작업 또는 프린터)
    Choose(usize),
    Cancel,
}

/// 전이 결과로 수행할 변경
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ToggleMark(usize),
    MarkAll,
    UnmarkAll,
    /// 파일 리스트의 마킹을 꺼내 비운다
    TakeMarks,
    /// 파일을 프린터 큐로 옮긴다
    Route { indices: Vec<usize>, printer: usize },
    /// 아직 동작이 없는 작업
    Skipped(Operation),
}

/// 전이에 필요한 읽기 전용 정보
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    /// 파일 리스트의 현재 마킹
    pub marked: &'a [usize],
    pub file_count: usize,
    pub printer_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: WorkflowState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn to(next: WorkflowState, effects: Vec<Effect>) -> Self {
        Self { next, effects }
    }

    fn stay(state: &WorkflowState) -> Self {
        Self::to(state.clone(), Vec::new())
    }
}

/// (상태, 이벤트) → (다음 상태, Effect 목록)
///
/// 현재 상태에 해당하지 않는 이벤트는 무시한다.
/// 범위를 벗어난 인덱스는 호출자 계약 위반이므로 에러로 돌려준다.
pub fn transition(
    state: &WorkflowState,
    event: &WorkflowEvent,
    ctx: &TransitionContext<'_>,
) -> Result<Transition> {
    use WorkflowEvent as E;
    use WorkflowState as S;

    match (state, event) {
        (S::Selecting, E::ToggleMark(index)) => {
            PrintFlowError::check_index(*index, ctx.file_count)?;
            Ok(Transition::to(S::Selecting, vec![Effect::ToggleMark(*index)]))
        }
        (S::Selecting, E::MarkAll) => Ok(Transition::to(S::Selecting, vec![Effect::MarkAll])),
        (S::Selecting, E::UnmarkAll) => {
            Ok(Transition::to(S::Selecting, vec![Effect::UnmarkAll]))
        }
        (S::Selecting, E::Accept) => {
            // 빈 선택으로 확정하면 선택 단계에 머문다
            let next = if ctx.marked.is_empty() {
                S::Selecting
            } else {
                S::ChoosingOperation {
                    marked: ctx.marked.to_vec(),
                }
            };
            Ok(Transition::to(next, vec![Effect::TakeMarks]))
        }
        (S::ChoosingOperation { marked }, E::Choose(index)) => {
            match Operation::from_index(*index)? {
                Operation::AssignToPrinter => Ok(Transition::to(
                    S::ChoosingPrinter {
                        marked: marked.clone(),
                    },
                    Vec::new(),
                )),
                other => Ok(Transition::to(S::Selecting, vec![Effect::Skipped(other)])),
            }
        }
        (S::ChoosingPrinter { marked }, E::Choose(index)) => {
            PrintFlowError::check_index(*index, ctx.printer_count)?;
            Ok(Transition::to(
                S::Selecting,
                vec![Effect::Route {
                    indices: marked.clone(),
                    printer: *index,
                }],
            ))
        }
        (S::ChoosingOperation { .. } | S::ChoosingPrinter { .. }, E::Cancel) => {
            Ok(Transition::to(S::Selecting, Vec::new()))
        }
        (state, _) => Ok(Transition::stay(state)),
    }
}

/// 한 작업 세션
///
/// 파일 리스트, 프린터 목록, 패널, 패널 배치 엔진을 모두 소유한다.
/// 초기화(`initialize`)가 끝나야만 만들어지므로 로드 전에 입력을 받을 수 없다.
#[derive(Debug)]
pub struct PrintFilesWorkflow {
    state: WorkflowState,
    files: SelectableList<PrintableItem>,
    printers: Vec<Printer>,
    /// 생성 순서대로 저장 (인덱스 == order)
    panels: Vec<PrinterPanel>,
    layout: PanelLayoutEngine,
}

impl PrintFilesWorkflow {
    /// 카탈로그를 읽어 세션 생성
    ///
    /// 로드 실패는 그대로 호출자에게 전달되고 재시도하지 않는다.
    pub async fn initialize<C: FileCatalog>(
        catalog: &C,
        files_dir: &Path,
        printers_dir: &Path,
    ) -> Result<Self> {
        let items = catalog.list_items(files_dir).await?;
        let printers = catalog.list_printers(printers_dir).await?;
        info!(
            files = items.len(),
            printers = printers.len(),
            "catalog loaded"
        );
        Ok(Self::new(items, printers))
    }

    pub fn new(items: Vec<PrintableItem>, printers: Vec<Printer>) -> Self {
        Self {
            state: WorkflowState::Selecting,
            files: items.into_iter().collect(),
            printers,
            panels: Vec::new(),
            layout: PanelLayoutEngine::new(),
        }
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn files(&self) -> &SelectableList<PrintableItem> {
        &self.files
    }

    pub fn printers(&self) -> &[Printer] {
        &self.printers
    }

    /// 생성 순서대로의 패널 목록
    pub fn panels(&self) -> &[PrinterPanel] {
        &self.panels
    }

    pub fn panel(&self, printer_name: &str) -> Option<&PrinterPanel> {
        self.panels.iter().find(|p| p.printer_name == printer_name)
    }

    /// 남은 파일의 라벨 합계
    pub fn available_units(&self) -> u64 {
        self.files.iter().map(|item| item.unit_count).sum()
    }

    /// "Found N Files"
    pub fn status_text(&self) -> String {
        format!("Found {} Files", self.available_units())
    }

    /// 이벤트 하나를 끝까지 처리
    ///
    /// 에러가 나면 상태는 바뀌지 않는다.
    pub fn handle(&mut self, event: WorkflowEvent, display: &mut impl Display) -> Result<()> {
        let ctx = TransitionContext {
            marked: self.files.marked(),
            file_count: self.files.len(),
            printer_count: self.printers.len(),
        };
        let Transition { next, effects } = transition(&self.state, &event, &ctx)?;

        let mut touched = Vec::new();
        for effect in effects {
            if let Some(order) = self.apply(effect)? {
                touched.push(order);
            }
        }

        if next != self.state {
            debug!(from = self.state.name(), to = next.name(), ?event, "workflow transition");
        }
        self.state = next;

        self.emit(display, &touched);
        Ok(())
    }

    /// 전체 스냅샷 전송 (초기 화면용)
    pub fn emit_all(&self, display: &mut impl Display) {
        let all: Vec<usize> = (0..self.panels.len()).collect();
        self.emit(display, &all);
    }

    fn emit(&self, display: &mut impl Display, panels: &[usize]) {
        display.update(ViewUpdate::Files(self.file_selection_view()));
        for &order in panels {
            if let Some(view) = self.panel_view(order) {
                display.update(ViewUpdate::Panel(view));
            }
        }
        display.update(ViewUpdate::Dialog(self.dialog_view()));
    }

    /// Effect 적용. 패널을 건드렸으면 그 생성 순서를 반환한다.
    fn apply(&mut self, effect: Effect) -> Result<Option<usize>> {
        match effect {
            Effect::ToggleMark(index) => {
                self.files.toggle_mark(index)?;
            }
            Effect::MarkAll => self.files.mark_all(),
            Effect::UnmarkAll => self.files.unmark_all(),
            Effect::TakeMarks => {
                self.files.accept_marked();
            }
            Effect::Route { indices, printer } => {
                return self.route(&indices, printer).map(Some);
            }
            Effect::Skipped(operation) => {
                warn!(operation = operation.label(), "operation not implemented, marks discarded");
            }
        }
        Ok(None)
    }

    /// 파일 리스트에서 꺼내 프린터 큐 끝에 붙인다
    fn route(&mut self, indices: &[usize], printer: usize) -> Result<usize> {
        let printer_name = self
            .printers
            .get(printer)
            .map(|p| p.name.clone())
            .ok_or(PrintFlowError::IndexOutOfRange {
                index: printer,
                len: self.printers.len(),
            })?;

        let mut items = self.files.remove_and_collect(indices)?;
        for item in &mut items {
            item.queued = true;
        }
        let moved = items.len();

        let order = self.panel_order_for(&printer_name);
        let panel = &mut self.panels[order];
        panel.append_all(items);

        info!(
            printer = %printer_name,
            files = moved,
            unit_total = panel.unit_total,
            "files routed to printer"
        );
        Ok(order)
    }

    /// 프린터 이름으로 패널 찾기, 없으면 새로 배치해 생성
    fn panel_order_for(&mut self, printer_name: &str) -> usize {
        if let Some(order) = self
            .panels
            .iter()
            .position(|p| p.printer_name == printer_name)
        {
            return order;
        }

        let order = self.panels.len();
        let placement = self.layout.place_panel(order);
        debug!(printer = printer_name, order, ?placement, "printer panel created");
        self.panels
            .push(PrinterPanel::new(order, printer_name, placement));
        order
    }

    pub fn file_selection_view(&self) -> FileSelectionView {
        FileSelectionView {
            status: self.status_text(),
            rows: self.files.iter().map(ItemRow::from).collect(),
            marked: self.files.marked().to_vec(),
        }
    }

    pub fn panel_view(&self, order: usize) -> Option<PrinterPanelView> {
        let panel = self.panels.get(order)?;
        Some(PrinterPanelView {
            order: panel.order,
            title: panel.printer_name.clone(),
            label_count: panel.label_count_text(),
            unit_total: panel.unit_total,
            rows: panel.queue.iter().map(ItemRow::from).collect(),
            placement: panel.placement,
        })
    }

    pub fn dialog_view(&self) -> DialogView {
        match self.state {
            WorkflowState::Selecting => DialogView::Hidden,
            WorkflowState::ChoosingOperation { .. } => DialogView::Options {
                title: OPERATION_DIALOG_TITLE.to_string(),
                options: Operation::ALL
                    .iter()
                    .map(|op| op.label().to_string())
                    .collect(),
            },
            WorkflowState::ChoosingPrinter { .. } => DialogView::Options {
                title: PRINTER_DIALOG_TITLE.to_string(),
                options: self.printers.iter().map(|p| p.name.clone()).collect(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::display::RecordingDisplay;
    use crate::core::panel_layout::{Column, VerticalAnchor};
    use std::path::PathBuf;

    fn item(id: usize, name: &str, count: u64) -> PrintableItem {
        PrintableItem::new(id, name, PathBuf::from(format!("/labels/{name}")), count)
    }

    fn printer(id: usize, name: &str) -> Printer {
        Printer::new(id, name, PathBuf::from(format!("/printers/{id:02}-{name}")))
    }

    fn scenario() -> PrintFilesWorkflow {
        PrintFilesWorkflow::new(
            vec![item(1, "a.txt", 5), item(2, "b.txt", 3)],
            vec![printer(1, "HP"), printer(2, "Canon")],
        )
    }

    fn ctx(marked: &[usize]) -> TransitionContext<'_> {
        TransitionContext {
            marked,
            file_count: 4,
            printer_count: 2,
        }
    }

    fn route_to(
        workflow: &mut PrintFilesWorkflow,
        display: &mut RecordingDisplay,
        indices: &[usize],
        printer: usize,
    ) {
        for &i in indices {
            workflow.handle(WorkflowEvent::ToggleMark(i), display).unwrap();
        }
        workflow.handle(WorkflowEvent::Accept, display).unwrap();
        workflow.handle(WorkflowEvent::Choose(0), display).unwrap();
        workflow
            .handle(WorkflowEvent::Choose(printer), display)
            .unwrap();
    }

    #[test]
    fn test_operation_labels_are_fixed() {
        let labels: Vec<&str> = Operation::ALL.iter().map(|op| op.label()).collect();
        assert_eq!(labels, vec!["Select Printer", "Duplicate", "Split", "Delete"]);
        assert!(Operation::from_index(4).is_err());
    }

    #[test]
    fn test_transition_empty_accept_is_noop() {
        let t = transition(&WorkflowState::Selecting, &WorkflowEvent::Accept, &ctx(&[])).unwrap();
        assert_eq!(t.next, WorkflowState::Selecting);
        assert_eq!(t.effects, vec![Effect::TakeMarks]);
    }

    #[test]
    fn test_transition_accept_captures_marks() {
        let t = transition(
            &WorkflowState::Selecting,
            &WorkflowEvent::Accept,
            &ctx(&[2, 0]),
        )
        .unwrap();
        assert_eq!(t.next, WorkflowState::ChoosingOperation { marked: vec![2, 0] });
    }

    #[test]
    fn test_transition_operation_choice() {
        let state = WorkflowState::ChoosingOperation { marked: vec![1] };

        let assign = transition(&state, &WorkflowEvent::Choose(0), &ctx(&[])).unwrap();
        assert_eq!(assign.next, WorkflowState::ChoosingPrinter { marked: vec![1] });
        assert!(assign.effects.is_empty());

        for (index, op) in [(1, Operation::Duplicate), (2, Operation::Split), (3, Operation::Delete)] {
            let t = transition(&state, &WorkflowEvent::Choose(index), &ctx(&[])).unwrap();
            assert_eq!(t.next, WorkflowState::Selecting);
            assert_eq!(t.effects, vec![Effect::Skipped(op)]);
        }

        assert!(transition(&state, &WorkflowEvent::Choose(4), &ctx(&[])).is_err());
    }

    #[test]
    fn test_transition_printer_choice() {
        let state = WorkflowState::ChoosingPrinter { marked: vec![0, 3] };
        let t = transition(&state, &WorkflowEvent::Choose(1), &ctx(&[])).unwrap();
        assert_eq!(t.next, WorkflowState::Selecting);
        assert_eq!(
            t.effects,
            vec![Effect::Route {
                indices: vec![0, 3],
                printer: 1
            }]
        );

        let err = transition(&state, &WorkflowEvent::Choose(2), &ctx(&[])).unwrap_err();
        assert!(matches!(
            err,
            PrintFlowError::IndexOutOfRange { index: 2, len: 2 }
        ));
    }

    #[test]
    fn test_transition_ignores_out_of_state_events() {
        let state = WorkflowState::ChoosingPrinter { marked: vec![0] };
        let t = transition(&state, &WorkflowEvent::ToggleMark(1), &ctx(&[])).unwrap();
        assert_eq!(t.next, state);
        assert!(t.effects.is_empty());

        let t = transition(&WorkflowState::Selecting, &WorkflowEvent::Choose(0), &ctx(&[])).unwrap();
        assert_eq!(t.next, WorkflowState::Selecting);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_transition_cancel_discards() {
        let state = WorkflowState::ChoosingOperation { marked: vec![0] };
        let t = transition(&state, &WorkflowEvent::Cancel, &ctx(&[])).unwrap();
        assert_eq!(t.next, WorkflowState::Selecting);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_transition_rejects_bad_mark() {
        let err = transition(
            &WorkflowState::Selecting,
            &WorkflowEvent::ToggleMark(4),
            &ctx(&[]),
        )
        .unwrap_err();
        assert!(matches!(err, PrintFlowError::IndexOutOfRange { .. }));
    }

    #[test]
    fn test_end_to_end_route_to_canon() {
        let mut workflow = scenario();
        let mut display = RecordingDisplay::default();

        workflow.handle(WorkflowEvent::ToggleMark(0), &mut display).unwrap();
        workflow.handle(WorkflowEvent::Accept, &mut display).unwrap();
        assert_eq!(
            workflow.state(),
            &WorkflowState::ChoosingOperation { marked: vec![0] }
        );
        // 확정 즉시 리스트 마킹은 비워진다
        assert!(workflow.files().marked().is_empty());

        workflow.handle(WorkflowEvent::Choose(0), &mut display).unwrap();
        assert_eq!(
            workflow.state(),
            &WorkflowState::ChoosingPrinter { marked: vec![0] }
        );

        workflow.handle(WorkflowEvent::Choose(1), &mut display).unwrap();
        assert_eq!(workflow.state(), &WorkflowState::Selecting);

        let canon = workflow.panel("Canon").unwrap();
        assert_eq!(canon.placement.column, Column::Left);
        assert_eq!(canon.unit_total, 5);
        assert_eq!(canon.queue.get(0).map(|i| i.name.as_str()), Some("a.txt"));
        assert!(canon.queue.get(0).unwrap().queued);
        assert_eq!(workflow.status_text(), "Found 3 Files");
        assert_eq!(workflow.files().len(), 1);
    }

    #[test]
    fn test_end_to_end_emits_snapshots() {
        let mut workflow = scenario();
        let mut display = RecordingDisplay::default();
        route_to(&mut workflow, &mut display, &[0], 1);

        let last_files = display
            .updates
            .iter()
            .rev()
            .find_map(|u| match u {
                ViewUpdate::Files(view) => Some(view.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(last_files.status, "Found 3 Files");
        assert_eq!(last_files.rows.len(), 1);
        assert_eq!(last_files.rows[0].label, "b.txt (3)");

        let panel = display
            .updates
            .iter()
            .find_map(|u| match u {
                ViewUpdate::Panel(view) => Some(view.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(panel.title, "Canon");
        assert_eq!(panel.label_count, "LabelCount: 5");

        assert_eq!(
            display.updates.last(),
            Some(&ViewUpdate::Dialog(DialogView::Hidden))
        );
    }

    #[test]
    fn test_dialog_views_follow_state() {
        let mut workflow = scenario();
        let mut display = RecordingDisplay::default();
        workflow.handle(WorkflowEvent::ToggleMark(1), &mut display).unwrap();
        workflow.handle(WorkflowEvent::Accept, &mut display).unwrap();

        assert_eq!(
            workflow.dialog_view(),
            DialogView::Options {
                title: "File Operation".to_string(),
                options: vec![
                    "Select Printer".to_string(),
                    "Duplicate".to_string(),
                    "Split".to_string(),
                    "Delete".to_string()
                ],
            }
        );

        workflow.handle(WorkflowEvent::Choose(0), &mut display).unwrap();
        assert_eq!(
            workflow.dialog_view(),
            DialogView::Options {
                title: "Select Printer".to_string(),
                options: vec!["HP".to_string(), "Canon".to_string()],
            }
        );
    }

    #[test]
    fn test_delete_discards_marks_without_changes() {
        let mut workflow = scenario();
        let mut display = RecordingDisplay::default();

        workflow.handle(WorkflowEvent::ToggleMark(0), &mut display).unwrap();
        workflow.handle(WorkflowEvent::Accept, &mut display).unwrap();
        workflow.handle(WorkflowEvent::Choose(3), &mut display).unwrap();

        assert_eq!(workflow.state(), &WorkflowState::Selecting);
        assert!(workflow.files().marked().is_empty());
        assert_eq!(workflow.files().len(), 2);
        assert!(workflow.panels().is_empty());
        assert_eq!(workflow.status_text(), "Found 8 Files");
    }

    #[test]
    fn test_empty_accept_stays_selecting() {
        let mut workflow = scenario();
        let mut display = RecordingDisplay::default();
        workflow.handle(WorkflowEvent::Accept, &mut display).unwrap();
        assert_eq!(workflow.state(), &WorkflowState::Selecting);
        assert_eq!(workflow.dialog_view(), DialogView::Hidden);
    }

    #[test]
    fn test_invalid_mark_leaves_state() {
        let mut workflow = scenario();
        let mut display = RecordingDisplay::default();
        assert!(workflow
            .handle(WorkflowEvent::ToggleMark(5), &mut display)
            .is_err());
        assert!(display.updates.is_empty());
        assert_eq!(workflow.state(), &WorkflowState::Selecting);
    }

    #[test]
    fn test_panel_columns_follow_first_routing_order() {
        let items = (1..=6)
            .map(|id| item(id, &format!("f{id}.txt"), id as u64))
            .collect();
        let printers = vec![printer(1, "Epson"), printer(2, "Canon"), printer(3, "HP")];
        let mut workflow = PrintFilesWorkflow::new(items, printers);
        let mut display = RecordingDisplay::default();

        // HP, Canon, HP, Epson, Canon 순서로 라우팅
        route_to(&mut workflow, &mut display, &[0], 2);
        route_to(&mut workflow, &mut display, &[0, 1], 1);
        route_to(&mut workflow, &mut display, &[0], 2);
        route_to(&mut workflow, &mut display, &[0], 0);
        route_to(&mut workflow, &mut display, &[0], 1);

        let names: Vec<&str> = workflow
            .panels()
            .iter()
            .map(|p| p.printer_name.as_str())
            .collect();
        assert_eq!(names, vec!["HP", "Canon", "Epson"]);

        let columns: Vec<Column> = workflow.panels().iter().map(|p| p.placement.column).collect();
        assert_eq!(columns, vec![Column::Left, Column::Right, Column::Left]);
        assert_eq!(
            workflow.panel("Epson").unwrap().placement.anchor,
            VerticalAnchor::Below(0)
        );

        let hp = workflow.panel("HP").unwrap();
        assert_eq!(hp.queue.len(), 2);
        assert_eq!(
            hp.unit_total,
            hp.queue.iter().map(|i| i.unit_count).sum::<u64>()
        );
        assert!(workflow.files().is_empty());
    }

    #[test]
    fn test_routing_keeps_mark_order() {
        let items = vec![item(1, "a", 1), item(2, "b", 1), item(3, "c", 1), item(4, "d", 1)];
        let mut workflow = PrintFilesWorkflow::new(items, vec![printer(1, "HP")]);
        let mut display = RecordingDisplay::default();

        route_to(&mut workflow, &mut display, &[2, 0, 1], 0);

        let names: Vec<&str> = workflow
            .panel("HP")
            .unwrap()
            .queue
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, vec!["c", "a", "b"]);
        assert_eq!(workflow.files().get(0).map(|i| i.name.as_str()), Some("d"));
    }

    #[test]
    fn test_cancel_returns_to_selecting() {
        let mut workflow = scenario();
        let mut display = RecordingDisplay::default();
        workflow.handle(WorkflowEvent::ToggleMark(0), &mut display).unwrap();
        workflow.handle(WorkflowEvent::Accept, &mut display).unwrap();
        workflow.handle(WorkflowEvent::Choose(0), &mut display).unwrap();
        workflow.handle(WorkflowEvent::Cancel, &mut display).unwrap();

        assert_eq!(workflow.state(), &WorkflowState::Selecting);
        assert_eq!(workflow.files().len(), 2);
        assert!(workflow.files().marked().is_empty());
    }

    struct StaticCatalog {
        fail: bool,
    }

    impl FileCatalog for StaticCatalog {
        async fn list_items(&self, _folder: &Path) -> Result<Vec<PrintableItem>> {
            if self.fail {
                return Err(PrintFlowError::Catalog {
                    path: PathBuf::from("/labels/broken.txt"),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                });
            }
            Ok(vec![item(1, "a.txt", 5), item(2, "b.txt", 3)])
        }

        async fn list_printers(&self, _root: &Path) -> Result<Vec<Printer>> {
            Ok(vec![printer(1, "HP"), printer(2, "Canon")])
        }
    }

    #[tokio::test]
    async fn test_initialize_loads_catalog() {
        let catalog = StaticCatalog { fail: false };
        let workflow =
            PrintFilesWorkflow::initialize(&catalog, Path::new("/labels"), Path::new("/printers"))
                .await
                .unwrap();

        assert_eq!(workflow.files().len(), 2);
        assert_eq!(workflow.printers().len(), 2);
        assert_eq!(workflow.status_text(), "Found 8 Files");
        assert_eq!(workflow.state(), &WorkflowState::Selecting);
    }

    #[tokio::test]
    async fn test_initialize_failure_is_surfaced() {
        let catalog = StaticCatalog { fail: true };
        let result =
            PrintFilesWorkflow::initialize(&catalog, Path::new("/labels"), Path::new("/printers"))
                .await;
        assert!(matches!(result, Err(PrintFlowError::Catalog { .. })));
    }
}
