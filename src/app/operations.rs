use super::*;
use crate::core::{Operation, WorkflowEvent, WorkflowState};

impl App {
    /// 커서 위치 파일 마킹 토글 후 한 칸 아래로
    pub fn toggle_mark_at_cursor(&mut self) {
        if self.screen.file_rows() == 0 {
            return;
        }
        if self.dispatch(WorkflowEvent::ToggleMark(self.file_cursor)) {
            self.move_cursor_down();
        }
    }

    pub fn mark_all(&mut self) {
        self.dispatch(WorkflowEvent::MarkAll);
    }

    pub fn unmark_all(&mut self) {
        self.dispatch(WorkflowEvent::UnmarkAll);
    }

    /// Enter: 선택 확정 또는 다이얼로그 항목 선택
    pub fn accept(&mut self) {
        let Some(before) = self.workflow.as_ref().map(|w| w.state().clone()) else {
            return;
        };

        match before {
            WorkflowState::Selecting => {
                if self.screen.marked_count() == 0 {
                    self.set_toast("Mark files with Space first");
                }
                self.dispatch(WorkflowEvent::Accept);
            }
            WorkflowState::ChoosingOperation { marked } => {
                let choice = self.dialog_cursor;
                if self.dispatch(WorkflowEvent::Choose(choice)) {
                    match Operation::from_index(choice) {
                        Ok(Operation::AssignToPrinter) => {}
                        Ok(other) => self.set_toast(&format!(
                            "{} is not available yet ({} files unmarked)",
                            other.label(),
                            marked.len()
                        )),
                        Err(_) => {}
                    }
                }
            }
            WorkflowState::ChoosingPrinter { marked } => {
                let choice = self.dialog_cursor;
                let printer = self
                    .workflow
                    .as_ref()
                    .and_then(|w| w.printers().get(choice))
                    .map(|p| p.name.clone());
                if self.dispatch(WorkflowEvent::Choose(choice)) {
                    if let Some(name) = printer {
                        self.set_toast(&format!("{} files queued to {}", marked.len(), name));
                    }
                }
            }
        }
    }

    /// Esc: 다이얼로그 닫기 (마킹은 버려진다)
    pub fn cancel_dialog(&mut self) {
        if self.screen.dialog.is_visible() && self.dispatch(WorkflowEvent::Cancel) {
            self.set_toast("Cancelled");
        }
    }

    /// 워크플로에 이벤트 전달. 성공하면 true.
    ///
    /// 실패는 로그와 토스트로 알리고 화면 상태는 그대로 둔다.
    pub(super) fn dispatch(&mut self, event: WorkflowEvent) -> bool {
        let Some(workflow) = self.workflow.as_mut() else {
            self.set_toast("Still loading files");
            return false;
        };

        let dialog_before = self.screen.dialog.clone();
        match workflow.handle(event, &mut self.screen) {
            Ok(()) => {
                if self.screen.dialog != dialog_before {
                    self.dialog_cursor = 0;
                }
                self.clamp_cursors();
                true
            }
            Err(e) => {
                warn!(?event, error = %e, "workflow event rejected");
                self.set_toast(&format!("Error: {}", e));
                false
            }
        }
    }
}
