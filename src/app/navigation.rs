use super::*;
use crate::core::actions::Action;
use crate::ui::components::file_list::adjust_scroll;

impl App {
    /// 액션 실행 (키 바인딩 → 앱 동작)
    pub fn execute_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit(),
            Action::MoveUp => self.move_cursor_up(),
            Action::MoveDown => self.move_cursor_down(),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::ToggleMark => self.toggle_mark_at_cursor(),
            Action::MarkAll => self.mark_all(),
            Action::UnmarkAll => self.unmark_all(),
            Action::Accept => self.accept(),
            Action::Cancel => self.cancel_dialog(),
            Action::CycleTheme => self.cycle_theme(),
        }
    }

    /// 커서가 움직이는 리스트 길이 (다이얼로그가 떠 있으면 선택지 수)
    fn cursor_len(&self) -> usize {
        match self.key_context() {
            KeyContext::Dialog => self.screen.dialog.option_count(),
            KeyContext::Selecting => self.screen.file_rows(),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.key_context() {
            KeyContext::Dialog => &mut self.dialog_cursor,
            KeyContext::Selecting => &mut self.file_cursor,
        }
    }

    pub fn move_cursor_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
        self.adjust_scroll_offset();
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.cursor_len();
        let cursor = self.cursor_mut();
        if *cursor + 1 < len {
            *cursor += 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn go_to_top(&mut self) {
        *self.cursor_mut() = 0;
        self.adjust_scroll_offset();
    }

    pub fn go_to_bottom(&mut self) {
        let last = self.cursor_len().saturating_sub(1);
        *self.cursor_mut() = last;
        self.adjust_scroll_offset();
    }

    /// 리스트가 줄어든 뒤 커서를 범위 안으로 되돌린다
    pub(super) fn clamp_cursors(&mut self) {
        let rows = self.screen.file_rows();
        self.file_cursor = self.file_cursor.min(rows.saturating_sub(1));
        let options = self.screen.dialog.option_count();
        self.dialog_cursor = self.dialog_cursor.min(options.saturating_sub(1));
        self.adjust_scroll_offset();
    }

    /// 커서가 보이도록 파일 리스트 스크롤 조정
    pub fn adjust_scroll_offset(&mut self) {
        self.file_scroll = adjust_scroll(
            self.file_cursor,
            self.file_scroll,
            self.layout.visible_file_rows(),
        );
    }

    /// 다음 테마로 전환
    pub fn cycle_theme(&mut self) {
        self.theme_manager.cycle_theme();
        let name = self.theme_manager.current_name().to_string();
        self.set_toast(&format!("Theme: {}", name));
    }
}
