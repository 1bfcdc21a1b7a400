// File list component - 파일 선택 리스트
//
// 라벨 파일 목록, 마킹(*), 커서, 스크롤, 하단 "Found N Files" 상태 줄

use crate::models::view_model::FileSelectionView;
use crate::ui::Theme;
use crate::utils::text::truncate_label;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// 파일 리스트 제목
pub const FILE_LIST_TITLE: &str = "Files";
/// 로드 전 표시 문구
pub const LOADING_TEXT: &str = "Loading Files...";

/// 파일 선택 리스트 컴포넌트
pub struct FileList<'a> {
    /// 표시할 스냅샷 (None이면 로딩 중)
    view: Option<&'a FileSelectionView>,
    /// 커서 위치
    cursor: usize,
    /// 스크롤 오프셋
    scroll_offset: usize,
    /// 포커스 여부 (다이얼로그가 떠 있으면 false)
    focused: bool,
    active_border_color: Color,
    inactive_border_color: Color,
    bg_color: Color,
    normal_color: Color,
    cursor_color: Color,
    cursor_bg_color: Color,
    marked_color: Color,
    status_color: Color,
}

impl Default for FileList<'_> {
    fn default() -> Self {
        Self {
            view: None,
            cursor: 0,
            scroll_offset: 0,
            focused: true,
            active_border_color: Color::Rgb(0, 120, 212),
            inactive_border_color: Color::Rgb(60, 60, 60),
            bg_color: Color::Rgb(30, 30, 30),
            normal_color: Color::Rgb(212, 212, 212),
            cursor_color: Color::Rgb(255, 255, 255),
            cursor_bg_color: Color::Rgb(0, 120, 212),
            marked_color: Color::Rgb(255, 215, 0),
            status_color: Color::Rgb(78, 201, 176),
        }
    }
}

impl<'a> FileList<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(mut self, view: &'a FileSelectionView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.active_border_color = theme.panel_active_border.to_color();
        self.inactive_border_color = theme.panel_inactive_border.to_color();
        self.bg_color = theme.panel_bg.to_color();
        self.normal_color = theme.file_normal.to_color();
        self.cursor_color = theme.file_selected.to_color();
        self.cursor_bg_color = theme.file_selected_bg.to_color();
        self.marked_color = theme.file_marked.to_color();
        self.status_color = theme.success.to_color();
        self
    }

    fn border_color(&self) -> Color {
        if self.focused {
            self.active_border_color
        } else {
            self.inactive_border_color
        }
    }

    /// 단일 행 렌더링
    fn render_row(&self, label: &str, is_cursor: bool, is_marked: bool, area: Rect, buf: &mut Buffer) {
        let show_cursor = is_cursor && self.focused;
        let (fg, bg) = match (show_cursor, is_marked) {
            (true, true) => (self.marked_color, Some(self.cursor_bg_color)),
            (true, false) => (self.cursor_color, Some(self.cursor_bg_color)),
            (false, true) => (self.marked_color, None),
            (false, false) => (self.normal_color, None),
        };

        let mut style = Style::default().fg(fg);
        if let Some(bg) = bg {
            style = style.bg(bg);
            buf.set_style(area, Style::default().bg(bg));
        }
        if is_marked {
            style = style.add_modifier(Modifier::BOLD);
        }

        let marker = if is_marked { "*" } else { " " };
        let text = truncate_label(label, (area.width as usize).saturating_sub(2));
        let line = Line::from(vec![
            Span::styled(marker, style),
            Span::styled(" ", style),
            Span::styled(text, style),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

impl Widget for FileList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color()))
            .title(Span::styled(
                format!(" {} ", FILE_LIST_TITLE),
                Style::default()
                    .fg(self.normal_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(self.bg_color));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 {
            return;
        }

        let Some(view) = self.view else {
            let line = Line::from(Span::styled(
                LOADING_TEXT,
                Style::default()
                    .fg(self.normal_color)
                    .add_modifier(Modifier::DIM),
            ));
            buf.set_line(inner.x + 1, inner.y, &line, inner.width.saturating_sub(1));
            return;
        };

        // 마지막 줄: 구분선 없이 상태 표시
        let list_height = inner.height.saturating_sub(2) as usize;
        let status_y = inner.y + inner.height - 1;

        let end = (self.scroll_offset + list_height).min(view.rows.len());
        let start = self.scroll_offset.min(end);
        for (offset, row) in view.rows[start..end].iter().enumerate() {
            let index = start + offset;
            let row_area = Rect::new(inner.x, inner.y + offset as u16, inner.width, 1);
            self.render_row(
                &row.label,
                index == self.cursor,
                view.marked.contains(&index),
                row_area,
                buf,
            );
        }

        if view.rows.is_empty() && list_height > 0 {
            let line = Line::from(Span::styled(
                " (No files)",
                Style::default().fg(self.inactive_border_color),
            ));
            buf.set_line(inner.x, inner.y, &line, inner.width);
        }

        let status = Line::from(Span::styled(
            format!(" {}", view.status),
            Style::default()
                .fg(self.status_color)
                .add_modifier(Modifier::BOLD),
        ));
        buf.set_line(inner.x, status_y, &status, inner.width);
    }
}

/// 커서가 보이도록 스크롤 오프셋 조정
pub fn adjust_scroll(cursor: usize, scroll_offset: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return 0;
    }
    if cursor < scroll_offset {
        cursor
    } else if cursor >= scroll_offset + visible_rows {
        cursor + 1 - visible_rows
    } else {
        scroll_offset
    }
}
