// Status bar component - 상태바 컴포넌트
//
// 워크플로 단계, 마킹 수, 큐에 들어간 파일 수, 토스트 메시지 표시

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 워크플로 단계 이름
    stage: &'a str,
    /// 남은 파일 수
    file_count: usize,
    /// 마킹된 파일 수
    marked_count: usize,
    /// 큐에 들어간 파일 수
    queued_count: usize,
    /// 프린터 패널 수
    panel_count: usize,
    /// 토스트 메시지 (있으면 오른쪽에 표시)
    toast: Option<&'a str>,
    /// 테마 이름
    theme_name: &'a str,
    bg_color: Color,
    fg_color: Color,
    highlight_color: Color,
    toast_color: Color,
    muted_color: Color,
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self {
            stage: "",
            file_count: 0,
            marked_count: 0,
            queued_count: 0,
            panel_count: 0,
            toast: None,
            theme_name: "",
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            highlight_color: Color::Yellow,
            toast_color: Color::Rgb(78, 201, 176),
            muted_color: Color::Rgb(100, 100, 100),
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(mut self, stage: &'a str) -> Self {
        self.stage = stage;
        self
    }

    pub fn file_count(mut self, count: usize) -> Self {
        self.file_count = count;
        self
    }

    pub fn marked_count(mut self, count: usize) -> Self {
        self.marked_count = count;
        self
    }

    pub fn queued_count(mut self, count: usize) -> Self {
        self.queued_count = count;
        self
    }

    pub fn panel_count(mut self, count: usize) -> Self {
        self.panel_count = count;
        self
    }

    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    pub fn theme_name(mut self, name: &'a str) -> Self {
        self.theme_name = name;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.highlight_color = theme.file_marked.to_color();
        self.toast_color = theme.success.to_color();
        self.muted_color = theme.panel_inactive_border.to_color();
        self
    }

    fn left_text(&self) -> String {
        format!(
            " [{}] {} files | {} queued in {} printers",
            self.stage, self.file_count, self.queued_count, self.panel_count
        )
    }

    fn marked_text(&self) -> String {
        if self.marked_count > 0 {
            format!(" | {} marked", self.marked_count)
        } else {
            String::new()
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let left_info = self.left_text();
        let marked_info = self.marked_text();

        // 토스트가 있으면 테마 이름 대신 표시
        let (right_info, right_style) = match self.toast {
            Some(message) => (
                format!("{} ", message),
                Style::default()
                    .fg(self.toast_color)
                    .add_modifier(Modifier::BOLD),
            ),
            None => (
                format!("[{}] ", self.theme_name),
                Style::default().fg(self.muted_color),
            ),
        };

        let used = left_info.width() + marked_info.width() + right_info.width();
        let padding = " ".repeat((area.width as usize).saturating_sub(used));

        let line = Line::from(vec![
            Span::styled(left_info, Style::default().fg(self.fg_color)),
            Span::styled(marked_info, Style::default().fg(self.highlight_color)),
            Span::raw(padding),
            Span::styled(right_info, right_style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(buf: &Buffer) -> String {
        (0..buf.area.width)
            .filter_map(|x| buf.cell((x, 0)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_status_bar_creation() {
        let status_bar = StatusBar::new().stage("selecting").file_count(10).marked_count(2);

        assert_eq!(status_bar.stage, "selecting");
        assert_eq!(status_bar.file_count, 10);
        assert_eq!(status_bar.marked_text(), " | 2 marked");
    }

    #[test]
    fn test_toast_replaces_theme_name() {
        let area = Rect::new(0, 0, 80, 1);

        let mut buf = Buffer::empty(area);
        StatusBar::new().theme_name("dark").render(area, &mut buf);
        assert!(line_text(&buf).trim_end().ends_with("[dark]"));

        let mut buf = Buffer::empty(area);
        StatusBar::new()
            .theme_name("dark")
            .toast(Some("Delete is not available yet"))
            .render(area, &mut buf);
        let text = line_text(&buf);
        assert!(text.contains("Delete is not available yet"));
        assert!(!text.contains("[dark]"));
    }
}
