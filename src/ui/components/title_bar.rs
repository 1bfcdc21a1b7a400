// Title bar component - 상단 제목 줄
//
// 앱 이름과 라벨 파일 폴더 경로

use crate::ui::Theme;
use crate::utils::text::display_path;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const APP_TITLE: &str = "PrintFlow";

pub struct TitleBar<'a> {
    source: Option<&'a Path>,
    bg_color: Color,
    fg_color: Color,
}

impl Default for TitleBar<'_> {
    fn default() -> Self {
        Self {
            source: None,
            bg_color: Color::Rgb(0, 120, 212),
            fg_color: Color::Rgb(255, 255, 255),
        }
    }
}

impl<'a> TitleBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 라벨 파일 폴더
    pub fn source(mut self, path: &'a Path) -> Self {
        self.source = Some(path);
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.title_bar_bg.to_color();
        self.fg_color = theme.title_bar_fg.to_color();
        self
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let title = format!(" {} ", APP_TITLE);
        let mut spans = vec![Span::styled(
            title.clone(),
            Style::default()
                .fg(self.fg_color)
                .add_modifier(Modifier::BOLD),
        )];

        if let Some(path) = self.source {
            let room = (area.width as usize).saturating_sub(title.width() + 3);
            spans.push(Span::styled(
                format!("| {}", display_path(path, room)),
                Style::default().fg(self.fg_color),
            ));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_title_and_source() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        TitleBar::new()
            .source(Path::new("/srv/labels"))
            .render(area, &mut buf);

        let text: String = (0..area.width)
            .filter_map(|x| buf.cell((x, 0)).map(|cell| cell.symbol().to_string()))
            .collect();
        assert!(text.starts_with(" PrintFlow | /srv/labels"));
    }
}
