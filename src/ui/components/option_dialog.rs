// Option dialog component - 모달 선택 다이얼로그
//
// "File Operation" / "Select Printer" 선택지를 화면 중앙에 띄운다.

use crate::ui::Theme;
use crate::utils::text::truncate_end;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 다이얼로그 내부 좌우 패딩
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩
const DIALOG_V_PADDING: u16 = 1;
/// 한 번에 보이는 최대 선택지 수
const MAX_VISIBLE_OPTIONS: usize = 10;

const HINT: &str = "↑↓:Move Enter:Select Esc:Cancel";

pub struct OptionDialog<'a> {
    title: &'a str,
    options: &'a [String],
    selected_index: usize,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    title_color: Color,
    selected_fg: Color,
    selected_bg: Color,
    muted_color: Color,
}

impl Default for OptionDialog<'_> {
    fn default() -> Self {
        Self {
            title: "",
            options: &[],
            selected_index: 0,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            selected_fg: Color::Rgb(255, 255, 255),
            selected_bg: Color::Rgb(0, 120, 212),
            muted_color: Color::Rgb(100, 100, 100),
        }
    }
}

impl<'a> OptionDialog<'a> {
    pub fn new(title: &'a str, options: &'a [String]) -> Self {
        Self {
            title,
            options,
            ..Self::default()
        }
    }

    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.panel_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.accent.to_color();
        self.title_color = theme.accent.to_color();
        self.selected_fg = theme.file_selected.to_color();
        self.selected_bg = theme.file_selected_bg.to_color();
        self.muted_color = theme.panel_inactive_border.to_color();
        self
    }

    /// 다이얼로그 영역 계산 (화면 중앙)
    fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let longest = self
            .options
            .iter()
            .map(|option| option.width())
            .chain([self.title.width(), HINT.width()])
            .max()
            .unwrap_or(0) as u16;
        let list_lines = self.options.len().clamp(1, MAX_VISIBLE_OPTIONS) as u16;

        let width = (longest + DIALOG_H_PADDING * 2 + 4)
            .max(30)
            .min(sw.saturating_sub(4));
        let height = (list_lines + 4).min(sh.saturating_sub(2));

        Rect {
            x: screen.x + sw.saturating_sub(width) / 2,
            y: screen.y + sh.saturating_sub(height) / 2,
            width,
            height,
        }
    }
}

impl Widget for OptionDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = self.calculate_area(area);
        if dialog_area.width < 4 || dialog_area.height < 3 {
            return;
        }

        // 배경 클리어
        Clear.render(dialog_area, buf);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        block.render(dialog_area, buf);

        let inner = Rect {
            x: dialog_area.x + DIALOG_H_PADDING,
            y: dialog_area.y + DIALOG_V_PADDING,
            width: dialog_area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: dialog_area.height.saturating_sub(3),
        };

        let normal_style = Style::default().fg(self.fg_color);
        let selected_style = Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD);

        let visible_height = inner.height as usize;
        let scroll = if visible_height > 0 && self.selected_index >= visible_height {
            self.selected_index + 1 - visible_height
        } else {
            0
        };

        for (i, option) in self
            .options
            .iter()
            .skip(scroll)
            .take(visible_height)
            .enumerate()
        {
            let actual_index = scroll + i;
            let style = if actual_index == self.selected_index {
                selected_style
            } else {
                normal_style
            };

            let label = truncate_end(
                &format!(" {}. {}", actual_index + 1, option),
                inner.width as usize,
            );
            let padding = (inner.width as usize).saturating_sub(label.width());
            let display = format!("{}{}", label, " ".repeat(padding));
            buf.set_string(inner.x, inner.y + i as u16, &display, style);
        }

        // 하단 힌트
        let hint = truncate_end(HINT, dialog_area.width.saturating_sub(2) as usize);
        let hint_x = dialog_area.x + dialog_area.width.saturating_sub(hint.width() as u16) / 2;
        let hint_y = dialog_area.y + dialog_area.height - 1;
        buf.set_string(hint_x, hint_y, hint, Style::default().fg(self.muted_color));
    }
}
