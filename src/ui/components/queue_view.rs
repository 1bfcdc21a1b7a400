// Queue view component - 프린터 큐 영역
//
// 패널 배치(열 + 세로 기준)를 실제 Rect로 풀어 각 프린터 패널을 그린다.
// 영역을 벗어나는 부분은 잘린다.

use crate::core::panel_layout::{PanelLayoutEngine, VerticalAnchor};
use crate::models::view_model::PrinterPanelView;
use crate::ui::Theme;
use crate::utils::text::{truncate_end, truncate_label};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

/// 패널이 하나도 없을 때 문구
pub const QUEUE_EMPTY_TEXT: &str = "Queue Empty";

/// 테두리 2줄 + 빈 줄 + 라벨 수 줄
const PANEL_CHROME_HEIGHT: u16 = 4;

/// 패널 높이 (큐 행 수 기준)
pub fn panel_height(rows: usize) -> u16 {
    u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_add(PANEL_CHROME_HEIGHT)
}

/// 패널별 Rect 계산 (영역 기준 절대 좌표, 잘리기 전)
///
/// `panels`는 생성 순서대로여야 한다. `Below(k)`는 k번 패널의 아래 변에서 시작한다.
pub fn resolve_panel_rects(panels: &[PrinterPanelView], area: Rect) -> Vec<Rect> {
    let mut rects: Vec<Rect> = Vec::with_capacity(panels.len());
    for panel in panels {
        let span = PanelLayoutEngine::column_span(panel.placement.column, area.width);
        let y = match panel.placement.anchor {
            VerticalAnchor::Top => area.y,
            VerticalAnchor::Below(order) => rects
                .get(order)
                .map(|above| above.y.saturating_add(above.height))
                .unwrap_or(area.y),
        };
        rects.push(Rect::new(
            area.x + span.x,
            y,
            span.width,
            panel_height(panel.rows.len()),
        ));
    }
    rects
}

/// 프린터 큐 영역 컴포넌트
pub struct QueueView<'a> {
    panels: &'a [PrinterPanelView],
    bg_color: Color,
    border_color: Color,
    title_color: Color,
    item_color: Color,
    label_count_color: Color,
    empty_color: Color,
}

impl Default for QueueView<'_> {
    fn default() -> Self {
        Self {
            panels: &[],
            bg_color: Color::Rgb(30, 30, 30),
            border_color: Color::Rgb(86, 156, 214),
            title_color: Color::Rgb(255, 255, 255),
            item_color: Color::Rgb(212, 212, 212),
            label_count_color: Color::Rgb(255, 215, 0),
            empty_color: Color::Rgb(100, 100, 100),
        }
    }
}

impl<'a> QueueView<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 패널 목록 설정 (생성 순서)
    pub fn panels(mut self, panels: &'a [PrinterPanelView]) -> Self {
        self.panels = panels;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.bg_primary.to_color();
        self.border_color = theme.queue_border.to_color();
        self.title_color = theme.queue_title.to_color();
        self.item_color = theme.file_normal.to_color();
        self.label_count_color = theme.label_count.to_color();
        self.empty_color = theme.panel_inactive_border.to_color();
        self
    }

    fn render_panel(&self, panel: &PrinterPanelView, rect: Rect, buf: &mut Buffer) {
        let title = truncate_end(&panel.title, (rect.width as usize).saturating_sub(4));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .title(Span::styled(
                format!(" {} ", title),
                Style::default()
                    .fg(self.title_color)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(self.bg_color));

        let inner = block.inner(rect);
        block.render(rect, buf);
        if inner.width == 0 {
            return;
        }

        let max_width = (inner.width as usize).saturating_sub(1);
        let mut y = inner.y;
        let bottom = inner.y + inner.height;
        for row in &panel.rows {
            if y >= bottom {
                return;
            }
            let line = Line::from(Span::styled(
                format!(" {}", truncate_label(&row.label, max_width)),
                Style::default().fg(self.item_color),
            ));
            buf.set_line(inner.x, y, &line, inner.width);
            y += 1;
        }

        // 빈 줄 다음에 라벨 수
        y += 1;
        if y < bottom {
            let line = Line::from(Span::styled(
                format!(" {}", panel.label_count),
                Style::default()
                    .fg(self.label_count_color)
                    .add_modifier(Modifier::BOLD),
            ));
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

impl Widget for QueueView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.bg_color));

        if self.panels.is_empty() {
            let text = QUEUE_EMPTY_TEXT;
            let x = area.x + area.width.saturating_sub(text.len() as u16) / 2;
            let y = area.y + area.height / 2;
            let line = Line::from(Span::styled(
                text,
                Style::default()
                    .fg(self.empty_color)
                    .add_modifier(Modifier::ITALIC),
            ));
            buf.set_line(x, y, &line, area.width);
            return;
        }

        let rects = resolve_panel_rects(self.panels, area);
        for (panel, rect) in self.panels.iter().zip(rects) {
            let visible = rect.intersection(area);
            if visible.is_empty() {
                continue;
            }
            // 잘린 패널은 별도 버퍼에 그린 뒤 보이는 부분만 옮긴다
            if visible == rect {
                self.render_panel(panel, rect, buf);
            } else {
                let mut scratch = Buffer::empty(rect);
                self.render_panel(panel, rect, &mut scratch);
                for y in visible.top()..visible.bottom() {
                    for x in visible.left()..visible.right() {
                        if let (Some(src), Some(dst)) = (scratch.cell((x, y)), buf.cell_mut((x, y)))
                        {
                            *dst = src.clone();
                        }
                    }
                }
            }
        }
    }
}
