// Layout system - 화면 레이아웃
//
// 터미널 크기에 따른 레이아웃 모드:
// - 60+ cols, 15+ rows: 파일 선택 | 프린터 큐 2분할
// - 그보다 작으면 경고 메시지 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 15;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 파일 선택 + 프린터 큐
    Workflow,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 파일 선택 영역 : 프린터 큐 영역 비율
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRatio {
    pub files: u16,
    pub queue: u16,
}

impl Default for PanelRatio {
    fn default() -> Self {
        Self {
            files: 30,
            queue: 70,
        }
    }
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 상단 제목 영역
    pub title_bar: Rect,
    /// 파일 선택 영역
    pub file_selection: Rect,
    /// 프린터 큐 영역
    pub printer_queue: Rect,
    /// 상태바 영역
    pub status_bar: Rect,
    /// 하단 커맨드 바 영역
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    ratio: PanelRatio,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Workflow,
            ratio: PanelRatio::default(),
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Workflow
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = match self.mode {
            LayoutMode::TooSmall => LayoutAreas {
                warning: area,
                ..Default::default()
            },
            LayoutMode::Workflow => self.calculate_workflow_areas(area),
        };
    }

    fn calculate_workflow_areas(&self, area: Rect) -> LayoutAreas {
        // 제목 | 본문 | 상태바 | 커맨드바
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(self.ratio.files),
                Constraint::Percentage(self.ratio.queue),
            ])
            .split(vertical_chunks[1]);

        LayoutAreas {
            title_bar: vertical_chunks[0],
            file_selection: body_chunks[0],
            printer_queue: body_chunks[1],
            status_bar: vertical_chunks[2],
            command_bar: vertical_chunks[3],
            warning: Rect::default(),
        }
    }

    /// 현재 레이아웃 모드 반환
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// 레이아웃 영역 반환
    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    /// 터미널 크기 반환
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// 파일 리스트에 보이는 행 수 (테두리, 상태 줄 제외)
    pub fn visible_file_rows(&self) -> usize {
        self.areas.file_selection.height.saturating_sub(4) as usize
    }
}
