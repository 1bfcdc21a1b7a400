//! 프린터 큐 패널 배치
//!
//! 패널은 생성 순서대로 왼쪽/오른쪽 열을 번갈아 차지하고,
//! 같은 열의 직전 패널 바로 아래에 쌓인다.
//! 상태는 열별 마지막 패널 기억뿐이며 워크플로 세션마다 하나씩 소유한다.

#![allow(dead_code)]

/// 왼쪽 열 시작 여백
pub const LEFT_MARGIN: u16 = 1;
/// 왼쪽 열 너비 (%)
pub const LEFT_WIDTH_PERCENT: u16 = 49;
/// 오른쪽 열 시작 위치 (%)
pub const RIGHT_START_PERCENT: u16 = 51;
/// 오른쪽 열 끝 여백
pub const RIGHT_MARGIN: u16 = 1;

/// 패널 열
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

impl Column {
    /// 생성 순서로 열 결정
    pub fn for_order(creation_order: usize) -> Self {
        if creation_order % 2 == 0 {
            Column::Left
        } else {
            Column::Right
        }
    }
}

/// 세로 기준 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    /// 열의 맨 위
    Top,
    /// 해당 생성 순서 패널의 바로 아래
    Below(usize),
}

/// 패널 배치 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelPlacement {
    pub column: Column,
    pub anchor: VerticalAnchor,
}

/// 열의 가로 범위 (영역 기준 상대 좌표)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpan {
    pub x: u16,
    pub width: u16,
}

/// 패널 배치 엔진
#[derive(Debug, Clone, Default)]
pub struct PanelLayoutEngine {
    last_left: Option<usize>,
    last_right: Option<usize>,
}

impl PanelLayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// 새 패널 배치
    ///
    /// `creation_order`는 세션에서 처음 등장한 프린터마다 1씩 증가한다.
    pub fn place_panel(&mut self, creation_order: usize) -> PanelPlacement {
        let column = Column::for_order(creation_order);
        let last = match column {
            Column::Left => &mut self.last_left,
            Column::Right => &mut self.last_right,
        };

        let anchor = match last {
            Some(previous) => VerticalAnchor::Below(*previous),
            None => VerticalAnchor::Top,
        };
        *last = Some(creation_order);

        PanelPlacement { column, anchor }
    }

    /// 열별 기억 초기화
    pub fn reset(&mut self) {
        self.last_left = None;
        self.last_right = None;
    }

    /// 열의 가로 범위 계산
    ///
    /// 왼쪽: 여백 1칸 뒤 전체의 49%. 오른쪽: 51% 지점부터 끝 여백 1칸 전까지.
    pub fn column_span(column: Column, area_width: u16) -> ColumnSpan {
        match column {
            Column::Left => {
                let width = percent_of(area_width, LEFT_WIDTH_PERCENT)
                    .min(area_width.saturating_sub(LEFT_MARGIN));
                ColumnSpan {
                    x: LEFT_MARGIN.min(area_width),
                    width,
                }
            }
            Column::Right => {
                let x = percent_of(area_width, RIGHT_START_PERCENT);
                ColumnSpan {
                    x,
                    width: area_width.saturating_sub(x).saturating_sub(RIGHT_MARGIN),
                }
            }
        }
    }
}

fn percent_of(value: u16, percent: u16) -> u16 {
    (u32::from(value) * u32::from(percent) / 100) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_columns() {
        let mut engine = PanelLayoutEngine::new();
        let columns: Vec<Column> = (0..5).map(|i| engine.place_panel(i).column).collect();
        assert_eq!(
            columns,
            vec![
                Column::Left,
                Column::Right,
                Column::Left,
                Column::Right,
                Column::Left
            ]
        );
    }

    #[test]
    fn test_stacking_within_column() {
        let mut engine = PanelLayoutEngine::new();
        assert_eq!(engine.place_panel(0).anchor, VerticalAnchor::Top);
        assert_eq!(engine.place_panel(1).anchor, VerticalAnchor::Top);
        assert_eq!(engine.place_panel(2).anchor, VerticalAnchor::Below(0));
        assert_eq!(engine.place_panel(3).anchor, VerticalAnchor::Below(1));
        assert_eq!(engine.place_panel(4).anchor, VerticalAnchor::Below(2));
    }

    #[test]
    fn test_reset_forgets_columns() {
        let mut engine = PanelLayoutEngine::new();
        engine.place_panel(0);
        engine.place_panel(1);
        engine.reset();
        assert_eq!(engine.place_panel(0).anchor, VerticalAnchor::Top);
    }

    #[test]
    fn test_engines_are_independent() {
        let mut first = PanelLayoutEngine::new();
        first.place_panel(0);
        first.place_panel(1);

        let mut second = PanelLayoutEngine::new();
        assert_eq!(second.place_panel(0).anchor, VerticalAnchor::Top);
    }

    #[test]
    fn test_column_span() {
        let left = PanelLayoutEngine::column_span(Column::Left, 100);
        assert_eq!(left, ColumnSpan { x: 1, width: 49 });

        let right = PanelLayoutEngine::column_span(Column::Right, 100);
        assert_eq!(right, ColumnSpan { x: 51, width: 48 });

        // 아주 좁은 영역에서도 넘치지 않음
        let tiny = PanelLayoutEngine::column_span(Column::Right, 1);
        assert_eq!(tiny.width, 0);
    }
}
