//! 표시 계층 경계
//!
//! 워크플로는 화면 상태를 읽지 않고, 변경 후 스냅샷만 밀어 넣는다.

use crate::models::view_model::ViewUpdate;

/// 워크플로가 화면 갱신을 전달하는 대상
pub trait Display {
    fn update(&mut self, update: ViewUpdate);
}

/// 받은 갱신을 순서대로 쌓아두는 Display
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub updates: Vec<ViewUpdate>,
}

#[cfg(test)]
impl Display for RecordingDisplay {
    fn update(&mut self, update: ViewUpdate) {
        self.updates.push(update);
    }
}
