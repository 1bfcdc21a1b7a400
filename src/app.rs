use crate::core::actions::KeyContext;
use crate::core::{Display, PrintFilesWorkflow};
use crate::models::view_model::{DialogView, FileSelectionView, PrinterPanelView, ViewUpdate};
use crate::system::Settings;
use crate::ui::{LayoutManager, ThemeManager};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

mod navigation;
mod operations;

/// 토스트 유지 시간 (초)
const TOAST_SECONDS: u64 = 3;

/// 화면에 그릴 마지막 스냅샷
///
/// 워크플로가 보내는 `ViewUpdate`만으로 채워지며 위젯은 이것만 보고 그린다.
#[derive(Debug, Default)]
pub struct ScreenModel {
    /// 파일 선택 화면 (None이면 아직 로딩 중)
    pub files: Option<FileSelectionView>,
    /// 프린터 패널 (생성 순서)
    pub panels: Vec<PrinterPanelView>,
    pub dialog: DialogView,
}

impl ScreenModel {
    pub fn file_rows(&self) -> usize {
        self.files.as_ref().map_or(0, |view| view.rows.len())
    }

    pub fn marked_count(&self) -> usize {
        self.files.as_ref().map_or(0, |view| view.marked.len())
    }

    pub fn queued_count(&self) -> usize {
        self.panels.iter().map(|panel| panel.rows.len()).sum()
    }
}

impl Display for ScreenModel {
    fn update(&mut self, update: ViewUpdate) {
        match update {
            ViewUpdate::Files(view) => self.files = Some(view),
            ViewUpdate::Panel(view) => match self.panels.get_mut(view.order) {
                Some(existing) => *existing = view,
                None => self.panels.push(view),
            },
            ViewUpdate::Dialog(view) => self.dialog = view,
        }
    }
}

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 테마 관리자
    pub theme_manager: ThemeManager,
    /// 렌더링용 스냅샷
    pub screen: ScreenModel,
    /// 로드가 끝난 작업 세션
    workflow: Option<PrintFilesWorkflow>,
    /// 라벨 파일 폴더 (제목 줄 표시용)
    pub files_dir: PathBuf,
    /// 파일 리스트 커서
    pub file_cursor: usize,
    /// 파일 리스트 스크롤 오프셋
    pub file_scroll: usize,
    /// 다이얼로그 커서
    pub dialog_cursor: usize,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
}

impl App {
    /// 로딩 상태의 앱 생성
    pub fn new(settings: &Settings, mut theme_manager: ThemeManager) -> Self {
        if let Err(e) = theme_manager.switch_theme(&settings.theme) {
            warn!(theme = %settings.theme, error = %e, "unknown theme, keeping default");
        }

        Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme_manager,
            screen: ScreenModel::default(),
            workflow: None,
            files_dir: settings.files_dir.clone(),
            file_cursor: 0,
            file_scroll: 0,
            dialog_cursor: 0,
            toast_message: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(workflow: PrintFilesWorkflow) -> Self {
        let mut app = Self {
            should_quit: false,
            layout: LayoutManager::new(),
            theme_manager: ThemeManager::new(),
            screen: ScreenModel::default(),
            workflow: None,
            files_dir: PathBuf::from("/labels"),
            file_cursor: 0,
            file_scroll: 0,
            dialog_cursor: 0,
            toast_message: None,
        };
        app.attach_workflow(workflow);
        app
    }

    /// 초기화가 끝난 세션 연결 후 첫 화면 구성
    pub fn attach_workflow(&mut self, workflow: PrintFilesWorkflow) {
        info!(
            files = workflow.files().len(),
            printers = workflow.printers().len(),
            "workflow ready"
        );
        workflow.emit_all(&mut self.screen);
        self.workflow = Some(workflow);
        self.file_cursor = 0;
        self.file_scroll = 0;
        self.dialog_cursor = 0;
    }

    pub fn workflow(&self) -> Option<&PrintFilesWorkflow> {
        self.workflow.as_ref()
    }

    /// 현재 키 바인딩 문맥
    pub fn key_context(&self) -> KeyContext {
        if self.screen.dialog.is_visible() {
            KeyContext::Dialog
        } else {
            KeyContext::Selecting
        }
    }

    /// 현재 단계 이름 (상태바 표시용)
    pub fn stage_name(&self) -> &'static str {
        self.workflow
            .as_ref()
            .map_or("loading", |workflow| workflow.state().name())
    }

    /// 종료
    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 토스트 메시지 설정 (3초 후 자동 소멸)
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, time)) = &self.toast_message {
            if time.elapsed().as_secs() >= TOAST_SECONDS {
                self.toast_message = None;
            }
        }
    }

    /// 토스트 메시지 가져오기 (만료 안 된 경우만)
    pub fn toast_display(&self) -> Option<&str> {
        self.toast_message.as_ref().and_then(|(msg, time)| {
            if time.elapsed().as_secs() < TOAST_SECONDS {
                Some(msg.as_str())
            } else {
                None
            }
        })
    }
}
