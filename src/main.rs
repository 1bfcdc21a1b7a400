mod app;
mod core;
mod models;
mod system;
mod ui;
mod utils;

use crate::app::App;
use crate::core::actions::{find_action, generate_command_bar_items, Action};
use crate::core::PrintFilesWorkflow;
use crate::models::DialogView;
use crate::system::{FsCatalog, Settings};
use crate::ui::{
    CommandBar, FileList, LayoutMode, OptionDialog, QueueView, StatusBar, ThemeManager, TitleBar,
    WarningScreen,
};
use crate::utils::error::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tracing::{error, info};

fn main() -> Result<()> {
    // 설정과 로그는 터미널을 건드리기 전에 준비
    let settings = Settings::load()?;
    let log_file = crate::system::logging::init(&settings.resolved_log_dir())?;
    info!(log_file = %log_file.display(), "printflow starting");

    let mut theme_manager = ThemeManager::new();
    match theme_manager.load_themes_from_config_dir() {
        Ok(count) if count > 0 => info!(count, "custom themes loaded"),
        Ok(_) => {}
        Err(e) => error!(error = %e, "failed to load custom themes"),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&settings, theme_manager);
    let res = load_workflow(&mut terminal, &mut app, &settings)
        .and_then(|()| run_app(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "printflow stopped with error");
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    info!("printflow exited");
    Ok(())
}

/// 로딩 화면을 그린 뒤 카탈로그 로드가 끝날 때까지 기다린다
fn load_workflow<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    settings: &Settings,
) -> Result<()> {
    draw(terminal, app)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let catalog = FsCatalog::new(settings.on_unreadable);
    let workflow = runtime.block_on(PrintFilesWorkflow::initialize(
        &catalog,
        &settings.files_dir,
        &settings.printers_dir,
    ))?;

    app.attach_workflow(workflow);
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        draw(terminal, app)?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_keys(app, key.modifiers, key.code);
                }
            }
        }

        app.clear_expired_toast();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 키 처리 (액션 레지스트리 기반)
///
/// 경고 화면에서는 종료 키만 받는다.
fn handle_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    let Some(action) = find_action(app.key_context(), modifiers, code) else {
        return;
    };
    if app.layout.mode() == LayoutMode::TooSmall && action != Action::Quit {
        return;
    }
    app.execute_action(action);
}

fn draw<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    terminal.draw(|f| {
        let size = f.area();
        app.layout.update(size);

        match app.layout.mode() {
            LayoutMode::TooSmall => {
                let (width, height) = app.layout.terminal_size();
                let warning = WarningScreen::new()
                    .current_size(width, height)
                    .theme(app.theme_manager.current());
                f.render_widget(warning, size);
            }
            LayoutMode::Workflow => {
                app.adjust_scroll_offset();
                render_main_ui(f, app);
            }
        }
    })?;
    Ok(())
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = app.theme_manager.current();
    let screen = &app.screen;

    let title_bar = TitleBar::new().source(&app.files_dir).theme(theme);
    f.render_widget(title_bar, areas.title_bar);

    let mut file_list = FileList::new()
        .cursor(app.file_cursor)
        .scroll_offset(app.file_scroll)
        .focused(!screen.dialog.is_visible())
        .theme(theme);
    if let Some(view) = &screen.files {
        file_list = file_list.view(view);
    }
    f.render_widget(file_list, areas.file_selection);

    let queue = QueueView::new().panels(&screen.panels).theme(theme);
    f.render_widget(queue, areas.printer_queue);

    let status_bar = StatusBar::new()
        .stage(app.stage_name())
        .file_count(screen.file_rows())
        .marked_count(screen.marked_count())
        .queued_count(screen.queued_count())
        .panel_count(screen.panels.len())
        .toast(app.toast_display())
        .theme_name(app.theme_manager.current_name())
        .theme(theme);
    f.render_widget(status_bar, areas.status_bar);

    let command_bar = CommandBar::new()
        .commands(generate_command_bar_items(app.key_context()))
        .theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    if let DialogView::Options { title, options } = &screen.dialog {
        let dialog = OptionDialog::new(title, options)
            .selected_index(app.dialog_cursor)
            .theme(theme);
        f.render_widget(dialog, f.area());
    }
}
