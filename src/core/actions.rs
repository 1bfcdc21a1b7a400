//! 액션 시스템
//!
//! 키 바인딩과 커맨드바 항목이 모두 이 모듈의 레지스트리를 참조합니다.
//! 같은 키라도 화면 상태(파일 선택 / 다이얼로그)에 따라 다른 바인딩 표를 씁니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    // Selection
    ToggleMark,
    MarkAll,
    UnmarkAll,
    // Workflow
    Accept,
    Cancel,
    // System
    CycleTheme,
    Quit,
}

/// 바인딩이 적용되는 화면 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// 파일 선택 리스트
    Selecting,
    /// 모달 선택 다이얼로그
    Dialog,
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
    /// None = 모든 화면
    pub context: Option<KeyContext>,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label: "Move up",
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Up/Dn",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        label: "Move down",
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToTop,
        id: "go_top",
        label: "Top",
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToBottom,
        id: "go_bottom",
        label: "Bottom",
        command_bar: None,
    },
    ActionDef {
        action: Action::ToggleMark,
        id: "toggle_mark",
        label: "Toggle mark",
        command_bar: Some(CommandBarEntry {
            key: "Spc",
            label: "Mark",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::MarkAll,
        id: "mark_all",
        label: "Mark all",
        command_bar: Some(CommandBarEntry {
            key: "^A",
            label: "All",
            priority: 21,
        }),
    },
    ActionDef {
        action: Action::UnmarkAll,
        id: "unmark_all",
        label: "Unmark all",
        command_bar: Some(CommandBarEntry {
            key: "^U",
            label: "None",
            priority: 22,
        }),
    },
    ActionDef {
        action: Action::Accept,
        id: "accept",
        label: "Accept",
        command_bar: Some(CommandBarEntry {
            key: "Enter",
            label: "Accept",
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::Cancel,
        id: "cancel",
        label: "Cancel",
        command_bar: Some(CommandBarEntry {
            key: "Esc",
            label: "Cancel",
            priority: 31,
        }),
    },
    ActionDef {
        action: Action::CycleTheme,
        id: "cycle_theme",
        label: "Next theme",
        command_bar: Some(CommandBarEntry {
            key: "F9",
            label: "Theme",
            priority: 90,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        command_bar: Some(CommandBarEntry {
            key: "F10",
            label: "Quit",
            priority: 99,
        }),
    },
];

fn build_key_bindings() -> Vec<KeyBinding> {
    use KeyContext::{Dialog, Selecting};

    let bind = |code, modifiers, action, context| KeyBinding {
        code,
        modifiers,
        action,
        context,
    };

    vec![
        // 종료
        bind(
            KeyCode::Char('c'),
            Some(KeyModifiers::CONTROL),
            Action::Quit,
            None,
        ),
        bind(KeyCode::F(10), None, Action::Quit, None),
        bind(
            KeyCode::Char('q'),
            Some(KeyModifiers::NONE),
            Action::Quit,
            Some(Selecting),
        ),
        // 이동
        bind(KeyCode::Up, None, Action::MoveUp, None),
        bind(KeyCode::Down, None, Action::MoveDown, None),
        bind(
            KeyCode::Char('k'),
            Some(KeyModifiers::NONE),
            Action::MoveUp,
            None,
        ),
        bind(
            KeyCode::Char('j'),
            Some(KeyModifiers::NONE),
            Action::MoveDown,
            None,
        ),
        bind(KeyCode::Home, None, Action::GoToTop, None),
        bind(KeyCode::End, None, Action::GoToBottom, None),
        // 선택
        bind(
            KeyCode::Char(' '),
            Some(KeyModifiers::NONE),
            Action::ToggleMark,
            Some(Selecting),
        ),
        bind(
            KeyCode::Char('a'),
            Some(KeyModifiers::CONTROL),
            Action::MarkAll,
            Some(Selecting),
        ),
        bind(
            KeyCode::Char('u'),
            Some(KeyModifiers::CONTROL),
            Action::UnmarkAll,
            Some(Selecting),
        ),
        // 워크플로
        bind(KeyCode::Enter, None, Action::Accept, None),
        bind(KeyCode::Esc, None, Action::Cancel, Some(Dialog)),
        // 시스템
        bind(KeyCode::F(9), None, Action::CycleTheme, None),
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(context: KeyContext, modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            let code_matches = binding.code == code;
            let mod_matches = match binding.modifiers {
                None => true,
                Some(required) => modifiers == required,
            };
            let context_matches = binding.context.is_none_or(|ctx| ctx == context);
            code_matches && mod_matches && context_matches
        })
        .map(|binding| binding.action)
}

impl Action {
    pub fn id(self) -> &'static str {
        ACTION_DEFS
            .iter()
            .find(|def| def.action == self)
            .map(|def| def.id)
            .unwrap_or("unknown")
    }
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
///
/// 다이얼로그가 떠 있을 때는 선택 관련 항목을 비활성으로 표시한다.
pub fn generate_command_bar_items(context: KeyContext) -> Vec<CommandItem> {
    let mut entries: Vec<(&CommandBarEntry, &ActionDef)> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref().map(|cb| (cb, def)))
        .collect();

    entries.sort_by_key(|(cb, _)| cb.priority);

    entries
        .into_iter()
        .map(|(cb, def)| {
            let enabled = match context {
                KeyContext::Selecting => def.action != Action::Cancel,
                KeyContext::Dialog => !matches!(
                    def.action,
                    Action::ToggleMark | Action::MarkAll | Action::UnmarkAll
                ),
            };
            CommandItem::new(cb.key, cb.label).enabled(enabled)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_action_vim_keys() {
        let ctx = KeyContext::Selecting;
        assert_eq!(
            find_action(ctx, KeyModifiers::NONE, KeyCode::Char('j')),
            Some(Action::MoveDown)
        );
        assert_eq!(
            find_action(ctx, KeyModifiers::NONE, KeyCode::Char('k')),
            Some(Action::MoveUp)
        );
        assert_eq!(
            find_action(ctx, KeyModifiers::NONE, KeyCode::Char(' ')),
            Some(Action::ToggleMark)
        );
    }

    #[test]
    fn test_find_action_modifiers() {
        let ctx = KeyContext::Selecting;
        assert_eq!(
            find_action(ctx, KeyModifiers::CONTROL, KeyCode::Char('a')),
            Some(Action::MarkAll)
        );
        assert_eq!(
            find_action(ctx, KeyModifiers::CONTROL, KeyCode::Char('u')),
            Some(Action::UnmarkAll)
        );
        assert_eq!(
            find_action(ctx, KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(Action::Quit)
        );
        assert_eq!(find_action(ctx, KeyModifiers::NONE, KeyCode::Char('a')), None);
    }

    #[test]
    fn test_find_action_respects_context() {
        assert_eq!(
            find_action(KeyContext::Dialog, KeyModifiers::NONE, KeyCode::Char(' ')),
            None
        );
        assert_eq!(
            find_action(KeyContext::Dialog, KeyModifiers::NONE, KeyCode::Char('q')),
            None
        );
        assert_eq!(
            find_action(KeyContext::Dialog, KeyModifiers::NONE, KeyCode::Esc),
            Some(Action::Cancel)
        );
        assert_eq!(
            find_action(KeyContext::Selecting, KeyModifiers::NONE, KeyCode::Esc),
            None
        );
        assert_eq!(
            find_action(KeyContext::Dialog, KeyModifiers::NONE, KeyCode::F(10)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_every_bound_action_is_defined() {
        for binding in key_bindings() {
            assert_ne!(binding.action.id(), "unknown", "{:?}", binding.action);
        }
    }

    #[test]
    fn test_command_bar_items_sorted() {
        let items = generate_command_bar_items(KeyContext::Selecting);
        assert_eq!(items.first().map(|i| i.key.as_str()), Some("j/k"));
        assert_eq!(items.last().map(|i| i.key.as_str()), Some("F10"));

        let cancel = items.iter().find(|i| i.key == "Esc").unwrap();
        assert!(!cancel.enabled);

        let dialog_items = generate_command_bar_items(KeyContext::Dialog);
        let mark = dialog_items.iter().find(|i| i.key == "Spc").unwrap();
        assert!(!mark.enabled);
    }
}
