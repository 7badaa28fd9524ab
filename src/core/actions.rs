//! 액션 시스템 - 단일 진실 원천 (Single Source of Truth)
//!
//! 키 바인딩, 커맨드바 항목이 모두 이 모듈의 레지스트리를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Overlay
    ToggleThemeMenu,
    ToggleMobileMenu,
    DismissOverlays,
    // Theme (카탈로그 순서 기준 인덱스)
    SelectThemeAt(usize),
    // Scroll
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollTop,
    // System
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Overlay,
    Theme,
    Scroll,
    System,
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
    pub category: ActionCategory,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Overlay
    ActionDef {
        action: Action::ToggleThemeMenu,
        id: "theme_menu",
        label: "Theme menu",
        category: ActionCategory::Overlay,
        shortcut_display: Some("t"),
        command_bar: Some(CommandBarEntry {
            key: "t",
            label: "Theme",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::ToggleMobileMenu,
        id: "mobile_menu",
        label: "Navigation menu",
        category: ActionCategory::Overlay,
        shortcut_display: Some("m"),
        command_bar: Some(CommandBarEntry {
            key: "m",
            label: "Menu",
            priority: 11,
        }),
    },
    ActionDef {
        action: Action::DismissOverlays,
        id: "dismiss",
        label: "Close menus",
        category: ActionCategory::Overlay,
        shortcut_display: Some("Esc"),
        command_bar: Some(CommandBarEntry {
            key: "Esc",
            label: "Close",
            priority: 12,
        }),
    },
    // Theme
    ActionDef {
        action: Action::SelectThemeAt(0),
        id: "theme_1",
        label: "First theme",
        category: ActionCategory::Theme,
        shortcut_display: Some("1"),
        command_bar: Some(CommandBarEntry {
            key: "1-3",
            label: "Pick",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::SelectThemeAt(1),
        id: "theme_2",
        label: "Second theme",
        category: ActionCategory::Theme,
        shortcut_display: Some("2"),
        command_bar: None,
    },
    ActionDef {
        action: Action::SelectThemeAt(2),
        id: "theme_3",
        label: "Third theme",
        category: ActionCategory::Theme,
        shortcut_display: Some("3"),
        command_bar: None,
    },
    // Scroll
    ActionDef {
        action: Action::ScrollUp,
        id: "scroll_up",
        label: "Scroll up",
        category: ActionCategory::Scroll,
        shortcut_display: Some("k / ↑"),
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Scroll",
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::ScrollDown,
        id: "scroll_down",
        label: "Scroll down",
        category: ActionCategory::Scroll,
        shortcut_display: Some("j / ↓"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageUp,
        id: "page_up",
        label: "Page up",
        category: ActionCategory::Scroll,
        shortcut_display: Some("PgUp"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageDown,
        id: "page_down",
        label: "Page down",
        category: ActionCategory::Scroll,
        shortcut_display: Some("PgDn"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ScrollTop,
        id: "scroll_top",
        label: "Top",
        category: ActionCategory::Scroll,
        shortcut_display: Some("Home"),
        command_bar: None,
    },
    // System
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        category: ActionCategory::System,
        shortcut_display: Some("q"),
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 90,
        }),
    },
];

impl Action {
    /// 액션 메타데이터
    pub fn def(self) -> Option<&'static ActionDef> {
        ACTION_DEFS.iter().find(|d| d.action == self)
    }
}

fn build_key_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        // 오버레이
        KeyBinding {
            code: KeyCode::Char('t'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleThemeMenu,
        },
        KeyBinding {
            code: KeyCode::Char('m'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ToggleMobileMenu,
        },
        KeyBinding {
            code: KeyCode::Esc,
            modifiers: None,
            action: Action::DismissOverlays,
        },
        // 스크롤
        KeyBinding {
            code: KeyCode::Up,
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ScrollUp,
        },
        KeyBinding {
            code: KeyCode::Char('k'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ScrollUp,
        },
        KeyBinding {
            code: KeyCode::Down,
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ScrollDown,
        },
        KeyBinding {
            code: KeyCode::Char('j'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::ScrollDown,
        },
        KeyBinding {
            code: KeyCode::PageUp,
            modifiers: None,
            action: Action::PageUp,
        },
        KeyBinding {
            code: KeyCode::PageDown,
            modifiers: None,
            action: Action::PageDown,
        },
        KeyBinding {
            code: KeyCode::Home,
            modifiers: None,
            action: Action::ScrollTop,
        },
        // 종료
        KeyBinding {
            code: KeyCode::Char('q'),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::Char('c'),
            modifiers: Some(KeyModifiers::CONTROL),
            action: Action::Quit,
        },
        KeyBinding {
            code: KeyCode::F(10),
            modifiers: None,
            action: Action::Quit,
        },
    ];

    // 테마 빠른 선택 (1~9)
    for (index, c) in ('1'..='9').enumerate() {
        bindings.push(KeyBinding {
            code: KeyCode::Char(c),
            modifiers: Some(KeyModifiers::NONE),
            action: Action::SelectThemeAt(index),
        });
    }

    bindings
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            let mod_matches = match binding.modifiers {
                None => true,
                Some(required) => modifiers == required,
            };
            binding.code == code && mod_matches
        })
        .map(|binding| binding.action)
}

/// 커맨드바 항목 생성 (priority 순)
pub fn generate_command_bar_items() -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|d| d.command_bar.as_ref())
        .collect();
    entries.sort_by_key(|e| e.priority);
    entries
        .into_iter()
        .map(|e| CommandItem::new(e.key, e.label))
        .collect()
}

/// 액션 ID의 단축키 표시 문자열
pub fn get_shortcut_display(id: &str) -> Option<&'static str> {
    ACTION_DEFS
        .iter()
        .find(|d| d.id == id)
        .and_then(|d| d.shortcut_display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_action_overlay_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('t')),
            Some(Action::ToggleThemeMenu)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('m')),
            Some(Action::ToggleMobileMenu)
        );
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Esc),
            Some(Action::DismissOverlays)
        );
    }

    #[test]
    fn test_find_action_theme_digits() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('1')),
            Some(Action::SelectThemeAt(0))
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('3')),
            Some(Action::SelectThemeAt(2))
        );
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Char('0')), None);
    }

    #[test]
    fn test_find_action_quit_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('q')),
            Some(Action::Quit)
        );
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(Action::Quit)
        );
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Char('c')), None);
    }

    #[test]
    fn test_generate_command_bar_items() {
        let items = generate_command_bar_items();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0].key, "t");
        assert_eq!(items[0].label, "Theme");
        assert_eq!(items.last().map(|i| i.key.as_str()), Some("q"));
    }

    #[test]
    fn test_get_shortcut_display() {
        assert_eq!(get_shortcut_display("theme_menu"), Some("t"));
        assert_eq!(get_shortcut_display("dismiss"), Some("Esc"));
        assert_eq!(get_shortcut_display("missing"), None);
    }
}
