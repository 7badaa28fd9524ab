//! 인터랙션 상태 머신
//!
//! 활성 테마, 테마 드롭다운 열림 여부, 모바일 메뉴 열림 여부를 하나의 값으로 다룹니다.
//! 모든 전이는 현재 상태를 소비하고 다음 상태를 반환하는 순수 함수입니다.
//!
//! - 테마 선택은 항상 드롭다운을 닫고, 모바일 메뉴는 건드리지 않습니다.
//! - 두 오버레이는 서로 독립적으로 토글됩니다.
//! - 바깥 클릭(dismiss)은 두 오버레이를 동시에 닫습니다.

use crate::models::{ThemeId, ThemeRegistry};

/// UI 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub active_theme: ThemeId,
    pub dropdown_open: bool,
    pub mobile_menu_open: bool,
}

/// 상태 전이 이벤트
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ToggleDropdown,
    ToggleMobileMenu,
    SelectTheme(String),
    DismissAll,
}

impl UiState {
    /// 초기 상태: 카탈로그 첫 테마, 오버레이 모두 닫힘
    pub fn initial(registry: &ThemeRegistry) -> Self {
        Self {
            active_theme: registry.default_theme().id,
            dropdown_open: false,
            mobile_menu_open: false,
        }
    }

    #[must_use]
    pub fn toggle_dropdown(self) -> Self {
        Self {
            dropdown_open: !self.dropdown_open,
            ..self
        }
    }

    #[must_use]
    pub fn toggle_mobile_menu(self) -> Self {
        Self {
            mobile_menu_open: !self.mobile_menu_open,
            ..self
        }
    }

    /// 테마 선택
    ///
    /// 카탈로그에 없는 ID면 현재 테마를 유지합니다. 드롭다운은 어느 경우든 닫힙니다.
    #[must_use]
    pub fn select_theme(self, id: &str, registry: &ThemeRegistry) -> Self {
        let active_theme = match registry.lookup(id) {
            Ok(theme) => theme.id,
            Err(err) => {
                tracing::warn!(%err, current = %self.active_theme, "keeping current theme");
                self.active_theme
            }
        };
        Self {
            active_theme,
            dropdown_open: false,
            ..self
        }
    }

    #[must_use]
    pub fn dismiss_all(self) -> Self {
        Self {
            dropdown_open: false,
            mobile_menu_open: false,
            ..self
        }
    }

    /// 오버레이가 하나라도 열려 있는지 (바깥 클릭 캡처 활성 조건)
    pub fn overlay_active(&self) -> bool {
        self.dropdown_open || self.mobile_menu_open
    }
}

/// 이벤트 적용
#[must_use]
pub fn apply(state: UiState, event: &UiEvent, registry: &ThemeRegistry) -> UiState {
    let next = match event {
        UiEvent::ToggleDropdown => state.toggle_dropdown(),
        UiEvent::ToggleMobileMenu => state.toggle_mobile_menu(),
        UiEvent::SelectTheme(id) => state.select_theme(id, registry),
        UiEvent::DismissAll => state.dismiss_all(),
    };
    tracing::debug!(?event, ?state, ?next, "ui transition");
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_states(registry: &ThemeRegistry) -> Vec<UiState> {
        let mut states = Vec::new();
        for theme in registry.list_themes() {
            for dropdown_open in [false, true] {
                for mobile_menu_open in [false, true] {
                    states.push(UiState {
                        active_theme: theme.id,
                        dropdown_open,
                        mobile_menu_open,
                    });
                }
            }
        }
        states
    }

    #[test]
    fn test_initial_state() {
        let registry = ThemeRegistry::builtin();
        let state = UiState::initial(&registry);
        assert_eq!(state.active_theme, ThemeId::new("theme1"));
        assert!(!state.dropdown_open);
        assert!(!state.mobile_menu_open);
        assert!(!state.overlay_active());
    }

    #[test]
    fn test_select_theme_from_any_state() {
        let registry = ThemeRegistry::builtin();
        for state in all_states(&registry) {
            for theme in registry.list_themes() {
                let next = state.select_theme(theme.id.as_str(), &registry);
                assert_eq!(next.active_theme, theme.id);
                assert!(!next.dropdown_open);
                assert_eq!(next.mobile_menu_open, state.mobile_menu_open);
            }
        }
    }

    #[test]
    fn test_toggles_are_involutions() {
        let registry = ThemeRegistry::builtin();
        for state in all_states(&registry) {
            assert_eq!(state.toggle_dropdown().toggle_dropdown(), state);
            assert_eq!(state.toggle_mobile_menu().toggle_mobile_menu(), state);
        }
    }

    #[test]
    fn test_toggles_are_independent() {
        let registry = ThemeRegistry::builtin();
        for state in all_states(&registry) {
            let dropdown = state.toggle_dropdown();
            assert_eq!(dropdown.mobile_menu_open, state.mobile_menu_open);
            assert_eq!(dropdown.active_theme, state.active_theme);

            let mobile = state.toggle_mobile_menu();
            assert_eq!(mobile.dropdown_open, state.dropdown_open);
            assert_eq!(mobile.active_theme, state.active_theme);
        }
    }

    #[test]
    fn test_dismiss_all_is_idempotent() {
        let registry = ThemeRegistry::builtin();
        for state in all_states(&registry) {
            let once = state.dismiss_all();
            assert!(!once.dropdown_open);
            assert!(!once.mobile_menu_open);
            assert_eq!(once.active_theme, state.active_theme);
            assert_eq!(once.dismiss_all(), once);
        }
    }

    #[test]
    fn test_unknown_theme_keeps_current() {
        let registry = ThemeRegistry::builtin();
        let state = UiState::initial(&registry)
            .select_theme("theme3", &registry)
            .toggle_dropdown();

        let next = state.select_theme("does-not-exist", &registry);
        assert_eq!(next.active_theme, ThemeId::new("theme3"));
        assert!(!next.dropdown_open);
    }

    #[test]
    fn test_apply_dispatches_events() {
        let registry = ThemeRegistry::builtin();
        let state = UiState::initial(&registry);

        let state = apply(state, &UiEvent::ToggleDropdown, &registry);
        assert!(state.dropdown_open);

        let state = apply(state, &UiEvent::ToggleMobileMenu, &registry);
        assert!(state.mobile_menu_open);
        assert!(state.overlay_active());

        let state = apply(state, &UiEvent::SelectTheme("theme2".into()), &registry);
        assert_eq!(state.active_theme, ThemeId::new("theme2"));
        assert!(!state.dropdown_open);
        assert!(state.mobile_menu_open);

        let state = apply(state, &UiEvent::DismissAll, &registry);
        assert!(!state.overlay_active());
    }
}
