use super::*;
use crate::core::actions::Action;
use crate::ui::dispatcher::Chrome;

impl App {
    /// 액션 실행 (단일 진실 원천)
    pub fn execute_action(&mut self, action: Action) {
        match action.def() {
            Some(def) => tracing::debug!(id = def.id, label = def.label, category = ?def.category, "execute action"),
            None => tracing::debug!(?action, "execute action"),
        }
        match action {
            Action::Quit => self.quit(),
            Action::ToggleThemeMenu => self.dispatch(UiEvent::ToggleDropdown),
            Action::ToggleMobileMenu => self.toggle_mobile_menu(),
            Action::DismissOverlays => self.dispatch(UiEvent::DismissAll),
            Action::SelectThemeAt(index) => self.select_theme_at(index),
            Action::ScrollUp => self.scroll_by(-1),
            Action::ScrollDown => self.scroll_by(1),
            Action::PageUp => self.scroll_by(-(self.page_step() as i32)),
            Action::PageDown => self.scroll_by(self.page_step() as i32),
            Action::ScrollTop => self.scroll = 0,
        }
    }

    // === 오버레이 ===

    pub fn is_dropdown_open(&self) -> bool {
        self.ui.dropdown_open
    }

    /// 모바일 메뉴 토글 버튼이 화면에 있는지
    pub fn menu_toggle_visible(&self) -> bool {
        matches!(self.page().chrome, Chrome::Simple(ref chrome) if chrome.menu_toggle.is_some())
    }

    /// 모바일 메뉴 토글 (버튼이 보이거나 이미 열려 있을 때만)
    fn toggle_mobile_menu(&mut self) {
        if self.ui.mobile_menu_open || self.menu_toggle_visible() {
            self.dispatch(UiEvent::ToggleMobileMenu);
        } else {
            tracing::debug!("mobile menu toggle not available in this layout");
        }
    }

    // === 테마 선택 ===

    /// 카탈로그 순서 인덱스로 테마 선택
    pub fn select_theme_at(&mut self, index: usize) {
        match self.registry.get(index) {
            Some(theme) => self.dispatch(UiEvent::SelectTheme(theme.id.as_str().to_string())),
            None => tracing::debug!(index, "no theme at index"),
        }
    }

    /// 드롭다운 커서 다음 항목
    pub fn dropdown_next(&mut self) {
        let len = self.registry.len();
        if len > 0 {
            self.dropdown_cursor = (self.dropdown_cursor + 1) % len;
        }
    }

    /// 드롭다운 커서 이전 항목
    pub fn dropdown_prev(&mut self) {
        let len = self.registry.len();
        if len > 0 {
            self.dropdown_cursor = if self.dropdown_cursor == 0 {
                len - 1
            } else {
                self.dropdown_cursor - 1
            };
        }
    }

    /// 커서 위치의 테마 선택
    pub fn confirm_dropdown(&mut self) {
        self.select_theme_at(self.dropdown_cursor);
    }

    // === 스크롤 ===

    fn page_step(&self) -> u16 {
        self.hit_map.viewport_height.saturating_sub(1).max(1)
    }

    /// 본문 스크롤 (마지막 렌더 기준 범위로 제한)
    pub fn scroll_by(&mut self, delta: i32) {
        let max = self.hit_map.max_scroll() as i32;
        self.scroll = (self.scroll as i32 + delta).clamp(0, max) as u16;
    }
}
