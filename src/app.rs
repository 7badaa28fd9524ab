use crate::core::ui_state::{self, UiEvent, UiState};
use crate::models::{NavigationModel, ThemeRegistry};
use crate::ui::{
    HitMap, HitTarget, LayoutDispatcher, LayoutManager, Page, PageView, StyleResolver, TokenSet,
};
use crate::utils::config::AppConfig;
use ratatui::buffer::Buffer;

mod navigation;

/// 애플리케이션 상태
///
/// 카탈로그와 스타일 리졸버는 시작 시 한 번 만들어지고, 매 이벤트마다 바뀌는 것은
/// UI 상태와 표시 전용 상태(드롭다운 커서, 스크롤, 마지막 클릭 영역)뿐입니다.
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 테마 카탈로그
    pub registry: ThemeRegistry,
    /// 내비게이션 항목
    pub navigation: NavigationModel,
    /// 테마별 토큰 세트
    pub styles: StyleResolver,
    /// 인터랙션 상태
    pub ui: UiState,
    /// 드롭다운 키보드 커서 (카탈로그 인덱스)
    pub dropdown_cursor: usize,
    /// 본문 스크롤 위치
    pub scroll: u16,
    /// 마지막 렌더의 클릭 영역
    pub hit_map: HitMap,
    /// 설정
    pub config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let registry = ThemeRegistry::builtin();
        let ui = UiState::initial(&registry);
        tracing::info!(theme = %ui.active_theme, "app started");

        Self {
            should_quit: false,
            layout: LayoutManager::new(config.mobile_breakpoint, config.min_card_width),
            registry,
            navigation: NavigationModel::builtin(),
            styles: StyleResolver::builtin(registry),
            ui,
            dropdown_cursor: 0,
            scroll: 0,
            hit_map: HitMap::default(),
            config,
        }
    }

    #[cfg(test)]
    pub(crate) fn new_for_test() -> Self {
        Self::new(AppConfig::default())
    }

    /// 상태 전이 적용
    pub fn dispatch(&mut self, event: UiEvent) {
        let before = self.ui;
        self.ui = ui_state::apply(self.ui, &event, &self.registry);

        // 드롭다운이 새로 열리면 커서를 활성 테마에 맞춤
        if self.ui.dropdown_open && !before.dropdown_open {
            self.dropdown_cursor = self.registry.position(self.ui.active_theme).unwrap_or(0);
        }
        // 테마가 바뀌면 레이아웃 구조가 달라지므로 맨 위로
        if self.ui.active_theme != before.active_theme {
            self.scroll = 0;
        }
    }

    /// 현재 상태의 페이지 구조
    pub fn page(&self) -> Page {
        LayoutDispatcher::new(self.registry, self.navigation).compose(&self.ui, self.layout.viewport())
    }

    /// 활성 테마의 토큰 세트
    pub fn tokens(&self) -> &TokenSet {
        self.styles.resolve(self.ui.active_theme.as_str())
    }

    /// 메인 화면 그리기 (클릭 영역 갱신)
    pub fn render(&mut self, buf: &mut Buffer) {
        let page = self.page();
        tracing::trace!(theme = %page.theme_id, style = page.style_class, layout = page.chrome.class_name(), "render page");
        let hits = PageView::new(&page, self.tokens())
            .icons(self.config.icon_mode)
            .cursor(self.dropdown_cursor)
            .scroll(self.scroll)
            .render(self.layout.areas(), buf);
        self.scroll = hits.scroll;
        self.hit_map = hits;
    }

    /// 마우스 왼쪽 클릭
    pub fn handle_click(&mut self, col: u16, row: u16) {
        let target = self.hit_map.target(col, row);
        tracing::debug!(col, row, ?target, "click");
        match target {
            HitTarget::ThemeOption(id) => self.dispatch(UiEvent::SelectTheme(id.as_str().to_string())),
            HitTarget::ThemeButton => self.dispatch(UiEvent::ToggleDropdown),
            HitTarget::Outside => self.dispatch(UiEvent::DismissAll),
            HitTarget::MenuToggle => self.dispatch(UiEvent::ToggleMobileMenu),
            HitTarget::DropdownPanel | HitTarget::Header | HitTarget::Nothing => {}
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 종료
    pub fn quit(&mut self) {
        tracing::info!("quit requested");
        self.should_quit = true;
    }
}
