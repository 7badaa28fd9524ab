//! 레이아웃 디스패처
//!
//! 활성 테마의 레이아웃 종류에 따라 페이지 구조([`Page`])를 조립합니다.
//! 테마 선택기 헤더와 공통 본문([`ContentBody`])은 레이아웃과 무관하게 한 번만 만들고,
//! 레이아웃별 함수는 주변 크롬(내비게이션)만 담당합니다.
//!
//! 구조의 모든 노드는 클래스 이름을 가지며, 그리는 쪽은 이 이름과 테마의 스타일 클래스로
//! 토큰을 찾습니다. 닫힌 오버레이는 구조에서 아예 빠집니다.

use crate::core::UiState;
use crate::models::{Icon, LayoutVariant, NavItem, NavigationModel, Theme, ThemeId, ThemeRegistry};
use crate::ui::layout::Viewport;

pub const HEADER_TITLE: &str = "Multi-Theme Switcher App";
pub const BRAND: &str = "ThemeApp";
/// CardGrid 레이아웃에서 본문을 감싸는 카드의 클래스
pub const MAIN_CARD_CLASS: &str = "main-card";

const BODY_TITLE: &str = "Welcome to Multi-Theme Switcher";
const BODY_LEAD: &str = "This is a terminal application demonstrating dynamic theme switching capabilities. The current theme is";
const BODY_TAIL: &str = ", which changes not only colors but also the layout structure, fonts, spacing, and overall design approach.";
const FEATURE_TITLE: &str = "Theme Features";
const FEATURES: &[&str] = &[
    "Dynamic color schemes with primary and secondary palettes",
    "Adaptive layout structures (Simple, Sidebar, Card-based)",
    "Typography variations including font weights and styling",
    "Responsive design for desktop and mobile terminals",
    "Smooth transitions and hover effects",
];
const SAMPLE_LIST_TITLE: &str = "Sample List Component";
const SAMPLE_LIST_ITEMS: &[&str] = &[
    "Interactive theme switching",
    "Keyboard and mouse control",
    "Mobile-responsive design",
];
const SAMPLE_BUTTON_TITLE: &str = "Sample Button";
const SAMPLE_BUTTON_LABEL: &str = "Explore Features";

/// 조립된 페이지
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub theme_id: ThemeId,
    /// 토큰 세트 키
    pub style_class: &'static str,
    pub header: Header,
    pub chrome: Chrome,
    pub body: ContentBody,
    /// 바깥 클릭 캡처 영역 (오버레이가 열려 있을 때만 존재)
    pub dismiss_capture: Option<DismissCapture>,
}

impl Page {
    pub fn layout(&self) -> LayoutVariant {
        self.chrome.variant()
    }
}

/// 전체 화면 투명 캡처 영역
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissCapture;

/// 고정 헤더
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: &'static str,
    pub selector: ThemeSelector,
}

/// 테마 선택 드롭다운 버튼
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSelector {
    pub icon: Icon,
    /// 모바일에서는 이름을 숨김
    pub label: Option<&'static str>,
    /// 열림 상태에서 뒤집힘
    pub chevron: Icon,
    /// 펼쳐진 패널 (닫혀 있으면 None)
    pub panel: Option<Vec<SelectorEntry>>,
}

impl ThemeSelector {
    pub fn is_open(&self) -> bool {
        self.panel.is_some()
    }
}

/// 드롭다운 패널 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorEntry {
    pub theme_id: ThemeId,
    pub icon: Icon,
    pub name: &'static str,
    /// 활성 테마 표시
    pub active: bool,
}

/// 레이아웃별 크롬
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chrome {
    Simple(SimpleChrome),
    Sidebar(SidebarChrome),
    CardGrid(CardGridChrome),
}

impl Chrome {
    pub fn variant(&self) -> LayoutVariant {
        match self {
            Chrome::Simple(_) => LayoutVariant::Simple,
            Chrome::Sidebar(_) => LayoutVariant::Sidebar,
            Chrome::CardGrid(_) => LayoutVariant::CardGrid,
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.variant().class_name()
    }
}

/// 상단 내비게이션 레이아웃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleChrome {
    pub brand: &'static str,
    /// 데스크톱 가로 항목 (모바일에서는 None)
    pub inline_items: Option<Vec<NavEntry>>,
    /// 모바일 메뉴 토글 버튼 (데스크톱에서는 None)
    pub menu_toggle: Option<MenuToggle>,
    /// 모바일 세로 메뉴 (닫혀 있으면 None)
    pub mobile_menu: Option<Vec<NavEntry>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuToggle {
    pub icon: Icon,
}

/// 사이드바 레이아웃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarChrome {
    pub brand: &'static str,
    pub items: Vec<NavEntry>,
    /// 좁은 화면에서는 본문 위로 쌓음
    pub stacked: bool,
}

/// 카드 그리드 레이아웃
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGridChrome {
    pub cards: Vec<NavCard>,
    pub columns: u16,
    /// 격자 아래 본문을 감싸는 카드
    pub main_card: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: String,
}

/// 내비게이션 항목 배치 위치
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPlacement {
    TopNav,
    MobileNav,
    Sidebar,
}

/// 내비게이션 항목 노드
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub placement: NavPlacement,
    pub icon: Icon,
    pub label: &'static str,
    pub active: bool,
}

impl NavEntry {
    fn from_item(item: &NavItem, placement: NavPlacement) -> Self {
        Self {
            placement,
            icon: item.icon,
            label: item.label,
            active: item.active,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match (self.placement, self.active) {
            (NavPlacement::TopNav, false) => "top-nav-item",
            (NavPlacement::TopNav, true) => "top-nav-item-active",
            (NavPlacement::MobileNav, false) => "mobile-nav-item",
            (NavPlacement::MobileNav, true) => "mobile-nav-item-active",
            (NavPlacement::Sidebar, false) => "nav-item",
            (NavPlacement::Sidebar, true) => "nav-item-active",
        }
    }
}

/// 공통 본문 (모든 레이아웃에서 동일한 구조)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentBody {
    pub title: &'static str,
    pub description: Description,
    pub feature_title: &'static str,
    pub features: &'static [&'static str],
    pub list_card: SampleListCard,
    pub button_card: SampleButtonCard,
    /// 샘플 패널 열 수 (모바일 1열)
    pub columns: u16,
}

/// 활성 테마 이름을 강조하는 설명문
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub lead: &'static str,
    pub highlight: &'static str,
    pub tail: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleListCard {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleButtonCard {
    pub title: &'static str,
    pub label: &'static str,
}

/// 레이아웃 디스패처
#[derive(Debug, Clone, Copy)]
pub struct LayoutDispatcher {
    registry: ThemeRegistry,
    navigation: NavigationModel,
}

impl LayoutDispatcher {
    pub fn new(registry: ThemeRegistry, navigation: NavigationModel) -> Self {
        Self {
            registry,
            navigation,
        }
    }

    /// 현재 상태로 페이지 조립
    pub fn compose(&self, state: &UiState, viewport: Viewport) -> Page {
        let theme = self.registry.lookup_or_default(state.active_theme.as_str());
        let items = self.navigation.list_nav_items();

        let chrome = match theme.layout {
            LayoutVariant::Simple => Chrome::Simple(compose_simple(items, state, viewport)),
            LayoutVariant::Sidebar => Chrome::Sidebar(compose_sidebar(items, viewport)),
            LayoutVariant::CardGrid => Chrome::CardGrid(compose_card_grid(items, viewport)),
        };

        Page {
            theme_id: theme.id,
            style_class: theme.style_class,
            header: self.compose_header(theme, state, viewport),
            chrome,
            body: compose_body(theme, viewport),
            dismiss_capture: state.overlay_active().then_some(DismissCapture),
        }
    }

    fn compose_header(&self, theme: &Theme, state: &UiState, viewport: Viewport) -> Header {
        let panel = state.dropdown_open.then(|| {
            self.registry
                .list_themes()
                .iter()
                .map(|option| SelectorEntry {
                    theme_id: option.id,
                    icon: option.icon,
                    name: option.display_name,
                    active: option.id == theme.id,
                })
                .collect()
        });

        Header {
            title: HEADER_TITLE,
            selector: ThemeSelector {
                icon: theme.icon,
                label: (!viewport.mobile).then_some(theme.display_name),
                chevron: if state.dropdown_open {
                    Icon::ChevronUp
                } else {
                    Icon::ChevronDown
                },
                panel,
            },
        }
    }
}

fn nav_entries(items: &[NavItem], placement: NavPlacement) -> Vec<NavEntry> {
    items
        .iter()
        .map(|item| NavEntry::from_item(item, placement))
        .collect()
}

fn compose_simple(items: &[NavItem], state: &UiState, viewport: Viewport) -> SimpleChrome {
    if !viewport.mobile {
        return SimpleChrome {
            brand: BRAND,
            inline_items: Some(nav_entries(items, NavPlacement::TopNav)),
            menu_toggle: None,
            mobile_menu: None,
        };
    }

    SimpleChrome {
        brand: BRAND,
        inline_items: None,
        menu_toggle: Some(MenuToggle {
            icon: if state.mobile_menu_open {
                Icon::Close
            } else {
                Icon::Menu
            },
        }),
        mobile_menu: state
            .mobile_menu_open
            .then(|| nav_entries(items, NavPlacement::MobileNav)),
    }
}

fn compose_sidebar(items: &[NavItem], viewport: Viewport) -> SidebarChrome {
    SidebarChrome {
        brand: BRAND,
        items: nav_entries(items, NavPlacement::Sidebar),
        stacked: viewport.mobile,
    }
}

fn compose_card_grid(items: &[NavItem], viewport: Viewport) -> CardGridChrome {
    let columns = if viewport.mobile {
        1
    } else {
        let fit = viewport.width / viewport.min_card_width.max(1);
        fit.clamp(1, items.len().max(1) as u16)
    };

    CardGridChrome {
        cards: items
            .iter()
            .map(|item| NavCard {
                icon: item.icon,
                title: item.label,
                description: item.description(),
            })
            .collect(),
        columns,
        main_card: MAIN_CARD_CLASS,
    }
}

fn compose_body(theme: &Theme, viewport: Viewport) -> ContentBody {
    ContentBody {
        title: BODY_TITLE,
        description: Description {
            lead: BODY_LEAD,
            highlight: theme.display_name,
            tail: BODY_TAIL,
        },
        feature_title: FEATURE_TITLE,
        features: FEATURES,
        list_card: SampleListCard {
            title: SAMPLE_LIST_TITLE,
            items: SAMPLE_LIST_ITEMS,
        },
        button_card: SampleButtonCard {
            title: SAMPLE_BUTTON_TITLE,
            label: SAMPLE_BUTTON_LABEL,
        },
        columns: if viewport.mobile { 1 } else { 2 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatcher() -> (LayoutDispatcher, ThemeRegistry) {
        let registry = ThemeRegistry::builtin();
        (
            LayoutDispatcher::new(registry, NavigationModel::builtin()),
            registry,
        )
    }

    fn state_for(id: &str, registry: &ThemeRegistry) -> UiState {
        UiState::initial(registry).select_theme(id, registry)
    }

    #[test]
    fn test_each_theme_renders_declared_layout() {
        let (dispatcher, registry) = dispatcher();
        for theme in registry.list_themes() {
            let state = state_for(theme.id.as_str(), &registry);
            for viewport in [Viewport::desktop(120), Viewport::mobile(60)] {
                let page = dispatcher.compose(&state, viewport);
                assert_eq!(page.layout(), theme.layout);
                assert_eq!(page.style_class, theme.style_class);
                assert_eq!(page.theme_id, theme.id);
                if let Chrome::CardGrid(chrome) = &page.chrome {
                    assert_eq!(chrome.main_card, MAIN_CARD_CLASS);
                }
            }
        }
    }

    #[test]
    fn test_body_structure_is_shared_across_layouts() {
        let (dispatcher, registry) = dispatcher();
        let viewport = Viewport::desktop(120);
        let bodies: Vec<ContentBody> = registry
            .list_themes()
            .iter()
            .map(|t| dispatcher.compose(&state_for(t.id.as_str(), &registry), viewport).body)
            .collect();

        for (body, theme) in bodies.iter().zip(registry.list_themes()) {
            assert_eq!(body.description.highlight, theme.display_name);
            let normalized = ContentBody {
                description: Description {
                    highlight: "",
                    ..body.description.clone()
                },
                ..body.clone()
            };
            let first = ContentBody {
                description: Description {
                    highlight: "",
                    ..bodies[0].description.clone()
                },
                ..bodies[0].clone()
            };
            assert_eq!(normalized, first);
        }
    }

    #[test]
    fn test_simple_desktop_has_inline_items_and_no_toggle() {
        let (dispatcher, registry) = dispatcher();
        let state = UiState::initial(&registry).toggle_mobile_menu();
        let page = dispatcher.compose(&state, Viewport::desktop(120));

        let Chrome::Simple(chrome) = page.chrome else {
            panic!("expected simple layout");
        };
        let inline = chrome.inline_items.expect("inline items on desktop");
        assert_eq!(inline.len(), 4);
        assert_eq!(inline[0].class_name(), "top-nav-item-active");
        assert_eq!(inline[1].class_name(), "top-nav-item");
        assert!(chrome.menu_toggle.is_none());
        assert!(chrome.mobile_menu.is_none());
    }

    #[test]
    fn test_simple_mobile_menu_present_only_when_open() {
        let (dispatcher, registry) = dispatcher();
        let closed = UiState::initial(&registry);
        let open = closed.toggle_mobile_menu();

        let Chrome::Simple(chrome) = dispatcher.compose(&closed, Viewport::mobile(60)).chrome
        else {
            panic!("expected simple layout");
        };
        assert!(chrome.inline_items.is_none());
        assert_eq!(chrome.menu_toggle, Some(MenuToggle { icon: Icon::Menu }));
        assert!(chrome.mobile_menu.is_none());

        let Chrome::Simple(chrome) = dispatcher.compose(&open, Viewport::mobile(60)).chrome else {
            panic!("expected simple layout");
        };
        assert_eq!(chrome.menu_toggle, Some(MenuToggle { icon: Icon::Close }));
        let menu = chrome.mobile_menu.expect("mobile menu when open");
        assert_eq!(menu.len(), 4);
        assert_eq!(menu[0].class_name(), "mobile-nav-item-active");
    }

    #[test]
    fn test_sidebar_ignores_mobile_menu_state() {
        let (dispatcher, registry) = dispatcher();
        let state = state_for("theme2", &registry);

        let a = dispatcher.compose(&state, Viewport::mobile(60)).chrome;
        let b = dispatcher
            .compose(&state.toggle_mobile_menu(), Viewport::mobile(60))
            .chrome;
        assert_eq!(a, b);

        let Chrome::Sidebar(chrome) = a else {
            panic!("expected sidebar layout");
        };
        assert!(chrome.stacked);
        assert_eq!(chrome.items.len(), 4);
        assert_eq!(chrome.items[0].class_name(), "nav-item-active");

        let Chrome::Sidebar(chrome) = dispatcher.compose(&state, Viewport::desktop(120)).chrome
        else {
            panic!("expected sidebar layout");
        };
        assert!(!chrome.stacked);
    }

    #[test]
    fn test_card_grid_columns() {
        let (dispatcher, registry) = dispatcher();
        let state = state_for("theme3", &registry);

        let columns = |viewport| match dispatcher.compose(&state, viewport).chrome {
            Chrome::CardGrid(chrome) => chrome.columns,
            other => panic!("unexpected chrome {other:?}"),
        };
        assert_eq!(columns(Viewport::desktop(80)), 2);
        assert_eq!(columns(Viewport::desktop(95)), 3);
        assert_eq!(columns(Viewport::desktop(400)), 4);
        assert_eq!(columns(Viewport::desktop(20)), 1);
        assert_eq!(columns(Viewport::mobile(79)), 1);
    }

    #[test]
    fn test_card_descriptions() {
        let (dispatcher, registry) = dispatcher();
        let page = dispatcher.compose(&state_for("theme3", &registry), Viewport::desktop(120));
        let Chrome::CardGrid(chrome) = page.chrome else {
            panic!("expected card grid");
        };
        assert_eq!(chrome.cards.len(), 4);
        assert_eq!(
            chrome.cards[1].description,
            "Explore about section with beautiful card-based design."
        );
    }

    #[test]
    fn test_selector_panel_marks_active_theme() {
        let (dispatcher, registry) = dispatcher();
        let state = state_for("theme2", &registry).toggle_dropdown();
        let page = dispatcher.compose(&state, Viewport::desktop(120));

        let selector = &page.header.selector;
        assert_eq!(selector.chevron, Icon::ChevronUp);
        assert_eq!(selector.label, Some("Dark Mode"));
        let panel = selector.panel.as_ref().expect("panel open");
        let names: Vec<_> = panel.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Classic Light", "Dark Mode", "Colorful Pacific"]);
        let active: Vec<_> = panel.iter().filter(|e| e.active).map(|e| e.name).collect();
        assert_eq!(active, vec!["Dark Mode"]);
    }

    #[test]
    fn test_selector_closed_and_mobile_label() {
        let (dispatcher, registry) = dispatcher();
        let page = dispatcher.compose(&UiState::initial(&registry), Viewport::mobile(50));
        assert_eq!(page.header.selector.chevron, Icon::ChevronDown);
        assert_eq!(page.header.selector.label, None);
        assert!(!page.header.selector.is_open());
        assert_eq!(page.body.columns, 1);
    }

    #[test]
    fn test_dismiss_capture_follows_overlays() {
        let (dispatcher, registry) = dispatcher();
        let viewport = Viewport::mobile(60);
        let state = UiState::initial(&registry);
        assert!(dispatcher.compose(&state, viewport).dismiss_capture.is_none());

        let state = state.toggle_mobile_menu();
        assert!(dispatcher.compose(&state, viewport).dismiss_capture.is_some());

        let state = state.toggle_dropdown();
        assert!(dispatcher.compose(&state, viewport).dismiss_capture.is_some());

        let state = state.dismiss_all();
        assert!(dispatcher.compose(&state, viewport).dismiss_capture.is_none());
    }
}
