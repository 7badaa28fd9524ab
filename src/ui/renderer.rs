//! 페이지 렌더러
//!
//! [`Page`] 구조를 터미널 버퍼에 그립니다. 레이아웃 본문은 전체 높이의 오프스크린 버퍼에
//! 먼저 그린 뒤 스크롤 위치부터 본문 영역에 복사합니다.
//!
//! 그리는 순서(아래에서 위로): 레이아웃 본문, 커맨드 바, 헤더, 드롭다운 패널.
//! 렌더 결과로 마우스 라우팅용 [`HitMap`]을 돌려줍니다.

use crate::models::ThemeId;
use crate::ui::components::{
    paint::{contains, fill, frame, inner},
    CardGrid, CommandBar, ContentView, HeaderBar, SidebarNav, ThemeDropdown, TopNav,
    SIDEBAR_WIDTH,
};
use crate::ui::dispatcher::{Chrome, Page};
use crate::ui::icons::IconMode;
use crate::ui::layout::LayoutAreas;
use crate::ui::theme::{role, TokenSet};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// 클릭 위치가 가리키는 대상
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// 드롭다운 패널의 테마 항목
    ThemeOption(ThemeId),
    /// 드롭다운 패널 테두리 등 항목 외 영역
    DropdownPanel,
    /// 헤더의 테마 선택 버튼
    ThemeButton,
    /// 헤더의 나머지 영역
    Header,
    /// 오버레이가 열린 상태에서 바깥 영역
    Outside,
    /// 모바일 메뉴 토글 버튼
    MenuToggle,
    Nothing,
}

/// 마지막 렌더 결과의 클릭 영역 정보 (화면 좌표)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub header: Rect,
    pub theme_button: Rect,
    pub dropdown_panel: Option<Rect>,
    pub dropdown_items: Vec<(Rect, ThemeId)>,
    pub menu_toggle: Option<Rect>,
    /// 바깥 클릭 캡처 활성 여부
    pub capture_active: bool,
    /// 레이아웃 본문 전체 높이
    pub content_height: u16,
    /// 본문 영역 높이
    pub viewport_height: u16,
    /// 실제 적용된 스크롤 위치
    pub scroll: u16,
}

impl HitMap {
    /// 좌표의 대상 찾기 (위에 그려진 것부터)
    ///
    /// 헤더와 드롭다운은 캡처 영역보다 위에 있고, 레이아웃 본문은 아래에 있습니다.
    pub fn target(&self, col: u16, row: u16) -> HitTarget {
        if let Some((_, id)) = self
            .dropdown_items
            .iter()
            .find(|(area, _)| contains(*area, col, row))
        {
            return HitTarget::ThemeOption(*id);
        }
        if self
            .dropdown_panel
            .is_some_and(|panel| contains(panel, col, row))
        {
            return HitTarget::DropdownPanel;
        }
        if contains(self.theme_button, col, row) {
            return HitTarget::ThemeButton;
        }
        if contains(self.header, col, row) {
            return HitTarget::Header;
        }
        if self.capture_active {
            return HitTarget::Outside;
        }
        if self
            .menu_toggle
            .is_some_and(|toggle| contains(toggle, col, row))
        {
            return HitTarget::MenuToggle;
        }
        HitTarget::Nothing
    }

    /// 최대 스크롤 위치
    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }
}

/// 페이지 뷰
pub struct PageView<'a> {
    page: &'a Page,
    tokens: &'a TokenSet,
    icons: IconMode,
    cursor: usize,
    scroll: u16,
}

impl<'a> PageView<'a> {
    pub fn new(page: &'a Page, tokens: &'a TokenSet) -> Self {
        Self {
            page,
            tokens,
            icons: IconMode::default(),
            cursor: 0,
            scroll: 0,
        }
    }

    pub fn icons(mut self, mode: IconMode) -> Self {
        self.icons = mode;
        self
    }

    /// 드롭다운 키보드 커서
    pub fn cursor(mut self, index: usize) -> Self {
        self.cursor = index;
        self
    }

    pub fn scroll(mut self, offset: u16) -> Self {
        self.scroll = offset;
        self
    }

    /// 페이지 그리기
    pub fn render(self, areas: &LayoutAreas, buf: &mut Buffer) -> HitMap {
        let main = areas.main;
        let mut hits = HitMap {
            header: areas.header,
            capture_active: self.page.dismiss_capture.is_some(),
            viewport_height: main.height,
            ..HitMap::default()
        };

        // 레이아웃 본문
        let (body, toggle) = self.render_body(main.width);
        hits.content_height = body.area.height;
        hits.scroll = self.scroll.min(hits.max_scroll());
        blit(&body, hits.scroll, main, buf);

        hits.menu_toggle = toggle.and_then(|t| {
            let y = t.y.checked_sub(hits.scroll)?;
            (y < main.height).then(|| Rect::new(main.x + t.x, main.y + y, t.width, t.height))
        });

        let menu_available = matches!(
            &self.page.chrome,
            Chrome::Simple(chrome) if chrome.menu_toggle.is_some()
        );
        CommandBar::new()
            .tokens(self.tokens)
            .menu_available(menu_available)
            .render(areas.command_bar, buf);

        // 헤더
        let header = HeaderBar::new(&self.page.header, self.tokens).icons(self.icons);
        hits.theme_button = header.button_area(areas.header);
        header.render(areas.header, buf);

        // 드롭다운 패널
        if let Some(entries) = &self.page.header.selector.panel {
            let dropdown = ThemeDropdown::new(entries, self.tokens)
                .cursor(self.cursor)
                .icons(self.icons);
            let panel = dropdown.panel_area(hits.theme_button, areas.header.bottom(), buf.area);
            hits.dropdown_items = dropdown
                .item_areas(panel)
                .into_iter()
                .zip(entries.iter().map(|e| e.theme_id))
                .collect();
            hits.dropdown_panel = Some(panel);
            dropdown.render(panel, buf);
        }

        hits
    }

    /// 본문 전체를 오프스크린 버퍼에 그림. 메뉴 토글 위치(오프스크린 좌표)도 반환합니다.
    fn render_body(&self, width: u16) -> (Buffer, Option<Rect>) {
        let content = ContentView::new(&self.page.body, self.tokens);

        match &self.page.chrome {
            Chrome::Simple(chrome) => {
                let nav = TopNav::new(chrome, self.tokens).icons(self.icons);
                let nav_height = nav.height();
                let total = nav_height + content.height(width);
                let mut buf = offscreen(width, total, self.tokens);

                let nav_area = Rect::new(0, 0, width, nav_height);
                let toggle = nav.toggle_area(nav_area);
                nav.render(nav_area, &mut buf);
                content.render(Rect::new(0, nav_height, width, total - nav_height), &mut buf);
                (buf, toggle)
            }
            Chrome::Sidebar(chrome) => {
                let nav = SidebarNav::new(chrome, self.tokens).icons(self.icons);
                if chrome.stacked {
                    let nav_area = Rect::new(2, 1, width.saturating_sub(4), nav.height());
                    let top = nav_area.bottom();
                    let total = top + content.height(width);
                    let mut buf = offscreen(width, total, self.tokens);
                    nav.render(nav_area, &mut buf);
                    content.render(Rect::new(0, top, width, total - top), &mut buf);
                    (buf, None)
                } else {
                    let side = SIDEBAR_WIDTH.min(width / 2);
                    let content_x = side + 1;
                    let content_width = width.saturating_sub(content_x);
                    let total = content
                        .height(content_width)
                        .max(nav.height() + 2);
                    let mut buf = offscreen(width, total, self.tokens);
                    nav.render(Rect::new(1, 1, side, total - 2), &mut buf);
                    content.render(Rect::new(content_x, 0, content_width, total), &mut buf);
                    (buf, None)
                }
            }
            Chrome::CardGrid(chrome) => {
                let grid = CardGrid::new(chrome, self.tokens).icons(self.icons);
                let grid_width = width.saturating_sub(4);
                let grid_area = Rect::new(2, 1, grid_width, grid.height(grid_width));
                // 격자 아래 본문 전체를 감싸는 카드 (테두리 + 안쪽 여백 1열)
                let card_width = grid_width;
                let content_width = card_width.saturating_sub(2);
                let card_area = Rect::new(
                    2,
                    grid_area.bottom() + 1,
                    card_width,
                    content.height(content_width) + 2,
                );
                let total = card_area.bottom() + 1;
                let mut buf = offscreen(width, total, self.tokens);
                grid.render(grid_area, &mut buf);
                fill(&mut buf, card_area, self.tokens, role::CARD);
                frame(&mut buf, card_area, self.tokens.color(role::BORDER));
                content.render(inner(card_area), &mut buf);
                (buf, None)
            }
        }
    }
}

fn offscreen(width: u16, height: u16, tokens: &TokenSet) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    fill(&mut buf, area, tokens, role::BACKGROUND);
    buf
}

/// 오프스크린 버퍼의 scroll 행부터 target 영역에 복사
fn blit(source: &Buffer, scroll: u16, target: Rect, buf: &mut Buffer) {
    let target = target.intersection(buf.area);
    for dy in 0..target.height {
        let Some(sy) = scroll.checked_add(dy) else {
            break;
        };
        for dx in 0..target.width {
            let (Some(src), Some(dst)) = (
                source.cell((dx, sy)),
                buf.cell_mut((target.x + dx, target.y + dy)),
            ) else {
                continue;
            };
            *dst = src.clone();
        }
    }
}
