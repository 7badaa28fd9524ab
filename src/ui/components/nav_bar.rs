// Top navigation component - Simple 레이아웃의 상단 내비게이션
//
// 데스크톱: 브랜드 + 가로 항목
// 모바일: 브랜드 + 메뉴 토글 버튼, 열리면 세로 항목 목록

use super::paint::{fill, hline, put_str};
use crate::ui::dispatcher::{NavEntry, SimpleChrome};
use crate::ui::icons::{glyph, IconMode};
use crate::ui::theme::{role, TokenSet};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

const TOGGLE_WIDTH: u16 = 3;

/// 상단 내비게이션 컴포넌트
pub struct TopNav<'a> {
    chrome: &'a SimpleChrome,
    tokens: &'a TokenSet,
    icons: IconMode,
}

impl<'a> TopNav<'a> {
    pub fn new(chrome: &'a SimpleChrome, tokens: &'a TokenSet) -> Self {
        Self {
            chrome,
            tokens,
            icons: IconMode::default(),
        }
    }

    pub fn icons(mut self, mode: IconMode) -> Self {
        self.icons = mode;
        self
    }

    /// 필요한 높이
    pub fn height(&self) -> u16 {
        let menu_rows = self.chrome.mobile_menu.as_ref().map_or(0, Vec::len) as u16;
        2 + menu_rows
    }

    /// 메뉴 토글 버튼 위치 (모바일에서만 존재)
    pub fn toggle_area(&self, area: Rect) -> Option<Rect> {
        self.chrome.menu_toggle?;
        if area.width < TOGGLE_WIDTH + 2 || area.height == 0 {
            return None;
        }
        Some(Rect::new(
            area.right() - TOGGLE_WIDTH - 2,
            area.y,
            TOGGLE_WIDTH,
            1,
        ))
    }

    fn entry_style(&self, entry: &NavEntry) -> Style {
        if entry.active {
            Style::default()
                .fg(self.tokens.color(role::PRIMARY))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.tokens.color(role::TEXT_SECONDARY))
        }
    }

    fn render_inline(&self, items: &[NavEntry], x: u16, area: Rect, buf: &mut Buffer) {
        let mut x = x;
        for entry in items {
            let text = format!(" {} {} ", glyph(entry.icon, self.icons), entry.label);
            let width = text.width() as u16;
            if x + width > area.right() {
                break;
            }
            if let Some(bg) = role::nav_background(entry.class_name()) {
                fill(buf, Rect::new(x, area.y, width, 1), self.tokens, bg);
            }
            put_str(buf, x, area.y, &text, self.entry_style(entry), width);
            x += width + 1;
        }
    }

    fn render_menu(&self, items: &[NavEntry], area: Rect, buf: &mut Buffer) {
        for (i, entry) in items.iter().enumerate() {
            let row = Rect::new(area.x, area.y + 1 + i as u16, area.width, 1);
            if let Some(bg) = role::nav_background(entry.class_name()) {
                fill(buf, row, self.tokens, bg);
            }
            let text = format!("  {} {}", glyph(entry.icon, self.icons), entry.label);
            put_str(buf, row.x, row.y, &text, self.entry_style(entry), row.width);
        }
    }
}

impl Widget for TopNav<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        fill(buf, area, self.tokens, role::CARD);

        let brand_x = area.x + 2;
        let brand_width = put_str(
            buf,
            brand_x,
            area.y,
            self.chrome.brand,
            Style::default()
                .fg(self.tokens.color(role::PRIMARY))
                .add_modifier(Modifier::BOLD),
            area.width.saturating_sub(2),
        );

        if let Some(items) = &self.chrome.inline_items {
            self.render_inline(items, brand_x + brand_width + 3, area, buf);
        }

        if let (Some(toggle), Some(button)) = (self.chrome.menu_toggle, self.toggle_area(area)) {
            fill(buf, button, self.tokens, role::BUTTON);
            put_str(
                buf,
                button.x + 1,
                button.y,
                glyph(toggle.icon, self.icons),
                Style::default().fg(self.tokens.color(role::ON_PRIMARY)),
                1,
            );
        }

        if let Some(items) = &self.chrome.mobile_menu {
            self.render_menu(items, area, buf);
        }

        hline(
            buf,
            area.x,
            area.bottom() - 1,
            area.width,
            self.tokens.color(role::BORDER),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Icon;
    use crate::ui::dispatcher::{MenuToggle, NavPlacement, BRAND};

    fn entries(placement: NavPlacement) -> Vec<NavEntry> {
        ["Home", "About", "Contact", "Services"]
            .into_iter()
            .enumerate()
            .map(|(i, label)| NavEntry {
                placement,
                icon: Icon::Home,
                label,
                active: i == 0,
            })
            .collect()
    }

    fn text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_desktop_inline_items() {
        let chrome = SimpleChrome {
            brand: BRAND,
            inline_items: Some(entries(NavPlacement::TopNav)),
            menu_toggle: None,
            mobile_menu: None,
        };
        let tokens = TokenSet::classic();
        let nav = TopNav::new(&chrome, &tokens).icons(IconMode::Ascii);
        assert_eq!(nav.height(), 2);
        assert!(nav.toggle_area(Rect::new(0, 0, 100, 2)).is_none());

        let area = Rect::new(0, 0, 100, 2);
        let mut buf = Buffer::empty(area);
        nav.render(area, &mut buf);
        let rendered = text(&buf);
        assert!(rendered.contains("ThemeApp"));
        assert!(rendered.contains("H Services"));
    }

    #[test]
    fn test_mobile_menu_rows() {
        let chrome = SimpleChrome {
            brand: BRAND,
            inline_items: None,
            menu_toggle: Some(MenuToggle { icon: Icon::Close }),
            mobile_menu: Some(entries(NavPlacement::MobileNav)),
        };
        let tokens = TokenSet::classic();
        let nav = TopNav::new(&chrome, &tokens).icons(IconMode::Ascii);
        assert_eq!(nav.height(), 6);

        let area = Rect::new(0, 0, 50, 6);
        assert_eq!(nav.toggle_area(area), Some(Rect::new(45, 0, 3, 1)));

        let mut buf = Buffer::empty(area);
        nav.render(area, &mut buf);
        assert_eq!(buf[(46, 0)].symbol(), "x");
        let rendered = text(&buf);
        assert!(rendered.contains("H Contact"));
    }
}
