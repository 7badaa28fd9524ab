// Sidebar component - Sidebar 레이아웃의 세로 내비게이션

use super::paint::{fill, frame, inner, put_str};
use crate::ui::dispatcher::SidebarChrome;
use crate::ui::icons::{glyph, IconMode};
use crate::ui::theme::{role, TokenSet};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

/// 데스크톱 사이드바 너비
pub const SIDEBAR_WIDTH: u16 = 22;

/// 사이드바 컴포넌트
pub struct SidebarNav<'a> {
    chrome: &'a SidebarChrome,
    tokens: &'a TokenSet,
    icons: IconMode,
}

impl<'a> SidebarNav<'a> {
    pub fn new(chrome: &'a SidebarChrome, tokens: &'a TokenSet) -> Self {
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

    /// 내용 높이: 테두리(2) + 브랜드(1) + 빈 줄(1) + 항목
    pub fn height(&self) -> u16 {
        4 + self.chrome.items.len() as u16
    }
}

impl Widget for SidebarNav<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        fill(buf, area, self.tokens, role::SECONDARY);
        frame(buf, area, self.tokens.color(role::BORDER));

        let body = inner(area);
        put_str(
            buf,
            body.x + 1,
            body.y,
            self.chrome.brand,
            Style::default()
                .fg(self.tokens.color(role::PRIMARY))
                .add_modifier(Modifier::BOLD),
            body.width.saturating_sub(1),
        );

        for (i, entry) in self.chrome.items.iter().enumerate() {
            let y = body.y + 2 + i as u16;
            if y >= body.bottom() {
                break;
            }
            let row = Rect::new(body.x, y, body.width, 1);
            let style = if let Some(bg) = role::nav_background(entry.class_name()) {
                fill(buf, row, self.tokens, bg);
                Style::default()
                    .fg(self.tokens.color(role::ON_PRIMARY))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.tokens.color(role::TEXT))
            };
            let text = format!(" {} {}", glyph(entry.icon, self.icons), entry.label);
            put_str(buf, row.x, row.y, &text, style, row.width);
        }
    }
}
