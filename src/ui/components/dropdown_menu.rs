// Theme dropdown component - 테마 선택 드롭다운 패널
//
// 헤더 아래, 선택 버튼 오른쪽 끝에 맞춰 펼쳐집니다.
// 활성 테마는 강조 배경, 키보드 커서 위치는 hover 배경으로 표시합니다.

use super::paint::{fill, frame, inner, put_str};
use crate::core::actions::get_shortcut_display;
use crate::ui::dispatcher::SelectorEntry;
use crate::ui::icons::{glyph, IconMode};
use crate::ui::theme::{role, TokenSet};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

const MIN_PANEL_WIDTH: u16 = 16;

/// 테마 드롭다운 컴포넌트
pub struct ThemeDropdown<'a> {
    entries: &'a [SelectorEntry],
    cursor: usize,
    tokens: &'a TokenSet,
    icons: IconMode,
}

impl<'a> ThemeDropdown<'a> {
    pub fn new(entries: &'a [SelectorEntry], tokens: &'a TokenSet) -> Self {
        Self {
            entries,
            cursor: 0,
            tokens,
            icons: IconMode::default(),
        }
    }

    /// 키보드 커서 위치
    pub fn cursor(mut self, index: usize) -> Self {
        self.cursor = index;
        self
    }

    pub fn icons(mut self, mode: IconMode) -> Self {
        self.icons = mode;
        self
    }

    /// 패널 너비 계산 (테두리 포함)
    fn calculate_width(&self) -> u16 {
        let max_label = self
            .entries
            .iter()
            .map(|entry| entry.name.width())
            .max()
            .unwrap_or(0);
        // 테두리(2) + 여백(1) + 아이콘(1) + 공백(1) + 간격(1) + 표시(2) + 단축키(2)
        (max_label as u16 + 10).max(MIN_PANEL_WIDTH)
    }

    /// 패널 영역: anchor 오른쪽 끝에 맞추고 top 행에서 시작, bounds 안으로 제한
    pub fn panel_area(&self, anchor: Rect, top: u16, bounds: Rect) -> Rect {
        let width = self.calculate_width().min(bounds.width);
        let height = (self.entries.len() as u16 + 2).min(bounds.bottom().saturating_sub(top));
        let right = anchor.right().min(bounds.right());
        Rect {
            x: right.saturating_sub(width).max(bounds.x),
            y: top,
            width,
            height,
        }
    }

    /// 패널 안 각 항목의 영역
    pub fn item_areas(&self, panel: Rect) -> Vec<Rect> {
        let body = inner(panel);
        self.entries
            .iter()
            .enumerate()
            .take(body.height as usize)
            .map(|(i, _)| Rect::new(body.x, body.y + i as u16, body.width, 1))
            .collect()
    }

    fn render_item(
        &self,
        index: usize,
        entry: &SelectorEntry,
        is_cursor: bool,
        area: Rect,
        buf: &mut Buffer,
    ) {
        let bg_role = if entry.active {
            role::ACCENT
        } else if is_cursor {
            role::HOVER
        } else {
            role::CARD
        };
        fill(buf, area, self.tokens, bg_role);

        let mut style = Style::default().fg(self.tokens.color(role::TEXT));
        if entry.active {
            style = style
                .fg(self.tokens.color(role::PRIMARY))
                .add_modifier(Modifier::BOLD);
        }
        if is_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        let text = format!(" {} {}", glyph(entry.icon, self.icons), entry.name);
        put_str(buf, area.x, area.y, &text, style, area.width);

        if entry.active {
            let marker = if self.icons == IconMode::Ascii { "<" } else { "●" };
            put_str(buf, area.right().saturating_sub(4), area.y, marker, style, 1);
        }

        // 빠른 선택 단축키 (레지스트리에서 조회)
        if let Some(shortcut) = get_shortcut_display(&format!("theme_{}", index + 1)) {
            let shortcut_style = Style::default().fg(self.tokens.color(role::TEXT_SECONDARY));
            put_str(
                buf,
                area.right().saturating_sub(2),
                area.y,
                shortcut,
                shortcut_style,
                1,
            );
        }
    }
}

impl Widget for ThemeDropdown<'_> {
    /// `area`는 [`ThemeDropdown::panel_area`]로 계산한 패널 영역입니다.
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.entries.is_empty() || area.is_empty() {
            return;
        }
        let area = area.intersection(buf.area);

        Clear.render(area, buf);
        fill(buf, area, self.tokens, role::CARD);
        frame(buf, area, self.tokens.color(role::BORDER));

        for (i, item_area) in self.item_areas(area).into_iter().enumerate() {
            self.render_item(i, &self.entries[i], i == self.cursor, item_area, buf);
        }
    }
}
