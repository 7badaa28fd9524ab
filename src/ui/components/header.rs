// Header component - 상단 고정 헤더
//
// 앱 제목과 테마 선택 버튼을 표시합니다.

use super::paint::{fill, hline, put_str};
use crate::ui::dispatcher::{Header, ThemeSelector};
use crate::ui::icons::{glyph, IconMode};
use crate::ui::theme::{role, TokenSet};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// 헤더 컴포넌트
pub struct HeaderBar<'a> {
    header: &'a Header,
    tokens: &'a TokenSet,
    icons: IconMode,
}

impl<'a> HeaderBar<'a> {
    pub fn new(header: &'a Header, tokens: &'a TokenSet) -> Self {
        Self {
            header,
            tokens,
            icons: IconMode::default(),
        }
    }

    /// 아이콘 모드 설정
    pub fn icons(mut self, mode: IconMode) -> Self {
        self.icons = mode;
        self
    }

    /// 선택 버튼 텍스트
    fn button_text(selector: &ThemeSelector, icons: IconMode) -> String {
        let icon = glyph(selector.icon, icons);
        let chevron = glyph(selector.chevron, icons);
        match selector.label {
            Some(label) => format!(" {icon} {label} {chevron} "),
            None => format!(" {icon} {chevron} "),
        }
    }

    /// 선택 버튼 위치 (헤더 오른쪽 정렬)
    pub fn button_area(&self, area: Rect) -> Rect {
        let width = (Self::button_text(&self.header.selector, self.icons).width() as u16)
            .min(area.width.saturating_sub(2));
        Rect {
            x: area.right().saturating_sub(width + 2),
            y: area.y + area.height.min(3) / 2,
            width,
            height: 1.min(area.height),
        }
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        fill(buf, area, self.tokens, role::HEADER);
        if area.height == 0 {
            return;
        }

        let button = self.button_area(area);
        let text_row = button.y;

        // 제목
        let title_x = area.x + 2;
        let title_width = button.x.saturating_sub(title_x + 1);
        put_str(
            buf,
            title_x,
            text_row,
            self.header.title,
            Style::default()
                .fg(self.tokens.color(role::TEXT))
                .add_modifier(Modifier::BOLD),
            title_width,
        );

        // 선택 버튼
        fill(buf, button, self.tokens, role::BUTTON);
        let text = Self::button_text(&self.header.selector, self.icons);
        put_str(
            buf,
            button.x,
            button.y,
            &text,
            Style::default()
                .fg(self.tokens.color(role::ON_PRIMARY))
                .add_modifier(Modifier::BOLD),
            button.width,
        );

        // 하단 경계선
        if area.height > 2 {
            hline(
                buf,
                area.x,
                area.bottom() - 1,
                area.width,
                self.tokens.color(role::BORDER),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Icon;
    use crate::ui::dispatcher::HEADER_TITLE;

    fn header(label: Option<&'static str>) -> Header {
        Header {
            title: HEADER_TITLE,
            selector: ThemeSelector {
                icon: Icon::Sun,
                label,
                chevron: Icon::ChevronDown,
                panel: None,
            },
        }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_header_shows_title_and_theme_name() {
        let header = header(Some("Classic Light"));
        let tokens = TokenSet::classic();
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        HeaderBar::new(&header, &tokens)
            .icons(IconMode::Ascii)
            .render(area, &mut buf);

        let row = row_text(&buf, 1);
        assert!(row.contains(HEADER_TITLE));
        assert!(row.contains("* Classic Light v"));
    }

    #[test]
    fn test_button_area_right_aligned() {
        let header = header(None);
        let tokens = TokenSet::classic();
        let bar = HeaderBar::new(&header, &tokens).icons(IconMode::Ascii);
        let button = bar.button_area(Rect::new(0, 0, 50, 3));
        // " * v "
        assert_eq!(button, Rect::new(43, 1, 5, 1));
    }
}
