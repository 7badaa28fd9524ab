// Command bar component - 하단 커맨드 바 컴포넌트
//
// 액션 레지스트리의 단축키 표시

use crate::core::actions::{generate_command_bar_items, get_shortcut_display};
use crate::ui::theme::{role, TokenSet};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// 커맨드 항목
#[derive(Debug, Clone)]
pub struct CommandItem {
    /// 단축키 (t, Esc, ...)
    pub key: String,
    /// 레이블 (Theme, Close, ...)
    pub label: String,
    /// 활성화 여부
    pub enabled: bool,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            enabled: true,
        }
    }
}

/// 커맨드 바 컴포넌트
pub struct CommandBar {
    /// 커맨드 항목들
    commands: Vec<CommandItem>,
    /// 배경색
    bg_color: Color,
    /// 전경색 (키)
    key_fg_color: Color,
    /// 전경색 (레이블)
    label_fg_color: Color,
    /// 비활성 색상
    disabled_color: Color,
}

impl Default for CommandBar {
    fn default() -> Self {
        Self {
            commands: generate_command_bar_items(),
            bg_color: Color::Rgb(30, 30, 30),
            key_fg_color: Color::Rgb(0, 120, 212),
            label_fg_color: Color::Rgb(212, 212, 212),
            disabled_color: Color::Rgb(100, 100, 100),
        }
    }
}

impl CommandBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 메뉴 토글 단축키 활성화 여부 (토글 버튼이 없는 레이아웃에서는 비활성)
    pub fn menu_available(mut self, available: bool) -> Self {
        if let Some(key) = get_shortcut_display("mobile_menu") {
            for cmd in self.commands.iter_mut().filter(|cmd| cmd.key == key) {
                cmd.enabled = available;
            }
        }
        self
    }

    /// 토큰 세트 적용
    pub fn tokens(mut self, tokens: &TokenSet) -> Self {
        self.bg_color = tokens.color(role::SECONDARY);
        self.key_fg_color = tokens.color(role::PRIMARY);
        self.label_fg_color = tokens.color(role::TEXT);
        self.disabled_color = tokens.color(role::TEXT_SECONDARY);
        self
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // 배경 채우기
        buf.set_style(area, Style::default().bg(self.bg_color));

        // 커맨드 항목들을 스팬으로 변환
        let mut spans = Vec::new();
        spans.push(Span::raw(" ")); // 왼쪽 패딩

        for (i, cmd) in self.commands.iter().enumerate() {
            let (key_style, label_style) = if cmd.enabled {
                (
                    Style::default()
                        .fg(self.key_fg_color)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(self.label_fg_color),
                )
            } else {
                (
                    Style::default().fg(self.disabled_color),
                    Style::default().fg(self.disabled_color),
                )
            };

            spans.push(Span::styled(&cmd.key, key_style));
            spans.push(Span::styled(":", label_style));
            spans.push(Span::styled(&cmd.label, label_style));

            // 마지막 항목이 아니면 구분자 추가
            if i < self.commands.len() - 1 {
                spans.push(Span::raw(" "));
            }
        }

        let line = Line::from(spans);
        let paragraph = Paragraph::new(line);
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_item_creation() {
        let item = CommandItem::new("t", "Theme");
        assert_eq!(item.key, "t");
        assert_eq!(item.label, "Theme");
        assert!(item.enabled);
    }

    #[test]
    fn test_menu_hint_disabled_without_toggle() {
        let bar = CommandBar::new().menu_available(false);
        let menu = bar.commands.iter().find(|c| c.key == "m").expect("menu hint");
        assert!(!menu.enabled);
        assert!(bar.commands.iter().filter(|c| c.key != "m").all(|c| c.enabled));

        let tokens = TokenSet::classic();
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        CommandBar::new()
            .tokens(&tokens)
            .menu_available(false)
            .render(area, &mut buf);
        // " t:Theme m:Menu" 에서 'm'은 9열
        assert_eq!(buf[(9, 0)].symbol(), "m");
        assert_eq!(buf[(9, 0)].fg, tokens.color(role::TEXT_SECONDARY));
        assert_eq!(buf[(1, 0)].fg, tokens.color(role::PRIMARY));
    }

    #[test]
    fn test_command_bar_default() {
        let bar = CommandBar::default();
        assert_eq!(bar.commands.len(), 6);
    }

    #[test]
    fn test_command_bar_render() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        CommandBar::new()
            .tokens(&TokenSet::classic())
            .render(area, &mut buf);

        let line: String = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(line.starts_with(" t:Theme m:Menu Esc:Close"));
    }
}
