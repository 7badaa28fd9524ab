// Icon glyphs - 아이콘 참조를 터미널 글리프로 변환

use crate::models::Icon;
use serde::Deserialize;

/// 아이콘 표시 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// 이모지 아이콘 (기본)
    #[default]
    Emoji,
    /// ASCII 텍스트 아이콘 (터미널 호환)
    Ascii,
}

/// 아이콘 글리프
pub fn glyph(icon: Icon, mode: IconMode) -> &'static str {
    match mode {
        IconMode::Emoji => match icon {
            Icon::Sun => "☀",
            Icon::Moon => "☾",
            Icon::Palette => "✿",
            Icon::Home => "⌂",
            Icon::User => "☺",
            Icon::Settings => "⚙",
            Icon::Mail => "✉",
            Icon::Menu => "☰",
            Icon::Close => "✕",
            Icon::ChevronDown => "▾",
            Icon::ChevronUp => "▴",
        },
        IconMode::Ascii => match icon {
            Icon::Sun => "*",
            Icon::Moon => "C",
            Icon::Palette => "%",
            Icon::Home => "H",
            Icon::User => "U",
            Icon::Settings => "S",
            Icon::Mail => "@",
            Icon::Menu => "=",
            Icon::Close => "x",
            Icon::ChevronDown => "v",
            Icon::ChevronUp => "^",
        },
    }
}
