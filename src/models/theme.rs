// Theme catalog - 테마 카탈로그
//
// 테마는 색상뿐 아니라 페이지 레이아웃 구조까지 결정합니다.
// 카탈로그는 컴파일 시점에 고정되며 실행 중 변경되지 않습니다.

use super::icon::Icon;
use std::fmt;
use thiserror::Error;

/// 레이아웃 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutVariant {
    /// 상단 가로 내비게이션
    Simple,
    /// 좌측 고정 사이드바
    Sidebar,
    /// 카드 그리드
    CardGrid,
}

impl LayoutVariant {
    /// 레이아웃 루트 클래스 이름
    pub fn class_name(self) -> &'static str {
        match self {
            LayoutVariant::Simple => "layout-simple",
            LayoutVariant::Sidebar => "layout-sidebar",
            LayoutVariant::CardGrid => "layout-cards",
        }
    }
}

/// 테마 식별자
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeId(&'static str);

impl ThemeId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// 테마 정의
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub id: ThemeId,
    pub display_name: &'static str,
    pub icon: Icon,
    pub layout: LayoutVariant,
    /// 스타일 토큰 세트 키
    pub style_class: &'static str,
}

/// 카탈로그에 없는 테마 ID
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown theme: {0}")]
pub struct UnknownThemeError(pub String);

/// 기본 테마 카탈로그 (선언 순서 = 드롭다운 순서)
pub static BUILTIN_THEMES: &[Theme] = &[
    Theme {
        id: ThemeId::new("theme1"),
        display_name: "Classic Light",
        icon: Icon::Sun,
        layout: LayoutVariant::Simple,
        style_class: "theme-classic",
    },
    Theme {
        id: ThemeId::new("theme2"),
        display_name: "Dark Mode",
        icon: Icon::Moon,
        layout: LayoutVariant::Sidebar,
        style_class: "theme-dark",
    },
    Theme {
        id: ThemeId::new("theme3"),
        display_name: "Colorful Pacific",
        icon: Icon::Palette,
        layout: LayoutVariant::CardGrid,
        style_class: "theme-colorful",
    },
];

/// 테마 레지스트리
#[derive(Debug, Clone, Copy)]
pub struct ThemeRegistry {
    themes: &'static [Theme],
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeRegistry {
    /// 기본 카탈로그로 생성
    pub fn builtin() -> Self {
        Self {
            themes: BUILTIN_THEMES,
        }
    }

    /// ID로 테마 조회
    pub fn lookup(&self, id: &str) -> Result<&'static Theme, UnknownThemeError> {
        self.themes
            .iter()
            .find(|theme| theme.id.as_str() == id)
            .ok_or_else(|| UnknownThemeError(id.to_string()))
    }

    /// ID로 테마 조회, 없으면 첫 번째 테마
    pub fn lookup_or_default(&self, id: &str) -> &'static Theme {
        match self.lookup(id) {
            Ok(theme) => theme,
            Err(err) => {
                tracing::warn!(%err, fallback = %self.default_theme().id, "theme lookup fell back");
                self.default_theme()
            }
        }
    }

    /// 기본 테마 (카탈로그 첫 항목)
    pub fn default_theme(&self) -> &'static Theme {
        &self.themes[0]
    }

    /// 전체 테마 목록 (선언 순서)
    pub fn list_themes(&self) -> &'static [Theme] {
        self.themes
    }

    /// 카탈로그 내 위치
    pub fn position(&self, id: ThemeId) -> Option<usize> {
        self.themes.iter().position(|theme| theme.id == id)
    }

    /// 위치로 테마 조회
    pub fn get(&self, index: usize) -> Option<&'static Theme> {
        self.themes.get(index)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_order() {
        let registry = ThemeRegistry::builtin();
        let names: Vec<_> = registry
            .list_themes()
            .iter()
            .map(|t| t.display_name)
            .collect();
        assert_eq!(names, vec!["Classic Light", "Dark Mode", "Colorful Pacific"]);
    }

    #[test]
    fn test_each_theme_has_distinct_layout() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.lookup("theme1").unwrap().layout, LayoutVariant::Simple);
        assert_eq!(registry.lookup("theme2").unwrap().layout, LayoutVariant::Sidebar);
        assert_eq!(registry.lookup("theme3").unwrap().layout, LayoutVariant::CardGrid);
    }

    #[test]
    fn test_lookup_unknown_theme() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(
            registry.lookup("neon"),
            Err(UnknownThemeError("neon".to_string()))
        );
    }

    #[test]
    fn test_lookup_or_default_falls_back_to_first() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.lookup_or_default("neon").id, ThemeId::new("theme1"));
        assert_eq!(registry.lookup_or_default("theme3").id, ThemeId::new("theme3"));
    }

    #[test]
    fn test_position() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(registry.position(ThemeId::new("theme2")), Some(1));
        assert_eq!(registry.position(ThemeId::new("theme9")), None);
        assert_eq!(registry.get(2).map(|t| t.display_name), Some("Colorful Pacific"));
    }
}
