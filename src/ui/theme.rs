// Style resolver - 테마 ID → 스타일 토큰 세트
//
// 토큰 세트는 역할(role) → 색상 정의 맵입니다. 코어는 내용을 해석하지 않고
// 활성 테마 기준으로 그대로 넘겨주며, 위젯만 필요한 역할을 읽습니다.

use crate::models::ThemeRegistry;
use ratatui::style::Color;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// 토큰 역할 이름
pub mod role {
    pub const PRIMARY: &str = "primary";
    pub const SECONDARY: &str = "secondary";
    pub const BACKGROUND: &str = "background";
    pub const TEXT: &str = "text";
    pub const TEXT_SECONDARY: &str = "text_secondary";
    pub const BORDER: &str = "border";
    pub const HOVER: &str = "hover";
    pub const ACCENT: &str = "accent";
    pub const CARD: &str = "card";
    pub const HEADER: &str = "header";
    pub const BUTTON: &str = "button";
    pub const ON_PRIMARY: &str = "on_primary";

    /// 내비게이션 항목 클래스의 배경 역할 (없으면 부모 배경 유지)
    pub fn nav_background(class: &str) -> Option<&'static str> {
        match class {
            "top-nav-item-active" | "mobile-nav-item-active" => Some(ACCENT),
            "nav-item-active" => Some(PRIMARY),
            _ => None,
        }
    }
}

/// 색상 정의 (TOML 직렬화/역직렬화 지원)
///
/// 단색은 Hex 문자열("#1e1e1e") 또는 색상 이름("Red"),
/// 그라디언트는 `{ from = "#06b6d4", to = "#3b82f6" }` 형식입니다.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Gradient { from: String, to: String },
    Solid(String),
}

impl ColorDef {
    pub fn gradient(from: &str, to: &str) -> Self {
        ColorDef::Gradient {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// 대표 색상 (그라디언트는 시작 색상)
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Solid(value) => parse_color(value),
            ColorDef::Gradient { from, .. } => parse_color(from),
        }
    }

    /// 위치 t(0.0~1.0)의 색상. 단색은 t와 무관합니다.
    pub fn color_at(&self, t: f32) -> Color {
        match self {
            ColorDef::Solid(value) => parse_color(value),
            ColorDef::Gradient { from, to } => {
                let (start, end) = (parse_color(from), parse_color(to));
                match (start, end) {
                    (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
                        let t = t.clamp(0.0, 1.0);
                        Color::Rgb(lerp(r1, r2, t), lerp(g1, g2, t), lerp(b1, b2, t))
                    }
                    _ => start,
                }
            }
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        ColorDef::Solid(s.to_string())
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

fn parse_color(value: &str) -> Color {
    try_parse_color(value).unwrap_or(Color::Reset)
}

/// 해석할 수 없는 값은 None
fn try_parse_color(value: &str) -> Option<Color> {
    if value.starts_with('#') {
        try_parse_hex(value)
    } else {
        try_parse_named(value)
    }
}

/// Hex 색상 문자열을 Color로 파싱
fn parse_hex_color(hex: &str) -> Color {
    try_parse_hex(hex).unwrap_or(Color::Reset)
}

/// "#rrggbb" 형식만 허용 (ASCII 16진수 6자리)
fn try_parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(Color::Rgb(
        (value >> 16) as u8,
        (value >> 8) as u8,
        value as u8,
    ))
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    try_parse_named(name).unwrap_or(Color::Reset)
}

fn try_parse_named(name: &str) -> Option<Color> {
    let color = match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => return None,
    };
    Some(color)
}

/// 스타일 토큰 세트
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TokenSet {
    tokens: BTreeMap<String, ColorDef>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, role: &str, value: impl Into<ColorDef>) -> Self {
        self.tokens.insert(role.to_string(), value.into());
        self
    }

    pub fn get(&self, role: &str) -> Option<&ColorDef> {
        self.tokens.get(role)
    }

    /// 역할의 대표 색상 (없으면 Reset)
    pub fn color(&self, role: &str) -> Color {
        self.get(role).map_or(Color::Reset, ColorDef::to_color)
    }

    /// 역할의 위치별 색상 (그라디언트 채색용)
    pub fn color_at(&self, role: &str, t: f32) -> Color {
        self.get(role).map_or(Color::Reset, |c| c.color_at(t))
    }

    /// 다른 세트의 값으로 덮어쓰기
    pub fn merge(&mut self, other: TokenSet) {
        self.tokens.extend(other.tokens);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// TOML 문자열에서 로드
    ///
    /// 색상으로 해석되지 않는 값이 하나라도 있으면 전체를 거부합니다.
    pub fn from_toml(data: &str) -> Result<Self, anyhow::Error> {
        let set: TokenSet = toml::from_str(data)?;
        for (role, def) in &set.tokens {
            let values = match def {
                ColorDef::Solid(value) => vec![value],
                ColorDef::Gradient { from, to } => vec![from, to],
            };
            if let Some(bad) = values.iter().find(|v| try_parse_color(v).is_none()) {
                anyhow::bail!("invalid color {bad:?} for role '{role}'");
            }
        }
        Ok(set)
    }

    /// Classic Light
    pub fn classic() -> Self {
        TokenSet::new()
            .with(role::PRIMARY, "#2563eb")
            .with(role::SECONDARY, "#f3f4f6")
            .with(role::BACKGROUND, "#ffffff")
            .with(role::TEXT, "#111827")
            .with(role::TEXT_SECONDARY, "#6b7280")
            .with(role::BORDER, "#e5e7eb")
            .with(role::HOVER, "#eff6ff")
            .with(role::ACCENT, "#dbeafe")
            .with(role::CARD, "#f9fafb")
            .with(role::HEADER, "#f3f4f6")
            .with(role::BUTTON, "#2563eb")
            .with(role::ON_PRIMARY, "#ffffff")
    }

    /// Dark Mode
    pub fn dark() -> Self {
        TokenSet::new()
            .with(role::PRIMARY, "#9333ea")
            .with(role::SECONDARY, "#1f2937")
            .with(role::BACKGROUND, "#111827")
            .with(role::TEXT, "#ffffff")
            .with(role::TEXT_SECONDARY, "#d1d5db")
            .with(role::BORDER, "#374151")
            .with(role::HOVER, "#374151")
            .with(role::ACCENT, "#581c87")
            .with(role::CARD, "#1f2937")
            .with(role::HEADER, "#1f2937")
            .with(role::BUTTON, "#9333ea")
            .with(role::ON_PRIMARY, "#ffffff")
    }

    /// Colorful Pacific
    pub fn colorful() -> Self {
        TokenSet::new()
            .with(role::PRIMARY, ColorDef::gradient("#06b6d4", "#3b82f6"))
            .with(role::SECONDARY, ColorDef::gradient("#fbbf24", "#f59e0b"))
            .with(role::BACKGROUND, ColorDef::gradient("#ecfeff", "#dbeafe"))
            .with(role::TEXT, "#1e293b")
            .with(role::TEXT_SECONDARY, "#475569")
            .with(role::BORDER, "#67e8f9")
            .with(role::HOVER, "#e0f7fa")
            .with(role::ACCENT, ColorDef::gradient("#e0f7fa", "#dbeafe"))
            .with(role::CARD, "#f7fdff")
            .with(role::HEADER, ColorDef::gradient("#fbbf24", "#f59e0b"))
            .with(role::BUTTON, ColorDef::gradient("#06b6d4", "#3b82f6"))
            .with(role::ON_PRIMARY, "#ffffff")
    }
}

/// 스타일 리졸버
///
/// 스타일 클래스별 토큰 세트를 보관하고, 테마 ID로 조회합니다.
#[derive(Debug, Clone)]
pub struct StyleResolver {
    registry: ThemeRegistry,
    sets: HashMap<&'static str, TokenSet>,
    fallback: TokenSet,
}

impl StyleResolver {
    /// 기본 토큰 세트로 생성
    pub fn builtin(registry: ThemeRegistry) -> Self {
        let mut sets = HashMap::new();
        sets.insert("theme-classic", TokenSet::classic());
        sets.insert("theme-dark", TokenSet::dark());
        sets.insert("theme-colorful", TokenSet::colorful());
        Self::with_sets(registry, sets)
    }

    /// 임의 토큰 세트로 생성. 기본 세트는 카탈로그 첫 테마의 세트입니다.
    pub fn with_sets(registry: ThemeRegistry, sets: HashMap<&'static str, TokenSet>) -> Self {
        let fallback = sets
            .get(registry.default_theme().style_class)
            .cloned()
            .unwrap_or_default();
        Self {
            registry,
            sets,
            fallback,
        }
    }

    /// 테마 ID → 토큰 세트 (알 수 없는 ID는 기본 세트)
    pub fn resolve(&self, theme_id: &str) -> &TokenSet {
        let Ok(theme) = self.registry.lookup(theme_id) else {
            tracing::warn!(theme_id, "unknown theme, using default token set");
            return &self.fallback;
        };
        self.sets.get(theme.style_class).unwrap_or(&self.fallback)
    }

    /// 설정 디렉토리의 `<style_class>.toml` 파일로 토큰 덮어쓰기
    ///
    /// 잘못된 파일은 경고 로그 후 건너뜁니다. 적용된 파일 수를 반환합니다.
    pub fn load_overrides_from_dir(&mut self, dir: &Path) -> usize {
        if !dir.is_dir() {
            return 0;
        }

        let mut applied = 0;
        for theme in self.registry.list_themes() {
            let path = dir.join(format!("{}.toml", theme.style_class));
            if !path.is_file() {
                continue;
            }

            let loaded = fs::read_to_string(&path)
                .map_err(anyhow::Error::from)
                .and_then(|data| TokenSet::from_toml(&data));

            match loaded {
                Ok(overrides) if overrides.is_empty() => {
                    tracing::debug!(path = %path.display(), "empty style override file");
                }
                Ok(overrides) => {
                    tracing::info!(path = %path.display(), tokens = overrides.len(), "style overrides loaded");
                    self.sets
                        .entry(theme.style_class)
                        .or_default()
                        .merge(overrides);
                    if theme.id == self.registry.default_theme().id {
                        self.fallback = self.sets[theme.style_class].clone();
                    }
                    applied += 1;
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring style override");
                }
            }
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(parse_hex_color("#1e1e1e"), Color::Rgb(30, 30, 30));
        assert_eq!(parse_hex_color("#fff"), Color::Reset);
        // 6바이트지만 ASCII가 아닌 값
        assert_eq!(parse_hex_color("#aé123"), Color::Reset);
        assert_eq!(parse_hex_color("#12345g"), Color::Reset);
    }

    #[test]
    fn test_token_set_rejects_unparsable_colors() {
        assert!(TokenSet::from_toml("primary = \"#aé123\"\n").is_err());
        assert!(TokenSet::from_toml("primary = \"mauve\"\n").is_err());
        assert!(TokenSet::from_toml("button = { from = \"#000000\", to = \"#zzzzzz\" }\n").is_err());
    }

    #[test]
    fn test_load_overrides_skips_non_ascii_hex() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("theme-classic.toml"), "primary = \"#aé123\"\n").unwrap();

        let mut resolver = StyleResolver::builtin(ThemeRegistry::builtin());
        assert_eq!(resolver.load_overrides_from_dir(temp.path()), 0);
        assert_eq!(
            resolver.resolve("theme1").color(role::PRIMARY),
            Color::Rgb(0x25, 0x63, 0xeb)
        );
    }

    #[test]
    fn test_named_color_parsing() {
        assert_eq!(parse_named_color("red"), Color::Red);
        assert_eq!(parse_named_color("White"), Color::White);
        assert_eq!(parse_named_color("mauve"), Color::Reset);
    }

    #[test]
    fn test_gradient_interpolation() {
        let gradient = ColorDef::gradient("#000000", "#ffffff");
        assert_eq!(gradient.color_at(0.0), Color::Rgb(0, 0, 0));
        assert_eq!(gradient.color_at(1.0), Color::Rgb(255, 255, 255));
        assert_eq!(gradient.color_at(0.5), Color::Rgb(128, 128, 128));
        assert_eq!(gradient.color_at(3.0), Color::Rgb(255, 255, 255));
        assert_eq!(gradient.to_color(), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_resolve_each_builtin_theme() {
        let registry = ThemeRegistry::builtin();
        let resolver = StyleResolver::builtin(registry);

        assert_eq!(
            resolver.resolve("theme1").color(role::PRIMARY),
            Color::Rgb(0x25, 0x63, 0xeb)
        );
        assert_eq!(
            resolver.resolve("theme2").color(role::BACKGROUND),
            Color::Rgb(0x11, 0x18, 0x27)
        );
        assert!(matches!(
            resolver.resolve("theme3").get(role::PRIMARY),
            Some(ColorDef::Gradient { .. })
        ));
    }

    #[test]
    fn test_nav_background_roles() {
        assert_eq!(role::nav_background("nav-item-active"), Some(role::PRIMARY));
        assert_eq!(role::nav_background("mobile-nav-item-active"), Some(role::ACCENT));
        assert_eq!(role::nav_background("top-nav-item"), None);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_default_set() {
        let resolver = StyleResolver::builtin(ThemeRegistry::builtin());
        assert_eq!(resolver.resolve("nope"), resolver.resolve("theme1"));
    }

    #[test]
    fn test_token_set_from_toml() {
        let set = TokenSet::from_toml(
            "primary = \"#ff0000\"\nbutton = { from = \"#000000\", to = \"#ffffff\" }\n",
        )
        .unwrap();
        assert_eq!(set.color(role::PRIMARY), Color::Rgb(255, 0, 0));
        assert!(matches!(set.get(role::BUTTON), Some(ColorDef::Gradient { .. })));
        assert_eq!(set.color(role::TEXT), Color::Reset);
    }

    #[test]
    fn test_load_overrides_from_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("theme-dark.toml"),
            "primary = \"#00ff00\"\n",
        )
        .unwrap();
        fs::write(temp.path().join("theme-classic.toml"), "primary = [").unwrap();
        fs::write(temp.path().join("theme-colorful.toml"), "").unwrap();

        let mut resolver = StyleResolver::builtin(ThemeRegistry::builtin());
        let applied = resolver.load_overrides_from_dir(temp.path());

        assert_eq!(applied, 1);
        let dark = resolver.resolve("theme2");
        assert_eq!(dark.color(role::PRIMARY), Color::Rgb(0, 255, 0));
        // 덮어쓰지 않은 역할은 유지
        assert_eq!(dark.color(role::TEXT), Color::Rgb(255, 255, 255));
        // 잘못된 파일은 무시
        assert_eq!(
            resolver.resolve("theme1").color(role::PRIMARY),
            Color::Rgb(0x25, 0x63, 0xeb)
        );
    }

    #[test]
    fn test_load_overrides_missing_dir() {
        let mut resolver = StyleResolver::builtin(ThemeRegistry::builtin());
        assert_eq!(
            resolver.load_overrides_from_dir(Path::new("/nonexistent/multitheme")),
            0
        );
    }
}
