// Configuration - 사용자 설정 파일
//
// 우선순위: --config 인자 > MULTITHEME_CONFIG 환경변수 > <config_dir>/multitheme/config.toml
// 파일이 없거나 잘못된 경우 기본값으로 동작합니다.

use crate::ui::icons::IconMode;
use crate::ui::layout::{DEFAULT_MIN_CARD_WIDTH, DEFAULT_MOBILE_BREAKPOINT, MIN_WIDTH};
use crate::utils::error::{MultiThemeError, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 경로 환경변수
pub const CONFIG_ENV: &str = "MULTITHEME_CONFIG";

/// 앱 설정
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// 데스크톱/모바일 내비게이션 전환 기준 너비 (컬럼)
    pub mobile_breakpoint: u16,
    /// 카드 그리드의 카드 최소 너비 (컬럼)
    pub min_card_width: u16,
    /// 이벤트 폴링 주기 (ms)
    pub tick_rate_ms: u64,
    /// 아이콘 표시 모드
    pub icon_mode: IconMode,
    /// 마우스 입력 사용 여부
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            min_card_width: DEFAULT_MIN_CARD_WIDTH,
            tick_rate_ms: 100,
            icon_mode: IconMode::default(),
            mouse: true,
        }
    }
}

impl AppConfig {
    /// TOML 문자열 파싱 + 값 검증
    pub fn from_toml(data: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(data).map_err(|e| MultiThemeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.mobile_breakpoint < MIN_WIDTH {
            return Err(MultiThemeError::Config(format!(
                "mobile_breakpoint must be at least {} (got {})",
                MIN_WIDTH, self.mobile_breakpoint
            )));
        }
        if self.min_card_width == 0 {
            return Err(MultiThemeError::Config(
                "min_card_width must be positive".to_string(),
            ));
        }
        if self.tick_rate_ms == 0 {
            return Err(MultiThemeError::Config(
                "tick_rate_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// 설정 파일 로드 (파일이 없으면 기본값)
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(data) => Self::from_toml(&data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// 설정 로드: 실패 시 경고 로그 후 기본값 사용
    pub fn load_or_default(explicit: Option<&Path>) -> Self {
        let Some(path) = resolve_config_path(explicit) else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "configuration loaded");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "falling back to default configuration");
                Self::default()
            }
        }
    }
}

/// 설정 파일 경로 결정
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(custom) = env::var(CONFIG_ENV) {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    config_dir().map(|dir| dir.join("config.toml"))
}

/// 앱 설정 디렉토리 (<config_dir>/multitheme)
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("multitheme"))
}
