//! Logging configuration using tracing
//!
//! TUI가 화면을 점유하므로 로그는 파일로만 기록합니다.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::utils::error::{MultiThemeError, Result};

/// 로그 레벨 환경변수
pub const LOG_ENV: &str = "MULTITHEME_LOG";

/// 로깅 초기화
///
/// Logs are written to `<data_local_dir>/multitheme/logs/`.
/// Log level is controlled by the `MULTITHEME_LOG` environment variable.
///
/// ```bash
/// MULTITHEME_LOG=debug multitheme
/// ```
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "multitheme.log");

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("multitheme=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| MultiThemeError::Logging(e.to_string()))?;

    tracing::info!("multitheme starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(log_dir)
}

/// 로그 디렉토리 경로
fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("multitheme").join("logs")
}
