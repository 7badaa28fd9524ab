// Layout system - 반응형 레이아웃 시스템
//
// 터미널 크기에 따른 뷰포트 모드:
// - breakpoint 이상: 데스크톱 (Simple 레이아웃의 가로 내비게이션)
// - breakpoint 미만: 모바일 (메뉴 토글 버튼, 세로 스택)
// - MIN_WIDTH x MIN_HEIGHT 미만: 경고 메시지 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;
pub const DEFAULT_MOBILE_BREAKPOINT: u16 = 80;
pub const DEFAULT_MIN_CARD_WIDTH: u16 = 30;
pub const HEADER_HEIGHT: u16 = 3;

/// 뷰포트 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Desktop,
    Mobile,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 레이아웃 조립에 필요한 뷰포트 정보
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub mobile: bool,
    pub min_card_width: u16,
}

impl Viewport {
    pub fn desktop(width: u16) -> Self {
        Self {
            width,
            mobile: false,
            min_card_width: DEFAULT_MIN_CARD_WIDTH,
        }
    }

    pub fn mobile(width: u16) -> Self {
        Self {
            width,
            mobile: true,
            min_card_width: DEFAULT_MIN_CARD_WIDTH,
        }
    }
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 상단 고정 헤더 (테마 선택기)
    pub header: Rect,
    /// 레이아웃 본문 영역 (스크롤)
    pub main: Rect,
    /// 하단 커맨드 바 영역
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: ViewportMode,
    mobile_breakpoint: u16,
    min_card_width: u16,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new(DEFAULT_MOBILE_BREAKPOINT, DEFAULT_MIN_CARD_WIDTH)
    }
}

impl LayoutManager {
    pub fn new(mobile_breakpoint: u16, min_card_width: u16) -> Self {
        Self {
            mode: ViewportMode::Desktop,
            mobile_breakpoint,
            min_card_width,
            terminal_size: (DEFAULT_MOBILE_BREAKPOINT, 24),
            areas: LayoutAreas::default(),
        }
    }

    /// 터미널 크기에 따라 뷰포트 모드 결정
    fn determine_mode(width: u16, height: u16, breakpoint: u16) -> ViewportMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            ViewportMode::TooSmall
        } else if width < breakpoint {
            ViewportMode::Mobile
        } else {
            ViewportMode::Desktop
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        let mode = Self::determine_mode(area.width, area.height, self.mobile_breakpoint);
        if mode != self.mode {
            tracing::debug!(?mode, width = area.width, height = area.height, "viewport mode changed");
        }
        self.terminal_size = (area.width, area.height);
        self.mode = mode;
        self.areas = Self::calculate_areas(mode, area);
    }

    fn calculate_areas(mode: ViewportMode, area: Rect) -> LayoutAreas {
        if mode == ViewportMode::TooSmall {
            return LayoutAreas {
                warning: area,
                ..Default::default()
            };
        }

        // 헤더 | 본문 | 커맨드바
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        LayoutAreas {
            header: chunks[0],
            main: chunks[1],
            command_bar: chunks[2],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn is_mobile(&self) -> bool {
        self.mode == ViewportMode::Mobile
    }

    /// 조립용 뷰포트 정보
    pub fn viewport(&self) -> Viewport {
        let width = self.areas.main.width;
        let viewport = if self.is_mobile() {
            Viewport::mobile(width)
        } else {
            Viewport::desktop(width)
        };
        Viewport {
            min_card_width: self.min_card_width,
            ..viewport
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_mode() {
        let bp = DEFAULT_MOBILE_BREAKPOINT;
        assert_eq!(LayoutManager::determine_mode(80, 24, bp), ViewportMode::Desktop);
        assert_eq!(LayoutManager::determine_mode(160, 50, bp), ViewportMode::Desktop);

        assert_eq!(LayoutManager::determine_mode(79, 24, bp), ViewportMode::Mobile);
        assert_eq!(LayoutManager::determine_mode(40, 24, bp), ViewportMode::Mobile);

        assert_eq!(LayoutManager::determine_mode(39, 24, bp), ViewportMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(80, 11, bp), ViewportMode::TooSmall);
    }

    #[test]
    fn test_custom_breakpoint() {
        assert_eq!(LayoutManager::determine_mode(100, 24, 120), ViewportMode::Mobile);
        assert_eq!(LayoutManager::determine_mode(120, 24, 120), ViewportMode::Desktop);
    }

    #[test]
    fn test_update_areas() {
        let mut manager = LayoutManager::default();
        manager.update(Rect::new(0, 0, 100, 30));

        let areas = manager.areas();
        assert_eq!(areas.header, Rect::new(0, 0, 100, HEADER_HEIGHT));
        assert_eq!(areas.main, Rect::new(0, HEADER_HEIGHT, 100, 30 - HEADER_HEIGHT - 1));
        assert_eq!(areas.command_bar, Rect::new(0, 29, 100, 1));
        assert!(!manager.viewport().mobile);
    }

    #[test]
    fn test_update_too_small() {
        let mut manager = LayoutManager::default();
        manager.update(Rect::new(0, 0, 30, 10));
        assert_eq!(manager.mode(), ViewportMode::TooSmall);
        assert_eq!(manager.areas().warning, Rect::new(0, 0, 30, 10));
    }
}
