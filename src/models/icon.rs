/// 아이콘 참조
///
/// 실제 글리프는 UI 계층(`ui::icons`)에서 아이콘 모드에 맞게 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Sun,
    Moon,
    Palette,
    Home,
    User,
    Settings,
    Mail,
    /// 모바일 메뉴 열기 버튼
    Menu,
    /// 모바일 메뉴 닫기 버튼
    Close,
    ChevronDown,
    ChevronUp,
}
