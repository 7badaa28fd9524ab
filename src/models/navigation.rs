// Navigation model - 모든 레이아웃이 공유하는 내비게이션 항목

use super::icon::Icon;

/// 내비게이션 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub icon: Icon,
    pub label: &'static str,
    /// 현재 위치 표시 (라우팅 없음, 고정값)
    pub active: bool,
}

impl NavItem {
    /// 카드 레이아웃용 한 줄 설명
    pub fn description(&self) -> String {
        format!(
            "Explore {} section with beautiful card-based design.",
            self.label.to_lowercase()
        )
    }
}

pub static BUILTIN_NAV_ITEMS: &[NavItem] = &[
    NavItem {
        icon: Icon::Home,
        label: "Home",
        active: true,
    },
    NavItem {
        icon: Icon::User,
        label: "About",
        active: false,
    },
    NavItem {
        icon: Icon::Settings,
        label: "Contact",
        active: false,
    },
    NavItem {
        icon: Icon::Mail,
        label: "Services",
        active: false,
    },
];

/// 내비게이션 모델
#[derive(Debug, Clone, Copy)]
pub struct NavigationModel {
    items: &'static [NavItem],
}

impl Default for NavigationModel {
    fn default() -> Self {
        Self::builtin()
    }
}

impl NavigationModel {
    pub fn builtin() -> Self {
        Self {
            items: BUILTIN_NAV_ITEMS,
        }
    }

    /// 내비게이션 항목 목록 (모든 레이아웃에서 동일한 순서)
    pub fn list_nav_items(&self) -> &'static [NavItem] {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_items() {
        let nav = NavigationModel::builtin();
        let labels: Vec<_> = nav.list_nav_items().iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["Home", "About", "Contact", "Services"]);
        assert_eq!(nav.list_nav_items().iter().filter(|i| i.active).count(), 1);
    }

    #[test]
    fn test_description() {
        let item = &BUILTIN_NAV_ITEMS[3];
        assert_eq!(
            item.description(),
            "Explore services section with beautiful card-based design."
        );
    }
}
