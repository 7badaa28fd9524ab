// Data Models
pub mod icon;
pub mod navigation;
pub mod theme;

pub use icon::Icon;
pub use navigation::{NavItem, NavigationModel};
pub use theme::{LayoutVariant, Theme, ThemeId, ThemeRegistry, UnknownThemeError};
