// UI Components
pub mod card_grid;
pub mod command_bar;
pub mod content;
pub mod dropdown_menu;
pub mod header;
pub mod nav_bar;
pub mod paint;
pub mod sidebar;
pub mod warning;

// Re-export components for convenience
pub use card_grid::CardGrid;
pub use command_bar::{CommandBar, CommandItem};
pub use content::ContentView;
pub use dropdown_menu::ThemeDropdown;
pub use header::HeaderBar;
pub use nav_bar::TopNav;
pub use sidebar::{SidebarNav, SIDEBAR_WIDTH};
pub use warning::WarningScreen;
