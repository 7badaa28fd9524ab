// UI Layer
pub mod components;
pub mod dispatcher;
pub mod icons;
pub mod layout;
pub mod renderer;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{
    LayoutAreas, LayoutManager, Viewport, ViewportMode, MIN_HEIGHT, MIN_WIDTH,
};

pub use components::WarningScreen;
pub use dispatcher::{LayoutDispatcher, Page};
pub use icons::IconMode;
pub use renderer::{HitMap, HitTarget, PageView};
pub use theme::{StyleResolver, TokenSet};
