// Core Layer
pub mod actions;
pub mod ui_state;

pub use ui_state::{UiEvent, UiState};
