pub mod app_state;
pub mod modes;
pub mod view_state;

pub use app_state::App;
pub use modes::{AppMode, ViewMode};
pub use view_state::ViewState;
