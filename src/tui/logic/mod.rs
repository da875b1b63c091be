pub mod navigation;
pub mod pagination;
pub mod sorting;

pub use navigation::{navigate_down, navigate_up, reset_focus};
pub use sorting::sorted_scripts;
