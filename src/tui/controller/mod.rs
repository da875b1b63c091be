pub mod category_detail;
pub mod category_list;
pub mod common;

pub use category_detail::handle_category_detail_key;
pub use category_list::handle_category_list_key;
pub use common::handle_help_key;
