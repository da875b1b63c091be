pub mod components;
pub mod screens;

pub use screens::{
    render_category_detail, render_category_list, CategoryDetailData, CategoryListData,
};
