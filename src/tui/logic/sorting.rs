use crate::model::{Category, Script};
use std::cmp::Ordering;

pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Scripts of `category` in ascending name order. The category itself is left untouched.
pub fn sorted_scripts(category: &Category) -> Vec<&Script> {
    let mut scripts: Vec<&Script> = category.scripts.iter().collect();
    scripts.sort_by(|a, b| compare_names(&a.name, &b.name));
    scripts
}
