mod json_schema;

pub use json_schema::{CategoryDetailResult, CategoryListResult};

use std::fmt::Write;

pub fn render_list_human(result: &CategoryListResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Categories ({} Total scripts)", result.total_scripts);
    let _ = writeln!(out);

    if result.categories.is_empty() {
        let _ = writeln!(out, "No categories available.");
        return out;
    }

    for category in &result.categories {
        let _ = writeln!(out, "{} ({} scripts)", category.name, category.script_count);
        let _ = writeln!(out, "  {}", category.description);
        if !category.scripts.is_empty() {
            let _ = writeln!(out, "  {}", category.scripts.join(", "));
        }
        let _ = writeln!(out);
    }
    out
}

pub fn render_detail_human(result: &CategoryDetailResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({} scripts)", result.category, result.scripts.len());
    let _ = writeln!(out, "{}", result.description);
    let _ = writeln!(out);

    for card in &result.scripts {
        let _ = writeln!(out, "{}", card.name);
        let _ = writeln!(out, "  Created at: {}", card.date_created);
        let _ = writeln!(out, "  {}", card.description);
        let _ = writeln!(
            out,
            "  CPU: {} | RAM: {} | HDD: {}",
            card.cpu, card.ram, card.hdd
        );
        let _ = writeln!(out, "  {}", card.url);
        let _ = writeln!(out);
    }
    out
}

/// Finds a category by exact name, falling back to a case-insensitive match.
pub fn find_category<'a>(
    categories: &'a [crate::model::Category],
    name: &str,
) -> Option<&'a crate::model::Category> {
    categories
        .iter()
        .find(|c| c.name == name)
        .or_else(|| categories.iter().find(|c| c.name.eq_ignore_ascii_case(name)))
}
