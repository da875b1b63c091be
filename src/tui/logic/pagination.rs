use crate::model::Script;

/// Logos shown per category card.
pub const PAGE_SIZE: usize = 5;

pub fn visible_window(scripts: &[Script], cursor: usize) -> &[Script] {
    let start = cursor.min(scripts.len());
    let end = cursor.saturating_add(PAGE_SIZE).min(scripts.len());
    &scripts[start..end]
}

pub fn can_page_prev(cursor: usize) -> bool {
    cursor > 0
}

pub fn can_page_next(cursor: usize, script_count: usize) -> bool {
    cursor + PAGE_SIZE < script_count
}

pub fn page_prev(cursor: usize) -> usize {
    cursor.saturating_sub(PAGE_SIZE)
}

/// Advances one page, capped at `script_count`. No-op at the last page.
pub fn page_next(cursor: usize, script_count: usize) -> usize {
    if can_page_next(cursor, script_count) {
        (cursor + PAGE_SIZE).min(script_count)
    } else {
        cursor
    }
}
