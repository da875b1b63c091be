use ratatui::widgets::ListState;

pub fn navigate_up(list_state: &mut ListState) {
    if let Some(current) = list_state.selected() {
        if current > 0 {
            list_state.select(Some(current - 1));
        }
    }
}

pub fn navigate_down(list_state: &mut ListState, max_items: usize) {
    let max = max_items.saturating_sub(1);
    match list_state.selected() {
        Some(current) if current < max => list_state.select(Some(current + 1)),
        None if max_items > 0 => list_state.select(Some(0)),
        _ => {}
    }
}

/// Puts the focus on the first row, or clears it when there are no rows.
pub fn reset_focus(list_state: &mut ListState, max_items: usize) {
    list_state.select(if max_items > 0 { Some(0) } else { None });
}
