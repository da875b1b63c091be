use crate::model::{Category, Script};
use crate::tui::logic::pagination;
use crate::tui::state::ViewMode;
use serde::{Deserialize, Serialize};

/// Selection and logo pagination of the browser. Every transition returns the next state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Index into the loaded categories. `None` means the category list is shown.
    pub selected_category: Option<usize>,
    pub logo_index: usize,
}

impl ViewState {
    pub fn mode(&self) -> ViewMode {
        match self.selected_category {
            Some(_) => ViewMode::CategoryDetail,
            None => ViewMode::CategoryList,
        }
    }

    pub fn select_category(self, index: usize) -> Self {
        Self {
            selected_category: Some(index),
            logo_index: 0,
        }
    }

    pub fn back(self) -> Self {
        Self {
            selected_category: None,
            logo_index: 0,
        }
    }

    pub fn page_prev(self) -> Self {
        Self {
            logo_index: pagination::page_prev(self.logo_index),
            ..self
        }
    }

    pub fn page_next(self, script_count: usize) -> Self {
        Self {
            logo_index: pagination::page_next(self.logo_index, script_count),
            ..self
        }
    }

    pub fn can_page_prev(&self) -> bool {
        pagination::can_page_prev(self.logo_index)
    }

    pub fn can_page_next(&self, script_count: usize) -> bool {
        pagination::can_page_next(self.logo_index, script_count)
    }

    pub fn visible_logos<'a>(&self, scripts: &'a [Script]) -> &'a [Script] {
        pagination::visible_window(scripts, self.logo_index)
    }

    pub fn selected<'a>(&self, categories: &'a [Category]) -> Option<&'a Category> {
        self.selected_category.and_then(|idx| categories.get(idx))
    }
}
