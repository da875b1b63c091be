#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    CategoryList,
    CategoryDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    CategoryList,
    CategoryDetail,
    Help,
}

impl From<ViewMode> for AppMode {
    fn from(mode: ViewMode) -> Self {
        match mode {
            ViewMode::CategoryList => AppMode::CategoryList,
            ViewMode::CategoryDetail => AppMode::CategoryDetail,
        }
    }
}
