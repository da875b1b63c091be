use crate::config::Config;
use crate::model::Category;
use crate::tui::service::navigator::Navigator;
use crate::tui::state::{AppMode, ViewState};
use ratatui::widgets::ListState;
use std::sync::mpsc::Receiver;

pub struct App {
    pub config: Config,
    pub site_url: String,
    pub categories: Vec<Category>,
    pub view: ViewState,
    /// Focused category card in the list.
    pub list_state: ListState,
    /// Focused script card in the detail view, in sorted order.
    pub detail_state: ListState,
    pub help_open: bool,
    pub should_quit: bool,
    pub status: Option<String>,
    pub fetch_receiver: Option<Receiver<Vec<Category>>>,
    pub navigator: Box<dyn Navigator>,
}

impl App {
    pub fn new(config: Config, navigator: Box<dyn Navigator>) -> Self {
        let site_url = config.source.site_url();
        Self {
            config,
            site_url,
            categories: Vec::new(),
            view: ViewState::default(),
            list_state: ListState::default(),
            detail_state: ListState::default(),
            help_open: false,
            should_quit: false,
            status: None,
            fetch_receiver: None,
            navigator,
        }
    }

    pub fn mode(&self) -> AppMode {
        if self.help_open {
            AppMode::Help
        } else {
            self.view.mode().into()
        }
    }
}
