use crate::tui::state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::runtime::Handle;

use crate::catalog::CategorySource;
use crate::tui::controller::{
    category_detail, category_list, common, handle_category_detail_key,
    handle_category_list_key, handle_help_key,
};
use crate::tui::logic::reset_focus;
use crate::tui::service::fetch::{poll_fetch, start_fetch};
use crate::tui::state::AppMode;
use crate::tui::view::components::modal::render_help_modal;
use crate::tui::view::components::Theme;
use crate::tui::view::{
    render_category_detail, render_category_list, CategoryDetailData, CategoryListData,
};

impl App {
    pub fn start_loading(&mut self, runtime: &Handle, source: Box<dyn CategorySource>) {
        log::info!("Loading categories from {}", source.describe());
        self.fetch_receiver = Some(start_fetch(runtime, source));
    }

    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> Result<()> {
        while !self.should_quit {
            self.poll_categories();

            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers)?;
                    }
                }
            }
        }

        Ok(())
    }

    pub fn poll_categories(&mut self) {
        if poll_fetch(&mut self.fetch_receiver, &mut self.categories) {
            reset_focus(&mut self.list_state, self.categories.len());
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        match self.mode() {
            AppMode::CategoryList => {
                let mut ctx = category_list::CategoryListContext {
                    categories: &self.categories,
                    view: &mut self.view,
                    list_state: &mut self.list_state,
                    detail_state: &mut self.detail_state,
                    help_open: &mut self.help_open,
                    should_quit: &mut self.should_quit,
                    navigator: self.navigator.as_mut(),
                    site_url: &self.site_url,
                    status: &mut self.status,
                };
                handle_category_list_key(&mut ctx, code)
            }
            AppMode::CategoryDetail => {
                let mut ctx = category_detail::CategoryDetailContext {
                    categories: &self.categories,
                    view: &mut self.view,
                    detail_state: &mut self.detail_state,
                    help_open: &mut self.help_open,
                    should_quit: &mut self.should_quit,
                    navigator: self.navigator.as_mut(),
                    site_url: &self.site_url,
                    status: &mut self.status,
                };
                handle_category_detail_key(&mut ctx, code)
            }
            AppMode::Help => {
                let mut ctx = common::HelpContext {
                    help_open: &mut self.help_open,
                    should_quit: &mut self.should_quit,
                };
                handle_help_key(&mut ctx, code)
            }
        }
    }

    fn render(&mut self, f: &mut ratatui::Frame) {
        let theme = Theme::new(self.config.ui.color);

        match self.view.selected(&self.categories) {
            Some(category) => {
                let mut data = CategoryDetailData {
                    category,
                    detail_state: &mut self.detail_state,
                    status: self.status.as_deref(),
                    theme,
                };
                render_category_detail(f, &mut data);
            }
            None => {
                let mut data = CategoryListData {
                    categories: &self.categories,
                    view: &self.view,
                    list_state: &mut self.list_state,
                    status: self.status.as_deref(),
                    theme,
                };
                render_category_list(f, &mut data);
            }
        }

        if self.mode() == AppMode::Help {
            render_help_modal(f, &theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, NavigatorKind};
    use crate::model::{Category, Script};
    use crate::tui::service::navigator::navigator_for;
    use crate::tui::state::{ViewMode, ViewState};
    use crate::tui::view::screens::buffer_text;
    use ratatui::backend::TestBackend;
    use std::sync::mpsc::channel;

    fn app() -> App {
        App::new(Config::default(), navigator_for(NavigatorKind::Print))
    }

    fn catalog() -> Vec<Category> {
        vec![Category {
            name: "Media".into(),
            description: None,
            scripts: (0..12)
                .map(|i| Script {
                    name: format!("Media {:02}", i),
                    slug: format!("media-{}", i),
                    logo: None,
                    description: None,
                    date_created: None,
                    install_methods: Vec::new(),
                })
                .collect(),
        }]
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(code, KeyModifiers::NONE).unwrap();
    }

    #[test]
    fn test_loaded_categories_focus_first_card() {
        let mut app = app();
        let (tx, rx) = channel();
        app.fetch_receiver = Some(rx);
        tx.send(catalog()).unwrap();

        app.poll_categories();
        assert_eq!(app.categories.len(), 1);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_failed_load_renders_empty_state() {
        let mut app = app();
        let (tx, rx) = channel();
        app.fetch_receiver = Some(rx);
        tx.send(Vec::new()).unwrap();
        app.poll_categories();

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        assert!(buffer_text(&terminal).contains("No categories available."));
    }

    #[test]
    fn test_list_detail_round_trip_resets_cursor() {
        let mut app = app();
        app.categories = catalog();
        reset_focus(&mut app.list_state, 1);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.view.logo_index, 5);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.view.mode(), ViewMode::CategoryDetail);
        assert_eq!(app.view.logo_index, 0);

        press(&mut app, KeyCode::Char('b'));
        assert_eq!(app.view, ViewState::default());
    }

    #[test]
    fn test_help_returns_to_previous_mode() {
        let mut app = app();
        app.categories = catalog();
        reset_focus(&mut app.list_state, 1);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode(), AppMode::Help);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode(), AppMode::CategoryDetail);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
            .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_script_selection_sets_status() {
        let mut app = app();
        app.categories = catalog();
        reset_focus(&mut app.list_state, 1);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(
            app.status.as_deref(),
            Some("Opened https://community-scripts.github.io/ProxmoxVE/scripts?id=media-0")
        );
        assert_eq!(app.view.mode(), ViewMode::CategoryList);
    }
}
