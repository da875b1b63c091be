use crate::model::Category;
use crate::tui::logic::{navigate_down, navigate_up, sorted_scripts};
use crate::tui::service::navigator::{open_script, Navigator};
use crate::tui::state::ViewState;
use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

pub struct CategoryDetailContext<'a> {
    pub categories: &'a [Category],
    pub view: &'a mut ViewState,
    pub detail_state: &'a mut ListState,
    pub help_open: &'a mut bool,
    pub should_quit: &'a mut bool,
    pub navigator: &'a mut dyn Navigator,
    pub site_url: &'a str,
    pub status: &'a mut Option<String>,
}

pub fn handle_category_detail_key(ctx: &mut CategoryDetailContext, code: KeyCode) -> Result<()> {
    let Some(category) = ctx.view.selected(ctx.categories) else {
        *ctx.view = ctx.view.back();
        return Ok(());
    };

    match code {
        KeyCode::Char('q') => *ctx.should_quit = true,
        KeyCode::Char('?') => *ctx.help_open = true,
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
            *ctx.view = ctx.view.back();
        }
        KeyCode::Up | KeyCode::Char('k') => navigate_up(ctx.detail_state),
        KeyCode::Down | KeyCode::Char('j') => {
            navigate_down(ctx.detail_state, category.script_count())
        }
        KeyCode::Enter => {
            let scripts = sorted_scripts(category);
            if let Some(script) = ctx.detail_state.selected().and_then(|i| scripts.get(i)) {
                open_script(ctx.navigator, ctx.site_url, &script.slug, ctx.status);
            }
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Script;
    use crate::tui::service::navigator::PrintNavigator;
    use crate::tui::state::ViewMode;

    fn script(name: &str) -> Script {
        Script {
            name: name.into(),
            slug: name.to_lowercase(),
            logo: None,
            description: None,
            date_created: None,
            install_methods: Vec::new(),
        }
    }

    fn press(
        categories: &[Category],
        view: &mut ViewState,
        detail_state: &mut ListState,
        navigator: &mut PrintNavigator,
        code: KeyCode,
    ) {
        let mut help_open = false;
        let mut should_quit = false;
        let mut status = None;
        let mut ctx = CategoryDetailContext {
            categories,
            view,
            detail_state,
            help_open: &mut help_open,
            should_quit: &mut should_quit,
            navigator,
            site_url: "https://example.org",
            status: &mut status,
        };
        handle_category_detail_key(&mut ctx, code).unwrap();
    }

    #[test]
    fn test_enter_opens_script_in_sorted_order() {
        let categories = vec![Category {
            name: "Misc".into(),
            description: None,
            scripts: vec![script("Zeta"), script("Alpha"), script("Mid")],
        }];
        let mut view = ViewState::default().select_category(0);
        let mut detail_state = ListState::default();
        detail_state.select(Some(0));
        let mut navigator = PrintNavigator::default();

        press(&categories, &mut view, &mut detail_state, &mut navigator, KeyCode::Enter);
        press(&categories, &mut view, &mut detail_state, &mut navigator, KeyCode::Down);
        press(&categories, &mut view, &mut detail_state, &mut navigator, KeyCode::Enter);

        assert_eq!(
            navigator.visited,
            [
                "https://example.org/scripts?id=alpha",
                "https://example.org/scripts?id=mid"
            ]
        );
        assert_eq!(view.mode(), ViewMode::CategoryDetail);
    }

    #[test]
    fn test_back_returns_to_list() {
        let categories = vec![Category {
            name: "Misc".into(),
            description: None,
            scripts: vec![script("Alpha")],
        }];
        let mut view = ViewState {
            selected_category: Some(0),
            logo_index: 5,
        };
        let mut detail_state = ListState::default();
        let mut navigator = PrintNavigator::default();

        press(&categories, &mut view, &mut detail_state, &mut navigator, KeyCode::Esc);
        assert_eq!(view, ViewState::default());
    }

    #[test]
    fn test_stale_selection_falls_back_to_list() {
        let mut view = ViewState::default().select_category(3);
        let mut detail_state = ListState::default();
        let mut navigator = PrintNavigator::default();

        press(&[], &mut view, &mut detail_state, &mut navigator, KeyCode::Enter);
        assert_eq!(view.mode(), ViewMode::CategoryList);
        assert!(navigator.visited.is_empty());
    }
}
