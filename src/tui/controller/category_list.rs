use crate::model::Category;
use crate::tui::logic::{navigate_down, navigate_up, reset_focus};
use crate::tui::service::navigator::{open_script, Navigator};
use crate::tui::state::ViewState;
use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::widgets::ListState;

pub struct CategoryListContext<'a> {
    pub categories: &'a [Category],
    pub view: &'a mut ViewState,
    pub list_state: &'a mut ListState,
    pub detail_state: &'a mut ListState,
    pub help_open: &'a mut bool,
    pub should_quit: &'a mut bool,
    pub navigator: &'a mut dyn Navigator,
    pub site_url: &'a str,
    pub status: &'a mut Option<String>,
}

pub fn handle_category_list_key(ctx: &mut CategoryListContext, code: KeyCode) -> Result<()> {
    let focused = ctx
        .list_state
        .selected()
        .and_then(|idx| ctx.categories.get(idx).map(|c| (idx, c)));

    match code {
        KeyCode::Char('q') => *ctx.should_quit = true,
        KeyCode::Char('?') => *ctx.help_open = true,
        KeyCode::Up | KeyCode::Char('k') => navigate_up(ctx.list_state),
        KeyCode::Down | KeyCode::Char('j') => navigate_down(ctx.list_state, ctx.categories.len()),
        KeyCode::Left | KeyCode::Char('h') => {
            if ctx.view.can_page_prev() {
                *ctx.view = ctx.view.page_prev();
            }
        }
        KeyCode::Right | KeyCode::Char('l') => {
            if let Some((_, category)) = focused {
                *ctx.view = ctx.view.page_next(category.script_count());
            }
        }
        KeyCode::Enter => {
            if let Some((idx, category)) = focused {
                *ctx.view = ctx.view.select_category(idx);
                reset_focus(ctx.detail_state, category.script_count());
                log::debug!("Opened category {}", category.name);
            }
        }
        KeyCode::Char(c @ '1'..='5') => {
            if let Some((_, category)) = focused {
                let slot = (c as u8 - b'1') as usize;
                if let Some(script) = ctx.view.visible_logos(&category.scripts).get(slot) {
                    open_script(ctx.navigator, ctx.site_url, &script.slug, ctx.status);
                }
            }
        }
        _ => {}
    }
    Ok(())
}
