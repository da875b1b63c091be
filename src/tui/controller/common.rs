use anyhow::Result;
use crossterm::event::KeyCode;

pub struct HelpContext<'a> {
    pub help_open: &'a mut bool,
    pub should_quit: &'a mut bool,
}

pub fn handle_help_key(ctx: &mut HelpContext, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter => *ctx.help_open = false,
        KeyCode::Char('q') => {
            *ctx.help_open = false;
            *ctx.should_quit = true;
        }
        _ => {}
    }
    Ok(())
}
