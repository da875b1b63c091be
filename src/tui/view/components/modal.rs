use crate::tui::view::components::{centered_rect, Theme};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

fn key_line<'a>(key: &'a str, text: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<9}", key), theme.key()),
        Span::raw(text),
    ])
}

pub fn render_help_modal(f: &mut Frame, theme: &Theme) {
    let area = centered_rect(65, 70, f.area());

    let help_text = vec![
        Line::from(Span::styled("Script Browser Help", theme.brand())),
        Line::from(""),
        Line::from(Span::styled("Categories", theme.highlight())),
        key_line("↑/↓", "Move between categories", theme),
        key_line("←/→", "Previous / next page of logos", theme),
        key_line("1-5", "Open the script behind a visible logo", theme),
        key_line("Enter", "Show the scripts of a category", theme),
        Line::from(""),
        Line::from(Span::styled("Scripts", theme.highlight())),
        key_line("↑/↓", "Move between scripts", theme),
        key_line("Enter", "Open the script page", theme),
        key_line("Esc/b", "Back to categories", theme),
        Line::from(""),
        key_line("?", "Show this help", theme),
        key_line("q", "Quit", theme),
        Line::from(""),
        Line::from(Span::styled("Press Esc or ? to close", theme.muted())),
    ];

    let paragraph =
        Paragraph::new(help_text).block(Block::default().title(" Help ").borders(Borders::ALL));

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
