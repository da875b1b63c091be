use crate::tui::view::components::Theme;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

fn push_status(spans: &mut Vec<Span<'_>>, status: Option<&str>, theme: &Theme) {
    if let Some(status) = status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("| {}", status), theme.count()));
    }
}

pub fn render_category_list_footer(f: &mut Frame, area: Rect, status: Option<&str>, theme: &Theme) {
    let mut spans = vec![
        Span::styled("↑↓", theme.key()),
        Span::raw(" Nav  "),
        Span::styled("←→", theme.key()),
        Span::raw(" Logos  "),
        Span::styled("1-5", theme.key()),
        Span::raw(" Open logo  "),
        Span::styled("Enter", theme.key()),
        Span::raw(" Category  "),
        Span::styled("?", theme.key()),
        Span::raw(" Help  "),
        Span::styled("q", theme.key()),
        Span::raw(" Quit"),
    ];
    push_status(&mut spans, status, theme);

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, area);
}

pub fn render_category_detail_footer(
    f: &mut Frame,
    area: Rect,
    status: Option<&str>,
    theme: &Theme,
) {
    let mut spans = vec![
        Span::styled("↑↓", theme.key()),
        Span::raw(" Nav  "),
        Span::styled("Enter", theme.key()),
        Span::raw(" Open script  "),
        Span::styled("Esc", theme.key()),
        Span::raw(" Back  "),
        Span::styled("?", theme.key()),
        Span::raw(" Help  "),
        Span::styled("q", theme.key()),
        Span::raw(" Quit"),
    ];
    push_status(&mut spans, status, theme);

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    f.render_widget(footer, area);
}
