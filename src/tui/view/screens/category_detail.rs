use crate::model::{Category, Script};
use crate::tui::logic::sorted_scripts;
use crate::tui::view::components::footer::render_category_detail_footer;
use crate::tui::view::components::Theme;
use crate::utils::{format_resources, truncate_description};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub struct CategoryDetailData<'a> {
    pub category: &'a Category,
    pub detail_state: &'a mut ListState,
    pub status: Option<&'a str>,
    pub theme: Theme,
}

fn script_card<'a>(script: &'a Script, theme: &Theme) -> ListItem<'a> {
    ListItem::new(Text::from(vec![
        Line::from(vec![
            Span::styled(script.name.as_str(), theme.title()),
            Span::raw("  "),
            Span::styled(script.logo_or_default(), theme.muted()),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled("Created at: ", theme.title()),
            Span::styled(script.date_or_placeholder(), theme.muted()),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                truncate_description(script.description_or_placeholder()),
                theme.body(),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format_resources(script.primary_resources()), theme.muted()),
        ]),
        Line::from(""),
    ]))
}

pub fn render_category_detail(f: &mut Frame, data: &mut CategoryDetailData) {
    let theme = data.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(f.area());

    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("← ", theme.key()),
            Span::raw("Back to Categories "),
            Span::styled("(Esc)", theme.muted()),
        ]),
        Line::from(vec![
            Span::styled(data.category.name.as_str(), theme.brand()),
            Span::styled(
                format!("  {} scripts", data.category.script_count()),
                theme.count(),
            ),
        ]),
    ])
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = sorted_scripts(data.category)
        .into_iter()
        .map(|script| script_card(script, &theme))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::NONE))
        .highlight_style(theme.highlight())
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[1], data.detail_state);

    render_category_detail_footer(f, chunks[2], data.status, &theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InstallMethod, ResourceValue, Resources};
    use crate::tui::view::screens::buffer_text;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn script(name: &str, description: Option<String>) -> Script {
        Script {
            name: name.into(),
            slug: name.to_lowercase(),
            logo: None,
            description,
            date_created: None,
            install_methods: Vec::new(),
        }
    }

    fn render(category: &Category) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        let mut detail_state = ListState::default();
        detail_state.select(Some(0));
        terminal
            .draw(|f| {
                let mut data = CategoryDetailData {
                    category,
                    detail_state: &mut detail_state,
                    status: None,
                    theme: Theme::new(false),
                };
                render_category_detail(f, &mut data);
            })
            .unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn test_scripts_render_sorted() {
        let category = Category {
            name: "Misc".into(),
            description: None,
            scripts: vec![script("Zeta", None), script("Alpha", None), script("Mid", None)],
        };
        let text = render(&category);

        let alpha = text.find("Alpha").unwrap();
        let mid = text.find("Mid").unwrap();
        let zeta = text.find("Zeta").unwrap();
        assert!(alpha < mid && mid < zeta);
        assert!(text.contains("Back to Categories"));
    }

    #[test]
    fn test_card_placeholders_and_truncation() {
        let mut with_resources = script("Beta", Some("x".repeat(150)));
        with_resources.date_created = Some("2024-05-02".into());
        with_resources.install_methods.push(InstallMethod {
            kind: Some("default".into()),
            resources: Resources {
                cpu: Some(ResourceValue::Number(2.into())),
                ram: Some(ResourceValue::Number(1024.into())),
                hdd: Some(ResourceValue::Text("8".into())),
            },
        });
        let category = Category {
            name: "Misc".into(),
            description: None,
            scripts: vec![with_resources, script("Alpha", None)],
        };
        let text = render(&category);

        assert!(text.contains("No date available"));
        assert!(text.contains("Created at: 2024-05-02"));
        assert!(text.contains("No description available."));
        assert!(text.contains(&format!("{}...", "x".repeat(100))));
        assert!(!text.contains(&"x".repeat(101)));
        assert!(text.contains("CPU: 2vCPU | RAM: 1024MB | HDD: 8GB"));
        assert!(text.contains("CPU: N/A | RAM: N/A | HDD: N/A"));
        assert!(text.contains("/default-logo.png"));
    }
}
