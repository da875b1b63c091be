use crate::model::{total_scripts, Category, DEFAULT_LOGO};
use crate::tui::state::ViewState;
use crate::tui::view::components::footer::render_category_list_footer;
use crate::tui::view::components::Theme;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub const EMPTY_MESSAGE: &str = "No categories available. Please check the API endpoint.";

pub struct CategoryListData<'a> {
    pub categories: &'a [Category],
    pub view: &'a ViewState,
    pub list_state: &'a mut ListState,
    pub status: Option<&'a str>,
    pub theme: Theme,
}

fn category_card<'a>(category: &'a Category, view: &ViewState, theme: &Theme) -> ListItem<'a> {
    let count = category.script_count();

    let mut logos = vec![
        Span::raw("  "),
        Span::styled("◀", theme.control(view.can_page_prev())),
        Span::raw(" "),
    ];
    let visible = view.visible_logos(&category.scripts);
    if visible.is_empty() {
        logos.push(Span::styled("·", theme.muted()));
        logos.push(Span::raw(" "));
    }
    for (slot, script) in visible.iter().enumerate() {
        let marker = if script.logo_or_default() == DEFAULT_LOGO {
            "◇"
        } else {
            "◆"
        };
        logos.push(Span::styled((slot + 1).to_string(), theme.key()));
        logos.push(Span::styled(format!("{}{} ", marker, script.name), theme.logo()));
    }
    logos.push(Span::styled("▶", theme.control(view.can_page_next(count))));

    ListItem::new(Text::from(vec![
        Line::from(vec![
            Span::styled(category.name.as_str(), theme.title()),
            Span::styled(format!("  ({} scripts)", count), theme.muted()),
        ]),
        Line::from(logos),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(category.description_or_placeholder(), theme.muted()),
        ]),
        Line::from(""),
    ]))
}

pub fn render_category_list(f: &mut Frame, data: &mut CategoryListData) {
    let theme = data.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(f.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Script Browser ", theme.brand()),
        Span::styled("Categories", theme.title()),
        Span::raw("   "),
        Span::styled(
            format!("{} Total scripts", total_scripts(data.categories)),
            theme.count(),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    if data.categories.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(EMPTY_MESSAGE, theme.muted())))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(empty, chunks[1]);
    } else {
        let items: Vec<ListItem> = data
            .categories
            .iter()
            .map(|category| category_card(category, data.view, &theme))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::NONE))
            .highlight_style(theme.highlight())
            .highlight_symbol("> ");
        f.render_stateful_widget(list, chunks[1], data.list_state);
    }

    render_category_list_footer(f, chunks[2], data.status, &theme);
}
