use ratatui::style::{Color, Modifier, Style};

/// Styles for every screen. With color off only modifiers are kept.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn fg(&self, color: Color) -> Style {
        if self.color {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    pub fn brand(&self) -> Style {
        self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    pub fn key(&self) -> Style {
        self.fg(Color::Cyan)
    }

    pub fn title(&self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        self.fg(Color::DarkGray)
    }

    pub fn body(&self) -> Style {
        self.fg(Color::Gray)
    }

    pub fn count(&self) -> Style {
        self.fg(Color::Green)
    }

    pub fn logo(&self) -> Style {
        self.fg(Color::Yellow)
    }

    pub fn control(&self, enabled: bool) -> Style {
        if enabled {
            self.fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            self.fg(Color::DarkGray).add_modifier(Modifier::DIM)
        }
    }

    pub fn highlight(&self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }
}
