use ratatui::style::{Color, Modifier, Style};

// Plain functions rather than a shared theme object; the view builds every
// style it needs on the spot.

pub fn file_path() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn category_header() -> Style {
    Style::default().add_modifier(Modifier::ITALIC)
}

pub fn selected() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

pub fn cursor() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

pub fn muted() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn success() -> Style {
    Style::default().fg(Color::Green)
}

pub fn error() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}
