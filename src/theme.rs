use ratatui::style::{Color, Modifier, Style};

// Centralized styles for everything the engine draws. Kept as small helpers
// so a future palette swap stays in one file.

pub fn banner() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

// Panels
pub fn panel_border() -> Style {
    Style::default().fg(Color::DarkGray)
}
pub fn panel_border_focused() -> Style {
    Style::default().fg(Color::Cyan)
}
pub fn panel_title() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
}
pub fn list_entry() -> Style {
    Style::default().fg(Color::Gray)
}
pub fn list_highlight() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

// Arrow buttons
pub fn button() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

// Text-entry popup
pub fn prompt_border() -> Style {
    Style::default().fg(Color::Blue)
}
pub fn prompt_text() -> Style {
    Style::default().fg(Color::White)
}
