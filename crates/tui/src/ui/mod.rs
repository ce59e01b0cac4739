pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
};

use crate::app::AppState;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + tagline
            Constraint::Length(7), // Dashboard cards
            Constraint::Length(5), // Add expense form
            Constraint::Min(3),    // Expense list
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    screens::home::render_header(frame, layout[0], &theme);
    screens::home::render(frame, layout[1], state);
    screens::form::render(frame, layout[2], state);
    screens::expenses::render(frame, layout[3], state);
    render_bottom_bar(frame, layout[4], &theme);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let spans = components::hints::hints_to_spans(&components::hints::FORM_HINTS, theme);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
