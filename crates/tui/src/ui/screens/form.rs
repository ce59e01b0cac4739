use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::{AppState, FormField},
    ui::{components::card::Card, theme::Theme},
};

const FORM_WIDTH: u16 = 48;

/// Horizontally centered column of at most `width` cells.
fn centered_column(width: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(area);

    horizontal[1]
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let card_area = centered_column(FORM_WIDTH, area);

    let card = Card::new("Add New Expense", &theme).focused(true);
    let inner = card.inner(card_area);
    card.render_frame(frame, card_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Message / submit hint
        ])
        .split(inner);

    let form = &state.form;
    render_input(
        frame,
        rows[0],
        "Description",
        &form.description,
        form.focus == FormField::Description,
        &theme,
    );
    render_input(
        frame,
        rows[1],
        "Amount",
        &form.amount,
        form.focus == FormField::Amount,
        &theme,
    );

    let footer = match &form.message {
        Some(message) => Span::styled(message.as_str(), Style::default().fg(theme.error)),
        None => Span::styled("[Enter] + Add Expense", Style::default().fg(theme.dim)),
    };
    frame.render_widget(Paragraph::new(Line::from(footer)), rows[2]);
}

/// Renders one input row; the placeholder shows while the value is empty.
fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    placeholder: &str,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let marker = if focused { "› " } else { "  " };
    let cursor = if focused { "│" } else { "" };

    let content = if value.is_empty() {
        Span::styled(
            format!("{cursor}{placeholder}"),
            Style::default().fg(theme.dim),
        )
    } else {
        let style = if focused {
            Style::default().fg(theme.text)
        } else {
            Style::default().fg(theme.text_muted)
        };
        Span::styled(format!("{value}{cursor}"), style)
    };

    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(theme.accent)),
        content,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
