use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
};

use engine::Dashboard;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    app::AppState,
    ui::{
        components::{
            card::{Card, StatCard},
            money::styled_amount,
        },
        theme::Theme,
    },
};

/// Title and tagline.
pub fn render_header(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::from(Span::styled(
            "Fittakka",
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Take control of your finances",
            Style::default().fg(theme.dim),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// The three dashboard cards: total, recent activity, saving tips.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let dashboard = state.dashboard();

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_total(frame, cols[0], &dashboard, &theme);
    render_recent_activity(frame, cols[1], &dashboard, &theme);
    render_tips(frame, cols[2], &dashboard, &theme);
}

fn render_total(frame: &mut Frame<'_>, area: Rect, dashboard: &Dashboard<'_>, theme: &Theme) {
    let count = dashboard.expenses().len();
    let subtitle = match count {
        1 => "1 expense".to_string(),
        n => format!("{n} expenses"),
    };
    StatCard::new("Total Expenses", dashboard.total().to_string(), theme)
        .subtitle(subtitle)
        .render(frame, area);
}

fn render_recent_activity(
    frame: &mut Frame<'_>,
    area: Rect,
    dashboard: &Dashboard<'_>,
    theme: &Theme,
) {
    let card = Card::new("Recent Activity", theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let recent = dashboard.recent_activity();
    if recent.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No activity yet", Style::default().fg(theme.dim))),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = recent
        .iter()
        .take(inner.height as usize)
        .map(|expense| {
            let amount = styled_amount(expense.amount, theme);
            // Keep the amount visible by truncating the description instead.
            let room = (inner.width as usize).saturating_sub(amount.width() + 1);
            let description = truncate_to_width(&expense.description, room);
            let pad = room.saturating_sub(description.width()) + 1;

            ListItem::new(Line::from(vec![
                Span::styled(description, Style::default().fg(theme.text_muted)),
                Span::raw(" ".repeat(pad)),
                amount,
            ]))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

/// Longest prefix of `text` that fits in `max_width` terminal cells.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    text.chars()
        .take_while(|ch| {
            width += ch.width().unwrap_or(0);
            width <= max_width
        })
        .collect()
}

fn render_tips(frame: &mut Frame<'_>, area: Rect, dashboard: &Dashboard<'_>, theme: &Theme) {
    let lines: Vec<Line> = dashboard
        .tips_preview()
        .iter()
        .map(|tip| Line::from(Span::styled(format!("• {tip}"), Style::default().fg(theme.dim))))
        .collect();

    Card::new("Saving Tips", theme).render_with(
        frame,
        area,
        Paragraph::new(lines).wrap(Wrap { trim: true }),
    );
}
