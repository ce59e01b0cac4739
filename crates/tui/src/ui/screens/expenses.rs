use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::AppState,
    ui::{
        components::{card::Card, money::styled_amount_bold},
        theme::Theme,
    },
};

const DATE_FORMAT: &str = "%b %d, %Y";

/// Full chronological list, newest first.
pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let card = Card::new("Recent Expenses", &theme);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let expenses = state.store.expenses();
    if expenses.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No expenses yet. Add one above.",
                Style::default().fg(theme.dim),
            )),
            inner,
        );
        return;
    }

    let items = expenses
        .iter()
        .map(|expense| {
            let date = expense
                .date
                .with_timezone(&state.timezone)
                .format(DATE_FORMAT)
                .to_string();

            ListItem::new(Line::from(vec![
                Span::styled(format!("{date:<14}"), Style::default().fg(theme.dim)),
                Span::styled(
                    format!("{:<30} ", expense.description),
                    Style::default().fg(theme.text),
                ),
                styled_amount_bold(expense.amount, &theme),
            ]))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(expenses.len() - 1)));

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, inner, &mut list_state);
}
