use engine::Money;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Styled span for an expense amount.
///
/// Negative amounts (money coming back) use the positive color.
#[must_use]
pub fn styled_amount(amount: Money, theme: &Theme) -> Span<'static> {
    let color = if amount.is_negative() {
        theme.positive
    } else {
        theme.dim
    };
    Span::styled(amount.to_string(), Style::default().fg(color))
}

/// Bold variant used for the list and totals.
#[must_use]
pub fn styled_amount_bold(amount: Money, theme: &Theme) -> Span<'static> {
    let color = if amount.is_negative() {
        theme.positive
    } else {
        theme.text
    };
    Span::styled(
        amount.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}
