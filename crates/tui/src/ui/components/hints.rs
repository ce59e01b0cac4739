use ratatui::{style::Style, text::Span};

use crate::ui::theme::Theme;

/// A keyboard hint consisting of a key and its action.
#[derive(Debug, Clone)]
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

pub const FORM_HINTS: [KeyHint; 4] = [
    KeyHint::new("Tab", "next field"),
    KeyHint::new("Enter", "add expense"),
    KeyHint::new("↑↓", "scroll"),
    KeyHint::new("Esc", "quit"),
];

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(theme.dim),
        ));
    }

    spans
}
