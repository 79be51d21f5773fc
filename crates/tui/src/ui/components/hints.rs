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

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(theme.accent)));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

/// Creates a separator span for dividing hint groups.
pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

/// Hints while moving around the table.
pub const VIEWING: &[KeyHint] = &[
    KeyHint::new("↑↓", "move"),
    KeyHint::new("Space", "select"),
    KeyHint::new("c", "cleared"),
    KeyHint::new("Enter", "memo"),
    KeyHint::new("q", "quit"),
];

/// Hints while a memo cell is being edited.
pub const EDITING: &[KeyHint] = &[
    KeyHint::new("Enter", "save"),
    KeyHint::new("Esc/Tab", "done"),
    KeyHint::new("Ctrl+C", "quit"),
];
