use ledger::{Currency, TransactionRecord};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::{
    components::{
        icon,
        money::amount_text,
        table_header::{COLUMNS, Column, column_rects},
    },
    theme::Theme,
};

/// What ends a memo edit. Both commit the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitTrigger {
    Blur,
    Submit,
}

/// Memo cell state, local to one mounted row.
///
/// There is no cancel transition: leaving `Editing` always hands back the
/// draft to be committed, even when it equals the original memo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MemoEdit {
    #[default]
    Viewing,
    Editing {
        draft: String,
    },
}

impl MemoEdit {
    /// `Viewing -> Editing`, seeding the draft with the current memo.
    /// Returns `false` if the cell was already being edited.
    pub fn begin(&mut self, memo: &str) -> bool {
        if self.is_editing() {
            return false;
        }
        *self = Self::Editing {
            draft: memo.to_string(),
        };
        true
    }

    pub fn input(&mut self, ch: char) {
        if let Self::Editing { draft } = self {
            draft.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Self::Editing { draft } = self {
            draft.pop();
        }
    }

    /// `Editing -> Viewing`, returning the draft to commit.
    pub fn finish(&mut self, trigger: CommitTrigger) -> Option<String> {
        match std::mem::take(self) {
            Self::Editing { draft } => {
                tracing::debug!(?trigger, "memo edit finished");
                Some(draft)
            }
            Self::Viewing => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            Self::Editing { draft } => Some(draft),
            Self::Viewing => None,
        }
    }
}

/// Transient state owned by a mounted row; dropped when the row unmounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowState {
    pub memo: MemoEdit,
}

/// Display strings of one record, derived once per record revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: String,
    pub selected: bool,
    pub account: String,
    pub date: String,
    pub payee: String,
    pub category: String,
    pub memo: String,
    pub outflow: String,
    pub inflow: String,
    pub cleared: bool,
}

impl RowView {
    pub fn new(record: &TransactionRecord, currency: Currency) -> Self {
        Self {
            id: record.id.clone(),
            selected: record.selected,
            account: record.account.clone(),
            date: record.date.clone(),
            payee: record.payee.clone(),
            category: record.category.clone(),
            memo: record.memo.clone(),
            outflow: amount_text(record.outflow, currency),
            inflow: amount_text(record.inflow, currency),
            cleared: record.cleared,
        }
    }
}

pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    view: &RowView,
    state: Option<&RowState>,
    focused: bool,
    theme: &Theme,
) {
    let base = if focused {
        Style::default().bg(theme.cursor)
    } else {
        Style::default()
    };
    frame.render_widget(Paragraph::new("").style(base), area);

    let secondary = base.fg(theme.color_or_text("secondary"));
    let line = Rect { height: 1, ..area };

    for (rect, spec) in column_rects(line).iter().zip(COLUMNS.iter()) {
        let content = match spec.column {
            Column::Select => {
                let name = if view.selected {
                    "checkbox-marked"
                } else {
                    "checkbox-blank"
                };
                let style = if view.selected {
                    base.fg(theme.accent)
                } else {
                    secondary
                };
                Line::from(Span::styled(icon::glyph(name), style))
            }
            Column::Account => Line::from(Span::styled(view.account.as_str(), secondary)),
            Column::Date => Line::from(Span::styled(view.date.as_str(), secondary)),
            Column::Payee => Line::from(Span::styled(view.payee.as_str(), secondary)),
            Column::Category => Line::from(Span::styled(view.category.as_str(), secondary)),
            Column::Memo => memo_line(view, state, secondary, theme),
            Column::Outflow => Line::from(Span::styled(view.outflow.as_str(), secondary)),
            Column::Inflow => Line::from(Span::styled(
                view.inflow.as_str(),
                base.fg(theme.color_or_text("green")),
            )),
            Column::Cleared => {
                if view.cleared {
                    Line::from(Span::styled(
                        icon::glyph("check-circle"),
                        base.fg(theme.color_or_text("green")),
                    ))
                } else {
                    Line::default()
                }
            }
        };
        frame.render_widget(Paragraph::new(content).alignment(spec.alignment), *rect);
    }
}

fn memo_line<'a>(
    view: &'a RowView,
    state: Option<&'a RowState>,
    secondary: Style,
    theme: &Theme,
) -> Line<'a> {
    match state.and_then(|s| s.memo.draft()) {
        Some(draft) => Line::from(vec![
            Span::styled(
                draft,
                secondary
                    .fg(theme.text)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled("▏", Style::default().fg(theme.accent)),
        ]),
        None => Line::from(Span::styled(view.memo.as_str(), secondary)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger::MoneyCents;

    fn balance_adjustment() -> TransactionRecord {
        TransactionRecord::new(
            "1",
            "Itau Cartão",
            "18/02/2025",
            "Manual Balance Adjustment",
            "Inflow: Ready to Assign",
        )
        .with_inflow(1_453_958)
        .cleared(true)
    }

    #[test]
    fn view_formats_present_amounts_only() {
        let view = RowView::new(&balance_adjustment(), Currency::Brl);
        assert_eq!(view.inflow, "R$14539.58");
        assert_eq!(view.outflow, "");

        let mut record = balance_adjustment();
        record.inflow = None;
        let view = RowView::new(&record, Currency::Brl);
        assert_eq!(view.inflow, "");
        assert_eq!(view.outflow, "");

        record.outflow = Some(MoneyCents::new(2_390));
        assert_eq!(RowView::new(&record, Currency::Brl).outflow, "R$23.90");
    }

    #[test]
    fn memo_edit_commits_last_draft() {
        let mut memo = MemoEdit::default();
        assert!(memo.begin("old"));
        assert!(!memo.begin("ignored"));
        for _ in 0..3 {
            memo.backspace();
        }
        "paid".chars().for_each(|ch| memo.input(ch));

        assert_eq!(memo.draft(), Some("paid"));
        assert_eq!(memo.finish(CommitTrigger::Blur), Some("paid".to_string()));
        assert_eq!(memo, MemoEdit::Viewing);
    }

    #[test]
    fn memo_edit_commits_unchanged_draft() {
        let mut memo = MemoEdit::default();
        memo.begin("same");
        assert_eq!(memo.finish(CommitTrigger::Submit), Some("same".to_string()));
    }

    #[test]
    fn finishing_while_viewing_commits_nothing() {
        let mut memo = MemoEdit::default();
        memo.input('x');
        assert_eq!(memo.finish(CommitTrigger::Blur), None);
    }
}
