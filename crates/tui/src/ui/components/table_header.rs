use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::Theme;

/// Gap between two adjacent columns.
pub const COLUMN_SPACING: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Select,
    Account,
    Date,
    Payee,
    Category,
    Memo,
    Outflow,
    Inflow,
    Cleared,
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub column: Column,
    pub label: &'static str,
    pub width: Constraint,
    pub alignment: Alignment,
}

const fn spec(
    column: Column,
    label: &'static str,
    width: Constraint,
    alignment: Alignment,
) -> ColumnSpec {
    ColumnSpec {
        column,
        label,
        width,
        alignment,
    }
}

/// Column table shared by the header and every row, in display order.
pub const COLUMNS: [ColumnSpec; 9] = [
    spec(Column::Select, "", Constraint::Length(3), Alignment::Center),
    spec(Column::Account, "Account", Constraint::Length(16), Alignment::Left),
    spec(Column::Date, "Date", Constraint::Length(10), Alignment::Left),
    spec(Column::Payee, "Payee", Constraint::Length(26), Alignment::Left),
    spec(Column::Category, "Category", Constraint::Fill(1), Alignment::Left),
    spec(Column::Memo, "Memo", Constraint::Length(16), Alignment::Left),
    spec(Column::Outflow, "Outflow", Constraint::Length(12), Alignment::Right),
    spec(Column::Inflow, "Inflow", Constraint::Length(12), Alignment::Right),
    spec(Column::Cleared, "", Constraint::Length(3), Alignment::Center),
];

/// Splits one table line into the column cells, in [`COLUMNS`] order.
pub fn column_rects(area: Rect) -> Rc<[Rect]> {
    Layout::horizontal(COLUMNS.map(|c| c.width))
        .spacing(COLUMN_SPACING)
        .split(area)
}

/// Column under the horizontal position `x`, if any. Gaps between columns
/// belong to no column.
pub fn column_at(area: Rect, x: u16) -> Option<Column> {
    column_rects(area)
        .iter()
        .zip(COLUMNS.iter())
        .find(|(rect, _)| x >= rect.x && x < rect.x + rect.width)
        .map(|(_, spec)| spec.column)
}

pub fn render(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border))
        .style(Style::default().bg(theme.panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let style = Style::default()
        .fg(theme.text)
        .add_modifier(Modifier::BOLD);
    for (rect, spec) in column_rects(inner).iter().zip(COLUMNS.iter()) {
        let title = Paragraph::new(Line::from(spec.label))
            .style(style)
            .alignment(spec.alignment);
        frame.render_widget(title, *rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fill_the_row_in_order() {
        let area = Rect::new(0, 0, 140, 1);
        let rects = column_rects(area);

        assert_eq!(rects.len(), COLUMNS.len());
        assert_eq!(rects[0].x, 0);
        assert_eq!(rects[0].width, 3);
        let last = rects[rects.len() - 1];
        assert_eq!(last.x + last.width, 140);
        assert!(rects.windows(2).all(|pair| pair[0].x < pair[1].x));
    }

    #[test]
    fn column_at_resolves_cells_and_gaps() {
        let area = Rect::new(0, 0, 140, 1);
        let rects = column_rects(area);

        assert_eq!(column_at(area, 1), Some(Column::Select));
        assert_eq!(column_at(area, rects[5].x), Some(Column::Memo));
        assert_eq!(column_at(area, 139), Some(Column::Cleared));
        assert_eq!(column_at(area, rects[0].x + rects[0].width), None);
    }
}
