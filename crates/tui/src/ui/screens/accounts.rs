use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use crate::{
    app::{AccountsState, AppState},
    ui::{
        ScreenLayout,
        components::{hints, icon, money, table_header, table_row},
        theme::Theme,
    },
};

pub fn render(frame: &mut Frame<'_>, layout: &ScreenLayout, state: &AppState, theme: &Theme) {
    let accounts = &state.accounts;

    render_title(frame, layout.title, state, theme);
    table_header::render(frame, layout.header, theme);
    render_rows(frame, layout.list, accounts, theme);
    render_scrollbar(frame, layout.scrollbar, accounts);
    render_footer(frame, layout.footer, accounts, theme);
}

fn render_title(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let count = state.accounts.store().len();
    let mut line = vec![
        Span::styled(
            format!(" {}", state.title),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {count} transactions"),
            Style::default().fg(theme.secondary),
        ),
    ];

    if let Some(id) = state.accounts.editing() {
        line.push(Span::styled(
            format!("  {} editing memo of #{id}", icon::glyph("pencil")),
            Style::default().fg(theme.accent),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(line)), area);
}

fn render_rows(frame: &mut Frame<'_>, area: Rect, accounts: &AccountsState, theme: &Theme) {
    let records = accounts.store().records();
    if records.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from("No transactions."))
                .style(Style::default().fg(theme.secondary))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let list = accounts.list();
    let item_height = list.item_height();
    let mut y = area.y;
    for index in list.visible_range() {
        if y >= area.bottom() {
            break;
        }
        let record = &records[index];
        let height = item_height.min(area.bottom() - y);
        let row_area = Rect::new(area.x, y, area.width, height);
        y = y.saturating_add(item_height);

        // Visible rows are always mounted.
        let Some(view) = accounts.view(&record.id) else {
            tracing::warn!(id = record.id.as_str(), "visible row without a view");
            continue;
        };
        table_row::render(
            frame,
            row_area,
            view,
            list.row_state(&record.id),
            index == accounts.cursor(),
            theme,
        );
    }
}

fn render_scrollbar(frame: &mut Frame<'_>, area: Rect, accounts: &AccountsState) {
    let list = accounts.list();
    let hidden = list.len().saturating_sub(list.page_size());
    if hidden == 0 {
        return;
    }

    let mut scroll = ScrollbarState::new(hidden).position(list.offset());
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        area,
        &mut scroll,
    );
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, accounts: &AccountsState, theme: &Theme) {
    let context = if accounts.is_editing() {
        hints::EDITING
    } else {
        hints::VIEWING
    };
    let mut parts = vec![Span::raw(" ")];
    parts.extend(hints::hints_to_spans(context, theme));
    parts.push(hints::hint_separator(theme));

    let summary = accounts.store().summary();
    let currency = accounts.currency();
    parts.extend([
        Span::raw(format!("{} selected  ", summary.selected)),
        Span::raw(format!("{}/{} cleared  ", summary.cleared, summary.total)),
        Span::styled("out ", Style::default().fg(theme.secondary)),
        money::styled_total(summary.outflow, currency, theme.text),
        Span::styled("  in ", Style::default().fg(theme.secondary)),
        money::styled_total(summary.inflow, currency, theme.positive),
    ]);

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}

#[cfg(test)]
mod tests {
    use ledger::{Currency, TransactionRecord, TransactionStore};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn state(records: Vec<TransactionRecord>) -> AppState {
        let store = TransactionStore::new(records).unwrap();
        let mut state = AppState {
            title: "Accounts".to_string(),
            accounts: AccountsState::new(store, Currency::Brl, 1, 0),
            layout: ScreenLayout::default(),
        };
        state.set_area(Rect::new(0, 0, 140, 8));
        state
    }

    fn draw(state: &AppState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(140, 8)).unwrap();
        terminal
            .draw(|frame| crate::ui::render(frame, state))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn row_without_amounts_renders_empty_amount_cells() {
        let state = state(vec![TransactionRecord::new(
            "13",
            "Carteira",
            "26/02/2025",
            "Starting Balance",
            "Inflow: Ready to Assign",
        )]);
        let lines = draw(&state);
        let row = &lines[3];

        let rects = table_header::column_rects(state.layout.list);
        let cell = |i: usize| -> String {
            row.chars()
                .skip(usize::from(rects[i].x))
                .take(usize::from(rects[i].width))
                .collect()
        };
        assert!(row.contains("Starting Balance"));
        assert_eq!(cell(6).trim(), "");
        assert_eq!(cell(7).trim(), "");
        assert_eq!(cell(8).trim(), "");
    }

    #[test]
    fn outflow_is_right_aligned_in_its_column() {
        let state = state(vec![
            TransactionRecord::new("2", "Itau", "19/02/2025", "Pão de Açúcar", "Groceries")
                .with_outflow(38_712),
        ]);
        let lines = draw(&state);
        let rects = table_header::column_rects(state.layout.list);
        let outflow = rects[6];

        let cell: String = lines[3]
            .chars()
            .skip(usize::from(outflow.x))
            .take(usize::from(outflow.width))
            .collect();
        assert_eq!(cell, "    R$387.12");
    }

    #[test]
    fn empty_ledger_shows_placeholder() {
        let state = state(Vec::new());
        let lines = draw(&state);
        assert!(lines.iter().any(|line| line.contains("No transactions.")));
    }

    #[test]
    fn footer_shows_totals() {
        let mut state = state(vec![
            TransactionRecord::new("1", "A", "d", "p", "c").with_inflow(1_000),
            TransactionRecord::new("2", "A", "d", "p", "c").with_outflow(250),
        ]);
        state.accounts.toggle_selection("2");
        let lines = draw(&state);
        let footer = &lines[7];

        assert!(footer.contains("1 selected"));
        assert!(footer.contains("0/2 cleared"));
        assert!(footer.contains("out R$2.50"));
        assert!(footer.contains("in R$10.00"));
    }
}
