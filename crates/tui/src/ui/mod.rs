pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::app::AppState;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

/// Areas of the accounts screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    pub title: Rect,
    pub header: Rect,
    pub list: Rect,
    pub scrollbar: Rect,
    pub footer: Rect,
}

/// Splits the screen: title bar, table header, rows (plus a scrollbar
/// column), footer. Header and rows share the same width so their columns
/// line up.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let [title, header_row, body, footer] = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Length(2), // Column titles + underline
        Constraint::Min(0),    // Rows
        Constraint::Length(1), // Hints and totals
    ])
    .areas(area);

    let columns = Layout::horizontal([Constraint::Min(0), Constraint::Length(1)]);
    let [header, _] = columns.areas(header_row);
    let [list, scrollbar] = columns.areas(body);

    ScreenLayout {
        title,
        header,
        list,
        scrollbar,
        footer,
    }
}

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let theme = Theme::default();
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );
    screens::accounts::render(frame, &screen_layout(area), state, &theme);
}
