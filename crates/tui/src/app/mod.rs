mod accounts;

use std::{path::Path, time::Duration};

use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ledger::{Currency, TransactionRecord, TransactionStore};
use ratatui::layout::{Position, Rect};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        components::table_header,
        keymap::{AppAction, map_key},
    },
};

pub use accounts::AccountsState;

/// Reads the configured seed: a processed bank statement when the file is a
/// CSV, JSON records otherwise, the built-in mock ledger when unset.
fn load_records(config: &AppConfig) -> Result<Vec<TransactionRecord>> {
    let Some(path) = config.seed_path.as_deref() else {
        return Ok(ledger::mock_transactions());
    };

    let is_csv = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let records = if is_csv {
        ledger::load_statement_csv(path, &config.statement_account)?
    } else {
        ledger::load_seed(path)?
    };
    Ok(records)
}

/// Lines scrolled by one mouse wheel notch.
const WHEEL_STEP: isize = 3;

#[derive(Debug)]
pub struct AppState {
    pub title: String,
    pub accounts: AccountsState,
    pub layout: ui::ScreenLayout,
}

impl AppState {
    /// Lays the screen out for `area` and fits the list to it.
    pub fn set_area(&mut self, area: Rect) {
        self.layout = ui::screen_layout(area);
        self.accounts.resize(self.layout.list.height);
    }
}

pub struct App {
    config: AppConfig,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let currency = Currency::try_from(config.currency.as_str())?;
        let records = load_records(&config)?;
        let store = TransactionStore::new(records)?;
        tracing::info!(
            records = store.len(),
            seed = config.seed_path.as_deref().unwrap_or("built-in"),
            %currency,
            "ledger loaded"
        );

        let state = AppState {
            title: config.title.clone(),
            accounts: AccountsState::new(store, currency, config.row_height, config.overscan),
            layout: ui::ScreenLayout::default(),
        };

        Ok(Self {
            config,
            state,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal(self.config.mouse)?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal, self.config.mouse)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(self.config.tick_ms);

        while !self.should_quit {
            let size = terminal
                .size()
                .map_err(|err| AppError::Terminal(err.to_string()))?;
            self.state.set_area(Rect::new(0, 0, size.width, size.height));
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                self.handle_event(event::read()?);
            }
        }

        tracing::info!("quitting");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => {
                self.state.accounts.blur();
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let accounts = &mut self.state.accounts;
        let page = isize::try_from(accounts.list().page_size()).unwrap_or(isize::MAX);

        match map_key(key, accounts.is_editing()) {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::Up => accounts.move_cursor(-1),
            AppAction::Down => accounts.move_cursor(1),
            AppAction::PageUp => accounts.move_cursor(-page),
            AppAction::PageDown => accounts.move_cursor(page),
            AppAction::ToggleSelect => {
                accounts.toggle_selection_at_cursor();
            }
            AppAction::ToggleCleared => {
                accounts.toggle_cleared_at_cursor();
            }
            AppAction::EditMemo => {
                let cursor = accounts.cursor();
                accounts.begin_memo_edit(cursor);
            }
            AppAction::Submit => {
                accounts.submit();
            }
            AppAction::Blur => {
                accounts.blur();
            }
            AppAction::Backspace => accounts.edit_backspace(),
            AppAction::Input(ch) => accounts.edit_input(ch),
            AppAction::None => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let accounts = &mut self.state.accounts;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let list = self.state.layout.list;
                let hit = list
                    .contains(Position::new(mouse.column, mouse.row))
                    .then(|| accounts.list().row_at(mouse.row - list.y))
                    .flatten();
                match hit {
                    Some(index) => {
                        let column = table_header::column_at(list, mouse.column);
                        accounts.click(index, column);
                    }
                    None => {
                        accounts.blur();
                    }
                }
            }
            MouseEventKind::ScrollDown => accounts.scroll(WHEEL_STEP),
            MouseEventKind::ScrollUp => accounts.scroll(-WHEEL_STEP),
            _ => {}
        }
    }
}
