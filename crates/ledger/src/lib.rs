//! In-memory ledger behind the accounts table.
//!
//! The crate owns the only entity of the screen, [`TransactionRecord`], and
//! the [`TransactionStore`] that holds the ordered sequence of records and
//! applies the three row mutations (toggle selection, toggle cleared,
//! replace memo).

pub use currency::Currency;
pub use error::LedgerError;
pub use money::MoneyCents;
pub use record::TransactionRecord;
pub use seed::{
    load_seed, load_statement_csv, mock_transactions, parse_seed, parse_statement_csv,
};
pub use store::{Mutation, Summary, TransactionStore};

mod currency;
mod error;
mod money;
mod record;
mod seed;
mod store;
