use std::{fs, io::Read, path::Path};

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::{LedgerError, MoneyCents, TransactionRecord};

/// Date layout of the processed bank statement.
const STATEMENT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Date layout shown in the table.
const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Loads seed records from a JSON file holding an array of records.
///
/// Every record is validated before being returned; duplicate ids are left
/// to [`TransactionStore::new`](crate::TransactionStore::new).
pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<TransactionRecord>, LedgerError> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_seed(&content)
}

pub fn parse_seed(content: &str) -> Result<Vec<TransactionRecord>, LedgerError> {
    let records: Vec<TransactionRecord> = serde_json::from_str(content)?;
    for record in &records {
        record.validate()?;
    }
    Ok(records)
}

/// One line of a processed bank statement (`date,description,amount`).
/// Debits carry a negative amount.
#[derive(Debug, Deserialize)]
struct StatementRow {
    date: String,
    description: String,
    amount: String,
}

/// Loads the records of a processed bank statement CSV, attributing every
/// line to `account`.
pub fn load_statement_csv(
    path: impl AsRef<Path>,
    account: &str,
) -> Result<Vec<TransactionRecord>, LedgerError> {
    let file = fs::File::open(path.as_ref())?;
    parse_statement_csv(file, account)
}

/// Converts statement lines into records: a negative amount becomes the
/// outflow, a positive one the inflow, the description becomes the payee.
/// Ids are the 1-based line numbers; category, memo and flags start empty.
pub fn parse_statement_csv(
    reader: impl Read,
    account: &str,
) -> Result<Vec<TransactionRecord>, LedgerError> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<StatementRow>().enumerate() {
        let row = row?;
        let id = (index + 1).to_string();
        let date = NaiveDate::parse_from_str(&row.date, STATEMENT_DATE_FORMAT)
            .map_err(|_| LedgerError::InvalidDate(row.date.clone()))?;
        let amount: MoneyCents = row.amount.parse()?;

        let mut record = TransactionRecord::new(
            id,
            account,
            date.format(DISPLAY_DATE_FORMAT).to_string(),
            row.description,
            "",
        );
        if amount.is_negative() {
            let cents = amount
                .cents()
                .checked_neg()
                .ok_or_else(|| LedgerError::InvalidAmount(row.amount.clone()))?;
            record = record.with_outflow(cents);
        } else if amount != MoneyCents::ZERO {
            record = record.with_inflow(amount.cents());
        }
        record.validate()?;
        records.push(record);
    }

    tracing::debug!(records = records.len(), account, "statement parsed");
    Ok(records)
}

/// Built-in mock ledger shown when no seed file is configured.
pub fn mock_transactions() -> Vec<TransactionRecord> {
    const ITAU: &str = "Itau Cartão";
    const NUBANK: &str = "Nubank";
    const CASH: &str = "Carteira";
    const READY: &str = "Inflow: Ready to Assign";

    vec![
        TransactionRecord::new("1", ITAU, "18/02/2025", "Manual Balance Adjustment", READY)
        .with_inflow(1_453_958)
        .cleared(true),
        TransactionRecord::new("2", ITAU, "19/02/2025", "Pão de Açúcar", "Groceries")
            .with_outflow(38_712)
            .cleared(true),
        TransactionRecord::new("3", ITAU, "19/02/2025", "Uber", "Transport")
            .with_outflow(2_390)
            .with_memo("airport"),
        TransactionRecord::new("4", NUBANK, "20/02/2025", "Enel", "Electricity")
            .with_outflow(21_045)
            .cleared(true),
        TransactionRecord::new("5", NUBANK, "20/02/2025", "Sabesp", "Water")
            .with_outflow(9_830)
            .cleared(true),
        TransactionRecord::new("6", ITAU, "21/02/2025", "iFood", "Dining Out")
            .with_outflow(6_475),
        TransactionRecord::new("7", CASH, "21/02/2025", "Feira livre", "Groceries")
            .with_outflow(4_200)
            .with_memo("fruta e verdura"),
        TransactionRecord::new("8", NUBANK, "22/02/2025", "Netflix", "Subscriptions")
            .with_outflow(5_590)
            .cleared(true),
        TransactionRecord::new("9", NUBANK, "23/02/2025", "Spotify", "Subscriptions")
            .with_outflow(2_190)
            .cleared(true),
        TransactionRecord::new("10", ITAU, "24/02/2025", "Drogasil", "Health")
            .with_outflow(8_764),
        TransactionRecord::new("11", NUBANK, "25/02/2025", "Acme Ltda", READY)
            .with_inflow(820_000)
            .with_memo("salário fevereiro")
            .cleared(true),
        TransactionRecord::new("12", ITAU, "25/02/2025", "Shell", "Fuel")
            .with_outflow(25_000),
        TransactionRecord::new("13", CASH, "26/02/2025", "Starting Balance", READY),
        TransactionRecord::new("14", NUBANK, "26/02/2025", "Vivo", "Phone")
            .with_outflow(6_999)
            .cleared(true),
        TransactionRecord::new("15", ITAU, "27/02/2025", "Amazon", "Household")
            .with_outflow(15_980),
        TransactionRecord::new("16", ITAU, "27/02/2025", "Amazon", "Household")
            .with_inflow(3_490)
            .with_memo("refund"),
        TransactionRecord::new("17", NUBANK, "28/02/2025", "Smart Fit", "Fitness")
            .with_outflow(11_990),
        TransactionRecord::new("18", CASH, "28/02/2025", "Padaria São João", "Dining Out")
            .with_outflow(1_850),
        TransactionRecord::new("19", ITAU, "01/03/2025", "Condomínio", "Rent")
            .with_outflow(98_000)
            .cleared(true),
        TransactionRecord::new("20", NUBANK, "02/03/2025", "Livraria Cultura", "Books")
            .with_outflow(7_490),
        TransactionRecord::new("21", ITAU, "03/03/2025", "Petz", "Pets")
            .with_outflow(13_280),
        TransactionRecord::new("22", NUBANK, "03/03/2025", "Rendimento", READY)
            .with_inflow(4_712)
            .cleared(true),
        TransactionRecord::new("23", ITAU, "04/03/2025", "Cinemark", "Entertainment")
            .with_outflow(6_400),
        TransactionRecord::new("24", CASH, "05/03/2025", "Estacionamento", "Transport")
            .with_outflow(2_000),
    ]
}
