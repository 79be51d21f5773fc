use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/ledger_tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub currency: String,
    /// JSON file with seed records or a processed bank statement (`.csv`);
    /// the built-in mock ledger is used when unset.
    pub seed_path: Option<String>,
    /// Account name given to the lines of a statement CSV.
    pub statement_account: String,
    /// Estimated terminal lines taken by one table row.
    pub row_height: u16,
    /// Rows kept mounted above and below the viewport.
    pub overscan: usize,
    pub tick_ms: u64,
    pub mouse: bool,
    pub log_file: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Accounts".to_string(),
            currency: "BRL".to_string(),
            seed_path: None,
            statement_account: "Statement".to_string(),
            row_height: 1,
            overscan: 4,
            tick_ms: 200,
            mouse: true,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ledger_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// JSON seed file or statement CSV with the transactions to show.
    #[arg(long)]
    seed: Option<String>,
    /// Account name for the lines of a statement CSV.
    #[arg(long)]
    statement_account: Option<String>,
    /// Currency code used to label amounts (BRL, EUR, USD).
    #[arg(long)]
    currency: Option<String>,
    /// Write logs to this file (the terminal is busy drawing the UI).
    #[arg(long)]
    log_file: Option<String>,
    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    log_level: Option<String>,
    /// Disable mouse capture.
    #[arg(long)]
    no_mouse: bool,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder =
        builder.add_source(config::Environment::with_prefix("LEDGER_TUI").try_parsing(true));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(seed) = args.seed {
        settings.seed_path = Some(seed);
    }
    if let Some(account) = args.statement_account {
        settings.statement_account = account;
    }
    if let Some(currency) = args.currency {
        settings.currency = currency;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }
    if args.no_mouse {
        settings.mouse = false;
    }

    Ok(settings)
}
