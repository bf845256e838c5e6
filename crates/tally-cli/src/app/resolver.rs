//! Path and currency resolution.
//!
//! Precedence is always flag/env var, then config file, then built-in default.

use std::path::{Path, PathBuf};

use tally_core::Currency;

use crate::cli::Cli;
use crate::config::{default_config_path, default_ledger_path, TallyConfig};

/// Resolve the config file path, checking TALLY_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("TALLY_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the ledger file path from CLI args, config, or `$HOME/.trdb`.
pub fn resolve_ledger_path(cli: &Cli, config: &TallyConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.ledger.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.ledger.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_ledger_path()
}

/// Resolve the display currency from CLI args or config.
pub fn resolve_currency(cli: &Cli, config: &TallyConfig) -> anyhow::Result<Currency> {
    let code = cli
        .currency
        .as_deref()
        .or(config.display.currency.as_deref());
    match code {
        Some(code) => Ok(code.parse()?),
        None => Ok(Currency::default()),
    }
}

/// Error message when ledger file is missing.
pub fn missing_ledger_message(path: &Path) -> String {
    format!(
        "No ledger found at {}\n\nRun:\n  tally init\n\nOr specify a ledger path:\n  TALLY_PATH=/path/to/ledger.trdb tally init",
        path.display()
    )
}
