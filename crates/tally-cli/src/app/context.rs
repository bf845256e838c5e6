//! Application context for the Tally CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use tally_core::{Currency, JsonFileStorage, Ledger, StorageEngine};

use crate::cli::Cli;
use crate::config::{read_config, TallyConfig};
use crate::errors::CliError;
use crate::helpers::OutputFormat;
use crate::ui::UiContext;

use super::resolver::{
    missing_ledger_message, resolve_config_path, resolve_currency, resolve_ledger_path,
};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<TallyConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    ///
    /// A missing config file is not an error; every setting has a default.
    pub fn config(&self) -> anyhow::Result<&TallyConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if !path.exists() {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(TallyConfig::default());
            }
            tracing::debug!(path = %path.display(), "loading config");
            read_config(&path)
        })
    }

    pub fn ledger_path(&self) -> anyhow::Result<PathBuf> {
        let path = resolve_ledger_path(self.cli, self.config()?)?;
        tracing::debug!(path = %path.display(), "resolved ledger path");
        Ok(path)
    }

    pub fn currency(&self) -> anyhow::Result<Currency> {
        resolve_currency(self.cli, self.config()?)
    }

    /// Storage for the resolved ledger path, whether or not the file exists.
    pub fn storage(&self) -> anyhow::Result<JsonFileStorage> {
        Ok(JsonFileStorage::new(self.ledger_path()?))
    }

    /// Storage for a ledger that must already exist.
    pub fn existing_storage(&self) -> anyhow::Result<JsonFileStorage> {
        let storage = self.storage()?;
        if !storage.exists() {
            return Err(CliError::not_found(
                missing_ledger_message(storage.path()),
                "Hint: Use --ledger or TALLY_PATH to point at an existing ledger.",
            )
            .into());
        }
        Ok(storage)
    }

    /// Open the stored ledger for a read-only command.
    pub fn open_ledger(&self) -> anyhow::Result<(JsonFileStorage, Ledger)> {
        let storage = self.existing_storage()?;
        let ledger = storage.open()?;
        tracing::debug!(
            name = ledger.name(),
            size = ledger.size(),
            "opened ledger"
        );
        Ok((storage, ledger))
    }

    /// Build the UI context for a command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<OutputFormat>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
