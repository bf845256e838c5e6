//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use tally_core::LedgerError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (ledger file, transaction ID)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// Ledger lock held by another process
    Locked { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } | CliError::Locked { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::InvalidInput { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Map core errors that have a dedicated exit code.
    pub fn from_ledger_error(err: &LedgerError) -> Option<Self> {
        match err {
            LedgerError::NotFound { .. } => Some(CliError::not_found(
                err.to_string(),
                "Hint: Run `tally list` to see the current IDs.",
            )),
            LedgerError::Locked { path } => Some(CliError::Locked {
                message: err.to_string(),
                hint: format!(
                    "Hint: If no other tally process is running, remove {}",
                    path.display()
                ),
            }),
            LedgerError::Parse(_) | LedgerError::InvalidInput(_) => {
                Some(CliError::invalid_input(err.to_string()))
            }
            LedgerError::AlreadyExists { .. } => Some(CliError::invalid_input_with_hint(
                err.to_string(),
                "Hint: Use `tally init --force` to replace it.",
            )),
            _ => None,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::Locked { .. } => exit_codes::LOCKED,
        }
    }
}

/// Print any handler error to stderr and return the process exit code.
pub fn report(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        eprintln!("Error: {}", cli_err);
        return cli_err.exit_code();
    }
    if let Some(cli_err) = err
        .downcast_ref::<LedgerError>()
        .and_then(CliError::from_ledger_error)
    {
        eprintln!("Error: {}", cli_err);
        return cli_err.exit_code();
    }
    eprintln!("Error: {:#}", err);
    exit_codes::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::not_found("x", "y").exit_code(), exit_codes::NOT_FOUND);
        assert_eq!(
            CliError::invalid_input("x").exit_code(),
            exit_codes::INVALID_INPUT
        );
    }

    #[test]
    fn test_display_includes_hint() {
        let err = CliError::not_found("No ledger", "Hint: run init");
        assert_eq!(err.to_string(), "No ledger\nHint: run init");
        assert_eq!(CliError::invalid_input("bad").to_string(), "bad");
    }

    #[test]
    fn test_ledger_errors_map_to_exit_codes() {
        let not_found = LedgerError::NotFound { id: 3, size: 1 };
        assert_eq!(
            CliError::from_ledger_error(&not_found).unwrap().exit_code(),
            exit_codes::NOT_FOUND
        );

        let locked = LedgerError::Locked {
            path: PathBuf::from("/tmp/.trdb.lock"),
        };
        let mapped = CliError::from_ledger_error(&locked).unwrap();
        assert_eq!(mapped.exit_code(), exit_codes::LOCKED);
        assert!(mapped.to_string().contains("/tmp/.trdb.lock"));

        let parse = LedgerError::Parse("nope".to_string());
        assert_eq!(
            CliError::from_ledger_error(&parse).unwrap().exit_code(),
            exit_codes::INVALID_INPUT
        );
    }

    #[test]
    fn test_report_falls_back_to_failure() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(report(&err), exit_codes::FAILURE);

        let err = anyhow::Error::new(LedgerError::NotFound { id: 0, size: 0 });
        assert_eq!(report(&err), exit_codes::NOT_FOUND);
    }
}
