//! Output mode routing.

use crate::helpers::OutputFormat;

/// How a command presents its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// A single JSON document on stdout, nothing else
    Json,
    /// Stable `key=value` and space-separated lines for scripts
    #[default]
    Plain,
    /// Tables, colors and badges for a terminal
    Pretty,
}

impl OutputMode {
    /// Pick the mode for a command.
    ///
    /// `--json` wins over everything. `--format plain` and `TERM=dumb` force
    /// plain output. Otherwise a terminal gets pretty output and anything
    /// else (pipes, files) gets plain.
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format == Some(OutputFormat::Plain) || term_is_dumb || !is_tty {
            return Self::Plain;
        }
        Self::Pretty
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}
