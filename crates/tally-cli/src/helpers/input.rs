//! Interactive prompting for missing command arguments.

use std::io::IsTerminal;

use dialoguer::{Confirm, Input};

use crate::errors::CliError;

/// Whether prompts may be shown for this invocation.
pub fn interactive(no_input: bool) -> bool {
    !no_input && std::io::stdin().is_terminal()
}

/// Use `provided` if given, otherwise prompt until `parse` accepts the answer.
///
/// A provided value is parsed once and its error returned as-is. Without a
/// value and without a terminal, `field` is reported as missing.
pub fn prompt_until_valid<T, F>(
    field: &str,
    provided: Option<&str>,
    no_input: bool,
    parse: F,
) -> anyhow::Result<T>
where
    F: Fn(&str) -> anyhow::Result<T>,
{
    if let Some(value) = provided {
        return parse(value);
    }
    if !interactive(no_input) {
        return Err(CliError::invalid_input_with_hint(
            format!("Missing required value: {}", field),
            format!("Hint: Provide the {} as an argument or run without --no-input.", field),
        )
        .into());
    }

    loop {
        let answer: String = Input::new()
            .with_prompt(field)
            .allow_empty(true)
            .interact_text()?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(err) => eprintln!("{}", err),
        }
    }
}

/// Ask a yes/no question, defaulting to No.
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?)
}
