//! Parsing helpers for user input at the CLI boundary.

use chrono::{DateTime, NaiveDate, Utc};

use tally_core::{Currency, LedgerError, TransactionKind, Value};

use crate::errors::CliError;

/// Parse a datetime string (ISO-8601 or YYYY-MM-DD).
pub fn parse_datetime(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| CliError::invalid_input(format!("Invalid date value: {}", value)))?;
        return Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }

    Err(CliError::invalid_input(format!(
        "Invalid date/time (expected ISO-8601 or YYYY-MM-DD): {}",
        value
    ))
    .into())
}

/// Parse a transaction kind, accepting the usual abbreviations.
///
/// `wd`, `withdraw`, `draw` mean a withdrawal; `dp`, `deposit`, `depo` a
/// deposit. Matching is case-insensitive.
pub fn parse_kind(value: &str) -> anyhow::Result<TransactionKind> {
    match value.trim().to_ascii_lowercase().as_str() {
        "wd" | "withdraw" | "draw" => Ok(TransactionKind::Withdraw),
        "dp" | "deposit" | "depo" => Ok(TransactionKind::Deposit),
        _ => Err(CliError::invalid_input_with_hint(
            format!("Unknown transaction kind: {}", value.trim()),
            "Hint: Use wd (withdraw) or dp (deposit).",
        )
        .into()),
    }
}

/// Parse a transaction name; it must contain something other than whitespace.
pub fn parse_name(value: &str) -> anyhow::Result<String> {
    let name = value.trim();
    if name.is_empty() {
        return Err(CliError::invalid_input("Transaction name must not be empty").into());
    }
    Ok(name.to_string())
}

/// Parse an amount in `currency`.
///
/// Accepts the rendered form (`12.50€`) as well as the bare forms `12.50`,
/// `12.5` and `12`. Bare input is rewritten into the currency pattern and then
/// handed to the strict parser, so both paths share one set of rules.
pub fn parse_amount(currency: Currency, value: &str) -> anyhow::Result<Value> {
    let text = value.trim();
    if let Ok(parsed) = currency.parse(text) {
        return Ok(parsed);
    }

    let normalised = normalise_bare_amount(currency, text).ok_or_else(|| {
        CliError::invalid_input_with_hint(
            format!("Invalid amount: {}", text),
            format!(
                "Hint: Use a plain number such as 12.50 or the {} form {}.",
                currency.code(),
                currency.render(Value::new(1250))
            ),
        )
    })?;
    Ok(currency.parse(&normalised)?)
}

/// Parse an amount for a new transaction; zero is rejected.
pub fn parse_store_amount(currency: Currency, value: &str) -> anyhow::Result<Value> {
    let amount = parse_amount(currency, value)?;
    if amount.is_zero() {
        return Err(CliError::invalid_input("Amount must not be zero").into());
    }
    Ok(amount)
}

fn normalise_bare_amount(currency: Currency, text: &str) -> Option<String> {
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (major, minor) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let width = currency.minor_width();

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if major.is_empty() || !all_digits(major) || !all_digits(minor) || minor.len() > width {
        return None;
    }
    if unsigned.contains('.') && minor.is_empty() {
        return None;
    }

    let sign = if negative { "-" } else { "" };
    let minor = format!("{:0<width$}", minor, width = width);
    Some(
        currency
            .format()
            .replace("{major}", &format!("{}{}", sign, major))
            .replace("{minor}", &minor),
    )
}

/// Convert a user-supplied ID into a ledger position.
///
/// Negative IDs can never address a transaction and report the same
/// not-found error as an ID past the end.
pub fn parse_id(id: i64, size: usize) -> anyhow::Result<usize> {
    match usize::try_from(id) {
        Ok(id) if id < size => Ok(id),
        Ok(id) => Err(LedgerError::NotFound { id, size }.into()),
        Err(_) => Err(CliError::not_found(
            format!(
                "Not found: transaction {} does not exist (ledger holds {})",
                id, size
            ),
            "Hint: Run `tally list` to see the current IDs.",
        )
        .into()),
    }
}

/// Output format for list-style commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_datetime_forms() {
        assert_eq!(
            parse_datetime("2024-02-29").unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap()
        );
        assert_eq!(
            parse_datetime("2024-02-29T10:00:00+02:00").unwrap(),
            Utc.with_ymd_and_hms(2024, 2, 29, 8, 0, 0).unwrap()
        );
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn test_parse_kind_synonyms() {
        for value in ["wd", "WD", "withdraw", "Draw", " draw "] {
            assert_eq!(parse_kind(value).unwrap(), TransactionKind::Withdraw);
        }
        for value in ["dp", "Deposit", "DEPO"] {
            assert_eq!(parse_kind(value).unwrap(), TransactionKind::Deposit);
        }
        assert!(parse_kind("transfer").is_err());
        assert!(parse_kind("").is_err());
    }

    #[test]
    fn test_parse_name_trims_and_rejects_blank() {
        assert_eq!(parse_name("  Rent ").unwrap(), "Rent");
        assert!(parse_name("   ").is_err());
    }

    #[test]
    fn test_parse_amount_accepts_rendered_and_bare_forms() {
        let eur = Currency::EUR;
        assert_eq!(parse_amount(eur, "12.50€").unwrap(), Value::new(1250));
        assert_eq!(parse_amount(eur, "12.50").unwrap(), Value::new(1250));
        assert_eq!(parse_amount(eur, "12.5").unwrap(), Value::new(1250));
        assert_eq!(parse_amount(eur, "12").unwrap(), Value::new(1200));
        assert_eq!(parse_amount(eur, "-0.50").unwrap(), Value::new(-50));
        assert_eq!(parse_amount(Currency::USD, "$3.07").unwrap(), Value::new(307));
        assert_eq!(parse_amount(Currency::GBP, "3").unwrap(), Value::new(300));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        let eur = Currency::EUR;
        for value in ["", "abc", "12.", ".50", "12.505", "1,50", "12.50$", "--1"] {
            assert!(parse_amount(eur, value).is_err(), "accepted {:?}", value);
        }
    }

    #[test]
    fn test_store_amount_rejects_zero() {
        assert!(parse_store_amount(Currency::EUR, "0").is_err());
        assert!(parse_store_amount(Currency::EUR, "0.00€").is_err());
        assert!(parse_store_amount(Currency::EUR, "0.01").is_ok());
    }

    #[test]
    fn test_parse_id_bounds() {
        use crate::constants::exit_codes;
        use crate::errors::report;

        assert_eq!(parse_id(0, 2).unwrap(), 0);
        assert_eq!(parse_id(1, 2).unwrap(), 1);
        assert_eq!(report(&parse_id(2, 2).unwrap_err()), exit_codes::NOT_FOUND);
        assert_eq!(report(&parse_id(-1, 2).unwrap_err()), exit_codes::NOT_FOUND);
        assert_eq!(report(&parse_id(0, 0).unwrap_err()), exit_codes::NOT_FOUND);
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
        assert!(parse_output_format(Some("csv")).is_err());
    }
}
