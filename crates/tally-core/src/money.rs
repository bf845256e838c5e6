//! Monetary values and currency-aware rendering.
//!
//! A [`Value`] is always an integer count of minor units (cents). It carries
//! no currency of its own: rendering and parsing go through a [`Currency`],
//! and arithmetic assumes both operands share it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

const MAJOR_SLOT: &str = "{major}";
const MINOR_SLOT: &str = "{minor}";

/// A display currency: a name, a two-slot pattern and the minor units per major unit.
///
/// The pattern holds a `{major}` slot followed by a `{minor}` slot, e.g.
/// `"{major}.{minor}€"`. The minor slot is zero-padded to the digit count of
/// `ratio - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    code: &'static str,
    name: &'static str,
    format: &'static str,
    ratio: u32,
}

impl Currency {
    pub const EUR: Currency = Currency::new("EUR", "Euro", "{major}.{minor}€", 100);
    pub const USD: Currency = Currency::new("USD", "US Dollar", "${major}.{minor}", 100);
    pub const GBP: Currency = Currency::new("GBP", "Pound Sterling", "£{major}.{minor}", 100);

    /// All built-in currencies.
    pub const PRESETS: [Currency; 3] = [Currency::EUR, Currency::USD, Currency::GBP];

    /// Define a currency. A `ratio` of zero is treated as one.
    pub const fn new(
        code: &'static str,
        name: &'static str,
        format: &'static str,
        ratio: u32,
    ) -> Self {
        Self {
            code,
            name,
            format,
            ratio: if ratio == 0 { 1 } else { ratio },
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn format(&self) -> &'static str {
        self.format
    }

    pub fn ratio(&self) -> u32 {
        self.ratio
    }

    /// Build a value from whole major units (e.g. `12` euros -> 1200 cents).
    pub fn from_major(&self, major: i64) -> Value {
        Value(major.saturating_mul(i64::from(self.ratio)))
    }

    /// Render a value into this currency's pattern.
    ///
    /// The sign goes in front of the major slot only; the minor slot always
    /// holds the unsigned remainder.
    pub fn render(&self, value: Value) -> String {
        let (prefix, separator, suffix) = self.slots();
        let magnitude = value.0.unsigned_abs();
        let ratio = u64::from(self.ratio);
        let sign = if value.is_negative() { "-" } else { "" };
        format!(
            "{prefix}{sign}{major}{separator}{minor:0width$}{suffix}",
            major = magnitude / ratio,
            minor = magnitude % ratio,
            width = self.minor_width(),
        )
    }

    /// Parse text produced by [`Currency::render`].
    ///
    /// Surrounding whitespace is ignored. Anything that does not match the
    /// pattern exactly fails with [`LedgerError::Parse`].
    pub fn parse(&self, text: &str) -> Result<Value> {
        let mismatch = || {
            LedgerError::Parse(format!(
                "\"{}\" does not match the {} format (e.g. {})",
                text.trim(),
                self.code,
                self.render(Value(123_456))
            ))
        };

        let (prefix, separator, suffix) = self.slots();
        let body = text
            .trim()
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(suffix))
            .ok_or_else(mismatch)?;

        let width = self.minor_width();
        let (major_text, minor_text) = if separator.is_empty() {
            let at = body
                .len()
                .checked_sub(width)
                .filter(|&at| body.is_char_boundary(at))
                .ok_or_else(mismatch)?;
            body.split_at(at)
        } else {
            body.rsplit_once(separator).ok_or_else(mismatch)?
        };

        let (negative, major_digits) = match major_text.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, major_text),
        };
        if !is_digits(major_digits) || minor_text.len() != width || !is_digits(minor_text) {
            return Err(mismatch());
        }

        let major: u64 = major_digits.parse().map_err(|_| mismatch())?;
        let minor: u64 = minor_text.parse().map_err(|_| mismatch())?;
        let ratio = u64::from(self.ratio);
        if minor >= ratio {
            return Err(mismatch());
        }

        let magnitude = i128::from(major) * i128::from(ratio) + i128::from(minor);
        let signed = if negative { -magnitude } else { magnitude };
        i64::try_from(signed).map(Value).map_err(|_| {
            LedgerError::Parse(format!("\"{}\" is out of range", text.trim()))
        })
    }

    fn slots(&self) -> (&'static str, &'static str, &'static str) {
        let (prefix, rest) = self.format.split_once(MAJOR_SLOT).unwrap_or(("", self.format));
        let (separator, suffix) = rest.split_once(MINOR_SLOT).unwrap_or((rest, ""));
        (prefix, separator, suffix)
    }

    /// Number of digits in the minor slot.
    pub fn minor_width(&self) -> usize {
        let mut largest = self.ratio - 1;
        let mut digits = 1;
        while largest >= 10 {
            largest /= 10;
            digits += 1;
        }
        digits
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::EUR
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}

impl FromStr for Currency {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Currency::PRESETS
            .into_iter()
            .find(|currency| currency.code.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                LedgerError::InvalidInput(format!(
                    "Unknown currency: {} (use eur, usd or gbp)",
                    wanted
                ))
            })
    }
}

fn overflow(operation: &str, lhs: Value, rhs: Value) -> LedgerError {
    LedgerError::Overflow(format!("{} of {} and {} minor units", operation, lhs.0, rhs.0))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// An amount of money in minor units of the ambient currency.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Value(i64);

impl Value {
    pub const ZERO: Value = Value(0);

    pub const fn new(minor_units: i64) -> Self {
        Self(minor_units)
    }

    pub const fn minor_units(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Exact sum, or `Overflow` when it leaves the `i64` range.
    pub fn checked_add(self, rhs: Value) -> Result<Value> {
        self.0
            .checked_add(rhs.0)
            .map(Value)
            .ok_or_else(|| overflow("addition", self, rhs))
    }

    /// Exact difference, or `Overflow` when it leaves the `i64` range.
    pub fn checked_sub(self, rhs: Value) -> Result<Value> {
        self.0
            .checked_sub(rhs.0)
            .map(Value)
            .ok_or_else(|| overflow("subtraction", self, rhs))
    }

    /// Negation; only `i64::MIN` has no counterpart.
    pub fn checked_neg(self) -> Result<Value> {
        self.0.checked_neg().map(Value).ok_or_else(|| {
            LedgerError::Overflow(format!("cannot negate {} minor units", self.0))
        })
    }

    /// Strictly smaller than `other`.
    pub fn smaller(self, other: Value) -> bool {
        self < other
    }

    /// Strictly larger than `other`.
    pub fn larger(self, other: Value) -> bool {
        self > other
    }
}

impl From<i64> for Value {
    fn from(minor_units: i64) -> Self {
        Value(minor_units)
    }
}

/// Renders in the default currency.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&Currency::default().render(*self))
    }
}

/// Parses the default currency's rendered form.
impl FromStr for Value {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        Currency::default().parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_euro() {
        assert_eq!(Currency::EUR.render(Value::new(123_456)), "1234.56€");
        assert_eq!(Currency::EUR.render(Value::new(5)), "0.05€");
        assert_eq!(Currency::EUR.render(Value::ZERO), "0.00€");
    }

    #[test]
    fn test_render_negative_has_single_sign() {
        assert_eq!(Currency::EUR.render(Value::new(-150)), "-1.50€");
        assert_eq!(Currency::EUR.render(Value::new(-50)), "-0.50€");
        assert_eq!(Currency::USD.render(Value::new(-7)), "$-0.07");
    }

    #[test]
    fn test_display_uses_default_currency() {
        assert_eq!(Value::new(90_000).to_string(), "900.00€");
        assert_eq!(format!("{:>10}", Value::new(100)), "     1.00€");
    }

    #[test]
    fn test_parse_rendered_forms() {
        assert_eq!(Currency::EUR.parse("12.50€").unwrap(), Value::new(1250));
        assert_eq!(Currency::EUR.parse("  -0.50€\n").unwrap(), Value::new(-50));
        assert_eq!(Currency::USD.parse("$3.07").unwrap(), Value::new(307));
        assert_eq!(Currency::GBP.parse("£0.00").unwrap(), Value::ZERO);
        assert_eq!("1.00€".parse::<Value>().unwrap(), Value::new(100));
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for bad in [
            "", "abc", "12.50", "12€", "12.5€", "12.500€", "1x.50€", "+1.50€", "12.-5€", "-€",
            "$12.50", "12,50€",
        ] {
            let result = Currency::EUR.parse(bad);
            assert!(
                matches!(result, Err(LedgerError::Parse(_))),
                "expected parse error for {:?}, got {:?}",
                bad,
                result
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let result = Currency::EUR.parse("99999999999999999999.00€");
        assert!(matches!(result, Err(LedgerError::Parse(_))));
    }

    #[test]
    fn test_extreme_values_round_trip() {
        for value in [Value::new(i64::MAX), Value::new(i64::MIN)] {
            let text = Currency::EUR.render(value);
            assert_eq!(Currency::EUR.parse(&text).unwrap(), value);
        }
    }

    #[test]
    fn test_arithmetic_and_ordering() {
        let a = Value::new(500);
        let b = Value::new(200);
        assert_eq!(a.checked_add(b).unwrap(), Value::new(700));
        assert_eq!(a.checked_sub(b).unwrap(), Value::new(300));
        assert_eq!(a.checked_neg().unwrap(), Value::new(-500));
        assert!(b.smaller(a));
        assert!(a.larger(b));
        assert!(!a.larger(a));
        assert!(!a.smaller(a));
    }

    #[test]
    fn test_arithmetic_at_the_edges_fails_instead_of_wrapping() {
        let max = Value::new(i64::MAX);
        let min = Value::new(i64::MIN);
        assert!(matches!(max.checked_add(Value::new(1)), Err(LedgerError::Overflow(_))));
        assert!(matches!(min.checked_sub(Value::new(1)), Err(LedgerError::Overflow(_))));
        assert!(matches!(min.checked_neg(), Err(LedgerError::Overflow(_))));
        assert_eq!(max.checked_add(min).unwrap(), Value::new(-1));
        assert_eq!(max.checked_neg().unwrap(), Value::new(-i64::MAX));
    }

    #[test]
    fn test_currency_lookup() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert_eq!(" EUR ".parse::<Currency>().unwrap(), Currency::EUR);
        assert!("yen".parse::<Currency>().is_err());
        assert_eq!(Currency::default(), Currency::EUR);
    }

    #[test]
    fn test_presets_have_both_slots() {
        for currency in Currency::PRESETS {
            let major = currency.format().find(MAJOR_SLOT).unwrap();
            let minor = currency.format().find(MINOR_SLOT).unwrap();
            assert!(major < minor, "{} slots out of order", currency.code());
        }
    }

    #[test]
    fn test_from_major() {
        assert_eq!(Currency::EUR.from_major(12), Value::new(1200));
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Value::new(-42)).unwrap();
        assert_eq!(json, "-42");
        let back: Value = serde_json::from_str("250000").unwrap();
        assert_eq!(back, Value::new(250_000));
    }
}
