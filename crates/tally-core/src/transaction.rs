//! Transactions: one immutable monetary movement each.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};
use crate::money::Value;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money taken from the account
    Withdraw,
    /// Money put onto the account
    Deposit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Withdraw => "withdraw",
            Self::Deposit => "deposit",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Accepts the canonical names only; free-text synonyms belong to the input layer.
impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "withdraw" => Ok(Self::Withdraw),
            "deposit" => Ok(Self::Deposit),
            other => Err(LedgerError::InvalidInput(format!(
                "Unknown transaction kind: {}",
                other
            ))),
        }
    }
}

/// A single recorded movement of money.
///
/// Fields are fixed at construction. The serialized field names (`type`,
/// `date`) are part of the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    name: String,
    amount: Value,
    #[serde(rename = "type")]
    kind: TransactionKind,
    date: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction stamped with the current time.
    pub fn new(name: impl Into<String>, kind: TransactionKind, amount: Value) -> Self {
        Self {
            name: name.into(),
            amount,
            kind,
            date: Utc::now(),
        }
    }

    /// Replace the timestamp while building.
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Value {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    /// Effect on the balance: positive for deposits, negative for withdrawals.
    ///
    /// # Errors
    ///
    /// `Overflow` for a withdrawal of `i64::MIN` minor units.
    pub fn signed_amount(&self) -> Result<Value> {
        match self.kind {
            TransactionKind::Deposit => Ok(self.amount),
            TransactionKind::Withdraw => self.amount.checked_neg(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_stamps_current_time() {
        let before = Utc::now();
        let tx = Transaction::new("Coffee", TransactionKind::Withdraw, Value::new(350));
        let after = Utc::now();

        assert_eq!(tx.name(), "Coffee");
        assert_eq!(tx.amount(), Value::new(350));
        assert_eq!(tx.kind(), TransactionKind::Withdraw);
        assert!(tx.date() >= before && tx.date() <= after);
    }

    #[test]
    fn test_with_date_overrides_timestamp() {
        let date = Utc.with_ymd_and_hms(2018, 3, 1, 9, 30, 0).unwrap();
        let tx = Transaction::new("Salary", TransactionKind::Deposit, Value::new(250_000))
            .with_date(date);
        assert_eq!(tx.date(), date);
    }

    #[test]
    fn test_no_validation_at_construction() {
        let tx = Transaction::new("", TransactionKind::Deposit, Value::ZERO);
        assert_eq!(tx.name(), "");
        assert!(tx.amount().is_zero());
    }

    #[test]
    fn test_signed_amount() {
        let deposit = Transaction::new("in", TransactionKind::Deposit, Value::new(500));
        let withdraw = Transaction::new("out", TransactionKind::Withdraw, Value::new(200));
        assert_eq!(deposit.signed_amount().unwrap(), Value::new(500));
        assert_eq!(withdraw.signed_amount().unwrap(), Value::new(-200));
    }

    #[test]
    fn test_signed_amount_of_most_negative_withdrawal() {
        let tx = Transaction::new("x", TransactionKind::Withdraw, Value::new(i64::MIN));
        assert!(matches!(tx.signed_amount(), Err(LedgerError::Overflow(_))));

        let tx = Transaction::new("x", TransactionKind::Deposit, Value::new(i64::MIN));
        assert_eq!(tx.signed_amount().unwrap(), Value::new(i64::MIN));
    }

    #[test]
    fn test_json_shape() {
        let date = Utc.with_ymd_and_hms(2018, 3, 1, 9, 30, 0).unwrap();
        let tx = Transaction::new("Rent", TransactionKind::Withdraw, Value::new(90_000))
            .with_date(date);
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Rent",
                "amount": 90000,
                "type": "withdraw",
                "date": "2018-03-01T09:30:00Z",
            })
        );
    }

    #[test]
    fn test_reads_dates_with_offsets() {
        let tx: Transaction = serde_json::from_str(
            r#"{"name":"Lunch","amount":1250,"type":"withdraw","date":"2018-03-01T10:30:00.5+01:00"}"#,
        )
        .unwrap();
        assert_eq!(
            tx.date(),
            Utc.with_ymd_and_hms(2018, 3, 1, 9, 30, 0).unwrap()
                + chrono::Duration::milliseconds(500)
        );
    }

    #[test]
    fn test_kind_canonical_names() {
        assert_eq!("withdraw".parse::<TransactionKind>().unwrap(), TransactionKind::Withdraw);
        assert_eq!("deposit".parse::<TransactionKind>().unwrap(), TransactionKind::Deposit);
        assert!("wd".parse::<TransactionKind>().is_err());
        assert_eq!(TransactionKind::Deposit.to_string(), "deposit");
    }
}
