//! Read-only views over a ledger: filtering, latest entries, running balance.
//!
//! Results are keyed by the transaction's positional ID at query time.

use std::collections::BTreeMap;

use crate::error::{LedgerError, Result};
use crate::ledger::Ledger;
use crate::money::Value;
use crate::transaction::{Transaction, TransactionKind};

/// Filter for querying transactions.
///
/// Every predicate is optional and all supplied predicates must match.
/// `None` means "not applied"; `Some(Value::ZERO)` is a real bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Exact, case-sensitive name
    pub name: Option<String>,

    /// Minimum amount (inclusive)
    pub min: Option<Value>,

    /// Maximum amount (inclusive)
    pub max: Option<Value>,

    /// Transaction kind
    pub kind: Option<TransactionKind>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn min(mut self, min: Value) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: Value) -> Self {
        self.max = Some(max);
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// True when no predicate is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Check a single transaction against every supplied predicate.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.name
            .as_deref()
            .map_or(true, |name| transaction.name() == name)
            && self.min.map_or(true, |min| transaction.amount() >= min)
            && self.max.map_or(true, |max| transaction.amount() <= max)
            && self.kind.map_or(true, |kind| transaction.kind() == kind)
    }
}

/// Transactions matching `filter`, keyed by ID.
pub fn filter<'a>(
    ledger: &'a Ledger,
    filter: &TransactionFilter,
) -> BTreeMap<usize, &'a Transaction> {
    ledger
        .iter()
        .filter(|(_, transaction)| filter.matches(transaction))
        .collect()
}

/// The last `count` transactions by insertion order, keyed by ID.
pub fn latest(ledger: &Ledger, count: usize) -> BTreeMap<usize, &Transaction> {
    ledger.iter().rev().take(count).collect()
}

/// Sum of deposits minus withdrawals, in the given order, starting at zero.
///
/// The sum is exact. Partial sums may leave the `i64` range as long as the
/// final balance fits.
///
/// # Errors
///
/// `Overflow` when the balance is not representable as a `Value`.
pub fn running_balance<'a, I>(transactions: I) -> Result<Value>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let total: i128 = transactions
        .into_iter()
        .map(|transaction| {
            let units = i128::from(transaction.amount().minor_units());
            match transaction.kind() {
                TransactionKind::Deposit => units,
                TransactionKind::Withdraw => -units,
            }
        })
        .sum();
    i64::try_from(total)
        .map(Value::new)
        .map_err(|_| LedgerError::Overflow(format!("balance of {} minor units", total)))
}
