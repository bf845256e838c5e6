//! JSON output formatting for transactions.

use std::collections::BTreeMap;

use tally_core::{Currency, Transaction, Value};

/// Convert a transaction to JSON for output.
///
/// `amount` stays in minor units; `amount_display` is rendered in `currency`.
pub fn transaction_json(
    id: usize,
    transaction: &Transaction,
    currency: Currency,
) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": transaction.name(),
        "amount": transaction.amount(),
        "amount_display": currency.render(transaction.amount()),
        "type": transaction.kind(),
        "date": transaction.date(),
    })
}

/// Convert transactions keyed by ID to a JSON array, in ID order.
pub fn transactions_json(
    transactions: &BTreeMap<usize, &Transaction>,
    currency: Currency,
) -> Vec<serde_json::Value> {
    transactions
        .iter()
        .map(|(&id, transaction)| transaction_json(id, transaction, currency))
        .collect()
}

/// A balance with its rendered form.
pub fn balance_json(
    name: &str,
    count: usize,
    balance: Value,
    currency: Currency,
) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "transactions": count,
        "balance": balance,
        "balance_display": currency.render(balance),
        "currency": currency.code(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tally_core::TransactionKind;

    fn rent() -> Transaction {
        Transaction::new("Rent", TransactionKind::Withdraw, Value::new(90_000))
            .with_date(Utc.with_ymd_and_hms(2018, 3, 1, 9, 30, 0).unwrap())
    }

    #[test]
    fn test_transaction_json_shape() {
        let json = transaction_json(1, &rent(), Currency::EUR);
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Rent");
        assert_eq!(json["amount"], 90_000);
        assert_eq!(json["amount_display"], "900.00€");
        assert_eq!(json["type"], "withdraw");
        assert_eq!(json["date"], "2018-03-01T09:30:00Z");
    }

    #[test]
    fn test_transactions_json_keeps_ids() {
        let tx = rent();
        let mut map = BTreeMap::new();
        map.insert(4, &tx);
        map.insert(2, &tx);
        let ids: Vec<_> = transactions_json(&map, Currency::USD)
            .iter()
            .map(|v| v["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, [2, 4]);
    }

    #[test]
    fn test_balance_json_negative() {
        let json = balance_json("Home", 1, Value::new(-50), Currency::EUR);
        assert_eq!(json["balance"], -50);
        assert_eq!(json["balance_display"], "-0.50€");
        assert_eq!(json["currency"], "EUR");
    }
}
