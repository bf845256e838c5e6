//! Text and table output formatting for transactions.

use std::collections::BTreeMap;

use tally_core::{running_balance, Currency, Result, Transaction, TransactionKind, Value};

use crate::ui::theme::{styled, styles};
use crate::ui::{
    format_datetime, kv, print, simple_table, single_line, truncate, Column, UiContext,
};

const NAME_WIDTH: usize = 40;

/// Render an amount signed by kind, colored in pretty mode.
fn amount_cell(ctx: &UiContext, transaction: &Transaction, currency: Currency) -> Result<String> {
    let rendered = currency.render(transaction.signed_amount()?);
    if !ctx.mode.is_pretty() {
        return Ok(rendered);
    }
    Ok(match transaction.kind() {
        TransactionKind::Deposit => styled(&rendered, styles::green(), ctx.color),
        TransactionKind::Withdraw => styled(&rendered, styles::red(), ctx.color),
    })
}

fn balance_cell(ctx: &UiContext, balance: Value, currency: Currency) -> String {
    let rendered = currency.render(balance);
    if ctx.mode.is_pretty() && balance.is_negative() {
        styled(&rendered, styles::red(), ctx.color)
    } else if ctx.mode.is_pretty() {
        styled(&rendered, styles::bold(), ctx.color)
    } else {
        rendered
    }
}

/// Print a single transaction in human-readable format.
pub fn print_transaction(
    ctx: &UiContext,
    id: usize,
    transaction: &Transaction,
    currency: Currency,
) {
    let pretty = ctx.mode.is_pretty();
    print(ctx, &kv(ctx, "ID", &id.to_string()));
    print(ctx, &kv(ctx, "Name", &single_line(transaction.name())));
    print(ctx, &kv(ctx, "Type", transaction.kind().as_str()));
    print(
        ctx,
        &kv(ctx, "Amount", &currency.render(transaction.amount())),
    );
    print(
        ctx,
        &kv(ctx, "Date", &format_datetime(&transaction.date(), pretty)),
    );
}

/// Print transactions keyed by ID, followed by the balance over those rows.
pub fn print_transaction_list(
    ctx: &UiContext,
    transactions: &BTreeMap<usize, &Transaction>,
    currency: Currency,
    quiet: bool,
) -> Result<()> {
    let pretty = ctx.mode.is_pretty();
    let columns = [
        Column::right("ID"),
        Column::new("Date"),
        Column::new("Type"),
        Column::new("Name"),
        Column::right("Amount"),
    ];
    let rows = transactions
        .iter()
        .map(|(id, transaction)| {
            let name = single_line(transaction.name());
            Ok(vec![
                id.to_string(),
                format_datetime(&transaction.date(), pretty),
                transaction.kind().as_str().to_string(),
                if pretty { truncate(&name, NAME_WIDTH) } else { name },
                amount_cell(ctx, transaction, currency)?,
            ])
        })
        .collect::<Result<Vec<Vec<String>>>>()?;

    if !rows.is_empty() {
        print(ctx, &simple_table(ctx, &columns, &rows));
    }

    if quiet {
        return Ok(());
    }
    let balance = running_balance(transactions.values().copied())?;
    if pretty {
        if rows.is_empty() {
            print(ctx, "No transactions found.");
        }
        println!();
        print(
            ctx,
            &kv(
                ctx,
                &format!("Balance ({} shown)", rows.len()),
                &balance_cell(ctx, balance, currency),
            ),
        );
    } else {
        print(ctx, &kv(ctx, "count", &rows.len().to_string()));
        print(ctx, &kv(ctx, "balance", &currency.render(balance)));
    }
    Ok(())
}

/// Print the balance of a whole ledger.
pub fn print_balance(
    ctx: &UiContext,
    name: &str,
    count: usize,
    balance: Value,
    currency: Currency,
    quiet: bool,
) {
    if quiet {
        println!("{}", currency.render(balance));
        return;
    }
    print(ctx, &kv(ctx, "Ledger", name));
    print(ctx, &kv(ctx, "Transactions", &count.to_string()));
    print(ctx, &kv(ctx, "Balance", &balance_cell(ctx, balance, currency)));
}
