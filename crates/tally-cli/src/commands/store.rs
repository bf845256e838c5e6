//! Record a new transaction.

use tally_core::{StorageEngine, Transaction};

use crate::app::AppContext;
use crate::cli::StoreArgs;
use crate::helpers::{
    parse_datetime, parse_kind, parse_name, parse_store_amount, prompt_until_valid,
};
use crate::ui::{print, receipt};

pub fn handle_store(ctx: &AppContext, args: &StoreArgs) -> anyhow::Result<()> {
    let storage = ctx.existing_storage()?;
    let currency = ctx.currency()?;
    let ui_ctx = ctx.ui_context(false, None);

    let name = prompt_until_valid("name", args.name.as_deref(), args.no_input, parse_name)?;
    let kind = prompt_until_valid("kind", args.kind.as_deref(), args.no_input, parse_kind)?;
    let amount = prompt_until_valid("amount", args.amount.as_deref(), args.no_input, |value| {
        parse_store_amount(currency, value)
    })?;

    let mut transaction = Transaction::new(name, kind, amount);
    if let Some(ref value) = args.date {
        transaction = transaction.with_date(parse_datetime(value)?);
    }

    let id = storage.store_transaction(transaction.clone())?;
    tracing::info!(
        id,
        kind = kind.as_str(),
        amount = amount.minor_units(),
        "stored transaction"
    );

    if ctx.quiet() {
        println!("{}", id);
        return Ok(());
    }
    let rendered = currency.render(amount);
    let id_text = id.to_string();
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            &format!(
                "Stored the {} transaction '{}' ({})",
                kind,
                transaction.name(),
                rendered
            ),
            &[
                ("ID", id_text.as_str()),
                ("Name", transaction.name()),
                ("Type", kind.as_str()),
                ("Amount", rendered.as_str()),
            ],
        ),
    );
    Ok(())
}
