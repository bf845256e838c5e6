use std::collections::BTreeMap;

use tally_core::{filter, latest, TransactionFilter};

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::{parse_amount, parse_kind, parse_output_format};
use crate::output::{print_transaction_list, transactions_json};
use crate::ui::{blank_line, header, print};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let currency = ctx.currency()?;
    let format = parse_output_format(args.format.as_deref())?;

    let mut query = TransactionFilter::new();
    if let Some(ref name) = args.name {
        query = query.name(name.as_str());
    }
    if let Some(ref kind) = args.kind {
        query = query.kind(parse_kind(kind)?);
    }
    if let Some(ref min) = args.min {
        query = query.min(parse_amount(currency, min)?);
    }
    if let Some(ref max) = args.max {
        query = query.max(parse_amount(currency, max)?);
    }

    let (_storage, ledger) = ctx.open_ledger()?;
    let matches = match args.last {
        Some(count) if query.is_empty() => latest(&ledger, count),
        Some(count) => {
            let matches = filter(&ledger, &query);
            let skip = matches.len().saturating_sub(count);
            matches.into_iter().skip(skip).collect::<BTreeMap<_, _>>()
        }
        None => filter(&ledger, &query),
    };
    tracing::debug!(
        filtered = !query.is_empty(),
        shown = matches.len(),
        total = ledger.size(),
        "listing transactions"
    );

    let ui_ctx = ctx.ui_context(args.json, format);
    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&transactions_json(&matches, currency))?;
        println!("{}", output);
        return Ok(());
    }

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "list", Some(ledger.name())));
        blank_line(&ui_ctx);
    }
    print_transaction_list(&ui_ctx, &matches, currency, ctx.quiet())?;
    Ok(())
}
