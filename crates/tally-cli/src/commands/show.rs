use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::helpers::parse_id;
use crate::output::{print_transaction, transaction_json};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let currency = ctx.currency()?;
    let (_storage, ledger) = ctx.open_ledger()?;

    let id = parse_id(args.id, ledger.size())?;
    let transaction = ledger.read(id)?;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&transaction_json(id, transaction, currency))?;
        println!("{}", output);
    } else {
        print_transaction(&ui_ctx, id, transaction, currency);
    }
    Ok(())
}
