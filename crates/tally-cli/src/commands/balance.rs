use crate::app::AppContext;
use crate::cli::BalanceArgs;
use crate::output::{balance_json, print_balance};

pub fn handle_balance(ctx: &AppContext, args: &BalanceArgs) -> anyhow::Result<()> {
    let currency = ctx.currency()?;
    let (_storage, ledger) = ctx.open_ledger()?;
    let balance = ledger.balance()?;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&balance_json(
            ledger.name(),
            ledger.size(),
            balance,
            currency,
        ))?;
        println!("{}", output);
        return Ok(());
    }

    print_balance(
        &ui_ctx,
        ledger.name(),
        ledger.size(),
        balance,
        currency,
        ctx.quiet(),
    );
    Ok(())
}
