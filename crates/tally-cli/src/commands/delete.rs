//! Delete a transaction by its positional ID.

use tally_core::{LedgerError, StorageEngine};

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::{confirm, interactive, parse_id};
use crate::ui::{badge, hint, print, receipt, Badge};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let currency = ctx.currency()?;
    let (storage, ledger) = ctx.open_ledger()?;
    let ui_ctx = ctx.ui_context(false, None);

    let id = parse_id(args.id, ledger.size())?;
    let preview = ledger.read(id)?;

    if !args.yes {
        if !interactive(args.no_input) {
            return Err(CliError::invalid_input_with_hint(
                "Refusing to delete without confirmation",
                "Hint: Pass --yes to delete non-interactively.",
            )
            .into());
        }
        let question = format!(
            "Delete transaction {} '{}' ({})?",
            id,
            preview.name(),
            currency.render(preview.amount())
        );
        if !confirm(&question)? {
            if !ctx.quiet() {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled"));
            }
            return Ok(());
        }
    }

    let expected = preview.clone();
    let removed = storage.update(|current| {
        if current.read(id)? != &expected {
            return Err(LedgerError::InvalidInput(format!(
                "Transaction {} changed while waiting for confirmation; nothing was deleted",
                id
            )));
        }
        current.delete(id)
    })?;
    tracing::info!(id, name = removed.name(), "deleted transaction");

    if !ctx.quiet() {
        let amount = currency.render(removed.amount());
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                &format!("Deleted transaction {}", id),
                &[("Name", removed.name()), ("Amount", amount.as_str())],
            ),
        );
        print(
            &ui_ctx,
            &hint(&ui_ctx, "IDs after the deleted one have shifted down by one."),
        );
    }
    Ok(())
}
