//! Create a new, empty ledger.

use tally_core::{Ledger, StorageEngine};

use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::errors::CliError;
use crate::helpers::{confirm, interactive, parse_name, prompt_until_valid};
use crate::ui::{badge, hint, print, receipt, Badge};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let storage = ctx.storage()?;
    let ui_ctx = ctx.ui_context(false, None);

    let overwrite = storage.exists();
    if overwrite && !args.force {
        if !interactive(args.no_input) {
            return Err(CliError::invalid_input_with_hint(
                format!("A ledger already exists at {}", storage.path().display()),
                "Hint: Use `tally init --force` to replace it.",
            )
            .into());
        }
        let question = format!(
            "A ledger already exists at {}. Replace it?",
            storage.path().display()
        );
        if !confirm(&question)? {
            tracing::info!(path = %storage.path().display(), "init aborted by user");
            if !ctx.quiet() {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Action aborted."));
            }
            return Ok(());
        }
    }

    let name = prompt_until_valid("name", args.name.as_deref(), args.no_input, parse_name)?;
    storage.create(&Ledger::new(name.as_str()), overwrite)?;
    tracing::info!(
        path = %storage.path().display(),
        name = name.as_str(),
        replaced = overwrite,
        "created ledger"
    );

    if !ctx.quiet() {
        let path = storage.path().display().to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                &format!("Created the ledger '{}'", name),
                &[("Name", name.as_str()), ("Path", path.as_str())],
            ),
        );
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &hint(&ui_ctx, "tally store"));
        }
    }
    Ok(())
}
