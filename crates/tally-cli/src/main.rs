//! Tally CLI - a personal ledger of withdrawals and deposits
//!
//! This is the command-line interface for Tally. It resolves paths and
//! settings, parses user input, and renders results; the ledger itself lives
//! in `tally-core`.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::{CommandFactory, Parser};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_balance, handle_completions, handle_delete, handle_init, handle_list, handle_show,
    handle_store,
};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(&cli) {
        tracing::debug!(error = %format!("{:#}", err), "command failed");
        std::process::exit(errors::report(&err));
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let ctx = AppContext::new(cli);
    match command {
        Commands::Init(args) => handle_init(&ctx, args),
        Commands::Store(args) => handle_store(&ctx, args),
        Commands::List(args) => handle_list(&ctx, args),
        Commands::Show(args) => handle_show(&ctx, args),
        Commands::Delete(args) => handle_delete(&ctx, args),
        Commands::Balance(args) => handle_balance(&ctx, args),
        Commands::Completions(args) => handle_completions(args.shell),
    }
}
