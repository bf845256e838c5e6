use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use tally_core::VERSION;

/// Tally - a personal ledger of withdrawals and deposits
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the ledger file (default: ~/.trdb)
    #[arg(short, long, global = true, env = "TALLY_PATH")]
    pub ledger: Option<String>,

    /// Display currency (eur, usd, gbp)
    #[arg(long, global = true, env = "TALLY_CURRENCY")]
    pub currency: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Name of the new ledger
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Overwrite an existing ledger without asking
    #[arg(long)]
    pub force: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `store` command
#[derive(Args)]
pub struct StoreArgs {
    /// Transaction name
    #[arg(long)]
    pub name: Option<String>,

    /// Transaction kind (wd / dp)
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Amount (e.g. 12.50)
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,

    /// Set custom date/time (ISO-8601 or YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Only transactions with exactly this name
    #[arg(long)]
    pub name: Option<String>,

    /// Only this kind (wd / dp)
    #[arg(short, long)]
    pub kind: Option<String>,

    /// Minimum amount (inclusive)
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Maximum amount (inclusive)
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<String>,

    /// Only the most recent N transactions
    #[arg(long, value_name = "N")]
    pub last: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (table, plain)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Transaction ID (position shown by `tally list`)
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: i64,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Transaction ID (position shown by `tally list`)
    #[arg(value_name = "ID", allow_negative_numbers = true)]
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `balance` command
#[derive(Args)]
pub struct BalanceArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new ledger
    Init(InitArgs),

    /// Store a new transaction
    #[command(visible_alias = "add")]
    Store(StoreArgs),

    /// List transactions
    List(ListArgs),

    /// Show a single transaction by ID
    Show(ShowArgs),

    /// Delete a transaction by ID (later IDs shift down by one)
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),

    /// Show the running balance of the whole ledger
    Balance(BalanceArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
