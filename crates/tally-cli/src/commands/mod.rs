//! Command handlers, one module per subcommand.

mod balance;
mod delete;
mod init;
mod list;
mod misc;
mod show;
mod store;

pub use balance::handle_balance;
pub use delete::handle_delete;
pub use init::handle_init;
pub use list::handle_list;
pub use misc::handle_completions;
pub use show::handle_show;
pub use store::handle_store;
