//! Subcommand implementations

mod filter;
mod parse;
mod pick;

pub use filter::cmd_filter;
pub use parse::cmd_parse;
pub use pick::{cmd_pick, PickOptions};
