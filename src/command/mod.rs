//! Command shell
//!
//! Turns a line of player input into a reply:
//! input -> parse_command -> Command -> CommandExecutor -> Reply

pub mod executor;
pub mod parser;

pub use executor::{user_message, CommandExecutor, Reply, HELP_TEXT};
pub use parser::{parse_command, Command};
