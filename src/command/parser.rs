//! Parse player input into commands
//!
//! Input looks like `!l "bore rock" short`: an optional `!` prefix, a
//! case-insensitive command name or alias, then arguments. Double quotes
//! group multi-word arguments.

use crate::core::error::{LoadoutError, Result};
use crate::present::PresentationMode;

/// A recognized player command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello`, `hi`, `servus`
    Hello,
    /// `help`, `h`
    Help,
    /// `loadout <planet> [short]`, `l <planet> [short]`
    Loadout {
        planet: String,
        mode: PresentationMode,
    },
}

/// Parse one line of input
pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim();
    let input = input.strip_prefix('!').unwrap_or(input);
    let mut args = tokenize(input).into_iter();

    let Some(name) = args.next() else {
        return Err(LoadoutError::UnknownCommand(String::new()));
    };

    match name.to_lowercase().as_str() {
        "hello" | "hi" | "servus" => Ok(Command::Hello),
        "help" | "h" => Ok(Command::Help),
        "loadout" | "l" => {
            let planet = args
                .next()
                .filter(|p| !p.trim().is_empty())
                .ok_or(LoadoutError::MissingArgument("planet name"))?;
            let mode = args
                .next()
                .map(|flag| PresentationMode::from_flag(&flag))
                .unwrap_or_default();
            Ok(Command::Loadout { planet, mode })
        }
        _ => Err(LoadoutError::UnknownCommand(name)),
    }
}

/// Split on whitespace, keeping double-quoted runs together
fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() || quoted {
                    tokens.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() || quoted {
        tokens.push(current);
    }

    tokens
}
