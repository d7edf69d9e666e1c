//! Command handler for the interactive calculator
//!
//! Plain input is a calculation (`<weight> <height>`); input starting
//! with `/` is a built-in command.

use anyhow::Result;

use crate::bmi::UnitSystem;
use crate::clipboard::copy_to_clipboard;
use crate::repl::display::DisplayManager;
use crate::repl::session::SessionManager;

/// Default number of history entries shown
const DEFAULT_HISTORY_LIMIT: usize = 10;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Calculate { weight: String, height: String },
    Help,
    Unit { unit: Option<UnitSystem> },
    Copy,
    History { limit: Option<usize> },
    Clear,
    Exit,
    Unknown { input: String },
}

/// Command handler for parsing and executing REPL input
pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        CommandHandler
    }

    /// Parse input into a command
    pub fn parse(&self, input: &str) -> Command {
        let trimmed = input.trim();

        if !is_command(trimmed) {
            return parse_calculation(trimmed);
        }

        let parts: Vec<&str> = trimmed[1..].split_whitespace().collect();
        let Some(name) = parts.first() else {
            return Command::Unknown { input: input.to_string() };
        };

        match name.to_lowercase().as_str() {
            "help" | "h" => Command::Help,
            "exit" | "quit" | "q" => Command::Exit,
            "unit" | "units" | "u" => match parts.get(1) {
                None => Command::Unit { unit: None },
                Some(text) => match text.parse() {
                    Ok(unit) => Command::Unit { unit: Some(unit) },
                    Err(_) => Command::Unknown { input: input.to_string() },
                },
            },
            "copy" | "c" => Command::Copy,
            "history" => match parts.get(1) {
                None => Command::History { limit: None },
                Some(text) => match text.parse() {
                    Ok(limit) => Command::History { limit: Some(limit) },
                    Err(_) => Command::Unknown { input: input.to_string() },
                },
            },
            "clear" | "cls" => Command::Clear,
            _ => Command::Unknown { input: input.to_string() },
        }
    }

    /// Execute a command
    ///
    /// Returns true if the session should continue, false to exit
    pub fn execute(
        &self,
        command: Command,
        session: &mut SessionManager,
        display: &DisplayManager,
    ) -> Result<bool> {
        match command {
            Command::Calculate { weight, height } => {
                match session.calculate(&weight, &height) {
                    Ok(calc) => {
                        display.animate_gauge(&calc.animation);
                        display.show_result(&calc.result);
                    }
                    Err(err) => {
                        display.show_debug(&err.to_string());
                        display.show_error(err.user_message());
                    }
                }
                Ok(true)
            }
            Command::Help => {
                display.show_help();
                Ok(true)
            }
            Command::Exit => {
                display.show_goodbye();
                Ok(false)
            }
            Command::Unit { unit } => {
                let change = match unit {
                    Some(unit) => session.set_unit(unit),
                    None => session.toggle_unit(),
                };

                display.show_units(change.unit);
                if let Some(err) = &change.save_error {
                    display.show_warning(&format!("Unit not saved: {}", err));
                }
                if let Some(calc) = change.recalculated {
                    display.animate_gauge(&calc.animation);
                    display.show_result(&calc.result);
                }
                Ok(true)
            }
            Command::Copy => {
                match session.summary() {
                    None => display.show_warning("Nothing to copy yet. Enter weight and height first."),
                    Some(text) => match copy_to_clipboard(&text) {
                        Ok(()) => display.show_success("Copied!"),
                        Err(err) => {
                            display.show_debug(&err.to_string());
                            display.show_error(err.user_message());
                        }
                    },
                }
                Ok(true)
            }
            Command::History { limit } => {
                display.show_history(&session.get_history(limit.unwrap_or(DEFAULT_HISTORY_LIMIT)));
                Ok(true)
            }
            Command::Clear => {
                display.clear_screen()?;
                Ok(true)
            }
            Command::Unknown { input } => {
                display.show_unknown_command(&input);
                Ok(true)
            }
        }
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if input is a built-in command
pub fn is_command(input: &str) -> bool {
    input.trim().starts_with('/')
}

/// Split `<weight> <height>` (whitespace or comma separated).
///
/// Missing fields stay empty so validation reports them.
fn parse_calculation(input: &str) -> Command {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    if parts.len() > 2 {
        return Command::Unknown { input: input.to_string() };
    }

    Command::Calculate {
        weight: parts.first().copied().unwrap_or_default().to_string(),
        height: parts.get(1).copied().unwrap_or_default().to_string(),
    }
}
