//! Interactive calculator session
//!
//! The terminal counterpart of the desktop window: enter weight and
//! height, switch units, watch the gauge, copy the result.

pub mod commands;
pub mod display;
pub mod input;
pub mod session;

use anyhow::Result;
use std::path::PathBuf;

use crate::bmi::UnitSystem;
use crate::repl::commands::{Command, CommandHandler};
pub use crate::repl::display::DisplayManager;
use crate::repl::input::{InputHandler, ReadOutcome};
pub use crate::repl::session::{CalculationRecord, SessionManager};

/// Configuration for the interactive session
#[derive(Debug, Clone, Default)]
pub struct ReplConfig {
    /// Starting unit system
    pub unit: UnitSystem,
    /// Preferences file updated on unit changes
    pub prefs_path: Option<PathBuf>,
    /// Line-editor history file
    pub history_file: Option<PathBuf>,
}

/// REPL session coordinator
pub struct ReplSession {
    input_handler: InputHandler,
    command_handler: CommandHandler,
    session_manager: SessionManager,
    display_manager: DisplayManager,
}

impl ReplSession {
    pub fn new(config: ReplConfig, display_manager: DisplayManager) -> Result<Self> {
        let input_handler = match config.history_file {
            Some(path) => InputHandler::with_history(config.unit, path)?,
            None => InputHandler::new(config.unit)?,
        };

        let session_manager = match config.prefs_path {
            Some(path) => SessionManager::with_preferences(config.unit, path),
            None => SessionManager::new(config.unit),
        };

        Ok(ReplSession {
            input_handler,
            command_handler: CommandHandler::new(),
            session_manager,
            display_manager,
        })
    }

    /// Show welcome banner
    pub fn show_welcome(&self, version: &str) {
        self.display_manager.show_banner(version, self.session_manager.unit());
    }

    /// Handle one line of input
    ///
    /// Returns true if session should continue, false to exit
    pub fn handle_input(&mut self, input: &str) -> Result<bool> {
        if input.trim().is_empty() {
            return Ok(true);
        }

        let command = self.command_handler.parse(input);
        let is_unit_change = matches!(command, Command::Unit { .. });

        let keep_going = self.command_handler.execute(
            command,
            &mut self.session_manager,
            &self.display_manager,
        )?;

        if is_unit_change {
            self.input_handler.set_unit(self.session_manager.unit());
        }

        Ok(keep_going)
    }

    /// Read-eval-print until exit or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.input_handler.read_line()? {
                ReadOutcome::Line(input) => {
                    if !self.handle_input(&input)? {
                        break;
                    }
                }
                ReadOutcome::Interrupted => {
                    self.display_manager.show_info("Use /exit to quit");
                }
                ReadOutcome::Eof => break,
            }
        }

        self.save()
    }

    /// Save line-editor history
    pub fn save(&mut self) -> Result<()> {
        self.input_handler.save_history()
    }

    pub fn session(&self) -> &SessionManager {
        &self.session_manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;
    use tempfile::TempDir;

    fn quiet_session(config: ReplConfig) -> ReplSession {
        ReplSession::new(config, DisplayManager::quiet()).unwrap()
    }

    #[test]
    fn test_handle_calculation() {
        let mut session = quiet_session(ReplConfig::default());
        assert!(session.handle_input("70 175").unwrap());
        assert_eq!(session.session().last_result().unwrap().value, 22.9);
    }

    #[test]
    fn test_handle_exit_command() {
        let mut session = quiet_session(ReplConfig::default());
        assert!(!session.handle_input("/exit").unwrap());
    }

    #[test]
    fn test_handle_empty_input() {
        let mut session = quiet_session(ReplConfig::default());
        assert!(session.handle_input("").unwrap());
        assert!(session.handle_input("   ").unwrap());
        assert_eq!(session.session().history_len(), 0);
    }

    #[test]
    fn test_unit_change_updates_prompt_and_preferences() {
        let temp_dir = TempDir::new().unwrap();
        let prefs_path = temp_dir.path().join("config.json");
        let mut session = quiet_session(ReplConfig {
            unit: UnitSystem::Metric,
            prefs_path: Some(prefs_path.clone()),
            history_file: None,
        });

        session.handle_input("/unit").unwrap();
        assert_eq!(session.input_handler.prompt(), "bmi [lbs/in]> ");
        assert_eq!(Preferences::load(&prefs_path).unit, UnitSystem::Imperial);
    }

    #[test]
    fn test_save_with_history_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = quiet_session(ReplConfig {
            history_file: Some(temp_dir.path().join("history")),
            ..ReplConfig::default()
        });
        assert!(session.save().is_ok());
    }
}
