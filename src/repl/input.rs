//! Input handler for the interactive calculator using rustyline
//!
//! Provides line editing with persistent history. The prompt shows the
//! active unit system.

use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

use crate::bmi::UnitSystem;

/// Prompt for a unit system, e.g. "bmi [kg/cm]> "
pub fn prompt_for(unit: UnitSystem) -> String {
    match unit {
        UnitSystem::Metric => "bmi [kg/cm]> ".to_string(),
        UnitSystem::Imperial => "bmi [lbs/in]> ".to_string(),
    }
}

/// Outcome of one read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A (possibly empty) trimmed line
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D
    Eof,
}

/// Input handler managing readline interface and command history
pub struct InputHandler {
    editor: DefaultEditor,
    history_path: Option<PathBuf>,
    prompt: String,
}

impl InputHandler {
    pub fn new(unit: UnitSystem) -> Result<Self> {
        let editor = DefaultEditor::new()?;

        Ok(InputHandler {
            editor,
            history_path: None,
            prompt: prompt_for(unit),
        })
    }

    /// Create input handler with persistent history
    pub fn with_history(unit: UnitSystem, history_file: PathBuf) -> Result<Self> {
        let mut handler = Self::new(unit)?;

        if history_file.exists() {
            let _ = handler.editor.load_history(&history_file);
        }
        handler.history_path = Some(history_file);

        Ok(handler)
    }

    /// Follow a unit change
    pub fn set_unit(&mut self, unit: UnitSystem) {
        self.prompt = prompt_for(unit);
    }

    /// Read a line of input from user
    pub fn read_line(&mut self) -> Result<ReadOutcome> {
        match self.editor.readline(&self.prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(ReadOutcome::Line(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(err) => Err(anyhow::anyhow!("Readline error: {}", err)),
        }
    }

    /// Save history to disk
    pub fn save_history(&mut self) -> Result<()> {
        if let Some(ref path) = self.history_path {
            self.editor.save_history(path)?;
        }
        Ok(())
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::History;
    use tempfile::TempDir;

    #[test]
    fn test_prompt_follows_unit() {
        let mut handler = InputHandler::new(UnitSystem::Metric).unwrap();
        assert_eq!(handler.prompt(), "bmi [kg/cm]> ");

        handler.set_unit(UnitSystem::Imperial);
        assert_eq!(handler.prompt(), "bmi [lbs/in]> ");
    }

    #[test]
    fn test_history_persistence() {
        let temp_dir = TempDir::new().unwrap();
        let history_path = temp_dir.path().join("history");

        {
            let mut handler = InputHandler::with_history(UnitSystem::Metric, history_path.clone()).unwrap();
            let _ = handler.editor.add_history_entry("70 175");
            let _ = handler.editor.add_history_entry("/unit");
            handler.save_history().unwrap();
        }

        assert!(history_path.exists());

        let handler = InputHandler::with_history(UnitSystem::Metric, history_path).unwrap();
        assert_eq!(handler.editor.history().len(), 2);
    }

    #[test]
    fn test_history_path_none() {
        let mut handler = InputHandler::new(UnitSystem::Metric).unwrap();
        assert!(handler.history_path.is_none());
        assert!(handler.save_history().is_ok());
    }
}
