//! Display manager for terminal output
//!
//! Result cards, the animated gauge, history tables and status lines.
//! The gauge animates in place through an indicatif bar when stdout is a
//! terminal; otherwise the final frame is printed once.

use colored::*;
use crossterm::{
    cursor,
    execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, IsTerminal};
use std::thread;

use crate::bmi::{ClassificationResult, UnitSystem};
use crate::cli::Verbosity;
use crate::gauge::{render_bar, GaugeAnimation, MAX_GAUGE_VALUE};
use crate::repl::session::CalculationRecord;

/// Frames per gauge animation
const GAUGE_FRAMES: usize = 16;

/// Gauge width in cells
const GAUGE_WIDTH: usize = 40;

/// Display manager for the calculator UI
pub struct DisplayManager {
    verbosity: Verbosity,
    animate: bool,
}

impl DisplayManager {
    pub fn new(verbosity: Verbosity, animate: bool) -> Self {
        DisplayManager { verbosity, animate }
    }

    /// Results only, no decorations or animation
    pub fn quiet() -> Self {
        Self::new(Verbosity::Quiet, false)
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str, unit: UnitSystem) {
        if !self.verbosity.show_decorations() {
            return;
        }

        let width = 60;
        println!("\n{}", "=".repeat(width).cyan());
        println!("{}", format!("  BMI Calculator {}", version).bold().cyan());
        println!("{}", format!("  Units: {}", unit.label()).dimmed());
        println!("{}\n", "=".repeat(width).cyan());
        println!(
            "Enter {} and {} (or {} for commands, {} to quit)\n",
            unit.weight_label().green(),
            unit.height_label().green(),
            "/help".green(),
            "/exit".green()
        );
    }

    /// Announce the active unit system and its input labels
    pub fn show_units(&self, unit: UnitSystem) {
        if !self.verbosity.show_decorations() {
            return;
        }
        println!(
            "{} {} | {} · {}",
            "Units:".cyan(),
            unit.label().bold(),
            unit.weight_label(),
            unit.height_label()
        );
    }

    /// One gauge line for `value`
    pub fn gauge_line(&self, value: f64) -> String {
        format!(
            "  0 {} {:.0}  {}",
            render_bar(value, GAUGE_WIDTH),
            MAX_GAUGE_VALUE,
            format!("{:.1}", value).bold()
        )
    }

    /// Draw the gauge moving through `animation`
    pub fn animate_gauge(&self, animation: &GaugeAnimation) {
        if !self.verbosity.show_decorations() {
            return;
        }

        if !self.animate || !io::stdout().is_terminal() {
            println!("{}", self.gauge_line(animation.to));
            return;
        }

        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
        pb.set_style(
            ProgressStyle::with_template("{msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );

        let interval = GaugeAnimation::frame_interval(GAUGE_FRAMES);
        for value in animation.frames(GAUGE_FRAMES) {
            pb.set_message(self.gauge_line(value));
            thread::sleep(interval);
        }
        pb.finish();
    }

    /// Display a classification result
    pub fn show_result(&self, result: &ClassificationResult) {
        if !self.verbosity.show_decorations() {
            println!("{}", result.summary());
            return;
        }

        let (r, g, b) = result.display_color.rgb();
        let badge = format!(" {} ", result.category.name())
            .black()
            .bold()
            .on_truecolor(r, g, b);

        println!();
        println!("  {}  {}", format!("{:.1}", result.value).bold(), badge);
        println!("  {}", result.advisory.bold());
        println!();
    }

    /// Display calculation history, newest first
    pub fn show_history(&self, records: &[&CalculationRecord]) {
        if records.is_empty() {
            self.show_warning("No calculations yet.");
            return;
        }

        println!("\n{}", format!("History (last {}):", records.len()).bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        for record in records {
            let (r, g, b) = record.result.display_color.rgb();
            let (weight_unit, height_unit) = match record.unit {
                UnitSystem::Metric => ("kg", "cm"),
                UnitSystem::Imperial => ("lbs", "in"),
            };
            println!(
                "  {} {:>6.1}  {:<12} {} {} / {} {}",
                record.timestamp.format("%H:%M:%S").to_string().dimmed(),
                record.result.value,
                record.result.category.name().truecolor(r, g, b),
                record.weight,
                weight_unit,
                record.height,
                height_unit
            );
        }
        println!();
    }

    /// Display help information
    pub fn show_help(&self) {
        println!("\n{}", "Available Commands:".bold().cyan());
        println!("{}", "=".repeat(60).cyan());

        let commands = [
            ("<weight> <height>", "Calculate BMI in the active units"),
            ("/unit [metric|imperial]", "Switch units (toggles without argument)"),
            ("/copy, /c", "Copy the last result to the clipboard"),
            ("/history [n]", "Show last n calculations (default: 10)"),
            ("/clear, /cls", "Clear screen"),
            ("/help, /h", "Show this help message"),
            ("/exit, /quit, /q", "Exit"),
        ];

        for (cmd, desc) in commands {
            println!("  {:<26} {}", cmd.green(), desc);
        }
        println!();
    }

    pub fn show_goodbye(&self) {
        if self.verbosity.show_decorations() {
            println!("{}", "Goodbye!".green());
        }
    }

    pub fn show_unknown_command(&self, input: &str) {
        println!("{}", format!("Unknown command: {}", input).red());
        println!("Type {} for available commands", "/help".cyan());
    }

    /// Display success message
    pub fn show_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        eprintln!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        if self.verbosity.show_decorations() {
            println!("{} {}", "Info:".cyan(), info);
        }
    }

    /// Display debug message (only if verbose)
    pub fn show_debug(&self, debug: &str) {
        if self.verbosity.show_debug() {
            println!("{} {}", "Debug:".dimmed(), debug.dimmed());
        }
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(Verbosity::Normal, true)
    }
}
