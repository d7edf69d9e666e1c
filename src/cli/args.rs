//! Command-line argument parsing for bmicalc
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::bmi::{cm_to_inches, inches_to_cm, kg_to_lbs, lbs_to_kg, UnitSystem};

/// bmicalc - Body Mass Index calculator with unit conversion
#[derive(Parser, Debug)]
#[command(name = "bmicalc")]
#[command(version)]
#[command(about = "Calculate BMI, convert units and track results interactively", long_about = None)]
pub struct Args {
    /// Preferences file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (print only results)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Draw the gauge without animating it
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Subcommand (interactive session when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Start the interactive calculator
    Start,

    /// Calculate BMI once
    Calc {
        /// Weight in the selected unit (kg or lbs)
        #[arg(short, long, allow_hyphen_values = true)]
        weight: String,

        /// Height in the selected unit (cm or in)
        #[arg(long, allow_hyphen_values = true)]
        height: String,

        /// Unit system for this calculation (defaults to the saved preference)
        #[arg(short, long)]
        unit: Option<UnitSystem>,

        /// Copy the result summary to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Convert a single measurement
    Convert {
        /// Conversion to apply
        #[arg(value_enum)]
        conversion: Conversion,

        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: f64,
    },

    /// Show or set the saved unit system
    Unit {
        /// New unit system (metric or imperial)
        unit: Option<UnitSystem>,
    },

    /// Display current preferences
    Config,
}

/// Unit conversions exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Conversion {
    KgToLbs,
    LbsToKg,
    CmToIn,
    InToCm,
}

impl Conversion {
    /// Apply the conversion
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Conversion::KgToLbs => kg_to_lbs(value),
            Conversion::LbsToKg => lbs_to_kg(value),
            Conversion::CmToIn => cm_to_inches(value),
            Conversion::InToCm => inches_to_cm(value),
        }
    }

    /// Source and target unit symbols
    pub fn units(&self) -> (&'static str, &'static str) {
        match self {
            Conversion::KgToLbs => ("kg", "lbs"),
            Conversion::LbsToKg => ("lbs", "kg"),
            Conversion::CmToIn => ("cm", "in"),
            Conversion::InToCm => ("in", "cm"),
        }
    }

    /// Decimal places of the result
    pub fn precision(&self) -> usize {
        match self {
            Conversion::KgToLbs | Conversion::LbsToKg => 2,
            Conversion::CmToIn | Conversion::InToCm => 1,
        }
    }

    /// One-line description, e.g. "70 kg = 154.32 lbs"
    pub fn describe(&self, value: f64) -> String {
        let (from, to) = self.units();
        format!(
            "{} {} = {:.*} {}",
            value,
            from,
            self.precision(),
            self.apply(value),
            to
        )
    }
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Whether gauge changes should animate
    pub fn animate(&self) -> bool {
        !self.no_animation && !self.quiet
    }

    /// Resolved subcommand; no subcommand means the interactive session
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}

impl Verbosity {
    /// Check if decorations (banner, gauge) should be shown
    pub fn show_decorations(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if debug lines should be shown
    pub fn show_debug(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }
}
