//! bmicalc - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use bmicalc::{
    bmi::{BmiInput, UnitSystem},
    cli::{Args, Commands, Conversion},
    clipboard::copy_to_clipboard,
    config::Preferences,
    gauge::Gauge,
    logging,
    repl::{DisplayManager, ReplConfig, ReplSession},
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbosity());

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let prefs_path = Preferences::resolve_path(args.config.as_deref())?;
    let display = DisplayManager::new(args.verbosity(), args.animate());

    match args.command() {
        Commands::Start => run_repl(&prefs_path, display)?,
        Commands::Calc { weight, height, unit, copy } => {
            let unit = unit.unwrap_or_else(|| Preferences::load(&prefs_path).unit);
            return Ok(calculate_once(&display, &weight, &height, unit, copy));
        }
        Commands::Convert { conversion, value } => convert(&display, conversion, value),
        Commands::Unit { unit } => set_or_show_unit(&display, &prefs_path, unit)?,
        Commands::Config => show_config(&prefs_path),
    }

    Ok(ExitCode::SUCCESS)
}

fn run_repl(prefs_path: &Path, display: DisplayManager) -> Result<()> {
    let prefs = Preferences::load(prefs_path);
    let history_file = dirs::home_dir().map(|home| home.join(".bmicalc_history"));

    let config = ReplConfig {
        unit: prefs.unit,
        prefs_path: Some(prefs_path.to_path_buf()),
        history_file,
    };

    let mut repl_session = ReplSession::new(config, display).context("Failed to start interactive session")?;
    repl_session.show_welcome(VERSION);
    repl_session.run()
}

fn calculate_once(display: &DisplayManager, weight: &str, height: &str, unit: UnitSystem, copy: bool) -> ExitCode {
    let input = match BmiInput::parse(weight, height, unit) {
        Ok(input) => input,
        Err(err) => {
            display.show_debug(&err.to_string());
            display.show_error(err.user_message());
            return ExitCode::FAILURE;
        }
    };

    let result = input.classify();
    let mut gauge = Gauge::new();
    display.animate_gauge(&gauge.animate_to(result.value));
    display.show_result(&result);

    if copy {
        match copy_to_clipboard(&result.summary()) {
            Ok(()) => display.show_success("Copied!"),
            Err(err) => {
                display.show_error(err.user_message());
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

fn convert(display: &DisplayManager, conversion: Conversion, value: f64) {
    if display.verbosity().show_decorations() {
        println!("{}", conversion.describe(value));
    } else {
        println!("{:.*}", conversion.precision(), conversion.apply(value));
    }
}

fn set_or_show_unit(display: &DisplayManager, prefs_path: &Path, unit: Option<UnitSystem>) -> Result<()> {
    match unit {
        Some(unit) => {
            Preferences { unit }
                .save(prefs_path)
                .context("Failed to save unit preference")?;
            display.show_units(unit);
        }
        None => println!("{}", Preferences::load(prefs_path).unit),
    }
    Ok(())
}

fn show_config(prefs_path: &Path) {
    let status = match Preferences::try_load(prefs_path) {
        Ok(_) => "loaded".green(),
        Err(_) => "not found, using defaults".yellow(),
    };
    let prefs = Preferences::load(prefs_path);

    println!("{}", "Preferences".bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    println!("  File:  {} ({})", prefs_path.display(), status);
    println!("  Unit:  {}", prefs.unit.label().green());
}
