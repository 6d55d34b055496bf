//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `geo_locator` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All lookup logic is implemented in the library crate.

use std::path::Path;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use log::warn;

use geo_locator::config::{
    Cli, Command, ResultActions, SettingsCommand, WifiCommand, LEGAL_NOTICE,
};
use geo_locator::initialization::init_logger_with;
use geo_locator::{LookupError, LookupOutcome, Session, SessionEvent, SignalBar};

/// Width of the longest bar in `wifi analyze`.
const CHART_WIDTH: usize = 40;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // MAPBOX_ACCESS_TOKEN may live in a .env file, either in the current
    // directory or next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();
    let config = cli.to_config();

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let mut session = Session::new(config).context("Failed to initialize session")?;
    session.subscribe(Arc::new(print_event));

    if matches!(cli.command, Command::Locate { .. } | Command::Whoami { .. }) {
        eprintln!("{}", LEGAL_NOTICE.yellow());
    }

    let result = match cli.command {
        Command::Locate { target, actions } => {
            let outcome = session.locate(&target).await;
            handle_lookup(&session, outcome, &actions)
        }
        Command::Whoami { actions } => {
            let outcome = session.locate_current().await;
            handle_lookup(&session, outcome, &actions)
        }
        Command::Wifi { command } => run_wifi(&session, command),
        Command::Settings { command } => run_settings(&mut session, command),
    };

    if let Err(e) = result {
        eprintln!("{} {e:#}", "geo_locator error:".red().bold());
        process::exit(1);
    }
    Ok(())
}

/// Prints session notifications the user should see.
fn print_event(event: &SessionEvent) {
    match event {
        SessionEvent::ReportSaved(path) => println!("Report saved to {}", path.display()),
        SessionEvent::ReportFailed(reason) => {
            eprintln!("{} {reason}", "Report not saved:".yellow())
        }
        SessionEvent::MapRendered(path) => println!("Map written to {}", path.display()),
        SessionEvent::SettingsSaved(path) => println!("Settings saved to {}", path.display()),
        _ => {}
    }
}

fn handle_lookup(
    session: &Session,
    outcome: Result<LookupOutcome, LookupError>,
    actions: &ResultActions,
) -> Result<()> {
    let outcome = outcome?;
    println!("{}", outcome.summary.trim_end());

    // Auto-save already reported through the listener
    let auto_saved = matches!(outcome.auto_report, Some(Ok(_)));
    if actions.report && !auto_saved {
        session.save_report()?;
    }

    if actions.map || actions.open {
        let path = session.show_map()?;
        if actions.open {
            open_in_browser(&path);
        }
    }

    if actions.export_image {
        match session.export_map_image() {
            Err(LookupError::CapabilityUnavailableError(reason)) => {
                eprintln!("{} {reason}", "Export skipped:".yellow());
            }
            Err(e) => return Err(e.into()),
            Ok(path) => println!("Image written to {}", path.display()),
        }
    }
    Ok(())
}

fn run_wifi(session: &Session, command: WifiCommand) -> Result<()> {
    match command {
        WifiCommand::Scan => {
            let networks = session.scan_wifi()?;
            if networks.is_empty() {
                println!("No wireless networks found");
                return Ok(());
            }
            println!(
                "{:<32} {:<17} {:>7} {:>7}",
                "SSID".bold(),
                "BSSID".bold(),
                "dBm".bold(),
                "Channel".bold()
            );
            for network in &networks {
                println!(
                    "{:<32} {:<17} {:>7} {:>7}",
                    network.display_name(),
                    network.bssid,
                    network.signal,
                    network.channel
                );
            }
        }
        WifiCommand::Analyze => {
            let series = session.analyze_signals()?;
            if series.is_empty() {
                println!("No wireless networks found");
                return Ok(());
            }
            println!("{}", "Signal strength (dBm)".bold());
            let width = label_width(&series);
            for bar in &series {
                println!(
                    "{:<width$} {} {}",
                    bar.label,
                    chart_bar(bar),
                    bar.value
                );
            }
        }
    }
    Ok(())
}

/// Widest label, in characters.
fn label_width(series: &[SignalBar]) -> usize {
    series
        .iter()
        .map(|bar| bar.label.chars().count())
        .max()
        .unwrap_or(0)
}

/// Number of `#` for a signal, scaled from -100 dBm (empty) to 0 dBm (full width).
fn bar_length(value: i32) -> usize {
    let strength = value.saturating_add(100).clamp(0, 100) as usize;
    strength * CHART_WIDTH / 100
}

fn chart_bar(bar: &SignalBar) -> ColoredString {
    let filled = "#".repeat(bar_length(bar.value));
    match bar.value {
        v if v >= -60 => filled.green(),
        v if v >= -75 => filled.yellow(),
        _ => filled.red(),
    }
}

fn run_settings(session: &mut Session, command: SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => {
            let settings = session.settings();
            println!("privacy_level: {}", settings.privacy_level);
            println!("map_provider: {}", settings.map_provider);
            println!("save_reports: {}", settings.save_reports);
            println!("report_folder: {}", settings.report_folder.display());
        }
        SettingsCommand::Set(update) => {
            if update.is_empty() {
                anyhow::bail!("nothing to change; pass at least one setting (see --help)");
            }
            session.update_settings(|settings| update.apply(settings));
            session.save_settings()?;
        }
    }
    Ok(())
}

/// Opens `path` with the platform's default handler. Failures are only logged.
fn open_in_browser(path: &Path) {
    let mut command = if cfg!(target_os = "windows") {
        let mut c = process::Command::new("cmd");
        c.args(["/C", "start", ""]);
        c
    } else if cfg!(target_os = "macos") {
        process::Command::new("open")
    } else {
        process::Command::new("xdg-open")
    };

    match command.arg(path).status() {
        Ok(status) if status.success() => {}
        Ok(status) => warn!("Could not open {}: opener exited with {status}", path.display()),
        Err(e) => warn!("Could not open {}: {e}", path.display()),
    }
}
