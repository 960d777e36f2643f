//! passforge front end: thin shell over `passforge-core`.
//!
//! Parses arguments, restores and persists settings, loads the word list
//! once, and renders generated values with their strength rating. All
//! generation and scoring logic lives in the core crate.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod cli;
pub mod commands;
pub mod logging;
pub mod preferences;
pub mod state;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use cli::{Cli, Command, SettingsCommand};
use commands::generator::{self, GenerateRequest, GenerateResult};
use passforge_core::Settings;
use state::AppState;

/// Execute the parsed command line.
///
/// # Errors
///
/// Returns an error if no settings directory can be determined, the request
/// fails validation or generation, or settings cannot be written.
pub fn run(cli: Cli) -> Result<()> {
    let settings_dir = cli
        .settings_dir
        .or_else(preferences::default_settings_dir)
        .context("could not determine a settings directory; pass --settings-dir")?;

    match cli.command {
        Command::Password(args) => {
            let state = AppState::load(&settings_dir, None);
            generate_and_render(&args.to_request(), &state, args.save, &settings_dir)
        }
        Command::Passphrase(args) => {
            let state = AppState::load(&settings_dir, args.wordlist.as_deref());
            generate_and_render(&args.to_request(), &state, args.save, &settings_dir)
        }
        Command::Settings(SettingsCommand::Show) => {
            let settings = preferences::load_settings(&settings_dir);
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(())
        }
        Command::Settings(SettingsCommand::Reset) => {
            preferences::save_settings(&Settings::default(), &settings_dir)
                .with_context(|| format!("failed to write settings to {}", settings_dir.display()))?;
            tracing::info!("settings reset to defaults");
            Ok(())
        }
    }
}

fn generate_and_render(
    request: &GenerateRequest,
    state: &AppState,
    save: bool,
    settings_dir: &Path,
) -> Result<()> {
    let outcome = generator::generate(request, state)?;
    render(&outcome.result)?;

    if save {
        preferences::save_settings(&outcome.settings, settings_dir)
            .with_context(|| format!("failed to write settings to {}", settings_dir.display()))?;
    }
    Ok(())
}

/// Value on stdout so it can be piped; rating on stderr.
fn render(result: &GenerateResult) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", result.value)?;
    stdout.flush()?;

    let tier = result
        .tier
        .map_or_else(|| "-".to_string(), |t| t.to_string());
    eprintln!("Strength: {} (tier {tier})", result.strength);
    Ok(())
}
