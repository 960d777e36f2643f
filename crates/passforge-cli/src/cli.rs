//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::generator::{GenerateRequest, GenerationMode};

#[derive(Debug, Parser)]
#[command(name = "passforge")]
#[command(version)]
#[command(about = "Generate secure passwords and passphrases")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding settings.json (defaults to the user config directory)
    #[arg(long, global = true, env = "PASSFORGE_SETTINGS_DIR")]
    pub settings_dir: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a random password
    Password(PasswordArgs),

    /// Generate a passphrase from a word list
    Passphrase(PassphraseArgs),

    /// Inspect or reset stored settings
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Args)]
pub struct PasswordArgs {
    /// Password length (8-128)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Include uppercase letters (A-Z)
    #[arg(long, conflicts_with = "no_uppercase")]
    pub uppercase: bool,
    /// Exclude uppercase letters
    #[arg(long)]
    pub no_uppercase: bool,

    /// Include lowercase letters (a-z)
    #[arg(long, conflicts_with = "no_lowercase")]
    pub lowercase: bool,
    /// Exclude lowercase letters
    #[arg(long)]
    pub no_lowercase: bool,

    /// Include digits (0-9)
    #[arg(long, conflicts_with = "no_digits")]
    pub digits: bool,
    /// Exclude digits
    #[arg(long)]
    pub no_digits: bool,

    /// Include symbols (!@#$...)
    #[arg(long, conflicts_with = "no_symbols")]
    pub symbols: bool,
    /// Exclude symbols
    #[arg(long)]
    pub no_symbols: bool,

    /// Store the options used as the new defaults
    #[arg(long)]
    pub save: bool,
}

#[derive(Debug, Args)]
pub struct PassphraseArgs {
    /// Number of words (3-10)
    #[arg(short, long)]
    pub words: Option<usize>,

    /// Word list file, one word per line
    #[arg(long, env = "PASSFORGE_WORDLIST")]
    pub wordlist: Option<PathBuf>,

    /// Store the options used as the new defaults
    #[arg(long)]
    pub save: bool,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Print the stored settings as JSON
    Show,
    /// Restore the default settings
    Reset,
}

const fn toggle(on: bool, off: bool) -> Option<bool> {
    if on {
        Some(true)
    } else if off {
        Some(false)
    } else {
        None
    }
}

impl PasswordArgs {
    #[must_use]
    pub const fn to_request(&self) -> GenerateRequest {
        GenerateRequest {
            length: self.length,
            uppercase: toggle(self.uppercase, self.no_uppercase),
            lowercase: toggle(self.lowercase, self.no_lowercase),
            digits: toggle(self.digits, self.no_digits),
            symbols: toggle(self.symbols, self.no_symbols),
            ..GenerateRequest::with_mode(GenerationMode::Password)
        }
    }
}

impl PassphraseArgs {
    #[must_use]
    pub const fn to_request(&self) -> GenerateRequest {
        GenerateRequest {
            word_count: self.words,
            ..GenerateRequest::with_mode(GenerationMode::Passphrase)
        }
    }
}
