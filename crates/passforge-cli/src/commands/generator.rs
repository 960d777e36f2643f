//! Password/passphrase generation commands.
//!
//! Turns a front-end request into core calls: overrides are merged onto the
//! stored settings, range-checked, generated, then rated. Generated values are
//! never logged.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroize;

use passforge_core::{
    classify_passphrase_strength, classify_password_strength, generate_passphrase,
    generate_password, GenerationError, Settings, SettingsError, StrengthRating,
};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Which generation mode the front end requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Character-based random password.
    Password,
    /// Word-based passphrase.
    Passphrase,
}

/// Front-end request. `None` fields fall back to the stored settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GenerateRequest {
    pub mode: GenerationMode,

    // ── Password options ──
    pub length: Option<usize>,
    pub uppercase: Option<bool>,
    pub lowercase: Option<bool>,
    pub digits: Option<bool>,
    pub symbols: Option<bool>,

    // ── Passphrase options ──
    pub word_count: Option<usize>,
}

impl GenerateRequest {
    /// A request that uses the stored settings unchanged.
    #[must_use]
    pub const fn with_mode(mode: GenerationMode) -> Self {
        Self {
            mode,
            length: None,
            uppercase: None,
            lowercase: None,
            digits: None,
            symbols: None,
            word_count: None,
        }
    }

    /// `base` with this request's overrides applied.
    #[must_use]
    pub fn merge_into(&self, base: &Settings) -> Settings {
        Settings {
            password_length: self.length.unwrap_or(base.password_length),
            use_uppercase: self.uppercase.unwrap_or(base.use_uppercase),
            use_lowercase: self.lowercase.unwrap_or(base.use_lowercase),
            use_digits: self.digits.unwrap_or(base.use_digits),
            use_symbols: self.symbols.unwrap_or(base.use_symbols),
            num_passphrase_words: self.word_count.unwrap_or(base.num_passphrase_words),
        }
    }
}

/// Result DTO: the generated value and its rating.
///
/// `Debug` masks the value and the value is zeroized on drop.
#[derive(Serialize)]
pub struct GenerateResult {
    /// The generated password or passphrase.
    pub value: String,
    pub strength: StrengthRating,
    pub tier: Option<u8>,
    pub color: &'static str,
}

impl GenerateResult {
    fn new(value: String, strength: StrengthRating) -> Self {
        Self {
            value,
            strength,
            tier: strength.severity_tier(),
            color: strength.color(),
        }
    }
}

impl std::fmt::Debug for GenerateResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerateResult")
            .field("value", &"***")
            .field("strength", &self.strength)
            .field("tier", &self.tier)
            .finish()
    }
}

impl Drop for GenerateResult {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

/// A successful generation plus the settings that produced it, so the caller
/// can persist them.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub result: GenerateResult,
    pub settings: Settings,
}

/// Why a generation request failed.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The merged settings are out of the accepted ranges.
    #[error(transparent)]
    InvalidSettings(#[from] SettingsError),

    /// The engine refused the request.
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Generate a password or passphrase for `request` against `state`.
///
/// # Errors
///
/// - [`CommandError::InvalidSettings`] if the merged settings fail validation
/// - [`CommandError::Generation`] if the engine rejects the request (for a
///   passphrase, typically because no word list was loaded)
pub fn generate(request: &GenerateRequest, state: &AppState) -> Result<GenerateOutcome, CommandError> {
    let settings = request.merge_into(&state.settings);

    let result = match request.mode {
        GenerationMode::Password => {
            settings.validate_password()?;
            let value = generate_password(settings.password_length, &settings.categories())?;
            let strength = classify_password_strength(&value);
            GenerateResult::new(value, strength)
        }
        GenerationMode::Passphrase => {
            settings.validate_passphrase()?;
            let value = generate_passphrase(settings.num_passphrase_words, &state.words)?;
            let strength = classify_passphrase_strength(settings.num_passphrase_words);
            GenerateResult::new(value, strength)
        }
    };

    tracing::debug!(mode = ?request.mode, strength = %result.strength, "generated value");

    Ok(GenerateOutcome { result, settings })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
