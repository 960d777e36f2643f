//! Settings persistence: stored as plain JSON in the user's config directory.
//!
//! The core crate defines the [`Settings`] record; this module owns where it
//! lives on disk and how it is read back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use passforge_core::Settings;

const SETTINGS_FILE: &str = "settings.json";
const SETTINGS_TMP_FILE: &str = ".settings.json.tmp";

/// `{config_dir}/passforge`, or `None` when the platform has no config directory.
#[must_use]
pub fn default_settings_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("passforge"))
}

/// Load settings from `{dir}/settings.json`.
///
/// Returns [`Settings::default()`] when the file is missing or does not
/// parse (corrupt-file recovery).
#[must_use]
pub fn load_settings(dir: &Path) -> Settings {
    let path = dir.join(SETTINGS_FILE);
    let Ok(contents) = fs::read_to_string(&path) else {
        tracing::debug!(path = %path.display(), "no stored settings, using defaults");
        return Settings::default();
    };
    serde_json::from_str(&contents).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), "stored settings unreadable, using defaults: {e}");
        Settings::default()
    })
}

/// Persist settings to `{dir}/settings.json`, creating `dir` if needed.
///
/// Writes to a temporary file first and renames it into place so a crash
/// never leaves a half-written file.
///
/// # Errors
///
/// Returns an `io::Error` if the directory cannot be created or the file
/// system rejects the write/rename.
pub fn save_settings(settings: &Settings, dir: &Path) -> io::Result<()> {
    fs::create_dir_all(dir)?;

    let path = dir.join(SETTINGS_FILE);
    let tmp = dir.join(SETTINGS_TMP_FILE);

    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(&tmp, &json)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
    }

    fs::rename(&tmp, &path)?;
    tracing::debug!(path = %path.display(), "settings saved");

    Ok(())
}
