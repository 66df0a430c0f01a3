//! Persisted user settings
//!
//! Only the chosen photo folder and the last scan time survive a
//! restart. The gallery ordering itself is never persisted: every
//! launch reshuffles.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application settings, stored as JSON in the user's config directory:
/// - Linux: ~/.config/photo-wall/settings.json
/// - macOS: ~/Library/Application Support/photo-wall/settings.json
/// - Windows: %APPDATA%\photo-wall\settings.json
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Settings {
    /// The folder the gallery is built from
    pub photos_dir: Option<PathBuf>,
    /// When the folder was last scanned
    pub last_scan: Option<DateTime<Utc>>,
}

impl Settings {
    /// Load settings from disk, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk, creating the config directory if needed
    pub fn save(&self) -> Result<(), String> {
        let path = Self::settings_path()
            .ok_or_else(|| String::from("could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create config directory: {}", e))?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("failed to serialize settings: {}", e))?;

        fs::write(&path, json).map_err(|e| format!("failed to write settings: {}", e))
    }

    /// Where the settings file lives
    fn settings_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("photo-wall");
        path.push("settings.json");
        Some(path)
    }
}
