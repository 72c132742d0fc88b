//! Persisted cosmetic preferences.

use crate::locale::Locale;
use igore_core::storage::{self, config_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "igore-calc";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcSettings {
    /// Language of the error word and the status line.
    pub locale: Locale,
    /// Show the status line under the keypad.
    pub show_status: bool,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            locale: Locale::English,
            show_status: true,
        }
    }
}

impl CalcSettings {
    pub fn default_path() -> PathBuf {
        config_dir(APP_NAME).join("settings.json")
    }

    /// Missing or unreadable files give the defaults.
    pub fn load(path: &Path) -> Self {
        storage::load_json_or_default(path)
    }

    pub fn save(&self, path: &Path) {
        if let Err(e) = storage::save_json(path, self) {
            tracing::warn!(path = %path.display(), error = %e, "failed to save settings");
        }
    }
}
