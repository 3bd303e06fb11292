//! App settings persistence
//!
//! Settings share the storage boundary with progress but live under their
//! own key and have their own failure posture: unreadable settings mean
//! defaults, failed writes are logged and dropped.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::Storage;

/// Storage key the settings live under.
pub const SETTINGS_KEY: &str = "@learnforkids:settings";

/// Theme preference; `System` follows the device setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// User-adjustable app settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,

    /// Background music volume, 0.0 to 1.0.
    #[serde(default = "default_music_volume")]
    pub music_volume: f32,

    /// UI language code (e.g. "en", "fr").
    #[serde(default = "default_language")]
    pub language: String,

    /// Remind the parent after a long play session.
    #[serde(default = "default_screen_time_reminder")]
    pub screen_time_reminder: bool,

    #[serde(default)]
    pub theme: ThemePreference,
}

fn default_sound_enabled() -> bool {
    true
}

fn default_music_volume() -> f32 {
    0.7
}

fn default_language() -> String {
    "en".to_string()
}

fn default_screen_time_reminder() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            sound_enabled: default_sound_enabled(),
            music_volume: default_music_volume(),
            language: default_language(),
            screen_time_reminder: default_screen_time_reminder(),
            theme: ThemePreference::default(),
        }
    }
}

/// Reads and writes [`AppSettings`] through the storage boundary.
pub struct SettingsStore {
    storage: Box<dyn Storage>,
}

impl SettingsStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Load settings, falling back to defaults on any failure.
    pub fn load(&self) -> AppSettings {
        let raw = match self.storage.get(SETTINGS_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(error = %err, "failed to read settings, using defaults");
                None
            }
        };
        match raw {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                warn!(error = %err, "corrupt settings, using defaults");
                AppSettings::default()
            }),
            None => AppSettings::default(),
        }
    }

    /// Persist settings. Failures are logged and dropped.
    pub fn save(&self, settings: &AppSettings) {
        let json = match serde_json::to_string(settings) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "failed to serialize settings");
                return;
            }
        };
        if let Err(err) = self.storage.set(SETTINGS_KEY, &json) {
            warn!(error = %err, "failed to persist settings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn missing_settings_load_as_defaults() {
        let store = SettingsStore::new(Box::new(MemoryStorage::new()));
        assert_eq!(store.load(), AppSettings::default());
    }

    #[test]
    fn save_and_reload() {
        let store = SettingsStore::new(Box::new(MemoryStorage::new()));
        let mut settings = AppSettings::default();
        settings.sound_enabled = false;
        settings.language = "fr".to_string();
        settings.theme = ThemePreference::Dark;

        store.save(&settings);
        assert_eq!(store.load(), settings);
    }

    #[test]
    fn partial_settings_fill_in_defaults() {
        let storage = MemoryStorage::new();
        storage
            .set(SETTINGS_KEY, r#"{"language":"fr"}"#)
            .unwrap();
        let store = SettingsStore::new(Box::new(storage));

        let settings = store.load();
        assert_eq!(settings.language, "fr");
        assert!(settings.sound_enabled);
        assert_eq!(settings.music_volume, 0.7);
        assert_eq!(settings.theme, ThemePreference::System);
    }
}
