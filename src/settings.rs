//! UI preference persistence
//!
//! This module handles loading and saving the small set of user preferences
//! that survive between sessions. Panel open/closed flags are deliberately
//! not part of this: every launch starts with all panels collapsed.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Preferences that persist between sessions
#[derive(Serialize, Deserialize, Clone)]
pub struct Settings {
    /// Whether the announcements section is expanded
    pub show_announcements: bool,
    /// Product to scroll into view on the next launch
    pub last_product: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_announcements: true,
            last_product: None,
        }
    }
}

impl Settings {
    /// Get the path where settings are stored
    pub fn get_path() -> std::io::Result<PathBuf> {
        #[cfg(windows)]
        {
            let exe_path = std::env::current_exe()?;
            let exe_dir = exe_path.parent().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Failed to get executable directory",
                )
            })?;
            Ok(exe_dir.join("modstatus_settings.json"))
        }

        #[cfg(target_os = "macos")]
        {
            let home_dir = dirs::home_dir().ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, "Failed to get home directory")
            })?;
            let app_support = home_dir.join("Library/Application Support/modstatus");
            std::fs::create_dir_all(&app_support)?;
            Ok(app_support.join("settings.json"))
        }

        #[cfg(all(not(windows), not(target_os = "macos")))]
        {
            if let Ok(xdg_dirs) = xdg::BaseDirectories::new() {
                let config_dir = xdg_dirs.get_config_home();
                let app_dir = config_dir.join("modstatus");
                std::fs::create_dir_all(&app_dir)?;
                Ok(app_dir.join("settings.json"))
            } else {
                let home_dir = dirs::home_dir().ok_or_else(|| {
                    std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "Failed to get home directory",
                    )
                })?;
                let app_dir = home_dir.join(".modstatus");
                std::fs::create_dir_all(&app_dir)?;
                Ok(app_dir.join("settings.json"))
            }
        }
    }

    /// Load settings from disk, falling back to defaults if file doesn't exist
    pub fn load() -> Self {
        match Self::get_path() {
            Ok(path) => match std::fs::read_to_string(&path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(settings) => {
                        crate::info!("Settings loaded from {}", path.display());
                        settings
                    }
                    Err(e) => {
                        crate::warn!("Failed to parse settings file: {}. Using defaults.", e);
                        Settings::default()
                    }
                },
                Err(e) => {
                    crate::debug!("Settings file not found or unreadable: {}. Using defaults.", e);
                    Settings::default()
                }
            },
            Err(e) => {
                crate::warn!("Failed to get settings path: {}. Using defaults.", e);
                Settings::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::get_path().map_err(|e| format!("Failed to get settings path: {}", e))?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;
        std::fs::write(&path, json).map_err(|e| format!("Failed to write settings file: {}", e))?;
        crate::debug!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_start_with_announcements_visible() {
        let settings = Settings::default();
        assert!(settings.show_announcements);
        assert!(settings.last_product.is_none());
    }

    #[test]
    fn settings_round_trip_through_json() {
        let settings = Settings {
            show_announcements: false,
            last_product: Some("main_panel".to_string()),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert!(!back.show_announcements);
        assert_eq!(back.last_product.as_deref(), Some("main_panel"));
    }
}
