//! Application settings management

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Application theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme used at startup
    pub theme: Theme,
    /// Catalog file to use instead of the bundled one
    pub catalog_path: Option<PathBuf>,
    /// Enable debug logging
    pub debug_logging: bool,
    /// Maximum typeahead suggestions shown under the search box
    pub max_suggestions: usize,
    /// Initial window size
    pub window_size: Option<(u32, u32)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            catalog_path: None,
            debug_logging: false,
            max_suggestions: 8,
            window_size: None,
        }
    }
}

impl Settings {
    /// Directory holding the settings file
    pub fn get_config_directory() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("PVEPlanner")
    }

    pub fn get_settings_path() -> PathBuf {
        Self::get_config_directory().join("settings.json")
    }

    /// Load settings from the config directory, defaulting when the file is absent
    pub fn load() -> Result<Self> {
        let path = Self::get_settings_path();
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(&path)
            .context(format!("Failed to read settings at {:?}", path))?;
        let settings = Self::from_json(&json)
            .context(format!("Failed to parse settings at {:?}", path))?;
        info!("Settings loaded from {:?}", path);
        Ok(settings)
    }

    /// Parse settings JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.validate();
        Ok(settings)
    }

    /// Validate settings and fix any invalid values
    pub fn validate(&mut self) {
        self.max_suggestions = self.max_suggestions.clamp(1, 50);
        if let Some((w, h)) = self.window_size {
            self.window_size = Some((w.max(640), h.max(480)));
        }
        if self
            .catalog_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            self.catalog_path = None;
        }
    }

    /// Default tracing filter directive
    pub fn log_filter(&self) -> &'static str {
        if self.debug_logging {
            "pve_planner=debug,eframe=warn,egui=warn,wgpu=error"
        } else {
            "pve_planner=info,eframe=warn,egui=warn,wgpu=error"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"theme":"Dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.max_suggestions, 8);
        assert!(settings.catalog_path.is_none());
    }

    #[test]
    fn test_validate_fixes_values() {
        let settings = Settings::from_json(
            r#"{"max_suggestions":0,"catalog_path":"","window_size":[100,100]}"#,
        )
        .unwrap();
        assert_eq!(settings.max_suggestions, 1);
        assert!(settings.catalog_path.is_none());
        assert_eq!(settings.window_size, Some((640, 480)));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{theme").is_err());
    }

    #[test]
    fn test_theme_toggle_and_filter() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().label(), "Light");
        let mut settings = Settings::default();
        assert!(settings.log_filter().starts_with("pve_planner=info"));
        settings.debug_logging = true;
        assert!(settings.log_filter().starts_with("pve_planner=debug"));
    }
}
