use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::platform::detect_system_dark_mode;

/// Colour scheme of the window chrome (frames, buttons, inputs, lists).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::SystemDefault => detect_system_dark_mode(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WindowSettings {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    /// Tracing filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    #[serde(default = "default_style_lab_window")]
    pub style_lab: WindowSettings,

    #[serde(default = "default_task_manager_window")]
    pub task_manager: WindowSettings,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_style_lab_window() -> WindowSettings {
    WindowSettings {
        width: 1000,
        height: 400,
    }
}

fn default_task_manager_window() -> WindowSettings {
    WindowSettings {
        width: 450,
        height: 380,
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            log_filter: default_log_filter(),
            style_lab: default_style_lab_window(),
            task_manager: default_task_manager_window(),
        }
    }
}

impl AppSettings {
    /// Load settings from the config directory. A missing file means
    /// defaults; the file is only read, never created.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path();
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        let windows = [
            ("style_lab", self.style_lab),
            ("task_manager", self.task_manager),
        ];
        for (name, window) in windows {
            if window.width <= 0 || window.height <= 0 {
                return Err(AppError::Settings(format!(
                    "{} window size {}x{} is not positive",
                    name, window.width, window.height
                )));
            }
        }
        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("mvc-lab");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
        assert_eq!(settings.log_filter, "info");
        assert_eq!(
            settings.style_lab,
            WindowSettings {
                width: 1000,
                height: 400,
            }
        );
        assert_eq!(
            settings.task_manager,
            WindowSettings {
                width: 450,
                height: 380,
            }
        );
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"theme_mode": "Dark"}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.theme_mode, ThemeMode::Dark);
        assert_eq!(settings.log_filter, "info");
        assert_eq!(settings.task_manager.width, 450);
    }

    #[test]
    fn test_explicit_modes_ignore_system() {
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"log_filter": "mvc_lab=debug", "style_lab": {{"width": 1200, "height": 500}}}}"#
        )
        .unwrap();

        let settings = AppSettings::load_from(file.path()).unwrap();
        assert_eq!(settings.log_filter, "mvc_lab=debug");
        assert_eq!(
            settings.style_lab,
            WindowSettings {
                width: 1200,
                height: 500,
            }
        );
        assert_eq!(settings.theme_mode, ThemeMode::SystemDefault);
    }

    #[test]
    fn test_load_from_corrupt_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = AppSettings::load_from(file.path()).unwrap_err();
        assert!(matches!(err, AppError::Json(_)));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppSettings::load_from(&dir.path().join("settings.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_rejects_non_positive_window() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"task_manager": {{"width": 0, "height": 380}}}}"#).unwrap();
        let err = AppSettings::load_from(file.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Settings error: task_manager window size 0x380 is not positive"
        );
    }

    #[test]
    fn test_config_path_name() {
        let path = AppSettings::get_config_path();
        assert!(path.ends_with("mvc-lab/settings.json"));
    }
}
