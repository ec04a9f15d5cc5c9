use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::cli::Cli;

/// Settings for the viewer, loadable from a JSON file. Defaults reproduce
/// the built-in demo scene setup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Initial window width in physical pixels
    pub width: u32,
    /// Initial window height in physical pixels
    pub height: u32,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Starting distance between camera and scene center
    pub camera_distance: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            fov_degrees: 75.0,
            camera_distance: 12.0,
            auto_rotate: true,
            auto_rotate_speed: 5.0,
        }
    }
}

impl AppConfig {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Settings from the command line: the config file if given, with flag
    /// overrides applied on top
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(width) = cli.width {
            config.width = width;
        }
        if let Some(height) = cli.height {
            config.height = height;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_the_demo_scene() {
        let config = AppConfig::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.fov_degrees, 75.0);
        assert_eq!(config.camera_distance, 12.0);
        assert!(config.auto_rotate);
        assert_eq!(config.auto_rotate_speed, 5.0);
    }

    #[test]
    fn partial_json_keeps_defaults_for_the_rest() {
        let config: AppConfig =
            serde_json::from_str(r#"{"width": 1280, "auto_rotate": false}"#).unwrap();
        assert_eq!(config.width, 1280);
        assert!(!config.auto_rotate);
        assert_eq!(config.height, 600);
        assert_eq!(config.fov_degrees, 75.0);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<AppConfig, _> = serde_json::from_str(r#"{"widht": 1280}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(AppConfig::load(Path::new("/nonexistent/orbit-scene.json")).is_err());
    }

    #[test]
    fn cli_flags_override_defaults() {
        let cli = Cli::parse_from(["orbit-scene", "--width", "1024", "--height", "512"]);
        let config = AppConfig::resolve(&cli).unwrap();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 512);
        // untouched fields stay at defaults
        assert_eq!(config.fov_degrees, 75.0);
    }
}
