//! Widget configuration
use crate::error::{Result, WidgetError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do when the engine cannot load a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadErrorPolicy {
    /// Advance to the next track, giving up after a full cycle of failures
    SkipToNext,

    /// Stop and wait for the user
    Stop,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WidgetConfig {
    /// Track loaded on startup (wraps around like any other index)
    #[serde(default)]
    pub initial_index: i64,

    /// Volume applied on startup, `[0, 1]`
    #[serde(default = "default_initial_volume")]
    pub initial_volume: f64,

    #[serde(default = "default_on_load_error")]
    pub on_load_error: LoadErrorPolicy,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            initial_index: 0,
            initial_volume: default_initial_volume(),
            on_load_error: default_on_load_error(),
        }
    }
}

impl WidgetConfig {
    /// Load configuration from an optional TOML file and the environment
    ///
    /// Environment variables use the `SOUL_WIDGET_` prefix and override the
    /// file, e.g. `SOUL_WIDGET_INITIAL_VOLUME=0.5`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(WidgetError::Config(format!(
                    "Config file not found: {:?}",
                    path
                )));
            }
            settings = settings.add_source(config::File::from(path));
        }

        settings = settings.add_source(
            config::Environment::with_prefix("SOUL_WIDGET")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings
            .build()
            .map_err(|e| WidgetError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| WidgetError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration embedded as TOML
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .map_err(|e| WidgetError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| WidgetError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.initial_volume) {
            return Err(WidgetError::Config(format!(
                "initial_volume must be within [0, 1], got {}",
                self.initial_volume
            )));
        }

        Ok(())
    }
}

// Default values
fn default_initial_volume() -> f64 {
    1.0
}

fn default_on_load_error() -> LoadErrorPolicy {
    LoadErrorPolicy::SkipToNext
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.initial_index, 0);
        assert_eq!(config.initial_volume, 1.0);
        assert_eq!(config.on_load_error, LoadErrorPolicy::SkipToNext);
    }

    #[test]
    fn parses_toml() {
        let config = WidgetConfig::from_toml_str(
            r#"
            initial_index = 2
            initial_volume = 0.25
            on_load_error = "stop"
            "#,
        )
        .unwrap();

        assert_eq!(config.initial_index, 2);
        assert_eq!(config.initial_volume, 0.25);
        assert_eq!(config.on_load_error, LoadErrorPolicy::Stop);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config = WidgetConfig::from_toml_str("initial_index = -1").unwrap();
        assert_eq!(config.initial_index, -1);
        assert_eq!(config.initial_volume, 1.0);
    }

    #[test]
    fn rejects_out_of_range_volume() {
        let err = WidgetConfig::from_toml_str("initial_volume = 1.5").unwrap_err();
        assert!(matches!(err, WidgetError::Config(_)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = WidgetConfig::load(Some(Path::new("/nonexistent/soul-widget.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    // Environment is process-wide; every env case lives in this one test
    #[test]
    fn environment_overrides_defaults_and_file() {
        std::env::set_var("SOUL_WIDGET_INITIAL_VOLUME", "0.5");
        std::env::set_var("SOUL_WIDGET_ON_LOAD_ERROR", "stop");

        let config = WidgetConfig::load(None).unwrap();
        assert_eq!(config.initial_volume, 0.5);
        assert_eq!(config.on_load_error, LoadErrorPolicy::Stop);
        assert_eq!(config.initial_index, 0);

        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("widget.toml");
        std::fs::write(&path, "initial_index = 3\ninitial_volume = 0.25\n").unwrap();

        let config = WidgetConfig::load(Some(path.as_path())).unwrap();
        assert_eq!(config.initial_index, 3);
        assert_eq!(config.initial_volume, 0.5);
        assert_eq!(config.on_load_error, LoadErrorPolicy::Stop);

        std::env::remove_var("SOUL_WIDGET_INITIAL_VOLUME");
        std::env::remove_var("SOUL_WIDGET_ON_LOAD_ERROR");
    }
}
