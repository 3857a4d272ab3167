//! Configuration management for Lemoo.
//!
//! Parses `lemoo.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! `navigation.file` supports environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "lemoo.toml";

/// Default navigation file, relative to the probed base directories.
pub const DEFAULT_NAVIGATION_FILE: &str = "Config/NavigationConfig.xml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override navigation file path.
    pub navigation_file: Option<PathBuf>,
    /// Override page instance caching.
    pub cache_instances: Option<bool>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Navigation tree configuration.
    pub navigation: NavigationConfig,
    /// Page factory configuration.
    pub pages: PagesConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Navigation tree configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Navigation file path.
    ///
    /// Relative paths are probed against the working directory, the binary's
    /// directory and their ancestors. Absolute paths are used as-is.
    pub file: PathBuf,
    /// Derive the tree from registered pages when the file is missing or empty.
    pub derive_when_missing: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_NAVIGATION_FILE),
            derive_when_missing: true,
        }
    }
}

/// Page factory configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    /// Reuse page instances across navigations.
    pub cache_instances: bool,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            cache_instances: true,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`navigation.file`").
        field: String,
        /// Error message (e.g., "${`LEMOO_HOME`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `lemoo.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(file) = &settings.navigation_file {
            self.navigation.file.clone_from(file);
        }
        if let Some(cache_instances) = settings.cache_instances {
            self.pages.cache_instances = cache_instances;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.navigation.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "navigation.file cannot be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let Some(raw) = self.navigation.file.to_str() else {
            return Ok(());
        };
        self.navigation.file = PathBuf::from(expand::expand_env(raw, "navigation.file")?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.navigation.file,
            PathBuf::from("Config/NavigationConfig.xml")
        );
        assert!(config.navigation.derive_when_missing);
        assert!(config.pages.cache_instances);
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(
            config.navigation.file,
            PathBuf::from(DEFAULT_NAVIGATION_FILE)
        );
        assert!(config.pages.cache_instances);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[navigation]
file = "settings/nav.xml"
derive_when_missing = false

[pages]
cache_instances = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.navigation.file, PathBuf::from("settings/nav.xml"));
        assert!(!config.navigation.derive_when_missing);
        assert!(!config.pages.cache_instances);
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default();
        let overrides = CliSettings {
            navigation_file: Some(PathBuf::from("/custom/nav.xml")),
            cache_instances: Some(false),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.navigation.file, PathBuf::from("/custom/nav.xml"));
        assert!(!config.pages.cache_instances);
        assert!(config.navigation.derive_when_missing); // Unchanged
    }

    #[test]
    fn test_apply_empty_cli_settings_keeps_values() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings::default());
        assert_eq!(
            config.navigation.file,
            PathBuf::from(DEFAULT_NAVIGATION_FILE)
        );
        assert!(config.pages.cache_instances);
    }

    #[test]
    fn test_validate_rejects_empty_navigation_file() {
        let mut config = Config::default();
        config.navigation.file = PathBuf::new();

        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert!(err.to_string().contains("navigation.file"));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let result = Config::load(Some(Path::new("/nonexistent/lemoo.toml")), None);
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_explicit_file_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lemoo.toml");
        std::fs::write(
            &path,
            "[navigation]\nfile = \"${LEMOO_TEST_SURELY_UNSET:-nav}/tree.xml\"\n",
        )
        .unwrap();

        let overrides = CliSettings {
            cache_instances: Some(false),
            ..CliSettings::default()
        };
        let config = Config::load(Some(&path), Some(&overrides)).unwrap();

        assert_eq!(config.navigation.file, PathBuf::from("nav/tree.xml"));
        assert!(!config.pages.cache_instances);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lemoo.toml");
        std::fs::write(&path, "[navigation\nfile = 1").unwrap();

        let result = Config::load(Some(&path), None);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
