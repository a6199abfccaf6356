//! Configuration management for the CLI.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use woostercalc_common::Registry;
use woostercalc_hottub::{tub_catalog, HotTub, SALU_SPA};

use crate::error::{CliError, Result};

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Tub used when a command does not name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_tub: Option<String>,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// User-defined tubs, in addition to the presets
    #[serde(default)]
    pub tubs: Vec<HotTub>,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Command history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

/// The `~/.woostercalc` directory.
pub fn data_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    Ok(home.join(".woostercalc"))
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), tubs = config.tubs.len(), "loaded config");
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Presets plus configured tubs.
    pub fn tubs(&self) -> Result<Registry<HotTub>> {
        let mut catalog = tub_catalog()?;
        for tub in &self.tubs {
            catalog
                .register(tub.name().to_string(), tub.clone())
                .map_err(|e| CliError::Config(e.to_string()))?;
        }
        Ok(catalog)
    }

    /// Find a tub by name, falling back to the default tub.
    pub fn tub(&self, name: Option<&str>) -> Result<HotTub> {
        let name = name
            .or(self.default_tub.as_deref())
            .unwrap_or(SALU_SPA);
        self.tubs()?
            .get(name)
            .cloned()
            .map_err(|_| CliError::Config(format!("Unknown tub '{}'", name)))
    }

    /// Check that tub names are unique and the default tub exists.
    pub fn validate(&self) -> Result<()> {
        let tubs = self.tubs()?;
        if let Some(name) = &self.default_tub {
            if !tubs.contains(name) {
                return Err(CliError::Config(format!("Unknown default tub '{}'", name)));
            }
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: default_history_size(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.default_tub.is_none());
        assert!(config.tubs.is_empty());
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.settings.history_size, 1000);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert!(config.tubs.is_empty());
    }

    #[test]
    fn test_parse_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
default_tub = "backyard"

[settings]
color = false
format = "json"

[[tubs]]
name = "backyard"
volume = "400 gallon"

[[tubs]]
name = "cabin"
volume = 300
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert_eq!(config.settings.history_size, 1000);

        assert_eq!(config.tub(None).unwrap().name(), "backyard");
        assert_eq!(config.tub(Some("cabin")).unwrap().volume().to_string(), "300 gallon");
        assert_eq!(config.tub(Some("salu-spa")).unwrap().name(), "salu-spa");
        assert_eq!(config.tubs().unwrap().len(), 3);
    }

    #[test]
    fn test_unknown_default_tub() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default_tub = \"pond\"\n").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_invalid_tub_volume() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[[tubs]]\nname = \"odd\"\nvolume = \"3 meter\"\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_duplicate_tub_name() {
        let config = Config {
            tubs: vec![HotTub::salu_spa().unwrap()],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            default_tub: Some("garden".to_string()),
            tubs: vec![HotTub::parse("garden", "1500 L").unwrap()],
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.default_tub.as_deref(), Some("garden"));
        assert_eq!(reloaded.tubs[0].volume().to_string(), "1500 liter");
    }

    #[test]
    fn test_unknown_tub() {
        let config = Config::default();
        let err = config.tub(Some("pond")).unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Unknown tub 'pond'");
    }
}
