//! Configuration management for keyline.
//!
//! Handles loading configuration from a TOML file: custom registry entries,
//! the default log filter and display options.

use crate::commands::definitions::builtin_registry;
use crate::commands::CommandRegistry;
use crate::error::{KeylineError, Result};
use crate::values::Decode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Main configuration structure for keyline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Command registry configuration.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Command registry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Custom commands, matched before the bundled ones.
    #[serde(default)]
    pub extra_commands: Vec<String>,

    /// Whether the bundled command list is included.
    #[serde(default = "default_builtin")]
    pub builtin: bool,
}

fn default_builtin() -> bool {
    true
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            extra_commands: Vec::new(),
            builtin: default_builtin(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// Decoding applied to binary values (e.g. "utf-8").
    pub decode: Option<String>,
}

impl DisplayConfig {
    /// Parses the configured decoding, if any.
    pub fn decode(&self) -> Result<Option<Decode>> {
        self.decode.as_deref().map(str::parse).transpose()
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("keyline")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| KeylineError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            KeylineError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Builds the command registry: custom entries first, then the bundled ones.
    pub fn registry(&self) -> Result<CommandRegistry> {
        let mut registry = CommandRegistry::new(&self.registry.extra_commands)?;
        if self.registry.builtin {
            registry.extend(builtin_registry()?);
        }

        for (earlier, later) in registry.shadowed_entries() {
            warn!(
                "Command '{}' can never match: '{}' comes first",
                later.name(),
                earlier.name()
            );
        }

        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_valid_config() {
        let toml = r#"
[registry]
extra_commands = ["JSON.SET", "FT SEARCH"]
builtin = false

[logging]
filter = "keyline=debug"

[display]
decode = "utf-8"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.registry.extra_commands, vec!["JSON.SET", "FT SEARCH"]);
        assert!(!config.registry.builtin);
        assert_eq!(config.logging.filter, "keyline=debug");
        assert_eq!(config.display.decode().unwrap(), Some(Decode::Utf8));
    }

    #[test]
    fn test_missing_optional_fields() {
        let config: Config = toml::from_str("").unwrap();

        assert!(config.registry.extra_commands.is_empty());
        assert!(config.registry.builtin);
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.display.decode().unwrap(), None);
    }

    #[test]
    fn test_invalid_decode() {
        let config: Config = toml::from_str("[display]\ndecode = \"ebcdic\"").unwrap();
        assert!(matches!(config.display.decode(), Err(KeylineError::Value(_))));
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_file(&dir.path().join("absent.toml")).unwrap();
        assert!(config.registry.builtin);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[registry]\nextra_commands = [\"HELLO WORLD\"]").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.registry.extra_commands, vec!["HELLO WORLD"]);
    }

    #[test]
    fn test_load_invalid_file_names_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[registry\nbroken").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, KeylineError::Config(_)));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_registry_extra_commands_come_first() {
        let config: Config =
            toml::from_str("[registry]\nextra_commands = [\"GET ALL\"]").unwrap();
        let registry = config.registry().unwrap();

        assert_eq!(registry.entries()[0].name(), "GET ALL");
        let parsed = registry.split_command_args("get all keys").unwrap();
        assert_eq!(parsed.command, "get all");
        assert_eq!(parsed.arguments, vec!["keys"]);
    }

    #[test]
    fn test_registry_without_builtin() {
        let config: Config =
            toml::from_str("[registry]\nextra_commands = [\"PING\"]\nbuiltin = false").unwrap();
        let registry = config.registry().unwrap();

        assert_eq!(registry.len(), 1);
        assert!(matches!(
            registry.split_command_args("get k"),
            Err(KeylineError::UnknownCommand(_))
        ));
    }

    #[test]
    fn test_registry_rejects_empty_entry() {
        let config: Config = toml::from_str("[registry]\nextra_commands = [\" \"]").unwrap();
        assert!(matches!(config.registry(), Err(KeylineError::Config(_))));
    }

    #[test]
    fn test_default_path_ends_with_config_toml() {
        assert!(Config::default_path().ends_with("keyline/config.toml"));
    }
}
