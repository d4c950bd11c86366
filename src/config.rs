//! Generator configuration (tokenc.yaml).
//!
//! The configuration names the JSON sections to read, the prefixes stripped
//! from token names, and the namespaces emitted for each token group. Every
//! field has a default matching the design-tool export this generator was
//! built for, so the file is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TokenError};

/// The configuration file name looked up next to the input document.
pub const CONFIG_FILENAME: &str = "tokenc.yaml";

/// Generator configuration loaded from tokenc.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Keys of the core token sections.
    pub core: CoreKeys,

    /// Keys of the semantic (themed) sections.
    pub semantic: SemanticKeys,

    /// Prefixes stripped from raw token names.
    pub naming: Naming,

    /// Names of the emitted top-level groups.
    pub output: OutputNames,

    /// Unit suffixes accepted on numeric values.
    pub units: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreKeys {
    /// Top-level section holding the core tokens.
    pub section: String,
    /// Colour tree inside the core section. Also the reference namespace.
    pub colors: String,
    pub spacing: String,
    pub radius: String,
}

impl Default for CoreKeys {
    fn default() -> Self {
        Self {
            section: "Core/Main".to_string(),
            colors: "Colors".to_string(),
            spacing: "Spacing".to_string(),
            radius: "Radius".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemanticKeys {
    pub light: String,
    pub dark: String,
}

impl Default for SemanticKeys {
    fn default() -> Self {
        Self {
            light: "Semantic tokens/Light".to_string(),
            dark: "Semantic tokens/Dark".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Naming {
    pub color_prefix: String,
    pub spacing_prefix: String,
    pub radius_prefix: String,
}

impl Default for Naming {
    fn default() -> Self {
        Self {
            color_prefix: "--color-".to_string(),
            spacing_prefix: "--spacing-".to_string(),
            radius_prefix: "--border-radius-".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputNames {
    pub colors: String,
    pub spacing: String,
    pub radius: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            colors: "TokenColors".to_string(),
            spacing: "TokenSpacing".to_string(),
            radius: "TokenRadius".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TokenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read configuration: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self = serde_yaml::from_str(content).map_err(|e| TokenError::Config {
            message: e.to_string(),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        if config.units.is_empty() {
            config.units = default_units();
        }

        Ok(config)
    }

    /// Resolve the configuration for an input document.
    ///
    /// An explicit path wins; otherwise `tokenc.yaml` next to the input is
    /// used if present, else the built-in defaults.
    pub fn discover(input: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match find_config(input) {
            Some(path) => Self::load(&path),
            None => Ok(Self::with_defaults()),
        }
    }

    /// The built-in configuration.
    pub fn with_defaults() -> Self {
        Self {
            units: default_units(),
            ..Self::default()
        }
    }

    /// Serialize to YAML (used by `tokenc init`).
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| TokenError::Config {
            message: e.to_string(),
            help: None,
        })
    }
}

fn default_units() -> Vec<String> {
    vec!["px".to_string()]
}

/// Find `tokenc.yaml` in the directory containing `input`.
fn find_config(input: &Path) -> Option<PathBuf> {
    let dir = match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let candidate = dir.join(CONFIG_FILENAME);
    candidate.is_file().then_some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::with_defaults();
        assert_eq!(config.core.section, "Core/Main");
        assert_eq!(config.core.colors, "Colors");
        assert_eq!(config.semantic.light, "Semantic tokens/Light");
        assert_eq!(config.naming.radius_prefix, "--border-radius-");
        assert_eq!(config.output.colors, "TokenColors");
        assert_eq!(config.units, vec!["px"]);
    }

    #[test]
    fn test_parse_partial() {
        let config = Config::parse(
            r#"
core:
  section: Core
semantic:
  dark: Dark
units: [px, pt]
"#,
        )
        .unwrap();

        assert_eq!(config.core.section, "Core");
        assert_eq!(config.core.colors, "Colors");
        assert_eq!(config.semantic.dark, "Dark");
        assert_eq!(config.semantic.light, "Semantic tokens/Light");
        assert_eq!(config.units, vec!["px", "pt"]);
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        assert_eq!(Config::parse("{}").unwrap(), Config::with_defaults());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Config::parse("core: [not, a, map]"),
            Err(TokenError::Config { .. })
        ));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config::with_defaults();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::parse(&yaml).unwrap(), config);
    }

    #[test]
    fn test_discover_next_to_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tokens.json");
        std::fs::write(
            dir.path().join(CONFIG_FILENAME),
            "output:\n  colors: Palette\n",
        )
        .unwrap();

        let config = Config::discover(&input, None).unwrap();
        assert_eq!(config.output.colors, "Palette");
    }

    #[test]
    fn test_discover_without_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tokens.json");

        assert_eq!(Config::discover(&input, None).unwrap(), Config::with_defaults());
    }

    #[test]
    fn test_discover_explicit_missing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("tokens.json");
        let explicit = dir.path().join("missing.yaml");

        assert!(matches!(
            Config::discover(&input, Some(&explicit)),
            Err(TokenError::Io { .. })
        ));
    }
}
