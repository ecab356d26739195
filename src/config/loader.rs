use crate::discovery::{ScanRules, DEFAULT_DECLARATION_KEYWORD, DEFAULT_SOURCE_EXTENSION};
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a reverser scan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extension of the decompiled source files
    pub source_extension: String,

    /// Keyword opening a package declaration line
    pub declaration_keyword: String,

    /// Override for the resource-mapping filename pattern
    pub r_file_pattern: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            declaration_keyword: DEFAULT_DECLARATION_KEYWORD.to_string(),
            r_file_pattern: None,
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations under the scan root
    pub fn from_default_locations(root: &Path) -> Result<Self> {
        let default_names = [
            ".reverser.yml",
            ".reverser.yaml",
            ".reverser.toml",
            "reverser.yml",
            "reverser.yaml",
            "reverser.toml",
        ];

        for name in &default_names {
            let path = root.join(name);
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }

    /// Compile the configured naming rules
    pub fn scan_rules(&self) -> Result<ScanRules> {
        ScanRules::new(
            &self.source_extension,
            &self.declaration_keyword,
            self.r_file_pattern.as_deref(),
        )
    }
}
