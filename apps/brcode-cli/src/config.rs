//! # Merchant Configuration
//!
//! Where the merchant's key, name and city come from.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied in cli.rs)           │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     BRCODE_PIX_KEY=11987654321                                         │
//! │     BRCODE_KEY_TYPE=phone                                              │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/brcode/config.toml (Linux)                               │
//! │     ~/Library/Application Support/br.brcode.brcode/config.toml (macOS) │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     no merchant, city "SAO PAULO", country "BR"                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [merchant]
//! key = "11987654321"
//! key_type = "phone"
//! name = "Bella Arte"
//! city = "São Paulo"
//!
//! [payload]
//! default_city = "SAO PAULO"
//! country_code = "BR"
//! reference_label = "***"
//! ```

use std::path::{Path, PathBuf};

use brcode_core::{PayloadConfig, PixKeyType};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// =============================================================================
// Errors
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Merchant Settings
// =============================================================================

/// The merchant profile. All fields may be missing from the file; flags can
/// fill them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MerchantSettings {
    /// Raw Pix key.
    #[serde(default)]
    pub key: Option<String>,

    /// Key type (cpf, cnpj, email, phone, random).
    #[serde(default)]
    pub key_type: Option<PixKeyType>,

    /// Merchant display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Merchant city.
    #[serde(default)]
    pub city: Option<String>,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrCodeConfig {
    /// Merchant profile.
    #[serde(default)]
    pub merchant: MerchantSettings,

    /// Jurisdiction defaults handed to the assembler.
    #[serde(default)]
    pub payload: PayloadConfig,
}

impl BrCodeConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config.toml`)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` must exist; the default path is optional.
    pub fn load(config_path: Option<&Path>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading merchant config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Validates values that would otherwise only fail deep in encoding.
    pub fn validate(&self) -> ConfigResult<()> {
        let country = &self.payload.country_code;
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::InvalidValue(format!(
                "payload.country_code: expected two uppercase letters, got '{}'",
                country
            )));
        }

        if self.payload.default_city.trim().is_empty() {
            return Err(ConfigError::InvalidValue("payload.default_city".into()));
        }

        if self.payload.reference_label.is_empty() {
            return Err(ConfigError::InvalidValue("payload.reference_label".into()));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) -> ConfigResult<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Applies overrides from any variable source (`std::env` in production,
    /// a map in tests).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("BRCODE_PIX_KEY") {
            debug!("Overriding Pix key from environment");
            self.merchant.key = Some(key);
        }

        if let Some(key_type) = lookup("BRCODE_KEY_TYPE") {
            let parsed: PixKeyType = key_type
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BRCODE_KEY_TYPE".to_string()))?;
            self.merchant.key_type = Some(parsed);
        }

        if let Some(name) = lookup("BRCODE_MERCHANT_NAME") {
            self.merchant.name = Some(name);
        }

        if let Some(city) = lookup("BRCODE_MERCHANT_CITY") {
            self.merchant.city = Some(city);
        }

        if let Some(city) = lookup("BRCODE_DEFAULT_CITY") {
            self.payload.default_city = city;
        }

        if let Some(country) = lookup("BRCODE_COUNTRY_CODE") {
            debug!(country = %country, "Overriding country code from environment");
            self.payload.country_code = country;
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("br", "brcode", "brcode")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_full_file() {
        let config = BrCodeConfig::from_toml(
            r#"
            [merchant]
            key = "11987654321"
            key_type = "phone"
            name = "Bella Arte"
            city = "São Paulo"

            [payload]
            default_city = "CURITIBA"
            "#,
        )
        .unwrap();

        assert_eq!(config.merchant.key.as_deref(), Some("11987654321"));
        assert_eq!(config.merchant.key_type, Some(PixKeyType::Phone));
        assert_eq!(config.payload.default_city, "CURITIBA");
        assert_eq!(config.payload.country_code, "BR");
        assert_eq!(config.payload.reference_label, "***");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = BrCodeConfig::from_toml("").unwrap();
        assert_eq!(config, BrCodeConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_key_type_fails_to_parse() {
        let result = BrCodeConfig::from_toml("[merchant]\nkey_type = \"iban\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BRCODE_PIX_KEY", "loja@example.com"),
            ("BRCODE_KEY_TYPE", "EMAIL"),
            ("BRCODE_MERCHANT_NAME", "Loja"),
            ("BRCODE_COUNTRY_CODE", "BR"),
        ]
        .into_iter()
        .collect();

        let mut config = BrCodeConfig::default();
        config
            .apply_overrides(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.merchant.key.as_deref(), Some("loja@example.com"));
        assert_eq!(config.merchant.key_type, Some(PixKeyType::Email));
        assert_eq!(config.merchant.name.as_deref(), Some("Loja"));
        assert_eq!(config.merchant.city, None);
    }

    #[test]
    fn test_bad_key_type_override() {
        let mut config = BrCodeConfig::default();
        let result = config.apply_overrides(|name| {
            (name == "BRCODE_KEY_TYPE").then(|| "boleto".to_string())
        });
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_validation() {
        let mut config = BrCodeConfig::default();
        assert!(config.validate().is_ok());

        config.payload.country_code = "bra".to_string();
        assert!(config.validate().is_err());

        config.payload.country_code = "BR".to_string();
        config.payload.default_city = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = BrCodeConfig::load(Some(Path::new("/nonexistent/brcode.toml")));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = BrCodeConfig::default();
        config.merchant.key = Some("12345678909".to_string());
        config.merchant.key_type = Some(PixKeyType::Cpf);

        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[merchant]"));
        assert!(toml_str.contains("key_type = \"cpf\""));
        assert!(toml_str.contains("[payload]"));

        assert_eq!(BrCodeConfig::from_toml(&toml_str).unwrap(), config);
    }
}
