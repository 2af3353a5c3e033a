//! Configuration management infrastructure.
//!
//! Persists digest preferences (default algorithm, streaming buffer size,
//! output encoding) as TOML so the CLI and embedding applications share
//! one set of defaults.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::crypto::{Algorithm, DigestBytes};
use crate::infra::error::{DigestError, DigestResult};

/// Default chunk size used when hashing readers.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 64 * 1024;

/// Upper bound accepted for `read_buffer_size`.
pub const MAX_READ_BUFFER_SIZE: usize = 16 * 1024 * 1024;

/// Textual encoding for printed digests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputEncoding {
    Hex,
    Base64,
}

impl OutputEncoding {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputEncoding::Hex => "hex",
            OutputEncoding::Base64 => "base64",
        }
    }
}

impl fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputEncoding {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(OutputEncoding::Hex),
            "base64" | "b64" => Ok(OutputEncoding::Base64),
            _ => Err(DigestError::ConfigurationError(format!(
                "Invalid output encoding: {s}"
            ))),
        }
    }
}

/// Digest preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigestConfiguration {
    /// Algorithm used when the caller does not pick one
    pub default_algorithm: Algorithm,

    /// Chunk size for streaming digests
    pub read_buffer_size: usize,

    /// Encoding used when printing digests
    pub output_encoding: OutputEncoding,

    /// Print hex digests in upper case
    pub uppercase_hex: bool,
}

impl Default for DigestConfiguration {
    fn default() -> Self {
        Self {
            default_algorithm: Algorithm::Sha256,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            output_encoding: OutputEncoding::Hex,
            uppercase_hex: false,
        }
    }
}

impl DigestConfiguration {
    /// Render a digest according to the configured encoding.
    #[must_use]
    pub fn encode(&self, digest: &DigestBytes) -> String {
        match self.output_encoding {
            OutputEncoding::Hex if self.uppercase_hex => digest.to_hex_upper(),
            OutputEncoding::Hex => digest.to_hex(),
            OutputEncoding::Base64 => digest.to_base64(),
        }
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> DigestResult<()> {
        if self.read_buffer_size == 0 {
            return Err(DigestError::ConfigurationError(
                "Read buffer size must be greater than 0".to_string(),
            ));
        }

        if self.read_buffer_size > MAX_READ_BUFFER_SIZE {
            return Err(DigestError::ConfigurationError(format!(
                "Read buffer size must not exceed {MAX_READ_BUFFER_SIZE} bytes"
            )));
        }

        Ok(())
    }
}

/// Configuration export formats
#[derive(Debug, Clone, Copy)]
pub enum ExportFormat {
    Toml,
    Json,
}

/// Configuration manager for handling config files
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new configuration manager with default path
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a configuration manager with custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        match dirs::config_dir() {
            Some(config_dir) => config_dir.join("hybrid-digest").join("config.toml"),
            None => PathBuf::from("hybrid-digest-config.toml"),
        }
    }

    /// Load configuration from file, creating default if it doesn't exist
    pub fn load_or_create_default(&self) -> DigestResult<DigestConfiguration> {
        if self.config_path.exists() {
            self.load()
        } else {
            log::info!(
                "Configuration file not found, creating default: {}",
                self.config_path.display()
            );
            let default_config = DigestConfiguration::default();
            self.save(&default_config)?;
            Ok(default_config)
        }
    }

    /// Load configuration from file, falling back to defaults without writing
    pub fn load_or_default(&self) -> DigestResult<DigestConfiguration> {
        if self.config_path.exists() {
            self.load()
        } else {
            log::debug!(
                "No configuration at {}, using defaults",
                self.config_path.display()
            );
            Ok(DigestConfiguration::default())
        }
    }

    /// Load configuration from file
    pub fn load(&self) -> DigestResult<DigestConfiguration> {
        log::info!("Loading configuration from: {}", self.config_path.display());

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            DigestError::ConfigurationError(format!(
                "Failed to read config file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        let config: DigestConfiguration = toml::from_str(&content).map_err(|e| {
            DigestError::ConfigurationError(format!("Failed to parse config file: {e}"))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, config: &DigestConfiguration) -> DigestResult<()> {
        config.validate()?;
        log::info!("Saving configuration to: {}", self.config_path.display());

        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    DigestError::ConfigurationError(format!(
                        "Failed to create config directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let content = toml::to_string_pretty(config).map_err(|e| {
            DigestError::ConfigurationError(format!("Failed to serialize config: {e}"))
        })?;

        fs::write(&self.config_path, content).map_err(|e| {
            DigestError::ConfigurationError(format!(
                "Failed to write config file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Update a specific configuration value
    pub fn update_value(&self, key: &str, value: &str) -> DigestResult<()> {
        let mut config = self.load_or_default()?;

        match key {
            "default_algorithm" => {
                config.default_algorithm = value.parse()?;
            }
            "read_buffer_size" => {
                config.read_buffer_size = value.parse().map_err(|_| {
                    DigestError::ConfigurationError(format!("Invalid buffer size: {value}"))
                })?;
            }
            "output_encoding" => {
                config.output_encoding = value.parse()?;
            }
            "uppercase_hex" => {
                config.uppercase_hex = value.parse().map_err(|_| {
                    DigestError::ConfigurationError(format!("Invalid boolean value: {value}"))
                })?;
            }
            _ => {
                return Err(DigestError::ConfigurationError(format!(
                    "Unknown configuration key: {key}"
                )));
            }
        }

        self.save(&config)
    }

    /// Get the configuration file path
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Export configuration as a portable format
    pub fn export_config(&self, format: ExportFormat) -> DigestResult<String> {
        let config = self.load_or_default()?;

        match format {
            ExportFormat::Toml => toml::to_string_pretty(&config)
                .map_err(|e| DigestError::ConfigurationError(format!("TOML export failed: {e}"))),
            ExportFormat::Json => serde_json::to_string_pretty(&config)
                .map_err(|e| DigestError::ConfigurationError(format!("JSON export failed: {e}"))),
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
