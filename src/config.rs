//! Configuration management for rvv-emu.
//!
//! Configuration is loaded from multiple sources in priority order:
//! 1. Environment variables (RVV_EMU_ISA, RVV_EMU_TRACE)
//! 2. Project-local config file (`./rvv-emu.toml`)
//! 3. User config file (`~/.config/rvv-emu/config.toml`)
//! 4. Built-in defaults
//!
//! # Config File Format
//!
//! ```toml
//! # rvv-emu.toml
//!
//! # ISA variant the surrounding emulator targets
//! isa_variant = "rv64gcv"
//!
//! # Where to write instruction traces (optional)
//! trace_path = "/tmp/rvv-emu.trace"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Global cached configuration.
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Configuration lookup error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("cannot find environment variable '{name}'")]
    MissingEnv { name: String },
}

/// Look up a required environment variable.
///
/// Errors when the variable is unset or not valid Unicode; there is no
/// fallback for required settings.
pub fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnv {
        name: name.to_string(),
    })
}

/// Look up an environment variable, falling back to `default` when unset.
pub fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// rvv-emu configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// ISA variant string the surrounding emulator targets.
    /// The vector classifier itself assumes the standard encoding.
    pub isa_variant: Option<String>,

    /// Path for instruction trace output.
    pub trace_path: Option<String>,
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Project-local `rvv-emu.toml`
    /// 3. User config `~/.config/rvv-emu/config.toml`
    /// 4. Defaults
    pub fn load() -> Self {
        let mut config = Self::default();

        // Load user config first (lowest priority of file configs)
        if let Some(user_config) = Self::load_user_config() {
            config.merge(user_config);
        }

        // Load project-local config (higher priority)
        if let Some(local_config) = Self::load_local_config() {
            config.merge(local_config);
        }

        // Environment variables override everything
        config.apply_env_overrides();

        config
    }

    /// Get the cached global configuration.
    ///
    /// Loads configuration on first call and caches it.
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(|| {
            let config = Self::load();
            log::debug!("Loaded configuration: {:?}", config);
            config
        })
    }

    /// Get the ISA variant, with fallback to default.
    pub fn isa_variant(&self) -> String {
        self.isa_variant
            .clone()
            .unwrap_or_else(|| "rv64gcv".to_string())
    }

    /// Load user configuration from ~/.config/rvv-emu/config.toml
    fn load_user_config() -> Option<Self> {
        let config_dir = dirs::config_dir()?;
        let config_path = config_dir.join("rvv-emu").join("config.toml");
        Self::load_from_file(&config_path)
    }

    /// Load project-local configuration from ./rvv-emu.toml
    fn load_local_config() -> Option<Self> {
        let local_path = Path::new("rvv-emu.toml");
        Self::load_from_file(local_path)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Merge another config into this one.
    /// Only overrides fields that are Some in the other config.
    fn merge(&mut self, other: Self) {
        if other.isa_variant.is_some() {
            self.isa_variant = other.isa_variant;
        }
        if other.trace_path.is_some() {
            self.trace_path = other.trace_path;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(variant) = std::env::var("RVV_EMU_ISA") {
            log::info!("Using RVV_EMU_ISA from environment: {}", variant);
            self.isa_variant = Some(variant);
        }
        if let Ok(path) = std::env::var("RVV_EMU_TRACE") {
            log::info!("Using RVV_EMU_TRACE from environment: {}", path);
            self.trace_path = Some(path);
        }
    }

    /// Get the path to the user config file (for display/creation).
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("rvv-emu").join("config.toml"))
    }

    /// Generate a sample config file content.
    pub fn sample_config() -> String {
        r#"# rvv-emu configuration
# Place this file at ~/.config/rvv-emu/config.toml or ./rvv-emu.toml

# ISA variant the surrounding emulator targets
isa_variant = "rv64gcv"

# Where to write instruction traces (optional)
# trace_path = "/tmp/rvv-emu.trace"
"#
        .to_string()
    }
}
