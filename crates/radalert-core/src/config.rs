//! Configuration types for radalert.
//!
//! [`Config::load`] reads `~/.config/radalert/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::load_from`] layers an
//! explicit file over the defaults. [`Config::defaults`] returns the same
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[relocation]
enabled         = true
destination_dir = "processed"

[logging]
filter         = "info"
debug_log_path = "/tmp/radalert-debug.log"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level channel configuration, loaded from `~/.config/radalert/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub relocation: RelocationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[relocation]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RelocationConfig {
    /// When false the channel never moves source files, whatever the backend state.
    #[serde(default = "default_relocation_enabled")]
    pub enabled: bool,
    /// Root directory processed files are moved into.
    #[serde(default = "default_destination_dir")]
    pub destination_dir: PathBuf,
}

fn default_relocation_enabled() -> bool { true }
fn default_destination_dir() -> PathBuf { PathBuf::from("processed") }

impl Default for RelocationConfig {
    fn default() -> Self {
        Self {
            enabled: default_relocation_enabled(),
            destination_dir: default_destination_dir(),
        }
    }
}

/// `[logging]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// File that `--debug` appends to.
    #[serde(default = "default_debug_log_path")]
    pub debug_log_path: PathBuf,
}

fn default_filter() -> String { "info".to_string() }
fn default_debug_log_path() -> PathBuf { PathBuf::from("/tmp/radalert-debug.log") }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            debug_log_path: default_debug_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/radalert/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Load an explicit config file layered on top of the built-in defaults.
    /// The file must exist.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("radalert")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
