//! Configuration for the bluesky clock.
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing file means defaults; a file that fails to parse is an error so a
//! typo does not silently reset the palette.

use std::fs;
use std::path::{Path, PathBuf};

use bluesky_core::Palette;
use directories::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "bluesky.log";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine a home directory")]
    NoHome,

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("palette.sky_fill must list at least one color")]
    EmptySky,

    #[error("display.poll_ms must be greater than zero")]
    ZeroPoll,
}

pub type Result<T> = core::result::Result<T, ConfigError>;

/// How often the clock is handed a new time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateInterval {
    Second,
    #[default]
    Minute,
}

impl UpdateInterval {
    pub fn seconds(self) -> i64 {
        match self {
            UpdateInterval::Second => 1,
            UpdateInterval::Minute => 60,
        }
    }

    /// Toggle between per-second and per-minute updates.
    pub fn toggle(self) -> Self {
        match self {
            UpdateInterval::Second => UpdateInterval::Minute,
            UpdateInterval::Minute => UpdateInterval::Second,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the date below the face.
    pub show_date: bool,
    pub update_interval: UpdateInterval,
    /// Event poll timeout in milliseconds.
    pub poll_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_date: true,
            update_interval: UpdateInterval::default(),
            poll_ms: 250,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter in `env_logger` syntax, e.g. `"info,bluesky_analog=trace"`.
    pub filter: Option<String>,
    /// Log file; defaults to `bluesky.log` in the data directory.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: Palette,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("ca", "joshuatacoma", "bluesky").ok_or(ConfigError::NoHome)
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join(CONFIG_FILE))
    }

    /// Log file location: the configured one, else the data directory, else
    /// the temp directory when there is no home.
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.logging.file {
            return path.clone();
        }
        match project_dirs() {
            Ok(dirs) => dirs.data_local_dir().join(LOG_FILE),
            Err(_) => std::env::temp_dir().join(LOG_FILE),
        }
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                info!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config = Self::parse(&text).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.palette.sky_fill.is_empty() {
            return Err(ConfigError::EmptySky);
        }
        if self.display.poll_ms == 0 {
            return Err(ConfigError::ZeroPoll);
        }
        Ok(())
    }

    /// Write the config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self)?;
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        fs::write(path, text).map_err(write_err)
    }
}
