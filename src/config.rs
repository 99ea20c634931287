use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct LodestoneConfig {
    pub logging: LoggingConfig,
    pub storage: StorageConfig,
    pub targets: TargetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub data_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TargetsConfig {
    /// Maximum distinct target names per owner. Fixed for the cache's lifetime.
    pub max_targets: usize,
    /// Worlds in which target commands are refused.
    pub ignored_worlds: Vec<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let data_path = default_lodestone_dir()
            .join("playerdata.toml")
            .to_string_lossy()
            .into_owned();
        Self { data_path }
    }
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            max_targets: 5,
            ignored_worlds: Vec::new(),
        }
    }
}

/// Returns `~/.lodestone/`
pub fn default_lodestone_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".lodestone")
}

/// Returns the default config file path: `~/.lodestone/config.toml`
pub fn default_config_path() -> PathBuf {
    default_lodestone_dir().join("config.toml")
}

impl LodestoneConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            LodestoneConfig::default()
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides (LODESTONE_DATA, LODESTONE_MAX_TARGETS,
    /// LODESTONE_LOG_LEVEL).
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("LODESTONE_DATA") {
            self.storage.data_path = val;
        }
        if let Ok(val) = std::env::var("LODESTONE_MAX_TARGETS") {
            self.targets.max_targets = val
                .trim()
                .parse()
                .with_context(|| format!("LODESTONE_MAX_TARGETS is not a count: {val:?}"))?;
        }
        if let Ok(val) = std::env::var("LODESTONE_LOG_LEVEL") {
            self.logging.log_level = val;
        }
        Ok(())
    }

    /// Resolve the data file path, expanding `~` if needed.
    pub fn resolved_data_path(&self) -> PathBuf {
        expand_tilde(&self.storage.data_path)
    }

    /// Whether target commands are refused in `world`. Exact, case-sensitive match.
    pub fn is_world_ignored(&self, world: &str) -> bool {
        self.targets.ignored_worlds.iter().any(|w| w == world)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
