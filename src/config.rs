use crate::constants::{
    DEFAULT_CLOCK_INTERVAL_MS, DEFAULT_CLOCK_LABEL, DEFAULT_COUNTER_INTERVAL_MS,
    DEFAULT_LOG_INTERVAL_MS, DEFAULT_MESSAGE_POOL, DEFAULT_START_COUNT,
};
use crate::errors::{MirageError, MirageResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub start_count: u64,
    pub counter_interval_ms: u64,
    pub log_interval_ms: u64,
    pub clock_interval_ms: u64,
    pub clock_label: String,
    pub message_pool: Vec<String>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_count: DEFAULT_START_COUNT,
            counter_interval_ms: DEFAULT_COUNTER_INTERVAL_MS,
            log_interval_ms: DEFAULT_LOG_INTERVAL_MS,
            clock_interval_ms: DEFAULT_CLOCK_INTERVAL_MS,
            clock_label: DEFAULT_CLOCK_LABEL.to_string(),
            message_pool: DEFAULT_MESSAGE_POOL.iter().map(|s| s.to_string()).collect(),
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> MirageResult<()> {
    let config_path = get_config_path()?;

    // If a config file exists, load it; otherwise write the defaults out so
    // the operator has something to edit.
    if config_path.exists() {
        let config = load_config_file(&config_path)?;
        validate_config(&config)?;
        *CONFIG.write().unwrap() = config;
    } else {
        let config = Config::default();

        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            MirageError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| MirageError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, config_str)
            .map_err(|e| MirageError::config_error(format!("Failed to write config file: {}", e)))?;

        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

pub fn load_config_file(path: &Path) -> MirageResult<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| MirageError::config_error(format!("Failed to read config file: {}", e)))?;

    serde_json::from_str(&config_str)
        .map_err(|e| MirageError::config_error(format!("Failed to parse config: {}", e)))
}

fn get_config_path() -> MirageResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| MirageError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("mirage").join("config.json"))
}

fn validate_config(config: &Config) -> MirageResult<()> {
    if config.message_pool.is_empty() {
        return Err(MirageError::config_error("message_pool must not be empty"));
    }

    if config.counter_interval_ms == 0 {
        return Err(MirageError::config_error(
            "counter_interval_ms must be greater than 0",
        ));
    }

    if config.log_interval_ms == 0 {
        return Err(MirageError::config_error(
            "log_interval_ms must be greater than 0",
        ));
    }

    if config.clock_interval_ms == 0 {
        return Err(MirageError::config_error(
            "clock_interval_ms must be greater than 0",
        ));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}
