use crate::errors::{AppError, AppResult};
use crate::models::Shift;
use crate::store::BackendKind;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store")]
    pub store: String,
    #[serde(default = "default_backend")]
    pub backend: BackendKind,
    #[serde(default = "default_machine_id")]
    pub machine_id: String,
    /// Seconds a loaded sheet is reused before the backend is read again.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_shift")]
    pub default_shift: Shift,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_store() -> String {
    Config::store_file().to_string_lossy().to_string()
}
fn default_backend() -> BackendKind {
    BackendKind::Csv
}
fn default_machine_id() -> String {
    "M1".to_string()
}
fn default_cache_ttl() -> u64 {
    60
}
fn default_shift() -> Shift {
    Shift::Morning
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: default_store(),
            backend: default_backend(),
            machine_id: default_machine_id(),
            cache_ttl_secs: default_cache_ttl(),
            default_shift: default_shift(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.qcgrid`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".qcgrid")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("qcgrid.conf")
    }

    /// Return the default path of the readings sheet
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("readings.csv")
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store)
    }

    /// Load configuration from file, or return defaults if not found.
    /// Fields missing from an older file take their defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&path).map_err(|e| AppError::ConfigLoad(e.to_string()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Override the store from the command line. Without an explicit
    /// backend, it is inferred from the file extension.
    pub fn apply_overrides(&mut self, store: Option<&String>, backend: Option<BackendKind>) {
        if let Some(s) = store {
            self.store = s.clone();
            self.backend = BackendKind::infer(s);
        }
        if let Some(b) = backend {
            self.backend = b;
        }
    }

    /// Write the configuration file.
    pub fn save(&self) -> AppResult<PathBuf> {
        fs::create_dir_all(Self::config_dir()).map_err(|e| AppError::ConfigSave(e.to_string()))?;

        let yaml = self.to_yaml()?;
        let path = Self::config_file();
        let mut file = fs::File::create(&path).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        file.write_all(yaml.as_bytes())
            .map_err(|e| AppError::ConfigSave(e.to_string()))?;

        Ok(path)
    }
}
