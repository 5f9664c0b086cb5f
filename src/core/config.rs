/*
 * Application settings: the engine's tuning knobs and the last file the user
 * opened. Settings live as pretty-printed JSON in the per-user config
 * directory; a missing file simply yields the defaults.
 *
 * Storage goes through the `ConfigManagerOperations` trait so the controller
 * can be tested against an in-memory mock.
 */
use crate::core::path_utils;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "WordHistogram";
const SETTINGS_FILENAME: &str = "settings.json";

pub const DEFAULT_CHUNK_SIZE: usize = 1024;
pub const DEFAULT_SNAPSHOT_INTERVAL: u32 = 10;
pub const DEFAULT_TOP_N: usize = 15;

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    NoProjectDirectory,
    Serde(serde_json::Error),
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Configuration I/O error: {e}"),
            ConfigError::NoProjectDirectory => {
                write!(f, "Could not determine a directory for configuration")
            }
            ConfigError::Serde(e) => write!(f, "Configuration format error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Serde(e) => Some(e),
            ConfigError::NoProjectDirectory => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/*
 * Tuning for the processing engine's run loop.
 * `chunk_size` is in bytes, `snapshot_interval` in chunks between
 * intermediate ranked snapshots, `top_n` the length of every snapshot.
 */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub chunk_size: usize,
    pub snapshot_interval: u32,
    pub top_n: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            chunk_size: DEFAULT_CHUNK_SIZE,
            snapshot_interval: DEFAULT_SNAPSHOT_INTERVAL,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl EngineSettings {
    /* Zero chunk size or interval would stall the loop; both are raised to 1. */
    pub fn sanitized(mut self) -> Self {
        if self.chunk_size == 0 {
            log::warn!("EngineSettings: chunk_size 0 is invalid, using 1.");
            self.chunk_size = 1;
        }
        if self.snapshot_interval == 0 {
            log::warn!("EngineSettings: snapshot_interval 0 is invalid, using 1.");
            self.snapshot_interval = 1;
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineSettings,
    pub last_file_path: Option<PathBuf>,
}

pub trait ConfigManagerOperations: Send + Sync {
    fn load_config(&self, app_name: &str) -> Result<AppConfig>;
    fn save_config(&self, app_name: &str, config: &AppConfig) -> Result<()>;
}

/*
 * File-backed configuration. By default the directory comes from
 * `path_utils::get_app_config_dir`; `with_config_dir` pins it, which is what
 * tests and portable setups use.
 */
#[derive(Debug, Default)]
pub struct CoreConfigManager {
    config_dir_override: Option<PathBuf>,
}

impl CoreConfigManager {
    pub fn new() -> Self {
        CoreConfigManager {
            config_dir_override: None,
        }
    }

    pub fn with_config_dir(dir: impl Into<PathBuf>) -> Self {
        CoreConfigManager {
            config_dir_override: Some(dir.into()),
        }
    }

    fn settings_path(&self, app_name: &str) -> Result<PathBuf> {
        let dir = match &self.config_dir_override {
            Some(dir) => dir.clone(),
            None => {
                path_utils::get_app_config_dir(app_name).ok_or(ConfigError::NoProjectDirectory)?
            }
        };
        Ok(dir.join(SETTINGS_FILENAME))
    }
}

impl ConfigManagerOperations for CoreConfigManager {
    fn load_config(&self, app_name: &str) -> Result<AppConfig> {
        let file_path = self.settings_path(app_name)?;
        if !file_path.exists() {
            log::debug!("CoreConfigManager: {file_path:?} does not exist, using defaults.");
            return Ok(AppConfig::default());
        }

        let reader = BufReader::new(File::open(&file_path)?);
        let mut config: AppConfig = serde_json::from_reader(reader)?;
        config.engine = config.engine.sanitized();
        log::debug!("CoreConfigManager: Loaded {config:?} from {file_path:?}.");
        Ok(config)
    }

    fn save_config(&self, app_name: &str, config: &AppConfig) -> Result<()> {
        let file_path = self.settings_path(app_name)?;
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            ensure_dir(parent)?;
        }
        let writer = BufWriter::new(File::create(&file_path)?);
        serde_json::to_writer_pretty(writer, config)?;
        log::debug!("CoreConfigManager: Saved configuration to {file_path:?}.");
        Ok(())
    }
}

fn ensure_dir(dir: &Path) -> io::Result<()> {
    if dir.is_dir() {
        Ok(())
    } else {
        std::fs::create_dir_all(dir)
    }
}
