use std::path::{Path, PathBuf};
use std::{env, fs};

use dirs::home_dir;
use shellexpand::full;
use thiserror::Error;
use tracing::debug;

use crate::config::types::{ConfigFile, LoggingConfig, ResolvedConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a config file; the file must exist.
    pub fn load(config_path: Option<&Path>) -> Result<ResolvedConfig, ConfigError> {
        let path = match config_path {
            Some(p) => p.to_path_buf(),
            None => default_config_path(),
        };

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        Self::load_file(&path)
    }

    /// Like [`ConfigLoader::load`], except a missing default config resolves
    /// to built-in defaults: a config file is optional for the wizard, while
    /// an explicitly named one is still required to exist.
    pub fn load_or_default(
        config_path: Option<&Path>,
    ) -> Result<ResolvedConfig, ConfigError> {
        match config_path {
            Some(p) => Self::load(Some(p)),
            None => {
                let path = default_config_path();
                if path.exists() {
                    Self::load_file(&path)
                } else {
                    debug!("no config file, using defaults");
                    Ok(ResolvedConfig::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<ResolvedConfig, ConfigError> {
        let s = fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.display().to_string(), e))?;

        let cf: ConfigFile = toml::from_str(&s)
            .map_err(|e| ConfigError::ParseError(path.display().to_string(), e))?;

        if cf.version != 1 {
            return Err(ConfigError::BadVersion(cf.version));
        }

        let export_dir = match &cf.export.dir {
            Some(dir) => Some(expand_path(dir)?),
            None => None,
        };

        // Resolve the log file path if present
        let logging = if let Some(ref file) = cf.logging.file {
            LoggingConfig {
                level: cf.logging.level.clone(),
                file_level: cf.logging.file_level.clone(),
                file: Some(expand_path(&file.to_string_lossy())?),
            }
        } else {
            cf.logging.clone()
        };

        Ok(ResolvedConfig {
            free_by_default: cf.wizard.free_by_default,
            export_dir,
            logging,
        })
    }
}

pub fn default_config_path() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        return Path::new(&xdg).join("rota").join("config.toml");
    }
    let home = home_dir().unwrap_or_else(|| PathBuf::from("~"));
    home.join(".config").join("rota").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    let expanded = full(input).map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(expanded.to_string()))
}
