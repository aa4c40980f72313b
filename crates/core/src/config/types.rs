use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub wizard: WizardConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct WizardConfig {
    /// Start every slot as available instead of blocked.
    #[serde(default)]
    pub free_by_default: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ExportConfig {
    /// Directory the default CSV path points into; home directory when unset.
    #[serde(default)]
    pub dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Fully resolved settings handed to the wizard entry point.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    pub free_by_default: bool,
    pub export_dir: Option<PathBuf>,
    pub logging: LoggingConfig,
}
