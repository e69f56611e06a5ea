use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Persistent application settings; CLI flags override every field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub eds_file_path: Option<String>,
    pub bus_file_path: Option<String>,
    pub node_context: String,
    pub enable_logging: bool,
    pub log_directory: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            eds_file_path: None,
            bus_file_path: None,
            node_context: "joint_1".to_string(),
            enable_logging: false,
            log_directory: None,
        }
    }
}

impl AppConfig {
    /// Get the path to the config file
    pub fn config_file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "canopen", "candump-analyzer")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, returns default if file doesn't exist or on error
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                match fs::read_to_string(&config_path) {
                    Ok(contents) => match toml::from_str(&contents) {
                        Ok(config) => return config,
                        Err(e) => eprintln!("Failed to parse config file: {}", e),
                    },
                    Err(e) => eprintln!("Failed to read config file: {}", e),
                }
            }
        }
        Self::default()
    }

    /// Get the default log directory path
    pub fn default_log_directory() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "canopen", "candump-analyzer")
            .map(|proj_dirs| proj_dirs.data_local_dir().join("logs"))
    }

    /// Get the log directory as PathBuf, using default if not set
    pub fn get_log_directory(&self) -> Option<PathBuf> {
        if let Some(ref dir) = self.log_directory {
            Some(PathBuf::from(dir))
        } else {
            Self::default_log_directory()
        }
    }
}
