use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_neo_csv_path")]
    pub neo_csv_path: PathBuf,

    #[serde(default = "default_cad_json_path")]
    pub cad_json_path: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_neo_csv_path() -> PathBuf {
    PathBuf::from("data/neos.csv")
}

fn default_cad_json_path() -> PathBuf {
    PathBuf::from("data/cad.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            neo_csv_path: default_neo_csv_path(),
            cad_json_path: default_cad_json_path(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Read the config file when it exists; a missing file means defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
