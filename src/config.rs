//! Run configuration.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `WEATHER_REPORT_*` environment variables. Command-line flags are applied on top by
//! the CLI.

use crate::error::Result;
use crate::utils::constants::{
    CONFIG_FILE, DEFAULT_DATA_DIR, DEFAULT_REGION_TABLE, DEFAULT_SOURCES, ENV_PREFIX,
};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Folder holding the region table and the weather sources
    pub data_dir: PathBuf,

    /// Region table file name, relative to `data_dir`
    pub region_table: String,

    /// Weather source file names, relative to `data_dir`, read in this order
    pub sources: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            region_table: DEFAULT_REGION_TABLE.to_string(),
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Settings {
    /// Load settings. An explicit `config_file` must exist; otherwise
    /// `weather-report.toml` in the working directory is used when present.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        };

        let settings: Settings = Config::builder()
            .set_default("data_dir", DEFAULT_DATA_DIR)?
            .set_default("region_table", DEFAULT_REGION_TABLE)?
            .set_default("sources", DEFAULT_SOURCES.to_vec())?
            .add_source(File::from(path.as_path()).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("sources"),
            )
            .build()?
            .try_deserialize()?;

        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        self
    }

    pub fn with_region_table(mut self, region_table: Option<String>) -> Self {
        if let Some(region_table) = region_table {
            self.region_table = region_table;
        }
        self
    }

    pub fn region_table_path(&self) -> PathBuf {
        self.data_dir.join(&self.region_table)
    }

    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.sources
            .iter()
            .map(|source| self.data_dir.join(source))
            .collect()
    }
}
