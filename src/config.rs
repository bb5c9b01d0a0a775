//! Command-line and environment configuration shared by the binaries.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser};

use crate::data::loader::load_file;
use crate::data::model::Dataset;

/// Environment variable naming the mission data file.
pub const DATA_ENV: &str = "SPACE_MISSIONS_DATA";

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "space_missions.csv";

/// Where the mission data comes from.
#[derive(Debug, Clone, Args)]
pub struct DataSource {
    /// Mission data file (.csv or .json)
    #[arg(long = "data", env = DATA_ENV, default_value = DEFAULT_DATA_FILE)]
    pub path: PathBuf,
}

impl DataSource {
    /// Load the dataset once; callers share the returned handle.
    pub fn load(&self) -> Result<Arc<Dataset>> {
        load_file(&self.path).map(Arc::new)
    }
}

/// Options of the desktop dashboard.
#[derive(Debug, Clone, Parser)]
#[command(name = "space-missions", version, about = "Space missions dashboard")]
pub struct DashboardConfig {
    #[command(flatten)]
    pub source: DataSource,

    /// Initial window width in points
    #[arg(long, default_value_t = 1400.0)]
    pub width: f32,

    /// Initial window height in points
    #[arg(long, default_value_t = 900.0)]
    pub height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_defaults() {
        let cfg = DashboardConfig::parse_from(["space-missions", "--data", "launches.json"]);
        assert_eq!(cfg.source.path, PathBuf::from("launches.json"));
        assert_eq!(cfg.width, 1400.0);
    }

    #[test]
    fn missing_file_is_an_error() {
        let source = DataSource {
            path: PathBuf::from("/nonexistent/space_missions.csv"),
        };
        assert!(source.load().is_err());
    }
}
