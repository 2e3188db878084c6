//! Configuration with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rsplan/rsplan.toml`
//! 3. Environment variables: `RSPLAN_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// User-facing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Catalog file offered as the default at the load prompt and used by
    /// the one-shot commands when `--catalog` is absent
    pub default_catalog: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the global config file (if any) and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load with an explicit global config path. Seam for tests; a missing
    /// file falls back to defaults rather than erroring.
    pub fn load_from(global_path: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = global_path {
            builder = builder.add_source(File::from(path.to_path_buf()).required(false));
        }
        builder
            .add_source(Environment::with_prefix("RSPLAN"))
            .build()?
            .try_deserialize()
    }
}

/// Path of the global config file, `None` when no home directory exists.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rsplan").map(|dirs| dirs.config_dir().join("rsplan.toml"))
}
