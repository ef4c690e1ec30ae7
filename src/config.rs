use crate::storage::LocalStorage;
use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides every other source of the data file location.
pub const DATA_FILE_ENV: &str = "TICKLIST_DATA_FILE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the task list is kept. Defaults to `tasks.json` in the data directory.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl Config {
    pub fn get_path() -> Option<PathBuf> {
        LocalStorage::project_dirs().map(|proj| proj.config_dir().join("config.toml"))
    }

    /// A missing config file is not an error.
    pub fn load() -> Result<Self> {
        match Self::get_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Environment variable, then config file, then the platform default.
    pub fn data_path(&self) -> Result<PathBuf> {
        if let Some(from_env) = env::var_os(DATA_FILE_ENV)
            && !from_env.is_empty()
        {
            return Ok(PathBuf::from(from_env));
        }
        if let Some(path) = &self.data_file {
            return Ok(path.clone());
        }
        LocalStorage::default_path().ok_or_else(|| anyhow!("could not determine a data directory"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_file = \"/tmp/my-tasks.json\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/my-tasks.json")));
    }

    // Kept in one test: the environment is shared by every test thread.
    #[test]
    fn data_path_lookup_order() {
        let from_config = PathBuf::from("/tmp/from-config.json");
        let config = Config {
            data_file: Some(from_config.clone()),
        };

        unsafe { env::set_var(DATA_FILE_ENV, "/tmp/from-env.json") };
        assert_eq!(config.data_path().unwrap(), PathBuf::from("/tmp/from-env.json"));

        unsafe { env::set_var(DATA_FILE_ENV, "") };
        assert_eq!(config.data_path().unwrap(), from_config);

        unsafe { env::remove_var(DATA_FILE_ENV) };
        assert_eq!(config.data_path().unwrap(), from_config);
        if let Some(default) = LocalStorage::default_path() {
            assert_eq!(Config::default().data_path().unwrap(), default);
            assert_ne!(default, from_config);
        }
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_file = [").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
