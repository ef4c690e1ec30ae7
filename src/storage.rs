use crate::model::Task;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_FILE_NAME: &str = "tasks.json";

pub struct LocalStorage;

impl LocalStorage {
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "ticklist", "ticklist")
    }

    /// `tasks.json` inside the platform data directory.
    pub fn default_path() -> Option<PathBuf> {
        Self::project_dirs().map(|proj| proj.data_dir().join(DATA_FILE_NAME))
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let tmp_path = Self::tmp_path(path);
        fs::write(&tmp_path, contents)
            .with_context(|| format!("writing {}", tmp_path.display()))?;
        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e).with_context(|| format!("replacing {}", path.display()));
        }
        Ok(())
    }

    /// `tasks.json` -> `tasks.json.tmp`, so siblings such as `tasks.tmp` are never touched.
    pub fn tmp_path(path: &Path) -> PathBuf {
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    pub fn save(path: &Path, tasks: &[Task]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)?;
        Self::atomic_write(path, json)?;
        log::debug!("Saved {} task(s) to {}", tasks.len(), path.display());
        Ok(())
    }

    /// Missing, unreadable or malformed files all read as an empty list.
    pub fn load(path: &Path) -> Vec<Task> {
        if !path.exists() {
            log::info!("No task file at {}, starting empty", path.display());
            return vec![];
        }
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return vec![];
            }
        };
        match serde_json::from_str::<Vec<Task>>(&json) {
            Ok(tasks) => {
                log::info!("Loaded {} task(s) from {}", tasks.len(), path.display());
                tasks
            }
            Err(e) => {
                log::warn!("Ignoring malformed task file {}: {}", path.display(), e);
                vec![]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let mut done = Task::new("Write report", Priority::High);
        done.completed = true;
        let tasks = vec![
            Task::new("Buy milk", Priority::Low),
            done,
            Task::new("Hand edited", Priority::Other("Someday".into())),
        ];

        LocalStorage::save(&path, &tasks).unwrap();

        assert_eq!(LocalStorage::load(&path), tasks);
        assert!(!LocalStorage::tmp_path(&path).exists());
    }

    #[test]
    fn save_leaves_sibling_tmp_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        let sibling = dir.path().join("tasks.tmp");
        fs::write(&sibling, "user notes").unwrap();

        LocalStorage::save(&path, &[Task::new("A", Priority::High)]).unwrap();

        assert_eq!(fs::read_to_string(&sibling).unwrap(), "user notes");
        assert_eq!(LocalStorage::tmp_path(&path), dir.path().join("tasks.json.tmp"));
        assert!(!LocalStorage::tmp_path(&path).exists());
    }

    #[test]
    fn failed_rename_removes_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A non-empty directory cannot be replaced by a file.
        let path = dir.path().join("tasks.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();

        assert!(LocalStorage::save(&path, &[Task::new("A", Priority::Low)]).is_err());
        assert!(!LocalStorage::tmp_path(&path).exists());
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LocalStorage::load(&dir.path().join("absent.json")).is_empty());
    }

    #[test]
    fn malformed_content_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        for content in ["", "not json", "{\"name\": \"x\"}", "[{\"name\": 3}]"] {
            fs::write(&path, content).unwrap();
            assert!(LocalStorage::load(&path).is_empty(), "content: {content:?}");
        }
    }

    #[test]
    fn save_creates_missing_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tasks.json");
        LocalStorage::save(&path, &[Task::new("a", Priority::Medium)]).unwrap();
        assert_eq!(LocalStorage::load(&path).len(), 1);
    }

    #[test]
    fn file_is_pretty_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        LocalStorage::save(&path, &[Task::new("a", Priority::Medium)]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n"));
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["priority"], "Medium");
        assert_eq!(value[0]["completed"], false);
    }
}
