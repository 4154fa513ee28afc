//! Task store - JSON file persistence

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::model::Task;

/// Store file name inside `$XDG_DATA_HOME`.
const STORE_FILE: &str = "taskdeck.json";

/// Dotted fallback in the home directory when no data dir is set.
const HOME_STORE_FILE: &str = ".taskdeck.json";

/// Reads and writes the task list at a fixed path. The path is resolved
/// once at startup and passed in; nothing here consults the environment.
pub struct Storage {
    store_path: PathBuf,
}

impl Storage {
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: store_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.store_path
    }

    /// Load all task records. A missing or blank file is an empty list;
    /// anything unreadable or unparsable is an error.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.store_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.store_path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        debug!(
            "loaded {} tasks from {}",
            tasks.len(),
            self.store_path.display()
        );
        Ok(tasks)
    }

    /// Write all task records, keeping the previous file as a `.bak`
    /// sibling. The backup is best-effort and never fails the save.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if self.store_path.exists() {
            let backup_path = self.store_path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.store_path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        } else if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.store_path, content)?;
        debug!(
            "saved {} tasks to {}",
            tasks.len(),
            self.store_path.display()
        );
        Ok(())
    }
}

/// Default store location: `$XDG_DATA_HOME/taskdeck.json` when the data
/// dir is set, else `~/.taskdeck.json`.
pub fn default_store_path() -> Result<PathBuf> {
    match std::env::var("XDG_DATA_HOME") {
        Ok(data_home) if !data_home.is_empty() => Ok(PathBuf::from(data_home).join(STORE_FILE)),
        _ => {
            let home = dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
            Ok(home.join(HOME_STORE_FILE))
        }
    }
}
