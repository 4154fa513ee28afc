//! `td purge` command implementation

use anyhow::Result;
use std::path::Path;

use crate::task::Storage;

pub fn run(store: &Path) -> Result<()> {
    let storage = Storage::new(store);
    let mut registry = super::load_registry(&storage)?;

    let removed = registry.purge_completed();
    if removed == 1 {
        println!("Purged 1 completed task.");
    } else {
        println!("Purged {} completed tasks.", removed);
    }

    storage.save(registry.tasks())?;

    Ok(())
}
