//! `td delete` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::{RegistryError, Storage, TaskId};

#[derive(Args)]
pub struct DeleteArgs {
    /// Task ids as shown by `list` (base-36)
    #[arg(required = true)]
    ids: Vec<TaskId>,
}

pub fn run(store: &Path, args: DeleteArgs) -> Result<()> {
    let storage = Storage::new(store);
    let mut registry = super::load_registry(&storage)?;

    for &id in &args.ids {
        if registry.get(id).is_none() {
            return Err(RegistryError::NotFound(id).into());
        }
    }

    for &id in &args.ids {
        let task = registry.remove(id)?;
        println!("Task {} ({}) deleted.", task.id, task.name);
    }

    storage.save(registry.tasks())?;

    Ok(())
}
