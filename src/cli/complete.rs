//! `td complete` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::task::{RegistryError, Storage, TaskId};

#[derive(Args)]
pub struct CompleteArgs {
    /// Task ids as shown by `list` (base-36)
    #[arg(required = true)]
    ids: Vec<TaskId>,
}

pub fn run(store: &Path, args: CompleteArgs) -> Result<()> {
    let storage = Storage::new(store);
    let mut registry = super::load_registry(&storage)?;

    // Check the whole batch before mutating; a failed operation is never saved
    for &id in &args.ids {
        if registry.get(id).is_none() {
            return Err(RegistryError::NotFound(id).into());
        }
    }

    for &id in &args.ids {
        let task = super::lookup_mut(&mut registry, id)?;
        task.complete()?;
        println!("Task {} ({}) completed.", task.id, task.name);
    }

    storage.save(registry.tasks())?;

    Ok(())
}
