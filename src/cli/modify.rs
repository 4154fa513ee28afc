//! `td rename`, `td retag`, and `td postpone` command implementations

use anyhow::{bail, Result};
use chrono::Local;
use clap::Args;
use std::path::Path;

use crate::schedule::date_spec;
use crate::task::{Storage, TaskId};

#[derive(Args)]
pub struct RenameArgs {
    /// Task id
    id: TaskId,

    /// New name
    name: String,
}

#[derive(Args)]
pub struct RetagArgs {
    /// Task id
    id: TaskId,

    /// New tags; none clears the task's tags
    tags: Vec<String>,
}

#[derive(Args)]
pub struct PostponeArgs {
    /// Task id
    id: TaskId,

    /// New due date ("2017-06-15", "friday", "tomorrow", "15")
    due: String,
}

pub fn run_rename(store: &Path, args: RenameArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        bail!("Task name must not be empty");
    }

    let storage = Storage::new(store);
    let mut registry = super::load_registry(&storage)?;

    let task = super::lookup_mut(&mut registry, args.id)?;
    task.rename(args.name);
    println!("Task {} renamed to {}.", task.id, task.name);

    storage.save(registry.tasks())?;

    Ok(())
}

pub fn run_retag(store: &Path, args: RetagArgs) -> Result<()> {
    let storage = Storage::new(store);
    let mut registry = super::load_registry(&storage)?;

    registry.retag(args.id, args.tags)?;

    let task = registry.get(args.id).expect("task survived retag");
    if task.tags.is_empty() {
        println!("Task {} ({}) untagged.", task.id, task.name);
    } else {
        println!(
            "Task {} ({}) tagged {}.",
            task.id,
            task.name,
            task.display_tags().join(", ")
        );
    }

    storage.save(registry.tasks())?;

    Ok(())
}

pub fn run_postpone(store: &Path, args: PostponeArgs) -> Result<()> {
    let today = Local::now().date_naive();

    let storage = Storage::new(store);
    let mut registry = super::load_registry(&storage)?;

    let due = date_spec::resolve(&args.due, today)?;
    let task = super::lookup_mut(&mut registry, args.id)?;
    task.set_due(due);
    println!(
        "Task {} ({}) now due {}.",
        task.id,
        task.name,
        due.format("%Y-%m-%d")
    );

    storage.save(registry.tasks())?;

    Ok(())
}
