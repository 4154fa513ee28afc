//! `td add` command implementation

use anyhow::{bail, Result};
use chrono::Local;
use clap::Args;
use std::path::Path;

use crate::schedule::{date_spec, recurrence};
use crate::task::{Storage, TaskAttrs};

#[derive(Args)]
pub struct AddArgs {
    /// Name/description of the task
    name: String,

    /// Due date ("2017-06-15", "friday", "tomorrow", "15")
    #[arg(short, long)]
    due: Option<String>,

    /// Recurrence ("2 weeks", "monday,thursday"); requires --due
    #[arg(short, long, requires = "due")]
    recurs: Option<String>,

    /// Tags
    #[arg(short, long, num_args = 1..)]
    tags: Vec<String>,
}

pub fn run(store: &Path, args: AddArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        bail!("Task name must not be empty");
    }

    let today = Local::now().date_naive();

    let due = args
        .due
        .as_deref()
        .map(|spec| date_spec::resolve(spec, today))
        .transpose()?;

    // Prove the schedule parses before anything is stored
    if let Some(schedule) = &args.recurs {
        recurrence::resolve(schedule, today)?;
    }

    let storage = Storage::new(store);
    let mut registry = super::load_registry(&storage)?;

    let task = registry.create(TaskAttrs {
        name: args.name,
        due,
        schedule: args.recurs,
        tags: args.tags,
    });

    println!("Added task {}!", task.name);
    storage.save(registry.tasks())?;

    Ok(())
}
