//! `td status` command implementation
//!
//! One line of `[id] name` entries for overdue pending tasks, suitable for
//! embedding in a shell prompt or status bar.

use anyhow::Result;
use chrono::Local;
use std::path::Path;

use crate::task::Storage;

pub fn run(store: &Path) -> Result<()> {
    let storage = Storage::new(store);
    let registry = super::load_registry(&storage)?;
    let today = Local::now().date_naive();

    let overdue: Vec<String> = registry
        .tasks()
        .iter()
        .filter(|t| t.is_overdue(today))
        .map(|t| format!("[{}] {}", t.id, t.name))
        .collect();

    if !overdue.is_empty() {
        println!("{}", overdue.join(" "));
    }

    Ok(())
}
