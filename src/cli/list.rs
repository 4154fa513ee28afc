//! `td list` command implementation

use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::Path;

use crate::schedule::date_spec;
use crate::task::{Storage, Task};

const TABLE_COL_ID: usize = 4;
const TABLE_COL_NAME: usize = 32;
const TABLE_COL_DUE: usize = 12;

#[derive(Args)]
pub struct ListArgs {
    /// Name substring to match (case-insensitive)
    term: Option<String>,

    /// Only tasks carrying this exact tag
    #[arg(short, long)]
    tag: Option<String>,

    /// Only tasks due on the day this date spec resolves to
    #[arg(short, long)]
    due: Option<String>,

    /// Include completed tasks
    #[arg(short, long)]
    all: bool,

    /// Print every known tag instead of tasks
    #[arg(long)]
    tags: bool,
}

fn print_table_header() {
    println!(
        "{:<width_id$} {} {} TAGS",
        "ID",
        super::pad("TASK", TABLE_COL_NAME),
        super::pad("DUE", TABLE_COL_DUE),
        width_id = TABLE_COL_ID
    );
    println!(
        "{}",
        "-".repeat(TABLE_COL_ID + TABLE_COL_NAME + TABLE_COL_DUE + 7)
    );
}

fn print_table_row(task: &Task) {
    let name = super::truncate(&task.name, TABLE_COL_NAME);
    let due = task
        .due
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();
    println!(
        "{:<width_id$} {} {} {}",
        task.id.to_string(),
        super::pad(&name, TABLE_COL_NAME),
        super::pad(&due, TABLE_COL_DUE),
        task.display_tags().join(", "),
        width_id = TABLE_COL_ID
    );
}

pub fn run(store: &Path, args: ListArgs) -> Result<()> {
    let storage = Storage::new(store);
    let registry = super::load_registry(&storage)?;

    if args.tags {
        for tag in registry.known_tags() {
            println!("{}", tag);
        }
        return Ok(());
    }

    let due_filter = args
        .due
        .as_deref()
        .map(|spec| date_spec::resolve(spec, Local::now().date_naive()))
        .transpose()?;

    let term = args.term.as_deref().map(str::to_lowercase);

    let tasks: Vec<&Task> = registry
        .tasks()
        .iter()
        .filter(|t| args.all || !t.completed)
        .filter(|t| match &term {
            Some(term) => t.name.to_lowercase().contains(term),
            None => true,
        })
        .filter(|t| match &args.tag {
            Some(tag) => t.tags.iter().any(|have| have == tag),
            None => true,
        })
        .filter(|t| match due_filter {
            Some(day) => t.due == Some(day),
            None => true,
        })
        .collect();

    if tasks.is_empty() {
        println!("No tasks found.");
        return Ok(());
    }

    print_table_header();
    for task in &tasks {
        print_table_row(task);
    }
    println!("\nTotal: {} tasks", tasks.len());

    Ok(())
}
