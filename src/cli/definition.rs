//! Clap command-line definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::complete::CompleteArgs;
use super::delete::DeleteArgs;
use super::list::ListArgs;
use super::modify::{PostponeArgs, RenameArgs, RetagArgs};

#[derive(Parser)]
#[command(name = "td", version, about = "Personal task tracker")]
pub struct Cli {
    /// Store file (defaults to $XDG_DATA_HOME/taskdeck.json, else ~/.taskdeck.json)
    #[arg(long, env = "TASKDECK_STORE", global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// Complete tasks; recurring tasks advance to their next due date
    Complete(CompleteArgs),

    /// Delete tasks
    Delete(DeleteArgs),

    /// Rename a task
    Rename(RenameArgs),

    /// Replace a task's tags
    Retag(RetagArgs),

    /// Move a task's due date
    Postpone(PostponeArgs),

    /// List tasks
    List(ListArgs),

    /// Print overdue tasks on one line
    Status,

    /// Drop all completed tasks
    Purge,

    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}
