//! Taskdeck - personal task tracker

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskdeck::cli::{self, Cli, Commands};
use taskdeck::task;

fn main() -> Result<()> {
    if std::env::var("TASKDECK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskdeck=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completions need no store access
    match cli.command {
        Commands::Completion { shell } => {
            generate(shell, &mut Cli::command(), "td", &mut std::io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let store = match cli.store {
        Some(path) => path,
        None => task::default_store_path()?,
    };

    match cli.command {
        Commands::Add(args) => cli::add::run(&store, args),
        Commands::Complete(args) => cli::complete::run(&store, args),
        Commands::Delete(args) => cli::delete::run(&store, args),
        Commands::Rename(args) => cli::modify::run_rename(&store, args),
        Commands::Retag(args) => cli::modify::run_retag(&store, args),
        Commands::Postpone(args) => cli::modify::run_postpone(&store, args),
        Commands::List(args) => cli::list::run(&store, args),
        Commands::Status => cli::status::run(&store),
        Commands::Purge => cli::purge::run(&store),
        Commands::Completion { .. } => unreachable!(),
    }
}
