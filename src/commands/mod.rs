//! Terminal front end.
//!
//! Task subcommands are generic over [`TaskOperations`] and receive the
//! configured category list, so they run the same against the SQLite store
//! or any other implementation.
//!
//! [`TaskOperations`]: crate::libs::operations::TaskOperations

pub mod add;
pub mod complete;
pub mod delete;
pub mod init;
pub mod interactive;
pub mod list;
pub mod migrations;
pub mod serve;
pub mod update;

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Change a task's description, due date or category", arg_required_else_help = true)]
    Update(update::UpdateArgs),
    #[command(about = "Mark a task as completed", arg_required_else_help = true)]
    Complete(complete::CompleteArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Inspect or apply database schema steps")]
    Migrations(migrations::MigrationsArgs),
    #[command(about = "Serve the web interface")]
    Serve(serve::ServeArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Without a subcommand an interactive menu starts
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();

        let command = match cli.command {
            Some(Commands::Init(args)) => return init::cmd(args),
            Some(Commands::Migrations(args)) => return migrations::cmd(args),
            command => command,
        };

        let config = Config::read()?;
        let categories = config.categories();
        let tasks = Tasks::new(config.db_path()?)?;

        match command {
            Some(Commands::Add(args)) => add::cmd(&tasks, &categories, args).map(|_| ()),
            Some(Commands::List(args)) => list::cmd(&tasks, args),
            Some(Commands::Update(args)) => update::cmd(&tasks, &categories, args).map(|_| ()),
            Some(Commands::Complete(args)) => complete::cmd(&tasks, args).map(|_| ()),
            Some(Commands::Delete(args)) => delete::cmd(&tasks, args).map(|_| ()),
            Some(Commands::Serve(args)) => serve::cmd(&config, tasks, args).await,
            Some(Commands::Init(_)) | Some(Commands::Migrations(_)) => Ok(()),
            None => interactive::cmd(&tasks, &categories),
        }
    }
}
