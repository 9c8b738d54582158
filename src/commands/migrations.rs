use crate::{
    db::{
        db::Db,
        migrations::{init_with_migrations, MigrationManager},
        tasks::Tasks,
    },
    libs::{config::Config, messages::Message},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show which schema steps the database has
    Status,
    /// Apply pending schema steps
    Apply,
}

pub fn cmd(args: MigrationsArgs) -> Result<()> {
    let path = Config::read()?.db_path()?;
    let mut db = Db::open(&path)?;

    msg_print!(Message::DatabasePath(path.display().to_string()));

    match args.command {
        MigrationsCommand::Status => {
            let manager = MigrationManager::new();
            let pending = manager.pending(&db.conn)?;

            msg_print!(Message::MigrationStatusHeader, true);
            for key in manager.keys() {
                msg_print!(Message::MigrationStatus(key.to_string(), !pending.contains(&key)));
            }
            if !pending.contains(&"create_tasks_table") {
                msg_print!(Message::TaskCount(Tasks::at(&path).count()?));
            }
        }
        MigrationsCommand::Apply => {
            init_with_migrations(&mut db.conn)?;
            msg_success!(Message::AllMigrationsCompleted);
            msg_info!(Message::TaskCount(Tasks::at(&path).count()?));
        }
    }

    Ok(())
}
