//! Application configuration.
//!
//! Settings are stored as pretty-printed JSON in the per-user data directory.
//! Every module is optional; a missing file or a missing module falls back to
//! defaults, so the application runs without any setup.
//!
//! ```rust,no_run
//! use todo_list::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("{}", config.db_path()?.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::task::DEFAULT_CATEGORIES;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name inside the data directory.
pub const DB_FILE_NAME: &str = "todo_list.db";

/// Environment variable that overrides the database location.
pub const DB_PATH_ENV: &str = "TODO_LIST_DB";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// Path of the SQLite file holding the `tasks` table.
    pub path: PathBuf,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
    /// Categories offered by the front ends. The store accepts any label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl Config {
    pub fn modules() -> Vec<ConfigModule> {
        vec![
            ConfigModule {
                key: "database".to_string(),
                name: Message::ConfigModuleDatabase.to_string(),
            },
            ConfigModule {
                key: "server".to_string(),
                name: Message::ConfigModuleServer.to_string(),
            },
            ConfigModule {
                key: "categories".to_string(),
                name: Message::ConfigModuleCategories.to_string(),
            },
        ]
    }

    /// Loads the configuration file, or the defaults when there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolves the database file: `TODO_LIST_DB`, then `database.path`,
    /// then [`DB_FILE_NAME`] in the data directory.
    pub fn db_path(&self) -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        match &self.database {
            Some(database) => Ok(database.path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    pub fn categories(&self) -> Vec<String> {
        match &self.categories {
            Some(categories) if !categories.is_empty() => categories.clone(),
            _ => DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Interactive setup wizard. Starts from the saved configuration and
    /// asks only about the selected modules.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let modules = Config::modules();
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();

        let selection = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectConfigModules.to_string())
            .items(&names)
            .interact()?;

        for index in selection {
            msg_print!(modules[index].name);
            match modules[index].key.as_str() {
                "database" => {
                    let default_path = config.db_path()?;
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(default_path.display().to_string())
                        .interact_text()?;
                    config.database = Some(DatabaseConfig { path: PathBuf::from(path) });
                }
                "server" => {
                    let current = config.server();
                    let host: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptServerHost.to_string())
                        .default(current.host)
                        .interact_text()?;
                    let port: u16 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptServerPort.to_string())
                        .default(current.port)
                        .interact_text()?;
                    config.server = Some(ServerConfig { host, port });
                }
                "categories" => {
                    let raw: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptCategories.to_string())
                        .default(config.categories().join(", "))
                        .interact_text()?;
                    config.categories = Some(parse_categories(&raw));
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// Splits a comma separated category list, dropping blanks and duplicates.
pub fn parse_categories(raw: &str) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for category in raw.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}
