//! Configuration management for tock.
//!
//! Settings live in a JSON file next to the database. Every field is
//! optional; accessors fall back to built-in defaults so the tool works
//! without ever running `tock init`.
//!
//! ## Fields
//!
//! - `database_file`: name of the SQLite file inside the data directory
//! - `datetime_format`: chrono format used for `--at` arguments and for
//!   rendering interval timestamps

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "tock.db";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub datetime_format: Option<String>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when the file
    /// does not exist. A present but unreadable or unparsable file is an
    /// error.
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

    /// Interactive setup. Current values (or the defaults) are offered as
    /// prompt defaults, so re-running only changes what the user edits.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let database_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabaseFile.to_string())
            .default(current.database_file.clone().unwrap_or_else(|| DB_FILE_NAME.to_string()))
            .interact_text()?;

        let datetime_format: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatetimeFormat.to_string())
            .default(current.datetime_format.clone().unwrap_or_else(|| DATETIME_FORMAT.to_string()))
            .interact_text()?;

        Ok(Config {
            database_file: Some(database_file),
            datetime_format: Some(datetime_format),
        })
    }

    pub fn database_file(&self) -> &str {
        self.database_file.as_deref().unwrap_or(DB_FILE_NAME)
    }

    pub fn datetime_format(&self) -> &str {
        self.datetime_format.as_deref().unwrap_or(DATETIME_FORMAT)
    }
}
