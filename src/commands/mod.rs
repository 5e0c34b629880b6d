pub mod init;
pub mod log;
pub mod start;
pub mod status;
pub mod stop;
pub mod task;

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::data_storage::HOME_ENV;
use crate::libs::formatter::parse_timestamp;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Start tracking a task")]
    Start(start::StartArgs),
    #[command(about = "Stop tracking")]
    Stop(stop::StopArgs),
    #[command(about = "Show what is being tracked")]
    Status,
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Show recorded intervals for a task")]
    Log(log::LogArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Directory holding the database and configuration
    #[arg(short = 'H', long, global = true)]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();

        if crate::libs::messages::macros::is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .init();
        }
        if let Some(home) = &cli.home {
            std::env::set_var(HOME_ENV, home);
        }

        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Start(args) => start::cmd(args),
            Commands::Stop(args) => stop::cmd(args),
            Commands::Status => status::cmd(),
            Commands::Task(args) => task::cmd(args),
            Commands::Log(args) => log::cmd(args),
        }
    }
}

/// Resolves a task by name: a unique substring match wins directly, an
/// exact name breaks ties, anything still ambiguous goes to an interactive
/// pick. `None` means nothing matched.
pub(crate) fn resolve(tasks: &mut Tasks, name: &str) -> Result<Option<Task>> {
    let matches = tasks.by_name(name)?;
    match matches.as_slice() {
        [] => Ok(None),
        [task] => Ok(Some(task.clone())),
        candidates => {
            let exact: Vec<&Task> = candidates.iter().filter(|task| task.name == name).collect();
            if let [task] = exact.as_slice() {
                return Ok(Some((*task).clone()));
            }
            let names: Vec<&str> = candidates.iter().map(|task| task.name.as_str()).collect();
            let picked = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSelectTask.to_string())
                .items(&names)
                .interact()?;
            Ok(Some(candidates[picked].clone()))
        }
    }
}

/// Like [`resolve`], but creates the task when nothing matches.
pub(crate) fn resolve_or_create(tasks: &mut Tasks, name: &str) -> Result<Task> {
    match resolve(tasks, name)? {
        Some(task) => Ok(task),
        None => {
            let task = tasks.create(name, None)?;
            msg_success!(Message::TaskCreated(task.name.clone()));
            Ok(task)
        }
    }
}

/// Turns an optional `--at` argument into epoch seconds, defaulting to now.
pub(crate) fn resolve_when(config: &Config, at: Option<&str>) -> Result<i64> {
    match at {
        None => Ok(Local::now().timestamp()),
        Some(value) => match parse_timestamp(value, config.datetime_format()) {
            Some(timestamp) => Ok(timestamp),
            None => msg_bail_anyhow!(Message::InvalidTimestamp(value.to_string())),
        },
    }
}
