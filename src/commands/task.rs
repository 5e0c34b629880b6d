use crate::db::tasks::Tasks;
use crate::libs::error::TrackError;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommands,
}

#[derive(Debug, Subcommand)]
enum TaskCommands {
    #[command(about = "Create a task")]
    New {
        name: String,
        #[arg(short, long)]
        description: Option<String>,
    },
    #[command(about = "List all tasks")]
    List,
    #[command(about = "Find tasks by name substring")]
    Find { pattern: String },
    #[command(about = "Edit a task's name and description")]
    Edit { id: i64 },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    match args.command {
        TaskCommands::New { name, description } => {
            let task = tasks.create(&name, description.as_deref())?;
            msg_success!(Message::TaskCreated(task.name));
        }
        TaskCommands::List => {
            let all = tasks.all()?;
            if all.is_empty() {
                msg_info!(Message::TasksNotFound);
            } else {
                View::tasks(&all)?;
            }
        }
        TaskCommands::Find { pattern } => {
            let found = tasks.by_name(&pattern)?;
            if found.is_empty() {
                msg_info!(Message::TasksNotFound);
            } else {
                View::tasks(&found)?;
            }
        }
        TaskCommands::Edit { id } => {
            let mut task = match tasks.by_id(id) {
                Ok(task) => task,
                Err(TrackError::TaskNotFound(_)) => {
                    msg_error!(Message::TaskNotFoundWithId(id));
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            };

            task.name = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskName.to_string())
                .default(task.name.clone())
                .interact_text()?;
            let description: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskDescription.to_string())
                .default(task.description.clone().unwrap_or_default())
                .allow_empty(true)
                .interact_text()?;
            task.description = (!description.is_empty()).then_some(description);

            tasks.update(&task)?;
            msg_success!(Message::TaskUpdated(task.name));
        }
    }

    Ok(())
}
