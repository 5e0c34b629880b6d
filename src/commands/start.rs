use super::{resolve_or_create, resolve_when};
use crate::db::intervals::TaskIntervals;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Name of the task to track; created on the fly when unknown
    #[arg(required = true)]
    name: String,

    /// Start at this time instead of now (configured datetime format)
    #[arg(long)]
    at: Option<String>,
}

pub fn cmd(args: StartArgs) -> Result<()> {
    let config = Config::read()?;
    let when = resolve_when(&config, args.at.as_deref())?;

    let mut tasks = Tasks::new()?;
    let task = resolve_or_create(&mut tasks, &args.name)?;
    msg_debug!("starting task '{}' (id {})", task.name, task.id);

    TaskIntervals::new()?.start(&task, when)?;
    msg_success!(Message::Tracking(task.name));

    Ok(())
}
