use super::resolve;
use crate::db::intervals::TaskIntervals;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Name of the task whose intervals to show
    #[arg(required = true)]
    name: String,
}

pub fn cmd(args: LogArgs) -> Result<()> {
    let config = Config::read()?;

    let mut tasks = Tasks::new()?;
    let Some(task) = resolve(&mut tasks, &args.name)? else {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    };

    let intervals = TaskIntervals::new()?.for_task(&task)?;
    if intervals.is_empty() {
        msg_info!(Message::NoIntervals(task.name));
        return Ok(());
    }
    View::intervals(&intervals, config.datetime_format())?;

    Ok(())
}
