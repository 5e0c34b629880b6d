use super::resolve_when;
use crate::db::intervals::TaskIntervals;
use crate::libs::config::Config;
use crate::libs::formatter::format_duration;
use crate::libs::messages::Message;
use crate::{msg_print, msg_success};
use anyhow::Result;
use chrono::Duration;
use clap::Args;

#[derive(Debug, Args)]
pub struct StopArgs {
    /// Stop at this time instead of now (configured datetime format)
    #[arg(long)]
    at: Option<String>,
}

pub fn cmd(args: StopArgs) -> Result<()> {
    let config = Config::read()?;
    let when = resolve_when(&config, args.at.as_deref())?;

    let mut intervals = TaskIntervals::new()?;
    match intervals.in_progress()? {
        None => msg_print!(Message::NothingToStop),
        Some((task, _)) => {
            let closed = intervals.stop(&task, when)?;
            let duration = format_duration(&Duration::seconds(closed.duration()));
            msg_success!(Message::StoppedAfter(task.name, duration));
        }
    }

    Ok(())
}
