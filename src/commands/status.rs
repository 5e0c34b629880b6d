use crate::db::intervals::TaskIntervals;
use crate::libs::config::Config;
use crate::libs::formatter::{format_duration, format_timestamp};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::Duration;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;

    match TaskIntervals::new()?.in_progress()? {
        None => msg_print!(Message::NotTracking),
        Some((task, interval)) => {
            let since = format_timestamp(interval.start_time, config.datetime_format());
            let duration = format_duration(&Duration::seconds(interval.duration()));
            msg_print!(Message::TrackingSince(task.name, since, duration));
        }
    }

    Ok(())
}
