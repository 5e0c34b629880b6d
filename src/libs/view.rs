use super::formatter::{format_duration, format_timestamp};
use super::interval::TaskInterval;
use super::task::Task;
use anyhow::Result;
use chrono::Duration;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DESCRIPTION"]);
        for task in tasks {
            table.add_row(row![task.id, task.name, task.description.as_deref().unwrap_or("")]);
        }
        table.printstd();

        Ok(())
    }

    pub fn intervals(intervals: &[TaskInterval], datetime_format: &str) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "START", "STOP", "DURATION"]);
        for interval in intervals {
            let stop = interval
                .stop_time
                .map(|t| format_timestamp(t, datetime_format))
                .unwrap_or_else(|| "-".to_string());
            table.add_row(row![
                interval.id,
                format_timestamp(interval.start_time, datetime_format),
                stop,
                format_duration(&Duration::seconds(interval.duration()))
            ]);
        }
        table.printstd();

        Ok(())
    }
}
