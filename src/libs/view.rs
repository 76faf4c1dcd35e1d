use crate::libs::stats::{GlobalStats, ProgressPoint};
use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

/// Width of a task id prefix that is comfortably unique for display.
const SHORT_ID_LEN: usize = 8;

pub struct View {}

impl View {
    pub fn tasks(tasks: &Vec<Task>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "FREQUENCY", "DONE", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                short_id(&task.id),
                task.title,
                task.frequency,
                if task.completed { "✓" } else { "" },
                task.created_at.format("%Y-%m-%d")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &GlobalStats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "DONE", "EFFICIENCY"]);
        table.add_row(row![stats.total, stats.done, format!("{}%", stats.efficiency)]);
        table.printstd();

        Ok(())
    }

    pub fn velocity(points: &[ProgressPoint]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DAY", "RATE", ""]);
        for point in points {
            table.add_row(row![
                point.label,
                format!("{}%", point.completion_rate),
                "█".repeat((point.completion_rate / 10) as usize)
            ]);
        }
        table.printstd();

        Ok(())
    }
}

fn short_id(id: &str) -> &str {
    &id[..id.len().min(SHORT_ID_LEN)]
}
