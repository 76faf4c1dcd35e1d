use chrono::{DateTime, Local};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Recurrence cadence of a task.
///
/// Serialized in uppercase to keep state files readable and stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for TaskFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskFrequency::Daily => write!(f, "daily"),
            TaskFrequency::Weekly => write!(f, "weekly"),
            TaskFrequency::Monthly => write!(f, "monthly"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub frequency: TaskFrequency,
    pub created_at: DateTime<Local>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Local>>,
}

impl Task {
    pub fn new(title: &str, frequency: TaskFrequency) -> Self {
        Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            completed: false,
            frequency,
            created_at: Local::now(),
            completed_at: None,
        }
    }

    /// Flips completion. `completed_at` is set on the transition to completed
    /// and cleared on the transition back.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
        self.completed_at = if self.completed { Some(Local::now()) } else { None };
    }
}

#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    ByFrequency(TaskFrequency),
}
