//! Display implementation for vrata application messages.
//!
//! Single source of truth for all user-facing text. Every message shown in
//! the terminal is defined here, so wording stays consistent and parameters
//! are interpolated in one place.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskCompleted(title) => format!("Task '{}' marked as done", title),
            Message::TaskReopened(title) => format!("Task '{}' reopened", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskNotFound(id) => format!("No task matches '{}'", id),
            Message::AmbiguousTaskId(id) => format!("Several tasks match '{}', use a longer id", id),
            Message::TaskTitleEmpty => "Task title is empty, nothing was added".to_string(),
            Message::TasksHeader(frequency) => format!("Tasks ({})", frequency),
            Message::NoTasksForFrequency(frequency) => format!("No {} tasks yet", frequency),
            Message::CompletionRate(rate) => format!("Completion rate: {}%", rate),

            // === ANALYTICS MESSAGES ===
            Message::AnalyticsHeader => "Analytics".to_string(),
            Message::VelocityHeader => "Velocity, last 7 days".to_string(),
            Message::NoTasksYet => "No tasks yet".to_string(),

            // === INSIGHT MESSAGES ===
            Message::InsightRequested => "Analyzing your patterns...".to_string(),
            Message::InsightApiKeyMissing => "No API key configured. Run 'vrata init' or set VRATA_API_KEY".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptInsightApiUrl => "Enter the generative API base URL".to_string(),
            Message::PromptInsightModel => "Enter the model name".to_string(),
            Message::PromptInsightApiKey => "Enter your API key (leave empty to use VRATA_API_KEY)".to_string(),
        };
        write!(f, "{}", text)
    }
}
