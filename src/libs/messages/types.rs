#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskDeleted(String),
    TaskNotFound(String),
    AmbiguousTaskId(String),
    TaskTitleEmpty,
    TasksHeader(String),
    NoTasksForFrequency(String),
    CompletionRate(u32),

    // === ANALYTICS MESSAGES ===
    AnalyticsHeader,
    VelocityHeader,
    NoTasksYet,

    // === INSIGHT MESSAGES ===
    InsightRequested,
    InsightApiKeyMissing,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptSelectModules,
    PromptInsightApiUrl,
    PromptInsightModel,
    PromptInsightApiKey,
}
