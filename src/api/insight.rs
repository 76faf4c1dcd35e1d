//! Productivity insight requester.
//!
//! Summarizes the task collection into a compact digest, sends it to a
//! Gemini-style `generateContent` endpoint with a fixed coaching instruction,
//! and surfaces the returned sentence. The request lifecycle is a small state
//! machine:
//!
//! ```text
//! Idle ──generate──▶ Loading ──▶ Succeeded(text) | Failed(message)
//! ```
//!
//! At most one request is outstanding: `generate` while `Loading` is a no-op.
//! Every failure cause (network, auth, malformed response) collapses into one
//! fixed user-visible message; there is no retry and no cause distinction.

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFrequency};
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const API_KEY_ENV: &str = "VRATA_API_KEY";
const GENERATE_URL: &str = "v1beta/models";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Shown when the endpoint answers with empty text.
pub const FALLBACK_INSIGHT: &str = "Focus on the essential. Completion is the only metric.";
/// Shown when the request fails for any reason.
pub const FAILED_INSIGHT: &str = "Failed to generate insight.";

const SYSTEM_INSTRUCTION: &str = "You are a minimalist, stoic productivity coach. \
    Provide a very brief, high-impact insight or observation about the user's progress. \
    Keep it under 30 words. \
    Style: Direct, professional, slightly dark/minimalist aesthetic. No emojis.";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InsightConfig {
    pub api_url: String,
    pub model: String,
    /// Optional key stored in the configuration file. When absent the
    /// `VRATA_API_KEY` environment variable is consulted instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl InsightConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "insight".to_string(),
            name: "Insight".to_string(),
        }
    }

    pub fn init(config: &Option<InsightConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or_default();
        println!("Insight settings");
        let api_url = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptInsightApiUrl.to_string())
            .default(config.api_url)
            .interact_text()?;
        let model = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptInsightModel.to_string())
            .default(config.model)
            .interact_text()?;
        let api_key: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptInsightApiKey.to_string())
            .default(config.api_key.unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Self {
            api_url,
            model,
            api_key: if api_key.is_empty() { None } else { Some(api_key) },
        })
    }

    /// Resolves the API key from the configuration or the environment.
    pub fn api_key(&self) -> Result<String> {
        dotenv::dotenv().ok();
        if let Some(key) = &self.api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }
        env::var(API_KEY_ENV).map_err(|_| msg_error_anyhow!(Message::InsightApiKeyMissing))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InsightState {
    Idle,
    Loading,
    Succeeded(String),
    Failed(String),
}

pub struct Insight {
    client: Client,
    config: InsightConfig,
    pub state: InsightState,
}

impl Insight {
    pub fn new(config: &InsightConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            state: InsightState::Idle,
        }
    }

    /// Runs one insight request, driving the state machine to `Succeeded` or
    /// `Failed`. A call while a request is outstanding changes nothing.
    pub async fn generate(&mut self, tasks: &[Task]) -> &InsightState {
        if self.state == InsightState::Loading {
            return &self.state;
        }

        self.state = InsightState::Loading;
        self.state = match self.request(tasks).await {
            Ok(text) => InsightState::Succeeded(text),
            Err(e) => {
                msg_debug!(format!("Insight request failed: {}", e));
                InsightState::Failed(FAILED_INSIGHT.to_string())
            }
        };

        &self.state
    }

    async fn request(&self, tasks: &[Task]) -> Result<String> {
        let api_key = self.config.api_key()?;
        let url = format!("{}/{}/{}:generateContent", self.config.api_url, GENERATE_URL, self.config.model);
        let body = GenerateRequest::new(SYSTEM_INSTRUCTION, &format!("Analyze this user's task data:\n{}", digest(tasks)));

        let res = self.client.post(url).header(API_KEY_HEADER, api_key).json(&body).send().await?;
        let res = res.error_for_status()?;
        let parsed = res.json::<GenerateResponse>().await?;

        let text = parsed.text();
        let text = text.trim();
        if text.is_empty() {
            return Ok(FALLBACK_INSIGHT.to_string());
        }
        Ok(text.to_string())
    }
}

/// Fixed-format digest of the collection sent as the prompt body.
pub fn digest(tasks: &[Task]) -> String {
    let completed = tasks.iter().filter(|t| t.completed).count();
    let cadence = |frequency: TaskFrequency| {
        let subset: Vec<&Task> = tasks.iter().filter(|t| t.frequency == frequency).collect();
        let done = subset.iter().filter(|t| t.completed).count();
        (subset.len(), done)
    };
    let (daily, daily_done) = cadence(TaskFrequency::Daily);
    let (weekly, weekly_done) = cadence(TaskFrequency::Weekly);
    let (monthly, monthly_done) = cadence(TaskFrequency::Monthly);

    format!(
        "Total Tasks: {}\nCompleted: {}\nDaily Tasks: {} ({} done)\nWeekly Tasks: {} ({} done)\nMonthly Tasks: {} ({} done)",
        tasks.len(),
        completed,
        daily,
        daily_done,
        weekly,
        weekly_done,
        monthly,
        monthly_done
    )
}

#[derive(Serialize)]
struct GenerateRequest {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    contents: Vec<Content>,
}

impl GenerateRequest {
    fn new(instruction: &str, prompt: &str) -> Self {
        Self {
            system_instruction: Content::from_text(instruction),
            contents: vec![Content::from_text(prompt)],
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

impl Content {
    fn from_text(text: &str) -> Self {
        Self {
            parts: vec![Part { text: text.to_string() }],
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl GenerateResponse {
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .unwrap_or_default()
    }
}
