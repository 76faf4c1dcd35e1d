//! # Vrata - Minimalist Recurring-Task Tracker
//!
//! A command-line utility for tracking recurring tasks, reviewing completion
//! statistics, and generating AI productivity insights.
//!
//! ## Features
//!
//! - **Task Management**: Create, toggle, and delete tasks on a daily, weekly,
//!   or monthly cadence
//! - **Cadence Views**: List tasks per cadence with their completion rate
//! - **Analytics**: Global totals, efficiency percentage, and a seven-day
//!   completion-rate velocity series derived from real completion history
//! - **AI Insights**: One-sentence productivity observations from a
//!   generative-text endpoint
//! - **Local-First Storage**: The whole collection lives in a single JSON
//!   document in the platform application-data directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vrata::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
pub mod store;
