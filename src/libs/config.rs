//! Configuration management for the vrata application.
//!
//! Settings live in a JSON file in the platform application-data directory.
//! Each integration is an optional module, so the file only carries what the
//! user actually configured, and a missing file simply means defaults.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\vrata\config.json`
//! - **macOS**: `~/Library/Application Support/vrata/config.json`
//! - **Linux**: `~/.local/share/vrata/config.json`
//!
//! ## Interactive Setup
//!
//! `Config::init` runs a guided wizard: it presents the configurable modules,
//! pre-fills existing values as defaults, and returns the updated
//! configuration for saving.

use crate::api::insight::InsightConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module, as presented by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Generative-text endpoint used by the insight command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight: Option<InsightConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn remove() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![InsightConfig::module()];
        let module_names: Vec<String> = modules.iter().map(|m| m.name.clone()).collect();
        let selections = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&module_names)
            .interact()?;

        for index in selections {
            if modules[index].key == "insight" {
                config.insight = Some(InsightConfig::init(&config.insight)?);
            }
        }

        Ok(config)
    }
}
