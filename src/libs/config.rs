//! Configuration management for the tydo application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory and loaded on startup; a missing file simply yields the
//! defaults, so the application runs with zero setup. Each configurable
//! area is an optional module on [`Config`], omitted from the file when
//! unset.
//!
//! Only display preferences are configurable today: the sort mode the task
//! list opens with and the width of the description column. Task data is
//! never part of the configuration: the store is in-memory and state is
//! discarded on exit.
//!
//! ```rust,no_run
//! use tydo::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! // Load existing configuration or fall back to defaults
//! let config = Config::read()?;
//! let _mode = config.default_sort();
//!
//! // Run the interactive setup wizard and persist the result
//! Config::init()?.save()?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::sort::SortMode;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Display preferences for the task list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Single-letter code of the sort mode the session opens with.
    pub default_sort: String,
    /// Maximum characters of the description column before truncation.
    pub description_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            default_sort: "D".to_string(),
            description_width: 50,
        }
    }
}

/// Root configuration object. Every module is optional so the file stays
/// minimal and new modules never break existing setups.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Reads the configuration file, returning defaults when no file
    /// exists. A present-but-unparsable file is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON, creating the data
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Existing values pre-fill the prompts so
    /// re-running only changes what the user edits.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.display.clone().unwrap_or_default();

        msg_print!(Message::ConfigModuleDisplay);

        let default_sort: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultSort.to_string())
            .default(default.default_sort)
            .interact_text()?;
        // Normalize whatever was typed to a valid single-letter code.
        let default_sort = SortMode::from_code(&default_sort).unwrap_or_default().code().to_string();

        config.display = Some(DisplayConfig {
            default_sort,
            description_width: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDescriptionWidth.to_string())
                .default(default.description_width)
                .interact_text()?,
        });

        Ok(config)
    }

    /// Sort mode the session opens with. Unrecognized stored codes fall
    /// back to the default mode.
    pub fn default_sort(&self) -> SortMode {
        self.display
            .as_ref()
            .and_then(|display| SortMode::from_code(&display.default_sort))
            .unwrap_or_default()
    }

    pub fn description_width(&self) -> usize {
        self.display
            .as_ref()
            .map(|display| display.description_width)
            .unwrap_or_else(|| DisplayConfig::default().description_width)
    }

    /// Records `mode` as the configured default sort and persists it.
    pub fn set_default_sort(&mut self, mode: SortMode) -> Result<()> {
        let mut display = self.display.clone().unwrap_or_default();
        display.default_sort = mode.code().to_string();
        self.display = Some(display);
        self.save()
    }
}
