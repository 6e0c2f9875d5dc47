//! Application configuration.
//!
//! Settings live in `config.json` next to the task list, in the platform
//! application data directory. Every module is optional: a missing file or
//! a missing section simply means defaults, so the application runs with
//! zero setup and `tudu init` only has to be used when the defaults are
//! wrong.
//!
//! ## Modules
//!
//! - **defaults**: priority and category applied to new tasks when the
//!   `add` command is not given explicit flags
//! - **export**: where exported files are written
//!
//! Unconfigured modules are omitted from the JSON output entirely.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::task::{default_category, Priority};
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module, as listed by the interactive wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Defaults applied to tasks created without explicit flags.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DefaultsConfig {
    pub priority: Priority,
    pub category: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            priority: Priority::Medium,
            category: default_category(),
        }
    }
}

/// Export output settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct ExportConfig {
    /// Directory exported files are written to; the current directory
    /// when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Config {
    /// Reads the configuration file, or returns defaults if none exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are pre-filled as prompt defaults, so re-running
    /// the wizard to change one module leaves the others untouched.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let node_descriptions = vec![
            ConfigModule {
                key: "defaults".to_string(),
                name: "Task defaults".to_string(),
            },
            ConfigModule {
                key: "export".to_string(),
                name: "Export".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "defaults" => {
                    let default = config.defaults.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDefaults);

                    let priorities = [Priority::Low, Priority::Medium, Priority::High];
                    let current = priorities.iter().position(|p| *p == default.priority).unwrap_or(1);
                    let chosen = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultPriority.to_string())
                        .items(&priorities)
                        .default(current)
                        .interact()?;

                    config.defaults = Some(DefaultsConfig {
                        priority: priorities[chosen],
                        category: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultCategory.to_string())
                            .default(default.category)
                            .interact_text()?,
                    });
                }
                "export" => {
                    let default = config.export.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleExport);

                    let output_dir: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptExportDir.to_string())
                        .default(default.output_dir.map(|p| p.display().to_string()).unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;

                    config.export = Some(ExportConfig {
                        output_dir: if output_dir.is_empty() { None } else { Some(PathBuf::from(output_dir)) },
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
