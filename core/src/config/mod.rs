//! Configuration management
//!
//! YAML configuration under the user config directory, with named gateway
//! endpoints, an environment override for the gateway URL, and an
//! interactive setup wizard.

use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod endpoints;

pub use endpoints::EndpointConfig;

/// Default configuration file name
const CONFIG_FILE_NAME: &str = "askterm.yaml";

/// Default config directory name
const CONFIG_DIR_NAME: &str = "askterm";

/// Environment variable that overrides the resolved gateway URL.
pub const GATEWAY_URL_ENV: &str = "ASKTERM_GATEWAY_URL";

/// Main configuration structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Endpoint to use when none is named on the command line
    #[serde(default = "default_endpoint")]
    pub default_endpoint: String,

    /// List of configured gateway endpoints
    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,

    /// Console input policy
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// Input-side console policy. Enforced at the prompt, never in core logic.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConsoleConfig {
    /// Longest question accepted at the prompt, in characters
    #[serde(default = "default_max_question_chars")]
    pub max_question_chars: usize,
}

fn default_endpoint() -> String {
    "local".to_string()
}

fn default_max_question_chars() -> usize {
    500
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            max_question_chars: default_max_question_chars(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_endpoint: default_endpoint(),
            endpoints: vec![EndpointConfig::local_default()],
            console: ConsoleConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the config directory, falling back to defaults
    /// when no file exists yet.
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from a specific file path
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: Config = serde_yml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;

        Ok(config)
    }

    /// Save configuration to file, creating the parent directory if needed
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let content =
            serde_yml::to_string(self).context("Failed to serialize configuration")?;

        fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Location of the config file under the user config directory
    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Resolve an endpoint by name (or the configured default), applying the
    /// `ASKTERM_GATEWAY_URL` override if set.
    pub fn resolve_endpoint(&self, name: Option<&str>) -> Result<EndpointConfig> {
        let name = name.unwrap_or(&self.default_endpoint);

        let mut endpoint = self
            .endpoints
            .iter()
            .find(|e| e.name == name)
            .cloned()
            .with_context(|| format!("Endpoint '{}' not found in configuration", name))?;

        if let Ok(url) = env::var(GATEWAY_URL_ENV) {
            if !url.is_empty() {
                endpoint.url = url;
            }
        }

        Ok(endpoint)
    }

    /// Interactive setup wizard: prompts for the gateway endpoint and writes
    /// the config file.
    pub fn setup_interactive() -> Result<Self> {
        let theme = ColorfulTheme::default();

        let name: String = Input::with_theme(&theme)
            .with_prompt("Endpoint name")
            .default("local".to_string())
            .interact_text()?;

        let url: String = Input::with_theme(&theme)
            .with_prompt("Agent gateway URL")
            .default(EndpointConfig::local_default().url)
            .interact_text()?;

        let timeout_seconds: u64 = Input::with_theme(&theme)
            .with_prompt("Request timeout (seconds)")
            .default(60)
            .interact_text()?;

        let config = Config {
            default_endpoint: name.clone(),
            endpoints: vec![EndpointConfig {
                name,
                url,
                timeout_seconds,
            }],
            console: ConsoleConfig::default(),
        };

        let path = Self::config_path().context("Could not determine the config directory")?;
        config.save(&path)?;
        println!("Configuration written to {:?}", path);

        Ok(config)
    }
}
