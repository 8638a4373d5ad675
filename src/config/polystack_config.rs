// src/config/polystack_config.rs

use serde::{Deserialize, Serialize};
use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Main polystack configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolystackConfig {
    /// File the "save" menu entry writes the most recent polynomial to
    pub output_path: String,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Print the menu and input prompts before reading each request
    pub prompt: bool,
}

impl Default for PolystackConfig {
    fn default() -> Self {
        PolystackConfig {
            output_path: "result.txt".to_string(),
            log_level: "info".to_string(),
            prompt: true,
        }
    }
}

impl PolystackConfig {
    /// Load configuration with precedence: env vars → config file → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("polystack.toml").exists() {
            builder = builder.add_source(File::with_name("polystack.toml"));
        } else if Path::new("polystack.yaml").exists() {
            builder = builder.add_source(File::with_name("polystack.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = PolystackConfig::default();
        Config::builder()
            .set_default("output_path", defaults.output_path)?
            .set_default("log_level", defaults.log_level)?
            .set_default("prompt", defaults.prompt)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // POLYSTACK_OUTPUT_PATH, POLYSTACK_LOG_LEVEL, POLYSTACK_PROMPT
        builder
            .add_source(
                Environment::with_prefix("POLYSTACK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
