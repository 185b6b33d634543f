#![allow(clippy::must_use_candidate)]

mod env;
mod loader;
pub mod log;
pub mod overrides;
pub mod provider;
pub mod server;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

pub use loader::ConfigFormat;
pub use log::*;
pub use overrides::*;
pub use provider::*;
pub use server::*;

/// Directory used for generated audio when `output_directory` is not set
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "output";

/// Top-level narrate configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name of the provider used for synthesis (a key of `providers`)
    #[serde(default)]
    pub active_provider: Option<String>,
    /// Vendor-specific provider blocks keyed by provider name
    #[serde(default)]
    pub providers: IndexMap<String, ProviderConfig>,
    /// Directory where generated audio files are written and served from
    #[serde(default)]
    pub output_directory: Option<PathBuf>,
    /// Companion file server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Output directory, falling back to [`DEFAULT_OUTPUT_DIRECTORY`]
    pub fn output_directory(&self) -> &Path {
        self.output_directory
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIRECTORY))
    }

    /// Configuration block of the active provider, if both are present
    pub fn active_provider_config(&self) -> Option<&ProviderConfig> {
        self.active_provider
            .as_deref()
            .and_then(|name| self.providers.get(name))
    }
}
