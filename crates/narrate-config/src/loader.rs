use std::path::Path;

use crate::Config;

/// Syntax of a configuration document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Pick the format from a file extension, defaulting to TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => Self::Yaml,
            _ => Self::Toml,
        }
    }
}

impl Config {
    /// Load configuration from a TOML or YAML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::parse(&raw, ConfigFormat::from_path(path))?;

        tracing::debug!(path = %path.display(), providers = config.providers.len(), "configuration loaded");

        Ok(config)
    }

    /// Parse and validate a configuration document held in memory
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn parse(raw: &str, format: ConfigFormat) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = match format {
            ConfigFormat::Toml => {
                toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?
            }
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate values the type system cannot express
    ///
    /// The active provider, its block and its credential are checked when
    /// the provider is selected, not here.
    ///
    /// # Errors
    ///
    /// Returns an error if a voice setting is out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, provider) in &self.providers {
            if let Some(settings) = provider.voice_settings {
                settings.validate(name)?;
            }
        }

        Ok(())
    }
}
