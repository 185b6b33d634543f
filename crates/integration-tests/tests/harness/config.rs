//! Configuration documents for integration tests

use std::fmt::Write;
use std::path::Path;

use narrate_config::{Config, ConfigFormat};

/// Builder producing a TOML document, parsed the same way as a config file
pub struct ConfigBuilder {
    document: String,
}

impl ConfigBuilder {
    /// Start a document with the given active provider
    pub fn new(active_provider: &str) -> Self {
        Self {
            document: format!("active_provider = \"{active_provider}\"\n"),
        }
    }

    /// Start a document without an active provider
    pub fn without_active_provider() -> Self {
        Self {
            document: String::new(),
        }
    }

    /// Set the output directory
    pub fn with_output_directory(mut self, directory: &Path) -> Self {
        // Top-level keys must come before any table
        self.document = format!("output_directory = {:?}\n{}", directory.display().to_string(), self.document);
        self
    }

    /// Set the static asset directory of the file server
    pub fn with_static_directory(mut self, directory: &Path) -> Self {
        writeln!(
            self.document,
            "[server]\nstatic_directory = {:?}",
            directory.display().to_string()
        )
        .unwrap();
        self
    }

    /// Add a provider block pointing at `base_url`, with extra `key = value` lines
    pub fn with_provider(mut self, name: &str, base_url: &str, extra: &[&str]) -> Self {
        writeln!(self.document, "[providers.{name}]\nbase_url = \"{base_url}\"").unwrap();
        for line in extra {
            writeln!(self.document, "{line}").unwrap();
        }
        self
    }

    pub fn build(self) -> Config {
        Config::parse(&self.document, ConfigFormat::Toml).expect("test config must parse")
    }
}
