use narrate_config::Config;
use secrecy::SecretString;

use crate::{
    error::{Result, TtsError},
    provider::{ElevenLabsProvider, Provider, ProviderKind, SpeechifyProvider},
};

type CredentialLookup<'a> = Box<dyn Fn(&str) -> Option<String> + 'a>;

/// Builds the active provider from configuration
///
/// Credentials are read through a lookup function, the process environment
/// by default, and handed to the adapter already resolved.
pub struct ProviderSelector<'a> {
    config: &'a Config,
    credentials: CredentialLookup<'a>,
}

impl<'a> ProviderSelector<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            credentials: Box::new(|variable: &str| std::env::var(variable).ok()),
        }
    }

    /// Replace the credential source
    #[must_use]
    pub fn with_credentials(mut self, lookup: impl Fn(&str) -> Option<String> + 'a) -> Self {
        self.credentials = Box::new(lookup);
        self
    }

    /// Construct the adapter named by `active_provider`
    ///
    /// Fails before any network traffic when the provider is unset,
    /// unconfigured, unknown, or its credential is missing.
    pub fn select(&self) -> Result<Provider> {
        let name = self
            .config
            .active_provider
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or(TtsError::MissingActiveProvider)?;

        let provider_config = self
            .config
            .providers
            .get(name)
            .ok_or_else(|| TtsError::ProviderNotConfigured(name.to_string()))?;

        let kind: ProviderKind = name
            .parse()
            .map_err(|_| TtsError::UnknownProvider(name.to_string()))?;

        let api_key = self.resolve_api_key(kind)?;

        tracing::debug!("Initializing TTS provider: {name}");

        let provider = match kind {
            ProviderKind::ElevenLabs => Provider::ElevenLabs(ElevenLabsProvider::new(provider_config, api_key)),
            ProviderKind::Speechify => Provider::Speechify(SpeechifyProvider::new(provider_config, api_key)),
        };

        Ok(provider)
    }

    fn resolve_api_key(&self, kind: ProviderKind) -> Result<SecretString> {
        let variable = kind.credential_variable();

        (self.credentials)(variable)
            .filter(|value| !value.trim().is_empty())
            .map(SecretString::from)
            .ok_or_else(|| TtsError::MissingCredential {
                provider: kind.to_string(),
                variable,
            })
    }
}

/// Select the active provider using credentials from the process environment
pub fn select_provider(config: &Config) -> Result<Provider> {
    ProviderSelector::new(config).select()
}
