pub mod elevenlabs;
pub mod speechify;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{
    error::{Result, TtsError},
    types::Voice,
};

pub use elevenlabs::ElevenLabsProvider;
pub use speechify::{SpeechifyModel, SpeechifyProvider};

/// Trait for TTS provider implementations
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize `text` and save the audio at `output_path`
    ///
    /// Performs one vendor call and, on success only, one file write.
    /// Returns the path of the written file.
    async fn synthesize(&self, text: &str, output_path: &Path) -> Result<PathBuf>;

    /// List the voices offered by the vendor
    async fn list_voices(&self) -> Result<Vec<Voice>> {
        Err(TtsError::Unsupported(format!(
            "voice listing is not supported by provider '{}'",
            self.name()
        )))
    }

    /// Get the provider name
    fn name(&self) -> &str;
}

/// The closed set of supported vendors
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ProviderKind {
    ElevenLabs,
    Speechify,
}

impl ProviderKind {
    /// Environment variable holding this vendor's API key
    pub const fn credential_variable(self) -> &'static str {
        match self {
            Self::ElevenLabs => "ELEVENLABS_API_KEY",
            Self::Speechify => "SPEECHIFY_API_KEY",
        }
    }
}

/// A provider bound to one vendor adapter
pub enum Provider {
    ElevenLabs(ElevenLabsProvider),
    Speechify(SpeechifyProvider),
}

impl Provider {
    pub const fn kind(&self) -> ProviderKind {
        match self {
            Self::ElevenLabs(_) => ProviderKind::ElevenLabs,
            Self::Speechify(_) => ProviderKind::Speechify,
        }
    }
}

#[async_trait]
impl TtsProvider for Provider {
    async fn synthesize(&self, text: &str, output_path: &Path) -> Result<PathBuf> {
        match self {
            Self::ElevenLabs(provider) => provider.synthesize(text, output_path).await,
            Self::Speechify(provider) => provider.synthesize(text, output_path).await,
        }
    }

    async fn list_voices(&self) -> Result<Vec<Voice>> {
        match self {
            Self::ElevenLabs(provider) => provider.list_voices().await,
            Self::Speechify(provider) => provider.list_voices().await,
        }
    }

    fn name(&self) -> &str {
        match self {
            Self::ElevenLabs(provider) => provider.name(),
            Self::Speechify(provider) => provider.name(),
        }
    }
}

/// Turn a non-2xx vendor response into an error carrying the vendor's message
pub(crate) async fn ensure_success(vendor: &str, response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

    tracing::error!("{vendor} API error ({status}): {error_text}");

    Err(TtsError::from_status(status.as_u16(), error_text))
}

/// Resolve the API base URL, honouring a configured override
pub(crate) fn base_url(configured: Option<&url::Url>, default: &str) -> String {
    configured
        .map_or(default, url::Url::as_str)
        .trim_end_matches('/')
        .to_string()
}
