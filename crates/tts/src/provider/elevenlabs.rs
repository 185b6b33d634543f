use std::path::{Path, PathBuf};

use async_trait::async_trait;
use narrate_config::{ProviderConfig, VoiceSettings};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    audio,
    error::{Result, TtsError},
    http_client::http_client,
};

use super::{TtsProvider, base_url, ensure_success};

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";

/// Domi
pub const DEFAULT_VOICE_ID: &str = "AZnzlk1XvdvUeBnXmlld";

pub const DEFAULT_MODEL: &str = "eleven_multilingual_v2";

/// `ElevenLabs` TTS provider
///
/// The vendor answers with raw MP3 bytes, written to disk unchanged.
pub struct ElevenLabsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    voice_id: String,
    model: String,
    voice_settings: VoiceSettings,
}

impl ElevenLabsProvider {
    pub fn new(config: &ProviderConfig, api_key: SecretString) -> Self {
        Self {
            client: http_client(),
            base_url: base_url(config.base_url.as_ref(), DEFAULT_ELEVENLABS_API_URL),
            api_key,
            voice_id: config.voice_id.clone().unwrap_or_else(|| DEFAULT_VOICE_ID.to_string()),
            model: config.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            voice_settings: config.voice_settings.unwrap_or_default(),
        }
    }

    /// Use `client` instead of the shared HTTP client
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn voice_id(&self) -> &str {
        &self.voice_id
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub const fn voice_settings(&self) -> &VoiceSettings {
        &self.voice_settings
    }
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: &'a VoiceSettings,
}

#[async_trait]
impl TtsProvider for ElevenLabsProvider {
    async fn synthesize(&self, text: &str, output_path: &Path) -> Result<PathBuf> {
        let url = format!("{}/text-to-speech/{}", self.base_url, self.voice_id);

        tracing::debug!(
            "ElevenLabs TTS request: model={}, voice={}, input_len={}",
            self.model,
            self.voice_id,
            text.len(),
        );

        let body = ElevenLabsRequest {
            text,
            model_id: &self.model,
            voice_settings: &self.voice_settings,
        };

        let response = self
            .client
            .post(&url)
            .header(http::header::ACCEPT, "audio/mpeg")
            .header("xi-api-key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("ElevenLabs request failed: {e}");
                TtsError::transport("ElevenLabs", &e)
            })?;

        let response = ensure_success("ElevenLabs", response).await?;

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read ElevenLabs response body: {e}");
            TtsError::transport("ElevenLabs", &e)
        })?;

        if audio.is_empty() {
            return Err(TtsError::MissingAudioData);
        }

        tracing::debug!("ElevenLabs TTS synthesis complete, {} bytes", audio.len());

        audio::save(output_path, audio.to_vec()).await
    }

    fn name(&self) -> &str {
        "elevenlabs"
    }
}
