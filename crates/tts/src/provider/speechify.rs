use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;
use narrate_config::ProviderConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Map, Value};

use crate::{
    audio,
    error::{Result, TtsError},
    http_client::http_client,
    types::Voice,
};

use super::{TtsProvider, base_url, ensure_success};

const DEFAULT_SPEECHIFY_API_URL: &str = "https://api.sws.speechify.com/v1";

pub const DEFAULT_VOICE: &str = "cliff";

pub const DEFAULT_LANGUAGE: &str = "en-US";

/// The API has returned the base64 audio under each of these keys; the first
/// one holding a non-empty string wins.
const AUDIO_DATA_KEYS: [&str; 3] = ["audio_data", "audioData", "data"];

/// Speechify synthesis models
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::EnumString, strum::Display, strum::VariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum SpeechifyModel {
    /// Optimized for English
    #[default]
    SimbaEnglish,
    /// Multi-language model
    SimbaMultilingual,
}

/// Speechify TTS provider
///
/// The vendor answers with JSON carrying base64-encoded MP3 audio.
pub struct SpeechifyProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    voice: String,
    language: String,
    model: String,
}

impl SpeechifyProvider {
    pub fn new(config: &ProviderConfig, api_key: SecretString) -> Self {
        Self {
            client: http_client(),
            base_url: base_url(config.base_url.as_ref(), DEFAULT_SPEECHIFY_API_URL),
            api_key,
            voice: config.voice.clone().unwrap_or_else(|| DEFAULT_VOICE.to_string()),
            language: config.language.clone().unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            model: config
                .model
                .clone()
                .unwrap_or_else(|| SpeechifyModel::default().to_string()),
        }
    }

    /// Use `client` instead of the shared HTTP client
    #[must_use]
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key.expose_secret())
    }
}

#[derive(serde::Serialize)]
struct SpeechifyRequest<'a> {
    input: &'a str,
    voice_id: &'a str,
    language: &'a str,
    model: &'a str,
}

/// Pull the base64 audio payload out of a synthesis response
fn extract_audio(body: &Map<String, Value>) -> Result<Vec<u8>> {
    let encoded = AUDIO_DATA_KEYS
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str).filter(|data| !data.is_empty()))
        .ok_or(TtsError::MissingAudioData)?;

    base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|e| TtsError::InvalidAudioEncoding(e.to_string()))
}

#[async_trait]
impl TtsProvider for SpeechifyProvider {
    async fn synthesize(&self, text: &str, output_path: &Path) -> Result<PathBuf> {
        let url = format!("{}/audio/speech", self.base_url);

        tracing::debug!(
            "Speechify TTS request: model={}, voice={}, language={}, input_len={}",
            self.model,
            self.voice,
            self.language,
            text.len(),
        );

        let body = SpeechifyRequest {
            input: text,
            voice_id: &self.voice,
            language: &self.language,
            model: &self.model,
        };

        let response = self
            .client
            .post(&url)
            .header(http::header::AUTHORIZATION, self.bearer())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Speechify request failed: {e}");
                TtsError::transport("Speechify", &e)
            })?;

        let response = ensure_success("Speechify", response).await?;

        let bytes = response.bytes().await.map_err(|e| TtsError::transport("Speechify", &e))?;
        let payload: Map<String, Value> = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!("Speechify returned a non-JSON body: {e}");
            TtsError::MalformedResponse(e.to_string())
        })?;

        let audio = extract_audio(&payload).inspect_err(|e| {
            let keys: Vec<&String> = payload.keys().collect();
            tracing::error!("Unusable Speechify response ({e}), keys present: {keys:?}");
        })?;

        tracing::debug!("Speechify TTS synthesis complete, {} bytes", audio.len());

        audio::save(output_path, audio).await
    }

    async fn list_voices(&self) -> Result<Vec<Voice>> {
        let url = format!("{}/voices", self.base_url);

        let response = self
            .client
            .get(&url)
            .header(http::header::AUTHORIZATION, self.bearer())
            .send()
            .await
            .map_err(|e| TtsError::transport("Speechify", &e))?;

        let response = ensure_success("Speechify", response).await?;

        let bytes = response.bytes().await.map_err(|e| TtsError::transport("Speechify", &e))?;
        let voices: Vec<Voice> =
            serde_json::from_slice(&bytes).map_err(|e| TtsError::MalformedResponse(e.to_string()))?;

        tracing::debug!("Speechify returned {} voices", voices.len());

        Ok(voices)
    }

    fn name(&self) -> &str {
        "speechify"
    }
}
