use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for a single TTS provider
///
/// There is no cross-vendor schema: every adapter reads the subset of keys
/// it understands and falls back to its own defaults for the rest.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Voice identifier (`ElevenLabs`)
    #[serde(default)]
    pub voice_id: Option<String>,
    /// Voice name (Speechify)
    #[serde(default)]
    pub voice: Option<String>,
    /// Vendor model identifier
    #[serde(default)]
    pub model: Option<String>,
    /// Language code, e.g. `en-US` (Speechify)
    #[serde(default)]
    pub language: Option<String>,
    /// Voice tuning parameters (`ElevenLabs`)
    #[serde(default)]
    pub voice_settings: Option<VoiceSettings>,
    /// Base URL override for the vendor API
    #[serde(default)]
    pub base_url: Option<Url>,
}

/// `ElevenLabs` voice tuning parameters
///
/// Missing keys fall back to the built-in defaults individually.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VoiceSettings {
    pub stability: f64,
    pub similarity_boost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.4,
            similarity_boost: 0.8,
            style: None,
            use_speaker_boost: None,
        }
    }
}

impl VoiceSettings {
    /// Check that every ratio lies in `[0.0, 1.0]`
    pub(crate) fn validate(&self, provider: &str) -> anyhow::Result<()> {
        let ratios = [
            ("stability", Some(self.stability)),
            ("similarity_boost", Some(self.similarity_boost)),
            ("style", self.style),
        ];

        for (key, value) in ratios {
            if let Some(value) = value
                && !(0.0..=1.0).contains(&value)
            {
                anyhow::bail!("providers.{provider}.voice_settings.{key} must be between 0.0 and 1.0, got {value}");
            }
        }

        Ok(())
    }
}
