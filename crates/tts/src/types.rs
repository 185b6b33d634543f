use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One synthesis invocation: what to say and where to save it
///
/// Voice, language and model are bound when the provider is selected.
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub text: String,
    pub output_path: PathBuf,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            text: text.into(),
            output_path: output_path.into(),
        }
    }
}

/// Result of a successful synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisOutcome {
    /// Path of the written audio file
    pub path: PathBuf,
    /// Size of the written file
    pub bytes_written: u64,
}

/// Voice descriptor returned by a provider's voice listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VendorVoice")]
pub struct Voice {
    pub id: String,
    pub name: Option<String>,
    pub language: Option<String>,
    pub gender: Option<String>,
}

/// Voice as vendors send it; `display_name`/`locale` are older spellings
/// and lose to `name`/`language` when both are present
#[derive(Deserialize)]
struct VendorVoice {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    locale: Option<String>,
    #[serde(default)]
    gender: Option<String>,
}

impl From<VendorVoice> for Voice {
    fn from(voice: VendorVoice) -> Self {
        Self {
            id: voice.id,
            name: voice.name.or(voice.display_name),
            language: voice.language.or(voice.locale),
            gender: voice.gender,
        }
    }
}
