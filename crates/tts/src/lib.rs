#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Text-to-speech synthesis through third-party vendors
//!
//! A [`ProviderSelector`] turns the configuration into one vendor adapter,
//! and a [`Pipeline`] drives a single "say this, save it there" request
//! through it.

mod audio;
mod error;
mod http_client;
pub mod output;
mod pipeline;
mod provider;
mod selector;
mod types;

pub use audio::write_audio;
pub use error::{ErrorKind, Result, TtsError};
pub use pipeline::{Pipeline, RECOMMENDED_MAX_CHARS};
pub use provider::{ElevenLabsProvider, Provider, ProviderKind, SpeechifyModel, SpeechifyProvider, TtsProvider};
pub use selector::{ProviderSelector, select_provider};
pub use types::{SynthesisOutcome, SynthesisRequest, Voice};
