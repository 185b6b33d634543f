use crate::{
    error::{Result, TtsError},
    provider::{Provider, TtsProvider},
    types::{SynthesisOutcome, SynthesisRequest},
};

/// Vendors accept longer input, but quality and latency degrade past this
pub const RECOMMENDED_MAX_CHARS: usize = 5000;

/// Drives one synthesis: validate input, call the provider, report the result
pub struct Pipeline<P = Provider> {
    provider: P,
}

impl<P: TtsProvider> Pipeline<P> {
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Synthesize the request's text into its output path
    ///
    /// Blank text is rejected before any network call. Text above
    /// [`RECOMMENDED_MAX_CHARS`] only produces a warning.
    pub async fn run(&self, request: SynthesisRequest) -> Result<SynthesisOutcome> {
        if request.text.trim().is_empty() {
            return Err(TtsError::EmptyText);
        }

        let chars = request.text.chars().count();
        if chars > RECOMMENDED_MAX_CHARS {
            tracing::warn!(
                chars,
                limit = RECOMMENDED_MAX_CHARS,
                "text is longer than the recommended limit"
            );
        }

        tracing::info!(
            provider = self.provider.name(),
            chars,
            output = %request.output_path.display(),
            "synthesizing speech"
        );

        let path = self.provider.synthesize(&request.text, &request.output_path).await?;

        let bytes_written = tokio::fs::metadata(&path)
            .await
            .map_err(|e| TtsError::filesystem(&path, e))?
            .len();

        tracing::info!(path = %path.display(), bytes_written, "audio saved");

        Ok(SynthesisOutcome { path, bytes_written })
    }
}
