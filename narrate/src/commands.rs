use std::net::SocketAddr;

use anyhow::Context;
use narrate_config::{Config, ProviderOverrides};
use narrate_server::Server;
use strum::VariantNames;
use tokio_util::sync::CancellationToken;
use tts::{Pipeline, ProviderKind, SpeechifyModel, SynthesisRequest, TtsProvider};

use crate::args::SpeakArgs;

/// `narrate speak`
#[allow(clippy::cast_precision_loss)]
pub async fn speak(mut config: Config, args: SpeakArgs) -> anyhow::Result<()> {
    let text = match (args.text, &args.file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
            .trim()
            .to_string(),
        (None, None) => anyhow::bail!("provide the text to synthesize or --file"),
    };

    let active = config.active_provider.as_deref().and_then(|name| name.parse::<ProviderKind>().ok());

    if let (Some(ProviderKind::Speechify), Some(model)) = (active, args.model.as_deref()) {
        model.parse::<SpeechifyModel>().map_err(|_| {
            anyhow::anyhow!(
                "invalid model '{model}' for speechify, expected one of: {}",
                SpeechifyModel::VARIANTS.join(", ")
            )
        })?;
    }

    if active == Some(ProviderKind::ElevenLabs) && args.language.is_some() {
        tracing::warn!("--language is ignored by the elevenlabs provider");
    }

    config.apply_overrides(&ProviderOverrides {
        voice: args.voice,
        language: args.language,
        model: args.model,
    });

    let provider = tts::select_provider(&config)?;

    let output_path =
        tts::output::resolve_output_path(args.output.as_deref(), config.output_directory(), &args.prefix);

    println!("Converting {} characters with {}...", text.chars().count(), provider.name());

    let outcome = Pipeline::new(provider)
        .run(SynthesisRequest::new(text, output_path))
        .await?;

    println!("Audio saved to {}", outcome.path.display());
    println!("File size: {:.1} KB", outcome.bytes_written as f64 / 1024.0);

    Ok(())
}

/// `narrate voices`
pub async fn voices(config: &Config) -> anyhow::Result<()> {
    let provider = tts::select_provider(config)?;
    let voices = provider.list_voices().await?;

    println!("Available voices ({}):", voices.len());

    for voice in voices {
        println!("  - ID: {}", voice.id);
        println!("    Name: {}", voice.name.as_deref().unwrap_or("N/A"));
        println!("    Language: {}", voice.language.as_deref().unwrap_or("N/A"));
        println!("    Gender: {}", voice.gender.as_deref().unwrap_or("N/A"));
    }

    Ok(())
}

/// `narrate serve`
pub async fn serve(config: &Config, listen: Option<SocketAddr>) -> anyhow::Result<()> {
    let mut server = Server::new(config);
    if let Some(listen) = listen {
        server = server.with_listen_address(listen);
    }

    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        narrate_server::shutdown_signal().await;
        shutdown_clone.cancel();
    });

    server.serve(shutdown).await
}
