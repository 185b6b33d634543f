#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;
mod commands;

use std::process::ExitCode;

use args::{Args, Command};
use clap::Parser;
use narrate_config::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let kind = e.downcast_ref::<tts::TtsError>().map(tts::TtsError::kind);

            tracing::error!(kind = ?kind, "{e:#}");
            match kind {
                Some(kind) => eprintln!("error ({kind}): {e:#}"),
                None => eprintln!("error: {e:#}"),
            }

            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    // Credentials may live in a local .env file
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        anyhow::bail!("failed to load .env: {e}");
    }

    let config = Config::load(&args.config)?;

    let default_filter = match args.command {
        Command::Serve { .. } => "info",
        Command::Speak(_) | Command::Voices => "warn",
    };
    narrate_telemetry::init(&config.log, default_filter)?;

    tracing::info!(config_path = %args.config.display(), "starting narrate");

    match args.command {
        Command::Speak(speak) => commands::speak(config, speak).await,
        Command::Voices => commands::voices(&config).await,
        Command::Serve { listen } => commands::serve(&config, listen).await,
    }
}
