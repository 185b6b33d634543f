use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Text-to-speech through ElevenLabs or Speechify
#[derive(Debug, Parser)]
#[command(name = "narrate", version, about)]
pub struct Args {
    /// Path to the configuration file (TOML, or YAML by extension)
    #[arg(short, long, default_value = "narrate.toml", env = "NARRATE_CONFIG", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert text to speech and save it as MP3
    Speak(SpeakArgs),
    /// List the voices offered by the active provider
    Voices,
    /// Serve the audio player and the generated files over HTTP
    Serve {
        /// Override the configured listen address
        #[arg(long, env = "NARRATE_LISTEN")]
        listen: Option<SocketAddr>,
    },
}

#[derive(Debug, clap::Args)]
pub struct SpeakArgs {
    /// Text to synthesize
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output file path (default: <output_directory>/<prefix>_<timestamp>.mp3)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// File name prefix for generated output paths
    #[arg(short, long, default_value = tts::output::DEFAULT_PREFIX)]
    pub prefix: String,

    /// Voice override
    #[arg(short, long)]
    pub voice: Option<String>,

    /// Language override, e.g. en-US (Speechify)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Model override
    #[arg(short, long)]
    pub model: Option<String>,
}
