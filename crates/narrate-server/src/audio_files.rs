use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{Json, extract::State};

use crate::error::ServerError;

/// Extension of the files the player can list
const AUDIO_EXTENSION: &str = ".mp3";

pub struct AudioFilesState {
    pub output_directory: PathBuf,
}

/// `GET /api/audio-files`: names of the MP3 files in the output directory
pub async fn list_handler(State(state): State<Arc<AudioFilesState>>) -> Result<Json<Vec<String>>, ServerError> {
    let files = list_audio_files(&state.output_directory).await?;

    tracing::debug!("listing {} audio files", files.len());

    Ok(Json(files))
}

/// Sorted names of the regular files ending in `.mp3` directly inside `directory`
pub async fn list_audio_files(directory: &Path) -> Result<Vec<String>, ServerError> {
    if !tokio::fs::metadata(directory).await.is_ok_and(|m| m.is_dir()) {
        return Err(ServerError::OutputDirectoryMissing(directory.to_path_buf()));
    }

    let mut entries = tokio::fs::read_dir(directory).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };

        if name.ends_with(AUDIO_EXTENSION) && entry.file_type().await?.is_file() {
            files.push(name);
        }
    }

    files.sort();

    Ok(files)
}
