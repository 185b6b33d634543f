use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Result, TtsError};

/// Mode of written audio files; temporary files start out owner-only
#[cfg(unix)]
const AUDIO_FILE_MODE: u32 = 0o644;

/// Write a complete audio payload to `path`
///
/// Parent directories are created first. The bytes go to a temporary file in
/// the destination directory which is then renamed over `path`, so a failure
/// at any step leaves nothing at `path`.
pub fn write_audio(path: &Path, audio: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent).map_err(|e| TtsError::filesystem(parent, e))?;

    let mut file = NamedTempFile::new_in(parent).map_err(|e| TtsError::filesystem(parent, e))?;
    file.write_all(audio).map_err(|e| TtsError::filesystem(path, e))?;
    file.as_file().sync_all().map_err(|e| TtsError::filesystem(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(AUDIO_FILE_MODE))
            .map_err(|e| TtsError::filesystem(path, e))?;
    }

    file.persist(path).map_err(|e| TtsError::filesystem(path, e.error))?;

    Ok(())
}

/// Write audio off the async runtime and return the path written
pub(crate) async fn save(path: &Path, audio: Vec<u8>) -> Result<PathBuf> {
    let target = path.to_path_buf();

    tokio::task::spawn_blocking(move || write_audio(&target, &audio).map(|()| target))
        .await
        .map_err(|e| TtsError::filesystem(path, std::io::Error::other(e)))?
}
