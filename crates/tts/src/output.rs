use std::path::{Path, PathBuf};

use jiff::Zoned;

/// File name prefix used when the caller does not supply one
pub const DEFAULT_PREFIX: &str = "tts_output";

/// `<prefix>_<YYYYMMDD_HHMMSS>.mp3`
pub fn default_file_name(prefix: &str, now: &Zoned) -> String {
    format!("{prefix}_{}.mp3", now.strftime("%Y%m%d_%H%M%S"))
}

/// Pick the output path of one invocation
///
/// An explicit path is used verbatim; otherwise a timestamped name is placed
/// inside `directory`.
pub fn resolve_output_path(explicit: Option<&Path>, directory: &Path, prefix: &str) -> PathBuf {
    explicit.map_or_else(
        || directory.join(default_file_name(prefix, &Zoned::now())),
        Path::to_path_buf,
    )
}
