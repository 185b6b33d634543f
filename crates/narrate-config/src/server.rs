use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Companion file server configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default)]
    pub listen_address: Option<SocketAddr>,
    /// Directory holding the player page (`index.html`, `script.js`, ...)
    #[serde(default)]
    pub static_directory: Option<PathBuf>,
}

impl ServerConfig {
    pub fn listen_address(&self) -> SocketAddr {
        self.listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)))
    }

    pub fn static_directory(&self) -> &Path {
        self.static_directory.as_deref().unwrap_or_else(|| Path::new("static"))
    }
}
