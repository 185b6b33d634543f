use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Broad failure category, used by callers to decide how to report an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Missing or invalid configuration; fatal, never retried
    Configuration,
    /// Transport failure, timeout, or non-2xx vendor status
    Network,
    /// The vendor answered 2xx but the payload is unusable
    ResponseFormat,
    /// The output directory or file could not be written
    Filesystem,
    /// The caller asked for something that cannot be done
    InvalidRequest,
}

/// Synthesis errors
///
/// Messages never include the credential.
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("'active_provider' is not set in the configuration")]
    MissingActiveProvider,

    #[error("No configuration found for provider '{0}'")]
    ProviderNotConfigured(String),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("{variable} environment variable not set (required by provider '{provider}')")]
    MissingCredential { provider: String, variable: &'static str },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    #[error("No audio data in response")]
    MissingAudioData,

    #[error("Audio payload is not valid base64: {0}")]
    InvalidAudioEncoding(String),

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("Failed to write {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Text to synthesize must not be empty")]
    EmptyText,

    #[error("Unsupported operation: {0}")]
    Unsupported(String),
}

impl TtsError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingActiveProvider
            | Self::ProviderNotConfigured(_)
            | Self::UnknownProvider(_)
            | Self::MissingCredential { .. }
            | Self::ConfigError(_) => ErrorKind::Configuration,
            Self::ConnectionError(_)
            | Self::Timeout(_)
            | Self::AuthenticationFailed(_)
            | Self::ProviderApiError { .. } => ErrorKind::Network,
            Self::MissingAudioData | Self::InvalidAudioEncoding(_) | Self::MalformedResponse(_) => {
                ErrorKind::ResponseFormat
            }
            Self::Filesystem { .. } => ErrorKind::Filesystem,
            Self::EmptyText | Self::Unsupported(_) => ErrorKind::InvalidRequest,
        }
    }

    /// Classify a transport-level `reqwest` failure
    pub(crate) fn transport(vendor: &str, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(format!("{vendor} did not respond in time: {err}"))
        } else {
            Self::ConnectionError(format!("Failed to send request to {vendor}: {err}"))
        }
    }

    /// Classify a non-2xx vendor status
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => Self::AuthenticationFailed(message),
            _ => Self::ProviderApiError { status, message },
        }
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_network_errors() {
        let unauthorized = TtsError::from_status(401, "invalid api key".to_owned());
        assert!(matches!(unauthorized, TtsError::AuthenticationFailed(_)));
        assert_eq!(unauthorized.kind(), ErrorKind::Network);

        let server_error = TtsError::from_status(503, "busy".to_owned());
        assert_eq!(server_error.to_string(), "Provider API error (503): busy");
        assert_eq!(server_error.kind(), ErrorKind::Network);
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let err = TtsError::MissingCredential {
            provider: "speechify".to_owned(),
            variable: "SPEECHIFY_API_KEY",
        };

        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err.to_string(),
            "SPEECHIFY_API_KEY environment variable not set (required by provider 'speechify')"
        );
    }

    #[test]
    fn payload_errors_are_response_format() {
        assert_eq!(TtsError::MissingAudioData.kind(), ErrorKind::ResponseFormat);
        assert_eq!(
            TtsError::InvalidAudioEncoding("bad".to_owned()).kind(),
            ErrorKind::ResponseFormat
        );
        assert_eq!(ErrorKind::ResponseFormat.to_string(), "response_format");
    }
}
