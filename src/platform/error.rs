use thiserror::Error;

/// Failures while attributing a path to a volume.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path does not belong to any volume under the active model.
    #[error("invalid path '{0}'")]
    InvalidPath(String),

    /// The host is neither Windows nor macOS.
    #[error("OS not supported: {0}")]
    UnsupportedPlatform(String),

    /// The current user's home directory could not be determined.
    #[error("unable to determine the current user's home directory")]
    HomeDirUnavailable,
}
