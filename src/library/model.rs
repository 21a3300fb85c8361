use std::path::PathBuf;

/// Audio files found directly inside one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    /// The directory path as a string; the crate name is derived from it.
    pub key: String,
    /// Absolute track paths in walk order.
    pub tracks: Vec<PathBuf>,
}
