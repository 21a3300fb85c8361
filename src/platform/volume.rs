use std::fmt;

use super::{HostOs, PathError};

const DARWIN_VOLUMES_PREFIX: &str = "/Volumes/";
const DARWIN_ROOT: &str = "/";
const UNC_PREFIX: &str = "\\\\";

/// A storage root under one of the supported path models.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Volume {
    /// Windows drive designator (`C:`) or UNC share (`\\server\share`).
    Drive(String),
    /// macOS mounted volume, always `/Volumes/<name>`.
    Mount(String),
    /// The single filesystem root on macOS.
    Root,
}

impl Volume {
    /// String form as it appears at the start of a path.
    pub fn as_str(&self) -> &str {
        match self {
            Volume::Drive(d) => d,
            Volume::Mount(m) => m,
            Volume::Root => DARWIN_ROOT,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, Volume::Root)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identify the volume `path` lives on.
///
/// Returns `Ok(None)` when the path is not absolute under the host's model,
/// and `UnsupportedPlatform` when the host has no model at all.
pub fn resolve_volume(path: &str, os: &HostOs) -> Result<Option<Volume>, PathError> {
    match os {
        HostOs::Windows => Ok(windows_volume(path)),
        HostOs::Darwin => Ok(darwin_volume(path)),
        HostOs::Unsupported(name) => Err(PathError::UnsupportedPlatform(name.clone())),
    }
}

fn darwin_volume(path: &str) -> Option<Volume> {
    if let Some(rest) = path.strip_prefix(DARWIN_VOLUMES_PREFIX) {
        let name = rest.split('/').next().unwrap_or_default();
        if !name.is_empty() {
            return Some(Volume::Mount(format!("{DARWIN_VOLUMES_PREFIX}{name}")));
        }
    }

    if path.starts_with(DARWIN_ROOT) {
        return Some(Volume::Root);
    }

    None
}

fn windows_volume(path: &str) -> Option<Volume> {
    let designator = if let Some(rest) = path.strip_prefix(UNC_PREFIX) {
        let mut parts = rest.splitn(3, '\\');
        let server = parts.next().filter(|s| !s.is_empty())?;
        let share = parts.next().filter(|s| !s.is_empty())?;
        format!("{UNC_PREFIX}{server}\\{share}")
    } else {
        let mut chars = path.chars();
        let letter = chars.next().filter(char::is_ascii_alphabetic)?;
        if chars.next() != Some(':') {
            return None;
        }
        format!("{letter}:")
    };

    // `C:foo` is relative to the drive's working directory, not absolute.
    match path.get(designator.len()..).and_then(|rest| rest.chars().next()) {
        None | Some('\\') => Some(Volume::Drive(designator)),
        Some(_) => None,
    }
}
