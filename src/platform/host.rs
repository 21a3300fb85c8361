use std::fmt;

use super::PathError;

/// Which path model applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOs {
    /// Drive-letter model (`C:\Music\a.mp3`).
    Windows,
    /// Mounted-volume model (`/Volumes/Drive/a.mp3`, or `/Users/...` on the root).
    Darwin,
    /// Anything else. Carries the target name for diagnostics.
    Unsupported(String),
}

impl HostOs {
    /// The model of the machine this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            HostOs::Windows
        } else if cfg!(target_os = "macos") {
            HostOs::Darwin
        } else {
            HostOs::Unsupported(std::env::consts::OS.to_string())
        }
    }

    /// Parse a user-supplied override (`windows`, `macos`/`darwin`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "windows" => Some(HostOs::Windows),
            "darwin" | "macos" => Some(HostOs::Darwin),
            _ => None,
        }
    }

    /// Path separator of the model.
    pub fn separator(&self) -> Result<char, PathError> {
        match self {
            HostOs::Windows => Ok('\\'),
            HostOs::Darwin => Ok('/'),
            HostOs::Unsupported(name) => Err(PathError::UnsupportedPlatform(name.clone())),
        }
    }

    /// Join two path fragments with exactly one separator between them.
    ///
    /// Trailing separators on `base` and leading separators on `rel` are
    /// collapsed, so joining onto the root (`/`) or a bare drive (`C:`)
    /// yields `/rel` and `C:\rel` respectively.
    pub fn join(&self, base: &str, rel: &str) -> Result<String, PathError> {
        let sep = self.separator()?;
        let rel = rel.trim_start_matches(sep);
        let head = base.trim_end_matches(sep);

        if rel.is_empty() {
            return Ok(base.to_string());
        }
        if base.is_empty() {
            return Ok(rel.to_string());
        }

        let mut out = String::with_capacity(head.len() + rel.len() + 1);
        out.push_str(head);
        out.push(sep);
        out.push_str(rel);
        Ok(out)
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostOs::Windows => write!(f, "windows"),
            HostOs::Darwin => write!(f, "darwin"),
            HostOs::Unsupported(name) => write!(f, "{name}"),
        }
    }
}
