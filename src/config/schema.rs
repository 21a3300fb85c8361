use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/serato-tools/config.toml` or
/// `~/.config/serato-tools/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `SERATO_TOOLS__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub crates: CrateSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Extensions that become crate entries (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Extensions inspected by the duplicate finder.
    pub duplicate_extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: ["mp3", "ogg", "alac", "flac", "aif", "wav", "mp4", "m4a"]
                .into_iter()
                .map(String::from)
                .collect(),
            duplicate_extensions: ["mp3", "ogg", "flac", "m4a", "mp4"]
                .into_iter()
                .map(String::from)
                .collect(),
            follow_links: true,
            include_hidden: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CrateSettings {
    /// Prefix prepended to every crate name, e.g. `"Library"` nests all
    /// generated crates under a `Library` parent crate.
    pub root_crate: String,
    /// What to do with tracks whose path cannot be made volume-relative.
    pub on_bad_track: BadTrackSetting,
    /// Columns shown in generated crates, in order.
    pub columns: Vec<String>,
    /// Override for the user's music folder (where the system volume's
    /// `_Serato_` directory lives). Defaults to `~/Music`.
    pub music_dir: Option<PathBuf>,
    /// Path model to use instead of the host's (`"windows"` or `"macos"`).
    pub platform: Option<String>,
}

impl Default for CrateSettings {
    fn default() -> Self {
        Self {
            root_crate: String::new(),
            on_bad_track: BadTrackSetting::Skip,
            columns: crate::serato::DEFAULT_COLUMNS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            music_dir: None,
            platform: None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadTrackSetting {
    #[serde(alias = "skip-and-report")]
    Skip,
    #[serde(alias = "fail", alias = "stop")]
    Abort,
}
