use tracing::warn;

use crate::config;
use crate::platform::HostOs;
use crate::serato::{FixedMusicDir, MusicDirProvider, UserMusicDir};

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                warn!("invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent a run.
            warn!("failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}

/// Path model from settings, or the host's own.
pub fn host_os(settings: &config::Settings) -> HostOs {
    settings
        .crates
        .platform
        .as_deref()
        .and_then(HostOs::parse)
        .unwrap_or_else(HostOs::current)
}

pub fn music_dir_provider(settings: &config::Settings) -> Box<dyn MusicDirProvider> {
    match &settings.crates.music_dir {
        Some(dir) => Box::new(FixedMusicDir(dir.clone())),
        None => Box::new(UserMusicDir),
    }
}
