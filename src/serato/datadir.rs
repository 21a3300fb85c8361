use std::path::PathBuf;

use crate::platform::{HostOs, PathError, Volume, resolve_volume};

use super::Config;

/// Name of Serato's private directory.
pub const SERATO_DIR_NAME: &str = "_Serato_";
/// Sub-directory of the Serato directory that holds crate files.
pub const SUBCRATES_DIR_NAME: &str = "Subcrates";

const WINDOWS_SYSTEM_VOLUME: &str = "C:";

/// Source of the current user's music folder.
///
/// Serato keeps the Serato directory of the system volume inside the user's
/// music folder rather than at the volume root.
pub trait MusicDirProvider {
    fn music_dir(&self) -> Result<PathBuf, PathError>;
}

/// `~/Music` of the user running the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserMusicDir;

impl MusicDirProvider for UserMusicDir {
    fn music_dir(&self) -> Result<PathBuf, PathError> {
        dirs::home_dir()
            .map(|home| home.join("Music"))
            .ok_or(PathError::HomeDirUnavailable)
    }
}

/// A music folder given explicitly, e.g. from configuration.
#[derive(Debug, Clone)]
pub struct FixedMusicDir(pub PathBuf);

impl MusicDirProvider for FixedMusicDir {
    fn music_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.0.clone())
    }
}

/// Absolute location of the `_Serato_` directory serving `config.music_path`.
pub fn locate_data_dir(
    config: &Config,
    os: &HostOs,
    home: &dyn MusicDirProvider,
) -> Result<PathBuf, PathError> {
    let volume = resolve_volume(&config.music_path, os)?
        .ok_or_else(|| PathError::InvalidPath(config.music_path.clone()))?;

    let on_system_volume = match (os, &volume) {
        (HostOs::Windows, Volume::Drive(d)) => d.eq_ignore_ascii_case(WINDOWS_SYSTEM_VOLUME),
        (HostOs::Darwin, v) => v.is_root(),
        _ => false,
    };

    let dir = if on_system_volume {
        let music_dir = home.music_dir()?;
        os.join(&music_dir.to_string_lossy(), SERATO_DIR_NAME)?
    } else {
        os.join(volume.as_str(), SERATO_DIR_NAME)?
    };

    Ok(PathBuf::from(dir))
}

/// Absolute location of the directory crate files are written to.
pub fn locate_crate_subdir(
    config: &Config,
    os: &HostOs,
    home: &dyn MusicDirProvider,
) -> Result<PathBuf, PathError> {
    let data_dir = locate_data_dir(config, os, home)?;
    Ok(PathBuf::from(
        os.join(&data_dir.to_string_lossy(), SUBCRATES_DIR_NAME)?,
    ))
}
