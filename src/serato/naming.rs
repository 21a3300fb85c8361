use std::path::{Path, PathBuf};

use crate::platform::{HostOs, PathError};

use super::Config;

/// Serato's marker between a parent crate and its sub-crate in file names.
const HIERARCHY_ESCAPE: &str = "%%";
const CRATE_EXTENSION: &str = ".crate";

/// File name (without directory) of the crate for folder `key`.
///
/// The music root is removed, the remaining hierarchy flattened with `%%`
/// and hyphens turned into underscores. `Rock/90s-Hits` becomes
/// `Rock%%90s_Hits.crate`.
///
/// Two distinct keys can map to the same name when a folder name itself
/// contains `%%`.
pub fn crate_file_name(key: &str, config: &Config, os: &HostOs) -> Result<String, PathError> {
    let sep = os.separator()?;

    let relative = if config.music_path.is_empty() {
        key.to_string()
    } else {
        key.replacen(config.music_path.as_str(), "", 1)
    };

    let mut name = relative.replace(sep, HIERARCHY_ESCAPE).replace('-', "_");

    if !config.root_crate.is_empty() {
        name.insert_str(0, &config.root_crate);
    }

    name.push_str(CRATE_EXTENSION);
    Ok(name)
}

/// Absolute path the crate for folder `key` is written to.
pub fn derive_crate_path(
    key: &str,
    config: &Config,
    crate_subdir: &Path,
    os: &HostOs,
) -> Result<PathBuf, PathError> {
    let name = crate_file_name(key, config, os)?;
    Ok(PathBuf::from(
        os.join(&crate_subdir.to_string_lossy(), &name)?,
    ))
}
