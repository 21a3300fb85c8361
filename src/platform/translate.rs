use super::{HostOs, PathError, Volume, resolve_volume};

/// Remove the volume prefix from an absolute path.
///
/// The result is the volume-relative form Serato stores inside crates:
/// `C:\Music\a.mp3` becomes `Music\a.mp3`, `/Volumes/Drive/a.mp3` becomes
/// `a.mp3` and `/Users/x/a.mp3` becomes `Users/x/a.mp3`.
pub fn strip_volume(path: &str, os: &HostOs) -> Result<String, PathError> {
    let volume =
        resolve_volume(path, os)?.ok_or_else(|| PathError::InvalidPath(path.to_string()))?;
    let sep = os.separator()?;

    let rest = match &volume {
        // Exactly the leading root character, nothing else.
        Volume::Root => &path[1..],
        Volume::Drive(v) | Volume::Mount(v) => {
            let rest = &path[v.len()..];
            rest.strip_prefix(sep).unwrap_or(rest)
        }
    };

    Ok(rest.to_string())
}

/// Re-root a volume-relative path onto `volume`.
pub fn reattach_volume(relative: &str, volume: &Volume, os: &HostOs) -> Result<String, PathError> {
    os.join(volume.as_str(), relative)
}

/// Re-root a volume-relative path onto whichever volume `context` lives on.
///
/// `context` is usually the Serato directory a crate was read from: tracks
/// referenced by a crate are stored on the same volume as that directory.
pub fn resolve_track_path(relative: &str, context: &str, os: &HostOs) -> Result<String, PathError> {
    let volume = resolve_volume(context, os)?
        .ok_or_else(|| PathError::InvalidPath(context.to_string()))?;
    reattach_volume(relative, &volume, os)
}
