use std::fs;
use std::path::{self, Path};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::Settings;
use crate::platform::resolve_track_path;
use crate::serato::Crate;

use super::settings::host_os;

/// Print every track of a crate re-rooted onto the crate file's volume.
pub fn run(settings: &Settings, crate_file: &Path) -> Result<()> {
    let bytes =
        fs::read(crate_file).with_context(|| format!("cannot read {}", crate_file.display()))?;
    let c = Crate::from_bytes(&bytes)
        .with_context(|| format!("cannot decode {}", crate_file.display()))?;

    let columns: Vec<&str> = c.columns().iter().map(|col| col.name.as_str()).collect();
    debug!(
        version = c.version(),
        columns = ?columns,
        tracks = c.tracks().len(),
        "decoded crate"
    );

    let os = host_os(settings);
    let location = path::absolute(crate_file)
        .with_context(|| format!("cannot resolve {}", crate_file.display()))?;
    let location = location.to_string_lossy();

    for track in c.tracks() {
        let absolute = resolve_track_path(track, &location, &os)
            .with_context(|| format!("cannot place track '{track}'"))?;
        println!("{absolute}");
    }

    Ok(())
}
