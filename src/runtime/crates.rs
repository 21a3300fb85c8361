use std::path::{self, Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;

use crate::cli::{BadTrackArg, CratesArgs};
use crate::config::{BadTrackSetting, Settings};
use crate::library::{ScanOptions, scan_folders};
use crate::serato::{BadTrackPolicy, Config, CrateWriter};

use super::settings::{host_os, music_dir_provider};

pub fn run(settings: &Settings, args: CratesArgs) -> Result<()> {
    let music_path = absolute_dir(&args.dir)?;

    let config = Config {
        music_path: music_path.to_string_lossy().into_owned(),
        root_crate: args
            .root_crate
            .unwrap_or_else(|| settings.crates.root_crate.clone()),
    };

    let policy = match args.on_bad_track {
        Some(BadTrackArg::Skip) => BadTrackPolicy::Skip,
        Some(BadTrackArg::Abort) => BadTrackPolicy::Abort,
        None => match settings.crates.on_bad_track {
            BadTrackSetting::Skip => BadTrackPolicy::Skip,
            BadTrackSetting::Abort => BadTrackPolicy::Abort,
        },
    };

    let folders = scan_folders(
        &music_path,
        &ScanOptions {
            extensions: &settings.library.extensions,
            follow_links: settings.library.follow_links,
            include_hidden: settings.library.include_hidden,
        },
    );
    info!(folders = folders.len(), root = %music_path.display(), "scanned music folder");

    let os = host_os(settings);
    let home = music_dir_provider(settings);
    let columns: Vec<String> = settings
        .crates
        .columns
        .iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();

    let report = CrateWriter::new(&config, os, home.as_ref())
        .columns(columns)
        .policy(policy)
        .dry_run(args.dry_run)
        .run(&folders)
        .with_context(|| {
            format!(
                "crate generation failed (music path '{}', root crate '{}')",
                config.music_path, config.root_crate
            )
        })?;

    for c in &report.crates {
        let verb = if c.written { "wrote" } else { "would write" };
        println!("{verb} {} ({} tracks)", c.path.display(), c.tracks);
        for (track, reason) in &c.skipped {
            println!("  skipped {track}: {reason}");
        }
    }
    println!(
        "{} crates in {}, {} tracks skipped",
        report.crates.len(),
        report.crate_dir.display(),
        report.skipped_tracks()
    );

    Ok(())
}

/// Absolute music root without trailing separators.
///
/// Folder keys from the walk never end in a separator, so `/Music/` has to
/// become `/Music` for the root to be stripped from them. A bare root (`/`,
/// `C:\`) keeps its separator.
fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        bail!("music directory {} does not exist", dir.display());
    }
    let absolute =
        path::absolute(dir).with_context(|| format!("cannot resolve {}", dir.display()))?;
    Ok(absolute.components().collect())
}
