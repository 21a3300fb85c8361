use std::path::Path;

use anyhow::{Result, bail};
use tracing::info;

use crate::config::Settings;
use crate::duplicates::{LoftyTagReader, find_duplicates};
use crate::library::{ScanOptions, scan_folders};

pub fn run(settings: &Settings, dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("music directory {} does not exist", dir.display());
    }

    let folders = scan_folders(
        dir,
        &ScanOptions {
            extensions: &settings.library.duplicate_extensions,
            follow_links: settings.library.follow_links,
            include_hidden: settings.library.include_hidden,
        },
    );
    info!(folders = folders.len(), "checking tags");

    let groups = find_duplicates(&folders, &LoftyTagReader);
    for group in &groups {
        println!(
            "----- Found duplicate for {} - {} ------",
            group.artist, group.title
        );
        for path in &group.paths {
            println!("{}", path.display());
        }
        println!();
    }
    println!("Number of duplicate songs: {}", groups.len());

    Ok(())
}
