use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::model::Folder;

/// Options for one walk of the library.
#[derive(Debug, Clone)]
pub struct ScanOptions<'a> {
    /// Extensions to keep (case-insensitive, with or without the dot).
    pub extensions: &'a [String],
    pub follow_links: bool,
    pub include_hidden: bool,
}

fn is_audio_file(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn normalize_extensions(extensions: &[String]) -> Vec<String> {
    extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

/// Walk `dir` and group matching files by parent directory.
///
/// Folders come out in the order they are first seen, tracks in walk order.
/// Entries are visited sorted by file name, so repeated scans of an unchanged
/// tree give identical output.
pub fn scan_folders(dir: &Path, options: &ScanOptions<'_>) -> Vec<Folder> {
    let exts = normalize_extensions(options.extensions);
    let mut folders: Vec<Folder> = Vec::new();
    let mut index: HashMap<PathBuf, usize> = HashMap::new();

    let walker = WalkDir::new(dir)
        .follow_links(options.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| options.include_hidden || e.depth() == 0 || !is_hidden(e.path()));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, &exts) {
            continue;
        }
        let Some(parent) = path.parent() else {
            continue;
        };

        let slot = *index.entry(parent.to_path_buf()).or_insert_with(|| {
            folders.push(Folder {
                key: parent.to_string_lossy().into_owned(),
                tracks: Vec::new(),
            });
            folders.len() - 1
        });
        folders[slot].tracks.push(path.to_path_buf());
    }

    debug!(
        folders = folders.len(),
        tracks = folders.iter().map(|f| f.tracks.len()).sum::<usize>(),
        root = %dir.display(),
        "library scanned"
    );
    folders
}
