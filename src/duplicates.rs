//! Duplicate detection by artist and title tags.

mod tags;

pub use tags::{LoftyTagReader, TagReader, Tags};

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::warn;

use crate::library::Folder;

/// Files sharing the same artist and title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub artist: String,
    pub title: String,
    pub paths: Vec<PathBuf>,
}

/// Group every track in `folders` by `(artist, title)` and keep the groups
/// with more than one file.
///
/// Groups come out in the order their first file was seen. Files whose tags
/// cannot be read are logged and left out.
pub fn find_duplicates(folders: &[Folder], reader: &dyn TagReader) -> Vec<DuplicateGroup> {
    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut index: HashMap<Tags, usize> = HashMap::new();

    for track in folders.iter().flat_map(|f| f.tracks.iter()) {
        let tags = match reader.read(track) {
            Ok(tags) => tags,
            Err(reason) => {
                warn!(path = %track.display(), "error reading tags: {reason}");
                continue;
            }
        };

        match index.get(&tags) {
            Some(&slot) => groups[slot].paths.push(track.clone()),
            None => {
                index.insert(tags.clone(), groups.len());
                groups.push(DuplicateGroup {
                    artist: tags.artist,
                    title: tags.title,
                    paths: vec![track.clone()],
                });
            }
        }
    }

    groups.retain(|g| g.paths.len() > 1);
    groups
}

#[cfg(test)]
mod tests;
