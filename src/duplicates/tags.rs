use std::path::Path;

use lofty::file::TaggedFileExt;
use lofty::tag::Accessor;

/// Identity of a recording as far as duplicate detection is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tags {
    pub artist: String,
    pub title: String,
}

pub trait TagReader {
    /// Read artist and title. The error is a human-readable reason.
    fn read(&self, path: &Path) -> Result<Tags, String>;
}

/// Reads tags with `lofty`, preferring the file's primary tag.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read(&self, path: &Path) -> Result<Tags, String> {
        let tagged = lofty::read_from_path(path).map_err(|e| e.to_string())?;
        let tag = tagged
            .primary_tag()
            .or_else(|| tagged.first_tag())
            .ok_or_else(|| "no tag found".to_string())?;

        Ok(Tags {
            artist: tag.artist().map(|s| s.into_owned()).unwrap_or_default(),
            title: tag.title().map(|s| s.into_owned()).unwrap_or_default(),
        })
    }
}
