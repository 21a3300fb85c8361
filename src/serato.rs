//! Serato crate generation.
//!
//! Locates Serato's private `_Serato_` directory for a music collection,
//! derives a file name for every folder and writes one `.crate` file per
//! folder with the folder's tracks stored volume-relative.

mod crate_file;
mod datadir;
mod error;
mod naming;
mod orchestrator;

pub use crate_file::{Crate, DEFAULT_COLUMNS};
pub use datadir::{
    FixedMusicDir, MusicDirProvider, UserMusicDir, locate_crate_subdir, locate_data_dir,
};
pub use error::CrateError;
pub use naming::{crate_file_name, derive_crate_path};
pub use orchestrator::{BadTrackPolicy, CrateReport, CrateWriter, RunReport};

/// Per-run settings for crate generation. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute root of the scanned collection.
    pub music_path: String,
    /// Prefix prepended verbatim to every generated crate name.
    pub root_crate: String,
}
