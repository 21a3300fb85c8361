//! Music library scanning.
//!
//! Walks a music root and groups audio files by the folder they live in.
//! Each folder becomes one crate (or one duplicate-search bucket).

mod model;
mod scan;

pub use model::Folder;
pub use scan::{ScanOptions, scan_folders};
