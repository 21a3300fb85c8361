//! Host path models and volume handling.
//!
//! Serato stores track locations relative to the volume they live on, so
//! every absolute path has to be split into a volume and a volume-relative
//! remainder. Two incompatible models are supported: drive letters
//! (Windows) and mounted volumes under a single root (macOS).

mod error;
mod host;
mod translate;
mod volume;

pub use error::PathError;
pub use host::HostOs;
pub use translate::{reattach_volume, resolve_track_path, strip_volume};
pub use volume::{Volume, resolve_volume};
