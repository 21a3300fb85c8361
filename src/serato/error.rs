use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::platform::PathError;

/// Fatal failures of a crate generation run.
#[derive(Debug, Error)]
pub enum CrateError {
    #[error(transparent)]
    Path(#[from] PathError),

    #[error("failed to create crate directory {}", path.display())]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to translate track '{path}'")]
    TrackTranslation {
        path: String,
        #[source]
        source: PathError,
    },

    #[error("failed to write crate {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
