use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::library::Folder;
use crate::platform::{HostOs, PathError, strip_volume};

use super::{
    Config, Crate, CrateError, MusicDirProvider, derive_crate_path, locate_crate_subdir,
};

/// What to do with a track whose path cannot be made volume-relative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadTrackPolicy {
    /// Leave the track out, report it and still write the crate.
    #[default]
    Skip,
    /// Stop the run at the first such track.
    Abort,
}

/// Outcome for one folder.
#[derive(Debug)]
pub struct CrateReport {
    pub key: String,
    pub path: PathBuf,
    pub tracks: usize,
    pub written: bool,
    pub skipped: Vec<(String, PathError)>,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub crate_dir: PathBuf,
    pub crates: Vec<CrateReport>,
}

impl RunReport {
    pub fn skipped_tracks(&self) -> usize {
        self.crates.iter().map(|c| c.skipped.len()).sum()
    }
}

/// Writes one crate per folder into Serato's sub-crate directory.
pub struct CrateWriter<'a> {
    config: &'a Config,
    os: HostOs,
    home: &'a dyn MusicDirProvider,
    columns: Vec<String>,
    policy: BadTrackPolicy,
    dry_run: bool,
}

impl<'a> CrateWriter<'a> {
    pub fn new(config: &'a Config, os: HostOs, home: &'a dyn MusicDirProvider) -> Self {
        Self {
            config,
            os,
            home,
            columns: super::DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
            policy: BadTrackPolicy::default(),
            dry_run: false,
        }
    }

    pub fn columns(mut self, columns: Vec<String>) -> Self {
        self.columns = columns;
        self
    }

    pub fn policy(mut self, policy: BadTrackPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Plan and translate everything, but touch nothing on disk.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Generate crates for `folders`, in order.
    ///
    /// Stops at the first fatal error. Crates written before it stay on disk.
    pub fn run(&self, folders: &[Folder]) -> Result<RunReport, CrateError> {
        let crate_dir = locate_crate_subdir(self.config, &self.os, self.home)?;
        self.ensure_dir(&crate_dir)?;

        let mut report = RunReport {
            crate_dir: crate_dir.clone(),
            crates: Vec::with_capacity(folders.len()),
        };

        for folder in folders {
            report.crates.push(self.write_crate(folder, &crate_dir)?);
        }

        info!(
            crates = report.crates.len(),
            skipped = report.skipped_tracks(),
            dir = %crate_dir.display(),
            "crate generation finished"
        );
        Ok(report)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<(), CrateError> {
        if self.dry_run {
            return Ok(());
        }
        fs::create_dir_all(dir).map_err(|source| CrateError::DirectoryCreation {
            path: dir.to_path_buf(),
            source,
        })
    }

    fn write_crate(&self, folder: &Folder, crate_dir: &Path) -> Result<CrateReport, CrateError> {
        let path = derive_crate_path(&folder.key, self.config, crate_dir, &self.os)?;
        debug!(key = %folder.key, path = %path.display(), "planned crate");

        let mut c = Crate::new(self.columns.iter().cloned());
        let mut skipped = Vec::new();

        for track in &folder.tracks {
            let raw = track.to_string_lossy();
            let translated = track
                .to_str()
                .ok_or_else(|| PathError::InvalidPath(raw.to_string()))
                .and_then(|p| strip_volume(p, &self.os));

            match translated {
                Ok(rel) => c.add_track(rel),
                Err(source) => match self.policy {
                    BadTrackPolicy::Abort => {
                        return Err(CrateError::TrackTranslation {
                            path: raw.to_string(),
                            source,
                        });
                    }
                    BadTrackPolicy::Skip => {
                        warn!(track = %raw, crate_key = %folder.key, "skipping track: {source}");
                        skipped.push((raw.to_string(), source));
                    }
                },
            }
        }

        if !self.dry_run {
            fs::write(&path, c.to_bytes()).map_err(|source| CrateError::Write {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), tracks = c.tracks().len(), "wrote crate");
        }

        Ok(CrateReport {
            key: folder.key.clone(),
            path,
            tracks: c.tracks().len(),
            written: !self.dry_run,
            skipped,
        })
    }
}
