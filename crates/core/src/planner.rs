use crate::apply::{apply_rename, PlannedRename};
use crate::claims::{ClaimTable, Reservation};
use crate::error::{FileError, RunError};
use crate::metadata::TimestampSource;
use crate::sanitize::extension_with_dot;
use crate::stem::StemFormat;
use crate::timestamp::resolve_timestamp;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub directory: PathBuf,
    pub stem_format: StemFormat,
    pub metadata_fallback: bool,
    pub sort_entries: bool,
    pub dry_run: bool,
}

impl RunOptions {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            stem_format: StemFormat::default(),
            metadata_fallback: true,
            sort_entries: false,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Renamed {
        from: PathBuf,
        to: PathBuf,
        source: TimestampSource,
    },
    Planned {
        from: PathBuf,
        to: PathBuf,
        source: TimestampSource,
    },
    Unchanged {
        path: PathBuf,
    },
    Failed {
        path: PathBuf,
        reason: String,
    },
}

#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct RunStats {
    pub scanned_entries: usize,
    pub skipped_non_regular: usize,
    pub renamed: usize,
    pub planned: usize,
    pub unchanged: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub directory: PathBuf,
    pub dry_run: bool,
    pub outcomes: Vec<FileOutcome>,
    pub stats: RunStats,
}

impl RunReport {
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Failed { path, reason } => Some((path.as_path(), reason.as_str())),
            _ => None,
        })
    }
}

/// Renames every regular file in `options.directory` after its capture time.
///
/// Entries are listed once up front and processed one at a time; a file is
/// resolved, named, reserved and renamed before the next is looked at. Per-file
/// failures land in the report and do not stop the run. Nothing is rolled back.
pub fn run(options: &RunOptions) -> Result<RunReport, RunError> {
    let directory = &options.directory;
    validate_directory(directory)?;

    let mut stats = RunStats::default();
    let files = collect_regular_files(directory, options.sort_entries, &mut stats)?;

    let mut claims = ClaimTable::new();
    let mut outcomes = Vec::with_capacity(files.len());
    for path in files {
        let outcome = process_file(&path, options, &mut claims);
        match &outcome {
            FileOutcome::Renamed { .. } => stats.renamed += 1,
            FileOutcome::Planned { .. } => stats.planned += 1,
            FileOutcome::Unchanged { .. } => stats.unchanged += 1,
            FileOutcome::Failed { .. } => stats.failed += 1,
        }
        outcomes.push(outcome);
    }

    Ok(RunReport {
        directory: directory.clone(),
        dry_run: options.dry_run,
        outcomes,
        stats,
    })
}

pub fn validate_directory(path: &Path) -> Result<(), RunError> {
    if !path.exists() {
        return Err(RunError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(RunError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

fn process_file(path: &Path, options: &RunOptions, claims: &mut ClaimTable) -> FileOutcome {
    let resolved = match resolve_timestamp(path, options.metadata_fallback) {
        Ok(resolved) => resolved,
        Err(err) => return failed(path, err),
    };

    let stem = options.stem_format.render(&resolved.date);
    let extension = extension_with_dot(path);
    let to = match claims.reserve(path, &stem, &extension) {
        Reservation::Claimed(to) => to,
        Reservation::Unchanged => {
            return FileOutcome::Unchanged {
                path: path.to_path_buf(),
            }
        }
    };

    let plan = PlannedRename {
        from: path.to_path_buf(),
        to,
    };
    if options.dry_run {
        return FileOutcome::Planned {
            from: plan.from,
            to: plan.to,
            source: resolved.source,
        };
    }

    match apply_rename(&plan) {
        Ok(()) => {
            info!(from = %plan.from.display(), to = %plan.to.display(), "renamed");
            FileOutcome::Renamed {
                from: plan.from,
                to: plan.to,
                source: resolved.source,
            }
        }
        Err(err) => failed(path, err),
    }
}

fn failed(path: &Path, err: FileError) -> FileOutcome {
    warn!(path = %path.display(), error = %err, "skipping file");
    FileOutcome::Failed {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

fn collect_regular_files(
    root: &Path,
    sort: bool,
    stats: &mut RunStats,
) -> Result<Vec<PathBuf>, RunError> {
    let read_dir_err = |source: std::io::Error| RunError::ReadDir {
        path: root.to_path_buf(),
        source,
    };

    let mut out = Vec::new();
    for entry in fs::read_dir(root).map_err(read_dir_err)? {
        let path = entry.map_err(read_dir_err)?.path();
        stats.scanned_entries += 1;
        // Follows symlinks: a link to a regular file is processed.
        if !fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false) {
            stats.skipped_non_regular += 1;
            continue;
        }
        out.push(path);
    }

    if sort {
        out.sort();
    }
    Ok(out)
}
