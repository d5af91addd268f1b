use crate::error::FileError;
use crate::exif_reader::read_capture_time;
use crate::metadata::ResolvedTimestamp;
use chrono::{DateTime, Local, NaiveDateTime};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Capture time from EXIF, else the file's birth time in local time.
///
/// With `fallback` off, a file without a usable EXIF date is an error rather
/// than being dated by the filesystem.
pub fn resolve_timestamp(path: &Path, fallback: bool) -> Result<ResolvedTimestamp, FileError> {
    match read_capture_time(path) {
        Ok(Some(date)) => return Ok(ResolvedTimestamp::from_exif(date)),
        Ok(None) => debug!(path = %path.display(), "no DateTimeOriginal in EXIF"),
        Err(err) => debug!(path = %path.display(), error = %err, "EXIF unavailable"),
    }

    if !fallback {
        return Err(FileError::NoCaptureTime);
    }

    file_created_local(path).map(ResolvedTimestamp::from_file_created)
}

fn file_created_local(path: &Path) -> Result<NaiveDateTime, FileError> {
    let created = fs::metadata(path)
        .and_then(|meta| meta.created())
        .map_err(|source| FileError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(DateTime::<Local>::from(created).naive_local())
}
