use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a run before any file is touched.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("Not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("The specified path ({}) is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Per-file failures. These skip the file and the batch keeps going.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no capture time in metadata and filesystem fallback is disabled")]
    NoCaptureTime,
    #[error("destination already exists: {}", .0.display())]
    DestinationExists(PathBuf),
    #[error("failed to rename {} -> {}: {source}", from.display(), to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}
