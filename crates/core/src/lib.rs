mod apply;
mod claims;
mod config;
mod error;
mod exif_reader;
mod metadata;
mod planner;
mod sanitize;
mod stem;
mod timestamp;

#[cfg(test)]
mod test_support;

pub use apply::{apply_rename, PlannedRename};
pub use claims::{ClaimTable, Reservation};
pub use config::{app_paths, expand_home, load_config, AppConfig, AppPaths};
pub use error::{FileError, RunError};
pub use metadata::{ResolvedTimestamp, TimestampSource};
pub use planner::{run, validate_directory, FileOutcome, RunOptions, RunReport, RunStats};
pub use stem::{StemFormat, StemFormatError, DEFAULT_STEM_FORMAT};
pub use timestamp::resolve_timestamp;
