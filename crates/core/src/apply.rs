use crate::claims::occupied;
use crate::error::FileError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedRename {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// Performs the rename. Refuses to replace anything, a dangling symlink
/// included, that appeared at the destination after it was reserved.
pub fn apply_rename(plan: &PlannedRename) -> Result<(), FileError> {
    if occupied(&plan.to) {
        return Err(FileError::DestinationExists(plan.to.clone()));
    }
    fs::rename(&plan.from, &plan.to).map_err(|source| FileError::Rename {
        from: plan.from.clone(),
        to: plan.to.clone(),
        source,
    })
}
