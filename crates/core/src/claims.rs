use std::collections::{HashMap, HashSet};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reservation {
    /// The file already carries the name it would be given.
    Unchanged,
    Claimed(PathBuf),
}

/// Destination names handed out during one run.
///
/// Every stem is first tried as `<stem>_1<ext>`. The count stored against that
/// base path is how many times the stem has collided, pre-existing files on
/// disk included, and the N-th claimant receives `<stem>_N<ext>`.
#[derive(Debug, Default)]
pub struct ClaimTable {
    counts: HashMap<PathBuf, usize>,
    claimed: HashSet<PathBuf>,
}

impl ClaimTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reserve(&mut self, source: &Path, stem: &str, extension: &OsStr) -> Reservation {
        let parent = source.parent().unwrap_or_else(|| Path::new(""));
        let base = suffixed(parent, stem, 1, extension);
        if base == source {
            return Reservation::Unchanged;
        }

        let mut count = match self.counts.get(&base) {
            Some(existing) => existing + 1,
            None if occupied(&base) => 2,
            None => 1,
        };

        let target = loop {
            let candidate = suffixed(parent, stem, count, extension);
            if candidate == source {
                return Reservation::Unchanged;
            }
            if !self.is_taken(&candidate) {
                break candidate;
            }
            count += 1;
        };

        self.counts.insert(base, count);
        self.claimed.insert(target.clone());
        Reservation::Claimed(target)
    }

    pub fn claim_count(&self, base: &Path) -> Option<usize> {
        self.counts.get(base).copied()
    }

    fn is_taken(&self, candidate: &Path) -> bool {
        self.claimed.contains(candidate) || occupied(candidate)
    }
}

/// Whether anything sits at `path`, dangling symlinks included.
pub(crate) fn occupied(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn suffixed(parent: &Path, stem: &str, n: usize, extension: &OsStr) -> PathBuf {
    let mut name = OsString::from(format!("{stem}_{n}"));
    name.push(extension);
    parent.join(name)
}
