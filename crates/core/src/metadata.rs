use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimestampSource {
    Exif,
    FileCreated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTimestamp {
    pub source: TimestampSource,
    pub date: NaiveDateTime,
}

impl ResolvedTimestamp {
    pub fn from_exif(date: NaiveDateTime) -> Self {
        Self {
            source: TimestampSource::Exif,
            date,
        }
    }

    pub fn from_file_created(date: NaiveDateTime) -> Self {
        Self {
            source: TimestampSource::FileCreated,
            date,
        }
    }
}
