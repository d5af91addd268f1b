use crate::sanitize::sanitize_stem;
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Write;
use thiserror::Error;

pub const DEFAULT_STEM_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StemFormatError {
    #[error("stem format is empty")]
    Empty,
    #[error("invalid format specifier in: {0}")]
    InvalidSpecifier(String),
    #[error("format needs a timezone, capture times have none: {0}")]
    NeedsTimezone(String),
    #[error("stem format must not contain a path separator: {0}")]
    PathSeparator(String),
    #[error("stem format renders an empty file name: {0}")]
    RendersEmpty(String),
}

/// A validated strftime-style pattern turning a capture time into a filename stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemFormat {
    pattern: String,
}

impl Default for StemFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_STEM_FORMAT.to_string(),
        }
    }
}

impl StemFormat {
    pub fn parse(pattern: &str) -> Result<Self, StemFormatError> {
        if pattern.trim().is_empty() {
            return Err(StemFormatError::Empty);
        }
        if pattern.contains(['/', '\\']) {
            return Err(StemFormatError::PathSeparator(pattern.to_string()));
        }
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(StemFormatError::InvalidSpecifier(pattern.to_string()));
        }

        // Offset and zone specifiers fail to render on naive dates.
        let sample = NaiveDate::from_ymd_opt(2000, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| StemFormatError::InvalidSpecifier(pattern.to_string()))?;
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(pattern)).is_err() {
            return Err(StemFormatError::NeedsTimezone(pattern.to_string()));
        }
        if sanitize_stem(&rendered).is_empty() {
            return Err(StemFormatError::RendersEmpty(pattern.to_string()));
        }

        Ok(Self {
            pattern: pattern.to_string(),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn render(&self, date: &NaiveDateTime) -> String {
        sanitize_stem(&date.format(&self.pattern).to_string())
    }
}
