use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use exif::{In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const EXIF_DATE_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Reads `DateTimeOriginal` from the primary image.
///
/// `Err` means the file has no readable EXIF container. `Ok(None)` means the
/// container is there but the field is missing or malformed.
pub fn read_capture_time(path: &Path) -> Result<Option<NaiveDateTime>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open for EXIF reading: {}", path.display()))?;
    let mut buf = BufReader::new(file);
    let exif = Reader::new()
        .read_from_container(&mut buf)
        .with_context(|| format!("failed to parse EXIF: {}", path.display()))?;

    Ok(exif
        .get_field(Tag::DateTimeOriginal, In::PRIMARY)
        .and_then(|field| ascii_value(&field.value))
        .and_then(|raw| parse_exif_date(&raw)))
}

fn ascii_value(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(parts) => parts
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).to_string()),
        _ => None,
    }
}

fn parse_exif_date(input: &str) -> Option<NaiveDateTime> {
    let normalized = input.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    NaiveDateTime::parse_from_str(normalized, EXIF_DATE_FORMAT).ok()
}
