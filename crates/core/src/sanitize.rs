use std::ffi::OsString;
use std::path::Path;

/// Replaces characters that cannot appear in a file name and drops trailing
/// dots and spaces.
pub fn sanitize_stem(value: &str) -> String {
    let out: String = value
        .chars()
        .map(|ch| if is_disallowed_char(ch) { '_' } else { ch })
        .collect();
    out.trim_end_matches([' ', '.']).trim().to_string()
}

/// Extension of `path` including the leading dot, or empty. Kept as raw OS
/// bytes so non-UTF-8 extensions survive the rename.
pub fn extension_with_dot(path: &Path) -> OsString {
    match path.extension() {
        Some(ext) => {
            let mut out = OsString::from(".");
            out.push(ext);
            out
        }
        None => OsString::new(),
    }
}

fn is_disallowed_char(ch: char) -> bool {
    matches!(ch, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|')
        || ch == '\0'
        || ch.is_control()
}
