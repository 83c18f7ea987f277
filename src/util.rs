use std::path::Path;

pub fn display_path(path: &Path, base: Option<&Path>) -> String {
    if let Some(base) = base {
        if let Ok(relative) = path.strip_prefix(base) {
            return relative.display().to_string();
        }
    }
    path.display().to_string()
}

/// Keep at most `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Position of the first marker in `markers` (in preference order) that occurs
/// at or after `from`, or `text.len()` when none occurs.
///
/// Markers are tried one at a time: a later marker is only consulted when every
/// earlier one is absent, even if the later one would occur sooner.
pub fn find_first_boundary(text: &str, from: usize, markers: &[&str]) -> usize {
    let rest = &text[from..];
    markers
        .iter()
        .find_map(|marker| rest.find(marker))
        .map(|offset| from + offset)
        .unwrap_or(text.len())
}

/// Position of the nearest occurrence of any marker at or after `from`.
pub fn find_nearest_boundary(text: &str, from: usize, markers: &[&str]) -> usize {
    let rest = &text[from..];
    markers
        .iter()
        .filter_map(|marker| rest.find(marker))
        .min()
        .map(|offset| from + offset)
        .unwrap_or(text.len())
}

pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}
