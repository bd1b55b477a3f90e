//! String utility functions for common text manipulation operations.

/// Shorten `s` to at most `max` characters, ending in `...` when cut.
///
/// # Examples
/// ```ignore
/// assert_eq!(truncate("abcdef", 5), "ab...");
/// assert_eq!(truncate("abc", 5), "abc");
/// ```
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Split a comma-separated list of names, dropping blanks.
pub fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}
