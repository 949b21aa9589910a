//! Name-list input parsing

/// Splits comma-separated input into trimmed, non-empty entries.
///
/// `"Kim, Lee,, Park "` becomes `["Kim", "Lee", "Park"]`. Order and
/// duplicates are kept.
pub fn parse_names(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}
