/// Canonical form of a vertex label: surrounding whitespace removed
/// and uppercased. `"a"` and `" A "` name the same vertex.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Splits a comma separated answer such as `"a, b,c"` into normalized
/// labels, dropping empty entries.
pub fn parse_order(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(normalize)
        .filter(|label| !label.is_empty())
        .collect()
}
