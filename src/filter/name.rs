/// Filter name formatting
///
/// Internal filter identifiers are prefixed camel-case strings (e.g.
/// "FxGaussianBlur"). The UI shows them with the prefix stripped and a
/// space inserted before each interior capital ("Gaussian Blur").

/// Format a prefixed camel-case identifier into a human-readable label.
///
/// Strips `prefix` if present, then inserts a space before every uppercase
/// character from the second character onward. The first character is never
/// treated as a word boundary, even when uppercase.
pub fn format_name(raw_name: &str, prefix: &str) -> String {
    let stripped = raw_name.strip_prefix(prefix).unwrap_or(raw_name);

    let mut chars: Vec<char> = stripped.chars().collect();

    // Insert from the highest index down so earlier insertions don't
    // shift the positions still to be processed.
    for index in find_capital_indices(&chars) {
        chars.insert(index, ' ');
    }

    chars.into_iter().collect()
}

/// Indices of uppercase characters from index 1 onward, highest first.
fn find_capital_indices(chars: &[char]) -> Vec<usize> {
    let mut indices: Vec<usize> = chars
        .iter()
        .enumerate()
        .skip(1)
        .filter(|(_, c)| c.is_uppercase())
        .map(|(index, _)| index)
        .collect();

    indices.reverse();
    indices
}
