use crate::utils::constants::QUERY_DELIMITER;

/// Title-case a name: the first letter of every alphabetic run is uppercased and the
/// rest lowercased, so "new YORK" and "NEW york" both become "New York".
///
/// Each character maps to exactly one character, keeping the result idempotent even for
/// letters whose full case mapping expands (e.g. 'ß' to "SS").
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut in_word = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            let mapped = if in_word {
                c.to_lowercase().next()
            } else {
                c.to_uppercase().next()
            };
            result.push(mapped.unwrap_or(c));
            in_word = true;
        } else {
            result.push(c);
            in_word = false;
        }
    }

    result
}

/// Split a comma separated query line into trimmed, non-empty identifiers.
pub fn parse_query(line: &str) -> Vec<String> {
    line.split(QUERY_DELIMITER)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
