//! Label normalization: turns a human-readable label into the
//! question-mark-suffixed identifier used as a boolean query name.

/// Suffix that marks a name as a boolean query.
pub const QUERY_SUFFIX: char = '?';

/// Lowercase `label`, collapse each whitespace run into a single `_`,
/// then append `?`.
///
/// `"Third Thing"` becomes `third_thing?`.
pub fn canonical_identifier(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 1);
    let mut in_whitespace = false;
    for c in label.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        out.extend(c.to_lowercase());
    }
    out.push(QUERY_SUFFIX);
    out
}

/// True when `name` has the shape of a boolean query.
pub fn is_query_name(name: &str) -> bool {
    name.ends_with(QUERY_SUFFIX)
}
