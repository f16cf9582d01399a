//! Normalizes quoted passages and rendered text fragments so they can be
//! compared with plain substring checks.

/// Apply the normalization shared by queries and fragments:
/// - lowercase the string
/// - remove soft hyphen characters
/// - reduce every whitespace run (newlines included) to a single space
/// - trim both ends
///
/// The result is stable under a second application.
pub fn normalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut prev_space = true;
    for c in lower.chars() {
        // skip soft hyphen (U+00AD) characters
        if c == '\u{00AD}' {
            continue;
        }
        if c.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Split already normalized text into tokens of at least `min_len` characters.
/// Leading and trailing ASCII punctuation is stripped from each token first,
/// so `"terms."` yields `"terms"`.
pub fn tokens(normalized: &str, min_len: usize) -> impl Iterator<Item = &str> {
    normalized
        .split(' ')
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(move |t| t.chars().count() >= min_len)
}
