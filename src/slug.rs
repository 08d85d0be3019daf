//! Slug generation for response identifiers.
//!
//! A slug is the identifier fragment derived from a section heading when no
//! explicit `ID:` is given: lowercase ASCII alphanumerics with single hyphens
//! standing in for every other run of characters.

/// Converts arbitrary text into a normalized identifier fragment.
///
/// Rules:
/// - Lowercases the input.
/// - Every maximal run of characters outside `[a-z0-9]` becomes one hyphen.
/// - No leading or trailing hyphen.
/// - Empty input yields an empty string.
///
/// # Examples
/// ```
/// use cannery::slugify;
///
/// assert_eq!(slugify("Ask for Steps to Reproduce"), "ask-for-steps-to-reproduce");
/// assert_eq!(slugify("  Need -- Info!  "), "need-info");
/// assert_eq!(slugify(""), "");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for ch in text.chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}
