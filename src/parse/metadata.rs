//! Metadata/body splitter.
//!
//! Within a section, a leading run of `Key: value` lines (blank lines
//! tolerated between them) is metadata; everything after the first line that
//! is neither metadata nor blank is body text, preserved verbatim. Lines
//! inside the body are never reinterpreted as metadata, even when they look
//! like `key: value`.

/// Recognized metadata collected from a section's leading lines.
///
/// Values are trimmed; a key that appeared with an empty value is
/// `Some("")`, distinct from a key that never appeared.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SectionMetadata {
    pub id: Option<String>,
    pub title: Option<String>,
    pub categories: Option<String>,
    pub description: Option<String>,
}

impl SectionMetadata {
    fn record(&mut self, key: &str, value: String) {
        match key {
            "id" => self.id = Some(value),
            "title" => self.title = Some(value),
            "categories" => self.categories = Some(value),
            "description" => self.description = Some(value),
            // Unrecognized keys are consumed but their values discarded.
            _ => {}
        }
    }
}

/// Scans the section's post-heading lines for leading metadata.
///
/// Returns the collected metadata and the index of the first body line.
pub fn split_metadata(lines: &[String]) -> (SectionMetadata, usize) {
    let mut metadata = SectionMetadata::default();
    let mut body_start = 0;

    for (i, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            body_start = i + 1;
            continue;
        }
        match parse_metadata_line(line) {
            Some((key, value)) => {
                metadata.record(&key, value);
                body_start = i + 1;
            }
            None => break,
        }
    }
    (metadata, body_start)
}

/// Joins the body lines, trimming leading and trailing blank lines only.
pub fn body_text(lines: &[String], body_start: usize) -> String {
    let mut start = body_start.min(lines.len());
    let mut end = lines.len();
    while start < end && lines[start].trim().is_empty() {
        start += 1;
    }
    while end > start && lines[end - 1].trim().is_empty() {
        end -= 1;
    }
    lines[start..end].join("\n")
}

/// Matches `<letters>:<rest>`: one or more ASCII letters, a colon, anything.
/// Returns the lowercased key and the trimmed remainder.
fn parse_metadata_line(line: &str) -> Option<(String, String)> {
    let colon = line.find(':')?;
    let key = &line[..colon];
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some((key.to_ascii_lowercase(), line[colon + 1..].trim().to_string()))
}
