//! Document sectionizer.
//!
//! Splits a raw response document into per-heading blocks. Only level-2
//! headings (`## ` at column 0) are structural; everything else, including
//! level-1 headings and prose before the first `## `, is either section
//! content or discarded preamble.

/// One heading-delimited block of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    /// The heading text after `## `, trimmed.
    pub label: String,
    /// The lines following the heading, up to the next heading or EOF.
    pub lines: Vec<String>,
}

/// Splits `document` into ordered sections, one per `## ` heading.
///
/// Content before the first heading is discarded. A heading whose label is
/// empty after trimming is skipped entirely, along with the lines under it.
pub fn sectionize(document: &str) -> Vec<RawSection> {
    let mut sections = Vec::new();
    let mut current: Option<RawSection> = None;

    for line in document.lines() {
        if let Some(raw_label) = line.strip_prefix("## ") {
            if let Some(section) = current.take() {
                sections.push(section);
            }
            let label = raw_label.trim();
            if !label.is_empty() {
                current = Some(RawSection {
                    label: label.to_string(),
                    lines: Vec::new(),
                });
            }
        } else if let Some(section) = current.as_mut() {
            section.lines.push(line.to_string());
        }
    }
    if let Some(section) = current.take() {
        sections.push(section);
    }
    sections
}
