//! Parsing pipeline for canned-response documents.
//!
//! A document flows through four stages:
//!
//! 1. [`section::sectionize`] splits it into per-heading blocks.
//! 2. [`metadata::split_metadata`] separates each block's leading `Key: value`
//!    lines from the body text.
//! 3. `build_response` assembles a candidate record, falling back to a slug
//!    of the heading when no explicit id is given.
//! 4. `resolve_id_collisions` makes the batch's ids pairwise distinct by
//!    deterministic numeric suffixing.
//!
//! The pipeline never fails: malformed or degenerate input simply yields
//! fewer (or zero) records.

pub mod metadata;
pub mod section;

use std::collections::HashSet;

use crate::model::CannedResponse;
use crate::slug::slugify;
use metadata::SectionMetadata;

/// Parses a full document into finalized, collision-resolved records.
pub fn parse_document(document: &str) -> Vec<CannedResponse> {
    let sections = section::sectionize(document);
    let mut candidates = Vec::with_capacity(sections.len());
    for section in sections {
        let (meta, body_start) = metadata::split_metadata(&section.lines);
        let body = metadata::body_text(&section.lines, body_start);
        let candidate = build_response(&section.label, meta, body);
        // A heading of pure punctuation slugifies to nothing; such a section
        // cannot be addressed and is dropped.
        if candidate.id.is_empty() {
            continue;
        }
        candidates.push(candidate);
    }
    resolve_id_collisions(candidates)
}

/// Assembles a candidate record from a section's parts. The id is not yet
/// unique within the batch.
fn build_response(label: &str, meta: SectionMetadata, body: String) -> CannedResponse {
    let id = match meta.id {
        Some(id) if !id.is_empty() => id,
        _ => slugify(label),
    };
    let title = meta.title.unwrap_or_else(|| label.to_string());
    let description = meta.description.filter(|d| !d.is_empty());
    let categories = match meta.categories {
        None => Vec::new(),
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(String::from)
            .collect(),
    };
    CannedResponse {
        id,
        title,
        body_template: body,
        description,
        categories,
    }
}

/// Makes ids pairwise distinct within one parse batch.
///
/// Processes records in order; a taken id gets `-2`, then `-3`, and so on
/// until a free suffix is found. Only intra-batch collisions are resolved
/// here; merging into an existing library is the library's concern.
fn resolve_id_collisions(mut responses: Vec<CannedResponse>) -> Vec<CannedResponse> {
    let mut used: HashSet<String> = HashSet::with_capacity(responses.len());
    for response in &mut responses {
        if used.insert(response.id.clone()) {
            continue;
        }
        let mut suffix = 2;
        loop {
            let candidate = format!("{}-{}", response.id, suffix);
            if used.insert(candidate.clone()) {
                response.id = candidate;
                break;
            }
            suffix += 1;
        }
    }
    responses
}
