//! The response library: an ordered, persisted collection of canned
//! responses with two import policies.
//!
//! [`ResponseLibrary`] owns its [`LibraryStore`] and is the only mutator of
//! the collection. Mutating operations return a [`LibraryUpdate`] carrying
//! the post-operation snapshot plus structured [`Diagnostic`] messages; the
//! caller decides how to surface them. Nothing here writes to stdout or
//! raises for malformed input — a bad import file must never block an
//! interactive host.

use serde::Serialize;

use crate::model::CannedResponse;
use crate::parse::parse_document;
use crate::store::LibraryStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Info,
    Warning,
}

/// A structured message from a library operation.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub content: String,
}

impl Diagnostic {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: DiagnosticLevel::Warning,
            content: content.into(),
        }
    }
}

/// How an imported batch interacts with the existing library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// The library becomes exactly the parsed batch.
    Replace,
    /// Parsed records overwrite matching ids in place; new ids are appended
    /// in parse order.
    Merge,
}

/// Snapshot plus diagnostics returned by every mutating operation.
#[derive(Debug, Default)]
pub struct LibraryUpdate {
    pub responses: Vec<CannedResponse>,
    pub messages: Vec<Diagnostic>,
}

/// A partial record for [`ResponseLibrary::save_response`].
///
/// Fields left `None` keep their previous value when the id already exists;
/// for a new id the patch is materialized as-is, with absent fields empty.
#[derive(Debug, Clone, Default)]
pub struct ResponsePatch {
    pub id: String,
    pub title: Option<String>,
    pub body_template: Option<String>,
    pub description: Option<String>,
    pub categories: Option<Vec<String>>,
}

impl ResponsePatch {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body_template: impl Into<String>) -> Self {
        self.body_template = Some(body_template.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    fn into_response(self) -> CannedResponse {
        CannedResponse {
            id: self.id,
            title: self.title.unwrap_or_default(),
            body_template: self.body_template.unwrap_or_default(),
            description: self.description,
            categories: self.categories.unwrap_or_default(),
        }
    }
}

impl From<CannedResponse> for ResponsePatch {
    fn from(response: CannedResponse) -> Self {
        Self {
            id: response.id,
            title: Some(response.title),
            body_template: Some(response.body_template),
            description: response.description,
            categories: Some(response.categories),
        }
    }
}

/// An ordered collection of canned responses, persisted through an injected
/// store.
///
/// Generic over [`LibraryStore`] so tests run against an in-memory store
/// and the host wires in the real backend.
pub struct ResponseLibrary<S: LibraryStore> {
    store: S,
    responses: Vec<CannedResponse>,
}

impl<S: LibraryStore> ResponseLibrary<S> {
    /// Creates a library restored from whatever the store last persisted.
    ///
    /// A store that has nothing saved, or whose read fails, yields an empty
    /// library; the in-memory collection is authoritative from here on.
    pub fn with_store(store: S) -> Self {
        let responses = store.load().ok().flatten().unwrap_or_default();
        Self { store, responses }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs the parsing pipeline without touching the library.
    pub fn parse(&self, document: &str) -> Vec<CannedResponse> {
        parse_document(document)
    }

    /// Imports a document under the given mode and persists the result.
    pub fn import_document(&mut self, document: &str, mode: ImportMode) -> LibraryUpdate {
        let parsed = parse_document(document);
        let mut messages = Vec::new();
        if parsed.is_empty() {
            messages.push(Diagnostic::warning(
                "no response sections found in document",
            ));
        } else {
            messages.push(Diagnostic::info(format!(
                "imported {} responses",
                parsed.len()
            )));
        }

        match mode {
            ImportMode::Replace => self.responses = parsed,
            ImportMode::Merge => {
                for record in parsed {
                    match self.responses.iter_mut().find(|r| r.id == record.id) {
                        // Full overwrite, keeping the record's position.
                        Some(existing) => *existing = record,
                        None => self.responses.push(record),
                    }
                }
            }
        }
        self.persist(&mut messages);
        LibraryUpdate {
            responses: self.responses.clone(),
            messages,
        }
    }

    /// Replace-imports the built-in seed document.
    pub fn import_defaults(&mut self) -> LibraryUpdate {
        self.import_document(crate::defaults::SEED_DOCUMENT, ImportMode::Replace)
    }

    /// Upserts a single response.
    ///
    /// An existing id is shallow-patched: only the fields present in the
    /// patch change. A new id is appended as-is. An empty id is a no-op
    /// with a warning and no persistence.
    pub fn save_response(&mut self, patch: ResponsePatch) -> LibraryUpdate {
        let mut messages = Vec::new();
        if patch.id.is_empty() {
            messages.push(Diagnostic::warning("cannot save a response without an id"));
            return LibraryUpdate {
                responses: self.responses.clone(),
                messages,
            };
        }

        match self.responses.iter_mut().find(|r| r.id == patch.id) {
            Some(existing) => {
                if let Some(title) = patch.title {
                    existing.title = title;
                }
                if let Some(body_template) = patch.body_template {
                    existing.body_template = body_template;
                }
                if let Some(description) = patch.description {
                    existing.description = Some(description);
                }
                if let Some(categories) = patch.categories {
                    existing.categories = categories;
                }
            }
            None => self.responses.push(patch.into_response()),
        }
        self.persist(&mut messages);
        LibraryUpdate {
            responses: self.responses.clone(),
            messages,
        }
    }

    /// Removes the response with `id`. Returns whether anything was removed;
    /// a miss leaves the persisted snapshot untouched.
    pub fn delete_response(&mut self, id: &str) -> bool {
        let Some(position) = self.responses.iter().position(|r| r.id == id) else {
            return false;
        };
        self.responses.remove(position);
        // Fire-and-forget: a failed write leaves memory authoritative.
        let _ = self.store.save(&self.responses);
        true
    }

    /// A defensive copy of the current collection.
    pub fn get_all(&self) -> Vec<CannedResponse> {
        self.responses.clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&CannedResponse> {
        self.responses.iter().find(|r| r.id == id)
    }

    /// All responses whose categories contain `category`, exact match.
    pub fn get_by_category(&self, category: &str) -> Vec<CannedResponse> {
        self.responses
            .iter()
            .filter(|r| r.categories.iter().any(|c| c == category))
            .cloned()
            .collect()
    }

    fn persist(&mut self, messages: &mut Vec<Diagnostic>) {
        if let Err(err) = self.store.save(&self.responses) {
            messages.push(Diagnostic::warning(format!(
                "failed to persist library: {err}"
            )));
        }
    }
}

/// Sorted, deduplicated union of the categories across `responses`.
pub fn extract_categories(responses: &[CannedResponse]) -> Vec<String> {
    let mut categories: Vec<String> = responses
        .iter()
        .flat_map(|r| r.categories.iter().cloned())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}
