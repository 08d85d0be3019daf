//! # Cannery
//!
//! Cannery is the canned-response engine behind a bug-triage assistant: it
//! turns a semi-structured text document into a validated collection of
//! reply templates and maintains that collection as a persisted library.
//!
//! ## The Two Halves
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parsing pipeline (parse/, slug.rs)                         │
//! │  - sectionize: one block per `## ` heading                  │
//! │  - split metadata from body, build records, resolve id      │
//! │    collisions with deterministic numeric suffixes           │
//! │  - pure functions, never fail on malformed input            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (library.rs)                                       │
//! │  - replace/merge import, upsert, delete, lookups            │
//! │  - structured Diagnostic messages instead of logging        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - LibraryStore trait; FileStore (JSON file, atomic writes) │
//! │    for production, InMemoryStore for tests                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Never Block the Host
//!
//! The caller is an interactive tool. Nothing in this crate panics or
//! returns an error for malformed input or a failing store: degenerate
//! documents yield fewer records, persistence failures downgrade to warning
//! diagnostics, and lookup misses are `Option`/`bool` sentinels. The
//! `Result` type exists only at the store boundary.
//!
//! ## Quick Start
//!
//! ```
//! use cannery::{ImportMode, InMemoryStore, ResponseLibrary};
//!
//! let mut library = ResponseLibrary::with_store(InMemoryStore::new());
//! library.import_document(
//!     "## need-str\nCategories: need-info\n\nPlease provide steps to reproduce.\n",
//!     ImportMode::Replace,
//! );
//! assert!(library.get_by_id("need-str").is_some());
//! ```
//!
//! ## Module Overview
//!
//! - [`model`]: the [`CannedResponse`] record and document rendering
//! - [`parse`]: the document → records pipeline
//! - [`slug`]: heading → identifier normalization
//! - [`library`]: the persisted, ordered collection
//! - [`store`]: persistence trait and backends
//! - [`defaults`]: embedded seed responses
//! - [`error`]: error types (store boundary only)

pub mod defaults;
pub mod error;
pub mod library;
pub mod model;
pub mod parse;
pub mod slug;
pub mod store;

pub use error::{CanneryError, Result};
pub use library::{
    extract_categories, Diagnostic, DiagnosticLevel, ImportMode, LibraryUpdate, ResponseLibrary,
    ResponsePatch,
};
pub use model::{render_document, CannedResponse};
pub use parse::parse_document;
pub use slug::slugify;
pub use store::{fs::FileStore, memory::InMemoryStore, LibraryStore};
