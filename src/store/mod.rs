//! # Storage Layer
//!
//! The [`LibraryStore`] trait is the persistence collaborator for the
//! response library. The library treats it as a full-snapshot key/value
//! slot: every mutation writes the whole collection, and startup reads it
//! back if present.
//!
//! Storage is abstracted behind a trait so that:
//! - tests run against [`memory::InMemoryStore`] with no filesystem,
//! - the host application picks the real backend ([`fs::FileStore`] here;
//!   a browser host would supply its own key/value wrapper).
//!
//! Store failures never propagate out of the library: a failed save is
//! reported as a warning diagnostic and the in-memory collection remains
//! authoritative.

use crate::error::Result;
use crate::model::CannedResponse;

pub mod fs;
pub mod memory;

/// Abstract interface for persisting the response library.
pub trait LibraryStore {
    /// Reads the previously persisted library, or `None` if nothing was
    /// ever saved.
    fn load(&self) -> Result<Option<Vec<CannedResponse>>>;

    /// Persists a full snapshot of the library.
    fn save(&mut self, responses: &[CannedResponse]) -> Result<()>;
}
