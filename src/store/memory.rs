use crate::error::Result;
use crate::model::CannedResponse;
use crate::store::LibraryStore;

/// In-memory store for tests and ephemeral libraries. No persistence
/// beyond the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<Vec<CannedResponse>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds the store, as if a prior session had saved `responses`.
    pub fn with_responses(responses: Vec<CannedResponse>) -> Self {
        Self {
            saved: Some(responses),
        }
    }

    /// The last snapshot written, if any.
    pub fn saved(&self) -> Option<&[CannedResponse]> {
        self.saved.as_deref()
    }
}

impl LibraryStore for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<CannedResponse>>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, responses: &[CannedResponse]) -> Result<()> {
        self.saved = Some(responses.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::CanneryError;

    /// A store whose writes always fail, for exercising the library's
    /// persistence-failure tolerance.
    #[derive(Debug, Default)]
    pub struct FailingStore;

    impl LibraryStore for FailingStore {
        fn load(&self) -> Result<Option<Vec<CannedResponse>>> {
            Err(CanneryError::Store("backing store unavailable".to_string()))
        }

        fn save(&mut self, _responses: &[CannedResponse]) -> Result<()> {
            Err(CanneryError::Store("backing store rejected write".to_string()))
        }
    }

    pub fn sample_response(id: &str) -> CannedResponse {
        CannedResponse::new(id, format!("Title for {id}"), format!("Body for {id}"))
    }
}
