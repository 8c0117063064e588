//! Data source abstraction.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::EventError;
use crate::record::RawRow;
use crate::sheet::BatchGetResponse;

/// Fetches the rows of one region (or sheet range).
///
/// Returned rows include the header row. `Ok(None)` means the region has no
/// data, which is not an error.
#[async_trait]
pub trait RowSource: Send + Sync {
    async fn fetch_rows(&self, region: &str) -> Result<Option<Vec<RawRow>>, EventError>;
}

/// In-memory rows keyed by region.
#[derive(Debug, Clone, Default)]
pub struct MemoryRowSource {
    regions: HashMap<String, Vec<RawRow>>,
    fallback: Option<Vec<RawRow>>,
}

impl MemoryRowSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add rows (header first) for `region`.
    pub fn with_region(mut self, region: impl Into<String>, rows: Vec<RawRow>) -> Self {
        self.regions.insert(region.into(), rows);
        self
    }

    /// Serve the first range of `document` for every region.
    pub fn from_document(document: &BatchGetResponse) -> Self {
        Self {
            regions: HashMap::new(),
            fallback: document.first_range_rows(),
        }
    }
}

#[async_trait]
impl RowSource for MemoryRowSource {
    async fn fetch_rows(&self, region: &str) -> Result<Option<Vec<RawRow>>, EventError> {
        Ok(self
            .regions
            .get(region)
            .cloned()
            .or_else(|| self.fallback.clone()))
    }
}
