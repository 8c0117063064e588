//! Fetch → normalize in one call.

use tracing::info;

use crate::aggregate::aggregate;
use crate::error::EventError;
use crate::normalize::Normalizer;
use crate::record::EventRecord;
use crate::source::RowSource;

/// Loads and normalizes the events of the selected regions.
#[derive(Debug, Clone)]
pub struct EventLoader {
    normalizer: Normalizer,
    default_region: String,
    sort_by_start: bool,
}

impl EventLoader {
    pub fn new(normalizer: Normalizer, default_region: impl Into<String>) -> Self {
        Self {
            normalizer,
            default_region: default_region.into(),
            sort_by_start: false,
        }
    }

    /// Order records by start time instead of sheet order.
    pub fn sort_by_start(mut self, enabled: bool) -> Self {
        self.sort_by_start = enabled;
        self
    }

    /// Fetch `regions` from `source` and normalize every row.
    ///
    /// Any fetch, validation or parse failure fails the whole load.
    pub async fn load<S>(&self, source: &S, regions: &[String]) -> Result<Vec<EventRecord>, EventError>
    where
        S: RowSource + ?Sized,
    {
        let rows = aggregate(regions, source, &self.default_region).await?;
        info!("Loaded {} rows", rows.len());

        let mut records = self.normalizer.normalize_all(&rows)?;
        if self.sort_by_start {
            // stable: same-start events keep sheet order
            records.sort_by_key(EventRecord::start);
        }
        Ok(records)
    }
}
