//! Display collaborator interface.

use crate::record::EventRecord;

/// Turns a record into something a host can show.
pub trait Render {
    type Handle;

    fn render(&self, record: &EventRecord) -> Self::Handle;

    /// Render every record, in order.
    fn render_all<'a, I>(&self, records: I) -> Vec<Self::Handle>
    where
        I: IntoIterator<Item = &'a EventRecord>,
    {
        records.into_iter().map(|record| self.render(record)).collect()
    }
}
