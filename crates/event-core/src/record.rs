//! Raw rows and normalized event records.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One spreadsheet row as an ordered list of cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow(pub Vec<String>);

impl RawRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(cells.into_iter().map(Into::into).collect())
    }

    /// Cell at `index`; cells past the end of the row read as empty.
    pub fn cell(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for RawRow {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

impl From<Vec<&str>> for RawRow {
    fn from(cells: Vec<&str>) -> Self {
        Self::new(cells)
    }
}

/// A game tag, kept in display and match form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    /// Upper-cased, for display.
    pub display: String,
    /// Lower-cased, for matching.
    pub key: String,
}

/// Calendar strings derived from the start instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSchedule {
    pub weekday: String,
    pub month: String,
    pub day_of_month: String,
    pub time: String,
}

/// A validated, normalized event.
///
/// Only [`Normalizer`](crate::Normalizer) builds these, so every record
/// has passed the required-field checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub(crate) start: NaiveDateTime,
    pub(crate) title: String,
    pub(crate) link: String,
    pub(crate) region: Option<String>,
    pub(crate) sub_region: Option<String>,
    pub(crate) address: String,
    pub(crate) tags_display: String,
    pub(crate) tags: Vec<Tag>,
    pub(crate) when: EventSchedule,
}

impl EventRecord {
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    /// Lower-cased country code.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Lower-cased state code.
    pub fn sub_region(&self) -> Option<&str> {
        self.sub_region.as_deref()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// The tag cell upper-cased, separators intact.
    pub fn tags_display(&self) -> &str {
        &self.tags_display
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Lower-cased tag keys in order.
    pub fn tag_keys(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|tag| tag.key.as_str())
    }

    pub fn when(&self) -> &EventSchedule {
        &self.when
    }
}
