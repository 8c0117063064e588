//! Filter specifications and record matching.
//!
//! Within a dimension any term may match (OR); every dimension must pass
//! (AND). An empty dimension passes every record.

use indexmap::IndexSet;
use serde::Serialize;

use crate::record::EventRecord;
use crate::terms::{parse_term_list, FILTER_SEPARATOR};

/// One of the three filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Region,
    SubRegion,
    Tag,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Self::Region, Self::SubRegion, Self::Tag];
}

/// Accepted match terms per dimension, lower-cased and trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub regions: IndexSet<String>,
    pub sub_regions: IndexSet<String>,
    pub tags: IndexSet<String>,
}

impl FilterSpec {
    /// A filter that passes everything.
    pub fn open() -> Self {
        Self::default()
    }

    /// Build from raw comma-separated control inputs.
    pub fn from_inputs(regions: &str, sub_regions: &str, tags: &str) -> Self {
        Self {
            regions: parse_term_list(regions, FILTER_SEPARATOR),
            sub_regions: parse_term_list(sub_regions, FILTER_SEPARATOR),
            tags: parse_term_list(tags, FILTER_SEPARATOR),
        }
    }

    pub fn terms(&self, dimension: Dimension) -> &IndexSet<String> {
        match dimension {
            Dimension::Region => &self.regions,
            Dimension::SubRegion => &self.sub_regions,
            Dimension::Tag => &self.tags,
        }
    }

    pub fn terms_mut(&mut self, dimension: Dimension) -> &mut IndexSet<String> {
        match dimension {
            Dimension::Region => &mut self.regions,
            Dimension::SubRegion => &mut self.sub_regions,
            Dimension::Tag => &mut self.tags,
        }
    }

    /// Replace one dimension from a raw comma-separated input.
    pub fn set_input(&mut self, dimension: Dimension, raw: &str) {
        *self.terms_mut(dimension) = parse_term_list(raw, FILTER_SEPARATOR);
    }

    pub fn is_open(&self) -> bool {
        Dimension::ALL.iter().all(|d| self.terms(*d).is_empty())
    }

    /// Whether `record` passes every dimension.
    pub fn matches(&self, record: &EventRecord) -> bool {
        matches_field(&self.regions, record.region())
            && matches_field(&self.sub_regions, record.sub_region())
            && matches_any(&self.tags, record.tag_keys())
    }
}

fn matches_field(terms: &IndexSet<String>, value: Option<&str>) -> bool {
    terms.is_empty() || matches_any(terms, value)
}

fn matches_any<'a>(terms: &IndexSet<String>, values: impl IntoIterator<Item = &'a str>) -> bool {
    if terms.is_empty() {
        return true;
    }
    values
        .into_iter()
        .any(|value| terms.iter().any(|term| value.contains(term.as_str())))
}

/// Records that pass `spec`, in their original order.
pub fn filter_events<'a>(records: &'a [EventRecord], spec: &FilterSpec) -> Vec<&'a EventRecord> {
    records.iter().filter(|record| spec.matches(record)).collect()
}

/// Show/hide mask over `records`.
pub fn visibility(records: &[EventRecord], spec: &FilterSpec) -> Vec<bool> {
    records.iter().map(|record| spec.matches(record)).collect()
}
