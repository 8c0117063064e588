//! A page session: loaded records plus live filter state mirrored into the URL.

use tracing::debug;
use url::Url;

use crate::filter::{filter_events, visibility, Dimension, FilterSpec};
use crate::record::EventRecord;
use crate::url_state::{read_filter_state, write_filter_state, FilterParams};

/// Holds the records of one load and keeps the filter and URL in step.
///
/// Every filter change rewrites the current URL in place; there is no
/// history of previous URLs.
#[derive(Debug, Clone)]
pub struct FilterSession {
    records: Vec<EventRecord>,
    url: Url,
    params: FilterParams,
    spec: FilterSpec,
}

impl FilterSession {
    /// Start a session, reading the initial filter from `url`.
    pub fn new(records: Vec<EventRecord>, url: Url, params: FilterParams, defaults: &FilterSpec) -> Self {
        let spec = read_filter_state(&url, &params, defaults);
        Self {
            records,
            url,
            params,
            spec,
        }
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// The current URL, suitable for sharing.
    pub fn share_url(&self) -> &Url {
        &self.url
    }

    /// Apply a control's raw text to one dimension and return the new mask.
    pub fn set_input(&mut self, dimension: Dimension, raw: &str) -> Vec<bool> {
        self.spec.set_input(dimension, raw);
        self.sync_url();
        self.visibility()
    }

    /// Replace the whole filter.
    pub fn set_spec(&mut self, spec: FilterSpec) -> Vec<bool> {
        self.spec = spec;
        self.sync_url();
        self.visibility()
    }

    pub fn visibility(&self) -> Vec<bool> {
        visibility(&self.records, &self.spec)
    }

    pub fn visible(&self) -> Vec<&EventRecord> {
        filter_events(&self.records, &self.spec)
    }

    fn sync_url(&mut self) {
        self.url = write_filter_state(&self.url, &self.params, &self.spec);
        debug!("URL {}", self.url);
    }
}
