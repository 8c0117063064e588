//! Filter state carried in a page URL's query string.

use url::Url;

use crate::filter::{Dimension, FilterSpec};
use indexmap::IndexSet;

use crate::terms::{join_terms, normalize_term, parse_term_list, split_terms, FILTER_SEPARATOR};

/// Query parameter names for each filter dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    pub region: String,
    pub sub_region: String,
    pub tag: String,
}

impl FilterParams {
    pub fn new(
        region: impl Into<String>,
        sub_region: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            sub_region: sub_region.into(),
            tag: tag.into(),
        }
    }

    pub fn name(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Region => &self.region,
            Dimension::SubRegion => &self.sub_region,
            Dimension::Tag => &self.tag,
        }
    }

    fn owns(&self, key: &str) -> bool {
        Dimension::ALL.iter().any(|d| self.name(*d) == key)
    }
}

impl Default for FilterParams {
    fn default() -> Self {
        Self::new("countries", "states", "games")
    }
}

/// Read a [`FilterSpec`] from `url`'s query.
///
/// An absent parameter takes the matching dimension of `defaults`. Malformed
/// values never fail; they parse to whatever terms they contain.
pub fn read_filter_state(url: &Url, params: &FilterParams, defaults: &FilterSpec) -> FilterSpec {
    let mut spec = FilterSpec::open();

    for dimension in Dimension::ALL {
        let name = params.name(dimension);
        let value = url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned());

        *spec.terms_mut(dimension) = match value {
            Some(value) => parse_term_list(&value, FILTER_SEPARATOR),
            None => defaults.terms(dimension).clone(),
        };
    }

    spec
}

/// Raw comma-separated values of parameter `name`, trimmed, case kept.
///
/// Used for selecting data sources, where codes are matched exactly
/// rather than as lower-cased substrings.
pub fn read_raw_terms(url: &Url, name: &str) -> Vec<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| {
            split_terms(&value, FILTER_SEPARATOR)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

/// Return `url` with its filter parameters replaced by `spec`.
///
/// Terms are written normalized; blank terms are skipped. Dimensions with
/// no terms left are removed rather than written empty. Unrelated parameters
/// keep their order and come first.
pub fn write_filter_state(url: &Url, params: &FilterParams, spec: &FilterSpec) -> Url {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !params.owns(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    for dimension in Dimension::ALL {
        let terms: IndexSet<String> = spec
            .terms(dimension)
            .iter()
            .map(String::as_str)
            .map(normalize_term)
            .filter(|term| !term.is_empty())
            .collect();
        if !terms.is_empty() {
            pairs.push((params.name(dimension).to_string(), join_terms(&terms)));
        }
    }

    let mut next = url.clone();
    if pairs.is_empty() {
        next.set_query(None);
    } else {
        next.query_pairs_mut().clear().extend_pairs(pairs);
    }
    next
}
