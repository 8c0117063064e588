//! Configuration for the event-feed binary.

use std::env;

use event_core::{split_terms, ColumnLayout, DayPadding, NormalizeOptions, FILTER_SEPARATOR};
use sheets_client::{SheetsConfig, DEFAULT_BASE_URL};
use thiserror::Error;
use url::Url;

/// Page URL used when `EVENTS_PAGE_URL` is not set.
pub const DEFAULT_PAGE_URL: &str = "https://events.local/";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("Invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Configuration for the feed.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Sheets API key. Only needed when fetching over the network.
    pub api_key: Option<String>,
    /// Spreadsheet id. Only needed when fetching over the network.
    pub spreadsheet_id: Option<String>,
    pub sheets_url: String,
    /// Range template; `{region}` selects one sheet per region.
    pub range: String,
    pub layout: ColumnLayout,
    /// Region fetched when none is selected.
    pub default_region: String,
    /// Ordered locale preferences, e.g. `en-US,fr`.
    pub locales: Vec<String>,
    pub day_padding: DayPadding,
    /// Page URL whose query holds the initial filters.
    pub page_url: String,
    pub sort_by_start: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            spreadsheet_id: None,
            sheets_url: DEFAULT_BASE_URL.to_string(),
            range: "A:G".to_string(),
            layout: ColumnLayout::with_regions(),
            default_region: "CA".to_string(),
            locales: vec!["en-US".to_string()],
            day_padding: DayPadding::ZeroPadded,
            page_url: DEFAULT_PAGE_URL.to_string(),
            sort_by_start: false,
        }
    }
}

impl FeedConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `EVENTS_SHEETS_API_KEY` (required for network fetches)
    /// - `EVENTS_SPREADSHEET_ID` (required for network fetches)
    /// - `EVENTS_SHEETS_URL` (default: https://sheets.googleapis.com)
    /// - `EVENTS_RANGE` (default: A:G)
    /// - `EVENTS_LAYOUT` (basic, sub-region, regions; default: regions)
    /// - `EVENTS_DEFAULT_REGION` (default: CA)
    /// - `EVENTS_LOCALES` (default: en-US)
    /// - `EVENTS_DAY_PADDING` (zero or none; default: zero)
    /// - `EVENTS_PAGE_URL` (default: https://events.local/)
    /// - `EVENTS_SORT_BY_START` (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let layout = match var("EVENTS_LAYOUT") {
            Some(name) => name.parse().map_err(|reason| ConfigError::Invalid {
                name: "EVENTS_LAYOUT",
                reason,
            })?,
            None => defaults.layout,
        };

        let day_padding = match var("EVENTS_DAY_PADDING") {
            Some(value) => value.parse().map_err(|reason| ConfigError::Invalid {
                name: "EVENTS_DAY_PADDING",
                reason,
            })?,
            None => defaults.day_padding,
        };

        let page_url = var("EVENTS_PAGE_URL").unwrap_or(defaults.page_url);
        parse_page_url(&page_url)?;

        let locales = var("EVENTS_LOCALES")
            .map(|v| {
                split_terms(&v, FILTER_SEPARATOR)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or(defaults.locales);

        let sort_by_start = var("EVENTS_SORT_BY_START")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(defaults.sort_by_start);

        Ok(Self {
            api_key: var("EVENTS_SHEETS_API_KEY"),
            spreadsheet_id: var("EVENTS_SPREADSHEET_ID"),
            sheets_url: var("EVENTS_SHEETS_URL").unwrap_or(defaults.sheets_url),
            range: var("EVENTS_RANGE").unwrap_or(defaults.range),
            layout,
            default_region: var("EVENTS_DEFAULT_REGION").unwrap_or(defaults.default_region),
            locales,
            day_padding,
            page_url,
            sort_by_start,
        })
    }

    /// Normalizer options from this configuration.
    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            layout: self.layout,
            locales: self.locales.clone(),
            day_padding: self.day_padding,
        }
    }

    /// The configured page URL.
    pub fn page_url(&self) -> Result<Url, ConfigError> {
        parse_page_url(&self.page_url)
    }

    /// Sheets client configuration. Fails if the credentials are missing.
    pub fn sheets(&self) -> Result<SheetsConfig, ConfigError> {
        let spreadsheet_id = self
            .spreadsheet_id
            .clone()
            .ok_or(ConfigError::Missing("EVENTS_SPREADSHEET_ID"))?;
        let api_key = self
            .api_key
            .clone()
            .ok_or(ConfigError::Missing("EVENTS_SHEETS_API_KEY"))?;

        Ok(SheetsConfig::new(spreadsheet_id, api_key, self.range.clone())
            .with_base_url(self.sheets_url.clone()))
    }
}

fn parse_page_url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::Invalid {
        name: "EVENTS_PAGE_URL",
        reason: e.to_string(),
    })
}
