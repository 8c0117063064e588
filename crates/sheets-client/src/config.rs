//! Configuration types for sheets-client.

use crate::error::SheetsError;

/// Default Google Sheets API base URL.
pub const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Placeholder replaced by the region code in a range template.
pub const REGION_PLACEHOLDER: &str = "{region}";

/// Configuration for reading a spreadsheet.
#[derive(Debug, Clone)]
pub struct SheetsConfig {
    /// API base URL (e.g., "https://sheets.googleapis.com").
    pub base_url: String,
    /// Spreadsheet id from the sheet's URL.
    pub spreadsheet_id: String,
    /// API key sent as the `key` query parameter.
    pub api_key: String,
    /// Range to read, e.g. "A:F" or "{region}!A:G".
    /// Without the placeholder every region reads the same range.
    pub range_template: String,
}

impl SheetsConfig {
    /// Create a configuration for the default API endpoint.
    pub fn new(
        spreadsheet_id: impl Into<String>,
        api_key: impl Into<String>,
        range_template: impl Into<String>,
    ) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            spreadsheet_id: spreadsheet_id.into(),
            api_key: api_key.into(),
            range_template: range_template.into(),
        }
    }

    /// Point the client at another base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether each region reads its own range.
    pub fn is_region_scoped(&self) -> bool {
        self.range_template.contains(REGION_PLACEHOLDER)
    }

    /// The range for `region`.
    pub fn range_for(&self, region: &str) -> String {
        self.range_template.replace(REGION_PLACEHOLDER, region)
    }

    /// Get the batchGet endpoint URL for one range.
    pub fn batch_get_url(&self, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values:batchGet?key={}&ranges={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.spreadsheet_id),
            urlencoding::encode(&self.api_key),
            urlencoding::encode(range),
        )
    }

    /// Check that the required values are present.
    pub fn validate(&self) -> Result<(), SheetsError> {
        if self.spreadsheet_id.trim().is_empty() {
            return Err(SheetsError::Config("spreadsheet id is empty".to_string()));
        }
        if self.api_key.trim().is_empty() {
            return Err(SheetsError::Config("API key is empty".to_string()));
        }
        if self.range_template.trim().is_empty() {
            return Err(SheetsError::Config("range is empty".to_string()));
        }
        Ok(())
    }
}
