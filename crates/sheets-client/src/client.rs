//! Google Sheets HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use event_core::{BatchGetResponse, EventError, RawRow, RowSource};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::SheetsConfig;
use crate::error::SheetsError;

/// Client for the `values:batchGet` endpoint.
#[derive(Clone)]
pub struct SheetsClient {
    http: Client,
    config: SheetsConfig,
}

impl SheetsClient {
    /// Create a client. No request is made until the first fetch.
    pub fn new(config: SheetsConfig) -> Result<Self, SheetsError> {
        config.validate()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(SheetsError::Http)?;

        Ok(Self { http, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &SheetsConfig {
        &self.config
    }

    /// GET one range and decode the response document.
    pub async fn fetch_range(&self, range: &str) -> Result<BatchGetResponse, SheetsError> {
        let url = self.config.batch_get_url(range);
        // the key is part of the query; log the range instead
        info!("GET values:batchGet range={}", range);

        let response = self.http.get(&url).send().await.map_err(SheetsError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::Status {
                status: status.as_u16(),
                url: redact_key(&url),
                body,
            });
        }

        let body = response.text().await.map_err(SheetsError::Http)?;
        decode_document(&body, &redact_key(&url))
    }
}

#[async_trait]
impl RowSource for SheetsClient {
    async fn fetch_rows(&self, region: &str) -> Result<Option<Vec<RawRow>>, EventError> {
        let range = self.config.range_for(region);
        let document = self.fetch_range(&range).await?;
        let rows = document.first_range_rows();
        debug!(
            "Range {} returned {} rows",
            range,
            rows.as_ref().map_or(0, Vec::len)
        );
        Ok(rows)
    }
}

impl std::fmt::Debug for SheetsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsClient")
            .field("base_url", &self.config.base_url)
            .field("spreadsheet_id", &self.config.spreadsheet_id)
            .field("range_template", &self.config.range_template)
            .finish()
    }
}

/// Decode a `batchGet` body.
///
/// A blank body, `null`, `{}` or a document without value ranges is an
/// [`SheetsError::EmptyDocument`]. A value range without values is not.
pub fn decode_document(body: &str, url: &str) -> Result<BatchGetResponse, SheetsError> {
    if body.trim().is_empty() {
        return Err(SheetsError::EmptyDocument(url.to_string()));
    }

    let value: Value = serde_json::from_str(body)?;
    let is_empty = match &value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if is_empty {
        return Err(SheetsError::EmptyDocument(url.to_string()));
    }

    let document: BatchGetResponse = serde_json::from_value(value)?;
    if document.value_ranges.is_empty() {
        return Err(SheetsError::EmptyDocument(url.to_string()));
    }
    Ok(document)
}

fn redact_key(url: &str) -> String {
    match (url.find("key="), url.find("&ranges=")) {
        (Some(start), Some(end)) if start < end => {
            format!("{}key=***{}", &url[..start], &url[end..])
        }
        _ => url.to_string(),
    }
}
