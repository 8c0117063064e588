//! Google Sheets data source for event feeds.
//!
//! Implements [`event_core::RowSource`] over the Sheets v4
//! `values:batchGet` endpoint.
//!
//! # Example
//!
//! ```no_run
//! use event_core::{EventLoader, Normalizer};
//! use sheets_client::{SheetsClient, SheetsConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SheetsConfig::new("spreadsheet-id", "api-key", "{region}!A:G");
//! let client = SheetsClient::new(config)?;
//!
//! let loader = EventLoader::new(Normalizer::default(), "CA");
//! let regions = vec!["CA".to_string(), "TX".to_string()];
//! let events = loader.load(&client, &regions).await?;
//! println!("{} events", events.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{decode_document, SheetsClient};
pub use config::{SheetsConfig, DEFAULT_BASE_URL, REGION_PLACEHOLDER};
pub use error::SheetsError;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
