//! Event feed core.
//!
//! Turns spreadsheet rows into validated event records and filters them:
//!
//! - [`validation`]: required-field checks
//! - [`normalize`]: raw row → [`EventRecord`]
//! - [`aggregate`]: sequential multi-region fetch through a [`RowSource`]
//! - [`filter`]: region / state / game matching
//! - [`url_state`]: filter state in URL query parameters
//! - [`render`]: the interface display hosts implement
//!
//! # Example
//!
//! ```
//! use event_core::{FilterSpec, Normalizer, RawRow};
//!
//! let row = RawRow::new([
//!     "2024-05-01T18:00:00",
//!     "Spring Clash",
//!     "http://example.com",
//!     "US",
//!     "CA",
//!     "123 Main St",
//!     "Street Fighter 6 / Tekken 8",
//! ]);
//! let record = Normalizer::default().normalize(&row).unwrap();
//!
//! assert!(FilterSpec::from_inputs("", "ca", "tekken").matches(&record));
//! assert!(!FilterSpec::from_inputs("", "", "guilty gear").matches(&record));
//! ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod layout;
pub mod normalize;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod session;
pub mod sheet;
pub mod source;
pub mod terms;
pub mod url_state;
pub mod validation;

pub use aggregate::aggregate;
pub use error::EventError;
pub use filter::{filter_events, visibility, Dimension, FilterSpec};
pub use layout::ColumnLayout;
pub use normalize::{parse_date_time, DayPadding, NormalizeOptions, Normalizer};
pub use pipeline::EventLoader;
pub use record::{EventRecord, EventSchedule, RawRow, Tag};
pub use render::Render;
pub use session::FilterSession;
pub use sheet::{BatchGetResponse, ValueRange};
pub use source::{MemoryRowSource, RowSource};
pub use terms::{parse_term_list, split_terms, FILTER_SEPARATOR, TAG_SEPARATOR};
pub use url_state::{read_filter_state, read_raw_terms, write_filter_state, FilterParams};
pub use validation::{require, Field, Truthy, ValidationError};

// Re-exported for implementors of `RowSource`.
pub use async_trait::async_trait;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
