//! Google Sheets `values:batchGet` response types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::RawRow;

/// Top-level `batchGet` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchGetResponse {
    #[serde(default)]
    pub spreadsheet_id: Option<String>,

    #[serde(default)]
    pub value_ranges: Vec<ValueRange>,
}

/// One requested range. The API omits `values` for an empty range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,

    #[serde(default)]
    pub major_dimension: Option<String>,

    #[serde(default)]
    pub values: Option<Vec<Vec<Value>>>,
}

impl ValueRange {
    /// All rows of the range, header included. `None` when the range holds no data.
    pub fn rows(&self) -> Option<Vec<RawRow>> {
        let values = self.values.as_ref()?;
        if values.is_empty() {
            return None;
        }
        Some(
            values
                .iter()
                .map(|row| RawRow(row.iter().map(cell_text).collect()))
                .collect(),
        )
    }
}

impl BatchGetResponse {
    /// Rows of the first value range.
    pub fn first_range_rows(&self) -> Option<Vec<RawRow>> {
        self.value_ranges.first().and_then(ValueRange::rows)
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
