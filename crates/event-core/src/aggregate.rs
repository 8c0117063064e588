//! Multi-region row aggregation.

use tracing::info;

use crate::error::EventError;
use crate::record::RawRow;
use crate::source::RowSource;

/// Fetch every region in order and concatenate their data rows.
///
/// Regions are fetched one after another. Each region's first row is its
/// header and is dropped. A region without data adds nothing; a fetch error
/// aborts the whole aggregation. With no regions, `default_region` is used.
pub async fn aggregate<S>(
    regions: &[String],
    source: &S,
    default_region: &str,
) -> Result<Vec<RawRow>, EventError>
where
    S: RowSource + ?Sized,
{
    let fallback = [default_region.to_string()];
    let regions = if regions.is_empty() { &fallback[..] } else { regions };

    let mut rows = Vec::new();
    for region in regions {
        match source.fetch_rows(region).await? {
            Some(fetched) if fetched.len() > 1 => {
                info!("Fetched {} rows for region {}", fetched.len() - 1, region);
                rows.extend(fetched.into_iter().skip(1));
            }
            _ => info!("No data for region {}", region),
        }
    }

    Ok(rows)
}
