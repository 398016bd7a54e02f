//! Joins candidate devices with their marketplace listings.

use std::time::Duration;
use tokio::time::sleep;

use crate::domain::models::{DeviceRecord, ResultRow};
use crate::error::Result;
use crate::service::marketplace::ListingSource;

/// Delay between successive device lookups, as a courtesy to the
/// marketplace. Not a backoff mechanism.
pub const PACING_DELAY: Duration = Duration::from_secs(2);

/// For each candidate in catalog order: derive the search query, fetch
/// its listings, and emit one row per surviving listing together with
/// the device's OS-support snapshot. A device with zero listings
/// contributes zero rows. A network failure aborts the remaining run.
pub async fn aggregate<S: ListingSource>(
    candidates: &[DeviceRecord],
    source: &S,
    pacing: Duration,
) -> Result<Vec<ResultRow>> {
    let mut rows = Vec::new();

    for device in candidates {
        let device_name = device.search_query();
        log::info!("[AGGREGATE] Searching listings for {}", device_name);

        let listings = source.fetch_listings(&device_name).await?;
        for listing in listings {
            rows.push(ResultRow {
                device: device_name.clone(),
                listing,
                os_support: device.os_support,
            });
        }

        sleep(pacing).await;
    }

    log::info!(
        "[AGGREGATE] {} rows across {} devices",
        rows.len(),
        candidates.len()
    );
    Ok(rows)
}
