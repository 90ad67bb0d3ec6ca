//! The qualifying offer pipeline
//!
//! This module contains the whole computation, in three steps:
//! - Fetching the live salary document (the only effectful step)
//! - Extracting valid player records from its tables
//! - Ranking the records and averaging the top salaries
//!
//! Each call runs the full sequence from scratch. Nothing is cached or shared
//! between calls, so every result reflects the document as it was fetched.

mod aggregator;
mod extractor;
mod fetcher;

pub use aggregator::{aggregate, aggregate_top, AggregateResult, QUALIFYING_OFFER_POOL};
pub use extractor::{extract_players, Extraction, PlayerRecord, UNKNOWN_PLAYER};
pub use fetcher::{build_http_client, Fetcher};

use crate::QoError;

/// Computes the qualifying offer from an HTML document
///
/// This is a pure function of its input: the same document always produces
/// the same result.
///
/// # Arguments
///
/// * `html` - The salary document
/// * `pool_size` - How many top salaries to average
pub fn compute_from_html(html: &str, pool_size: usize) -> AggregateResult {
    let extraction = extract_players(html);

    tracing::debug!(
        "Extracted {} valid rows of {} (short rows: {}, rejected salaries: {}, unnamed: {})",
        extraction.records.len(),
        extraction.total_rows,
        extraction.short_rows,
        extraction.rejected_salaries,
        extraction.placeholder_names
    );

    aggregate_top(extraction.records, extraction.total_rows, pool_size)
}

/// Fetches the salary document and computes the qualifying offer
///
/// # Arguments
///
/// * `fetcher` - The fetcher for the salary document
/// * `pool_size` - How many top salaries to average
///
/// # Returns
///
/// * `Ok(AggregateResult)` - Computed result, possibly with no offer if the
///   document held no valid rows
/// * `Err(QoError)` - The document could not be fetched; nothing is computed
pub async fn fetch_qualifying_offer(
    fetcher: &Fetcher,
    pool_size: usize,
) -> Result<AggregateResult, QoError> {
    let html = fetcher.fetch().await?;
    let result = compute_from_html(&html, pool_size);

    match result.qualifying_offer {
        Some(offer) => tracing::info!(
            "Qualifying offer {:.2} from {} salaries ({} valid of {} rows)",
            offer,
            result.top_players.len(),
            result.valid_count,
            result.total_rows
        ),
        None => tracing::info!(
            "No valid salaries found ({} rows scanned)",
            result.total_rows
        ),
    }

    Ok(result)
}
