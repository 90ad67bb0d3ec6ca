//! Ranking and averaging of extracted salaries

use crate::pipeline::extractor::PlayerRecord;
use serde::Serialize;

/// Number of top salaries averaged into the qualifying offer
pub const QUALIFYING_OFFER_POOL: usize = 125;

/// Result of one qualifying offer computation
///
/// Serializes to the API body shape:
/// `{ qualifyingOffer, validCount, totalRows, ignoredRows, topPlayers }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    /// Mean of the top salaries, `None` when there were no valid rows
    pub qualifying_offer: Option<f64>,

    pub valid_count: usize,

    pub total_rows: usize,

    /// `total_rows - valid_count`, clamped at zero
    pub ignored_rows: usize,

    /// Highest salaries first, at most the pool size
    pub top_players: Vec<PlayerRecord>,
}

/// Aggregates records into the qualifying offer using the standard pool of 125
pub fn aggregate(records: Vec<PlayerRecord>, total_rows: usize) -> AggregateResult {
    aggregate_top(records, total_rows, QUALIFYING_OFFER_POOL)
}

/// Aggregates records, averaging the `pool_size` highest salaries
///
/// # Ranking
///
/// Records are sorted by salary, highest first, with a stable sort: players
/// with equal salaries keep their source order. This decides which record
/// makes the cut when the salaries at the pool boundary are tied.
///
/// # Arguments
///
/// * `records` - Valid records in source order
/// * `total_rows` - Number of source rows, valid or not
/// * `pool_size` - How many of the top salaries to average
pub fn aggregate_top(
    mut records: Vec<PlayerRecord>,
    total_rows: usize,
    pool_size: usize,
) -> AggregateResult {
    let valid_count = records.len();
    let ignored_rows = total_rows.saturating_sub(valid_count);

    records.sort_by(|a, b| b.salary().total_cmp(&a.salary()));
    records.truncate(pool_size);

    let qualifying_offer = mean_salary(&records);

    AggregateResult {
        qualifying_offer,
        valid_count,
        total_rows,
        ignored_rows,
        top_players: records,
    }
}

/// Arithmetic mean of the salaries, summed in rank order
fn mean_salary(players: &[PlayerRecord]) -> Option<f64> {
    if players.is_empty() {
        return None;
    }

    let total: f64 = players.iter().map(PlayerRecord::salary).sum();
    Some(total / players.len() as f64)
}
