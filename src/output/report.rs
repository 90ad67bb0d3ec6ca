//! Plain-text report for the terminal

use crate::output::format::{format_currency, format_offer};
use crate::output::RankedPlayer;
use crate::pipeline::AggregateResult;
use std::fmt::Write;

/// Formats the statistics panel and ranked list as plain text
///
/// # Arguments
///
/// * `result` - The computed aggregate
/// * `players` - The ranked players to list (possibly filtered by a search)
/// * `query` - The search query that produced `players`, if any
pub fn format_text_report(
    result: &AggregateResult,
    players: &[RankedPlayer<'_>],
    query: Option<&str>,
) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "=== MLB Qualifying Offer ===\n");
    let _ = writeln!(
        out,
        "Upcoming qualifying offer: {}",
        format_offer(result.qualifying_offer)
    );
    let _ = writeln!(
        out,
        "  Average of the top {} valid salaries\n",
        result.top_players.len()
    );

    let _ = writeln!(out, "Dataset summary:");
    let _ = writeln!(out, "  Total rows in table:       {}", result.total_rows);
    let _ = writeln!(out, "  Valid salary rows used:    {}", result.valid_count);
    let _ = writeln!(out, "  Rows ignored as malformed: {}", result.ignored_rows);
    let _ = writeln!(
        out,
        "  Salaries in QO sample:     {}",
        result.top_players.len()
    );
    let _ = writeln!(out);

    match query {
        Some(query) => {
            let _ = writeln!(out, "Top salaries matching \"{}\":", query);
        }
        None => {
            let _ = writeln!(out, "Top salaries used in the calculation:");
        }
    }

    if players.is_empty() {
        let message = if query.is_some() {
            "No players match that search."
        } else {
            "No valid salaries found."
        };
        let _ = writeln!(out, "  {}", message);
        return out;
    }

    let name_width = players
        .iter()
        .map(|p| p.player.name().chars().count())
        .max()
        .unwrap_or(0);

    for ranked in players {
        let _ = writeln!(
            out,
            "  {:>3}. {:<width$}  {:>14}",
            ranked.rank,
            ranked.player.name(),
            format_currency(ranked.player.salary()),
            width = name_width
        );
    }

    out
}
