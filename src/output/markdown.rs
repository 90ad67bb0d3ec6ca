//! Markdown report generation

use crate::output::format::{format_currency, format_offer};
use crate::output::RankedPlayer;
use crate::pipeline::AggregateResult;

/// Formats the result as a markdown document
///
/// # Arguments
///
/// * `result` - The computed aggregate
/// * `players` - The ranked players to list
/// * `query` - The search query that produced `players`, if any
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown_report(
    result: &AggregateResult,
    players: &[RankedPlayer<'_>],
    query: Option<&str>,
) -> String {
    let mut md = String::new();

    md.push_str("# MLB Qualifying Offer\n\n");
    md.push_str(&format!(
        "**Upcoming qualifying offer**: {}\n\n",
        format_offer(result.qualifying_offer)
    ));
    md.push_str(&format!(
        "Computed as the average of the top {} valid salaries in the dataset.\n\n",
        result.top_players.len()
    ));

    md.push_str("## Dataset Summary\n\n");
    md.push_str("| Metric | Count |\n");
    md.push_str("|--------|-------|\n");
    md.push_str(&format!("| Total rows in table | {} |\n", result.total_rows));
    md.push_str(&format!("| Valid salary rows used | {} |\n", result.valid_count));
    md.push_str(&format!(
        "| Rows ignored as malformed | {} |\n",
        result.ignored_rows
    ));
    md.push_str(&format!(
        "| Salaries in QO sample | {} |\n\n",
        result.top_players.len()
    ));

    match query {
        Some(query) => md.push_str(&format!("## Top Salaries Matching \"{}\"\n\n", query)),
        None => md.push_str("## Top Salaries\n\n"),
    }

    if players.is_empty() {
        md.push_str(if query.is_some() {
            "*No players match that search.*\n"
        } else {
            "*No valid salaries found.*\n"
        });
        return md;
    }

    md.push_str("| # | Player | Salary |\n");
    md.push_str("|---|--------|-------:|\n");
    for ranked in players {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            ranked.rank,
            escape_cell(ranked.player.name()),
            format_currency(ranked.player.salary())
        ));
    }

    md
}

/// Escapes pipe characters so a name cannot break the table
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
