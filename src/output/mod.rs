//! Output module for presenting qualifying offer results
//!
//! This module handles:
//! - Rendering results as text, JSON, or markdown
//! - Currency formatting for display
//! - Filtering the ranked list by player name

mod format;
mod markdown;
mod report;

pub use format::{format_currency, format_offer};
pub use markdown::format_markdown_report;
pub use report::format_text_report;

use crate::pipeline::{AggregateResult, PlayerRecord};
use crate::QoError;
use std::path::Path;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal report
    #[default]
    Text,
    /// The API body, pretty-printed
    Json,
    /// Markdown document
    Markdown,
}

/// A player with its position in the full ranking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedPlayer<'a> {
    /// 1-based rank among the top salaries
    pub rank: usize,
    pub player: &'a PlayerRecord,
}

/// Ranks players and keeps those whose name contains the query
///
/// Matching is a case-insensitive substring test on the trimmed query. An
/// empty or missing query keeps every player. Ranks always refer to the
/// unfiltered list.
pub fn rank_players<'a>(players: &'a [PlayerRecord], query: Option<&str>) -> Vec<RankedPlayer<'a>> {
    let needle = query
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());

    players
        .iter()
        .enumerate()
        .map(|(i, player)| RankedPlayer { rank: i + 1, player })
        .filter(|ranked| match &needle {
            Some(needle) => ranked.player.name().to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect()
}

/// Renders a result in the given format
///
/// The search query narrows the listed players in text and markdown output.
/// JSON output is always the full API body.
pub fn render(
    result: &AggregateResult,
    format: OutputFormat,
    query: Option<&str>,
) -> Result<String, QoError> {
    let query = query.map(str::trim).filter(|q| !q.is_empty());
    let players = rank_players(&result.top_players, query);

    let rendered = match format {
        OutputFormat::Text => format_text_report(result, &players, query),
        OutputFormat::Json => serde_json::to_string_pretty(result)? + "\n",
        OutputFormat::Markdown => format_markdown_report(result, &players, query),
    };

    Ok(rendered)
}

/// Renders a result and writes it to a file
pub fn write_report(
    result: &AggregateResult,
    format: OutputFormat,
    query: Option<&str>,
    output_path: &Path,
) -> Result<(), QoError> {
    let rendered = render(result, format, query)?;
    std::fs::write(output_path, rendered)?;
    Ok(())
}
