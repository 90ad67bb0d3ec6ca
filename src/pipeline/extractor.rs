//! HTML table extraction
//!
//! This module turns the salary document into player records:
//! - Every `tr` inside any `table` is a candidate row
//! - The row's `td` cells are read in order: name, then salary
//! - Rows that cannot yield a salary are counted, never raised

use crate::salary::parse_salary;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

/// Name used when a row has a valid salary but an empty name cell
pub const UNKNOWN_PLAYER: &str = "Unknown player";

/// A player and salary from one valid source row
///
/// Only the extractor constructs records, and only after the salary has been
/// validated as finite and strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    name: String,
    salary: f64,
}

impl PlayerRecord {
    /// Builds a record from raw cell text, or `None` if the salary is unusable
    pub fn from_cells(name: &str, raw_salary: &str) -> Option<Self> {
        let salary = parse_salary(raw_salary)?;
        let name = name.trim();
        let name = if name.is_empty() { UNKNOWN_PLAYER } else { name };

        Some(Self {
            name: name.to_string(),
            salary,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }
}

/// Everything extracted from one document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Valid records in source order
    pub records: Vec<PlayerRecord>,

    /// Every `table tr` element, including header and invalid rows
    pub total_rows: usize,

    /// Rows with fewer than two `td` cells (header rows land here)
    pub short_rows: usize,

    /// Rows with two or more cells whose salary was unusable
    pub rejected_salaries: usize,

    /// Valid rows that got the placeholder name
    pub placeholder_names: usize,
}

/// Extracts player records from a salary document
///
/// # Arguments
///
/// * `html` - The raw HTML document
///
/// # Returns
///
/// The valid records in source order plus row counts. Malformed HTML and
/// malformed rows never fail; they only show up in the counts.
///
/// # Example
///
/// ```
/// use qualifying_offer::pipeline::extract_players;
///
/// let html = r#"<table><tr><td>A</td><td>$30,000,000</td></tr></table>"#;
/// let extraction = extract_players(html);
/// assert_eq!(extraction.total_rows, 1);
/// assert_eq!(extraction.records[0].salary(), 30_000_000.0);
/// ```
pub fn extract_players(html: &str) -> Extraction {
    let document = Html::parse_document(html);
    let mut extraction = Extraction::default();

    let (Ok(row_selector), Ok(cell_selector)) = (Selector::parse("table tr"), Selector::parse("td"))
    else {
        return extraction;
    };

    for row in document.select(&row_selector) {
        extraction.total_rows += 1;

        let cells: Vec<ElementRef> = row.select(&cell_selector).take(2).collect();
        let [name_cell, salary_cell] = cells.as_slice() else {
            extraction.short_rows += 1;
            continue;
        };

        let name = cell_text(name_cell);
        let raw_salary = cell_text(salary_cell);

        match PlayerRecord::from_cells(&name, &raw_salary) {
            Some(record) => {
                if name.is_empty() {
                    extraction.placeholder_names += 1;
                }
                extraction.records.push(record);
            }
            None => {
                tracing::trace!("Rejected salary cell {:?} for {:?}", raw_salary, name);
                extraction.rejected_salaries += 1;
            }
        }
    }

    extraction
}

/// Collects the trimmed text content of a cell
fn cell_text(cell: &ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}
