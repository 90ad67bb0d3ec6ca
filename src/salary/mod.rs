//! Salary cell handling
//!
//! Salary cells in the source table are free text: currency symbols, thousands
//! separators, footnote markers and whitespace all show up. This module turns
//! that text into a validated positive amount.

mod normalize;

pub use normalize::{normalize_salary, parse_salary};
