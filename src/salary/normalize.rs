/// Strips every character that is not an ASCII digit or a decimal point
///
/// # Examples
///
/// ```
/// use qualifying_offer::salary::normalize_salary;
///
/// assert_eq!(normalize_salary(" $27,500,000 "), "27500000");
/// assert_eq!(normalize_salary("N/A"), "");
/// ```
pub fn normalize_salary(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Reads the leading decimal number from a normalized salary string
///
/// Only the longest `digits[.digits]` prefix is read, so `"1.2.3"` yields
/// `1.2` and `".5"` yields `0.5`. A string with no digit in that prefix is
/// not a number.
fn leading_number(normalized: &str) -> Option<f64> {
    let int_len = normalized
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let (int_part, rest) = normalized.split_at(int_len);

    let frac_part = rest
        .strip_prefix('.')
        .map(|frac| {
            let len = frac.bytes().take_while(|b| b.is_ascii_digit()).count();
            &frac[..len]
        })
        .unwrap_or("");

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let literal = if frac_part.is_empty() {
        int_part.to_string()
    } else {
        format!("{}.{}", int_part, frac_part)
    };

    literal.parse::<f64>().ok()
}

/// Parses a raw salary cell into a positive, finite amount
///
/// Returns `None` for anything that is not a usable salary: empty cells,
/// placeholders like `"-"` or `"N/A"`, zero, and values that overflow to
/// infinity.
///
/// # Examples
///
/// ```
/// use qualifying_offer::salary::parse_salary;
///
/// assert_eq!(parse_salary("$30,000,000"), Some(30_000_000.0));
/// assert_eq!(parse_salary("$0"), None);
/// assert_eq!(parse_salary("-"), None);
/// ```
pub fn parse_salary(raw: &str) -> Option<f64> {
    let normalized = normalize_salary(raw.trim());

    leading_number(&normalized).filter(|salary| salary.is_finite() && *salary > 0.0)
}
