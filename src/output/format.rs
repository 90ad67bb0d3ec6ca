/// Formats an amount as whole dollars with thousands separators
///
/// # Examples
///
/// ```
/// use qualifying_offer::output::format_currency;
///
/// assert_eq!(format_currency(17_246_000.4), "$17,246,000");
/// assert_eq!(format_currency(999.5), "$1,000");
/// ```
pub fn format_currency(amount: f64) -> String {
    let digits = format!("{:.0}", amount.abs().round());
    let sign = if amount < 0.0 && digits != "0" { "-" } else { "" };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${}", sign, grouped)
}

/// Formats the qualifying offer, or `N/A` when there is none
pub fn format_offer(offer: Option<f64>) -> String {
    offer.map(format_currency).unwrap_or_else(|| "N/A".to_string())
}
