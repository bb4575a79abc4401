/// Price with a leading `$` and the shortest decimal form (`$109.95`, `$695`)
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

/// Rating with one decimal, or `N/A` when the product has none
pub fn format_rating_fixed(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.1}", rate),
        None => "N/A".to_string(),
    }
}

/// Rating as reported (`3.9`, `4`); a missing or zero rating reads `N/A`
pub fn format_rating_raw(rate: Option<f64>) -> String {
    match rate {
        Some(rate) if rate != 0.0 => format!("{}", rate),
        _ => "N/A".to_string(),
    }
}
