//! Cell value formatting.

/// Formats an amount as `$` plus the value with grouped thousands and at
/// most three fraction digits, trailing zeros dropped (`15000` -> `$15,000`,
/// `1234.5` -> `$1,234.5`).
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.3}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut out = String::from("$");
    if amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a 0..=1 probability as a one-decimal percentage; `N/A` when absent.
pub fn format_probability(probability: Option<f64>) -> String {
    match probability {
        Some(p) => format!("{:.1}%", p * 100.0),
        None => "N/A".to_string(),
    }
}

pub fn format_days(days: u32) -> String {
    format!("{} days", days)
}
