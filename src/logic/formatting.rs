//! Display formatting logic
//!
//! Pure functions for formatting values shown in the UI.

/// Format an amount with space-separated thousands groups
/// (e.g., `1420` -> "1 420", `-1000000` -> "-1 000 000")
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
