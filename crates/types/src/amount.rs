//! Monetary amount formatting.
//!
//! Amounts flow through the engine as plain `f64` values taken at face value
//! from the source records; this module owns their presentation form: a
//! grouped decimal with exactly two fraction digits (`1,234.56`).

/// Formats an amount as a grouped decimal with two fraction digits.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some(parts) => parts,
        None => (fixed.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3);
    let digits = int_part.as_bytes();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit as char);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
