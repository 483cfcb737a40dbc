//! Locale-independent decimal formatting
//!
//! Both the converted amount and the displayed rate are rendered with at most
//! two decimal places, trailing zeros stripped, and `.` as the decimal point
//! regardless of the process locale.

/// Format a value with at most two decimal places
///
/// `92.61` renders as "92.61", `100.0` as "100", `0.0` as "0". The rounding
/// is the standard nearest-value rounding of `format!("{:.2}", ..)`.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value);

    match fixed.find('.') {
        Some(_) => {
            let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
            // "-0.00" trims to "-0"; normalize the sign away.
            if trimmed == "-0" {
                "0".to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => fixed,
    }
}
