//! Compact number formatting for report lines.

/// Significant digits used by [`general`], matching C's default `%g`.
const PRECISION: i32 = 6;

/// Format `value` like C's `%g`: six significant digits, trailing zeros
/// removed, scientific notation when the exponent is below -4 or at least
/// the precision.
///
/// ```
/// use subset_bench_lib::format::general;
///
/// assert_eq!(general(0.000015), "1.5e-05");
/// assert_eq!(general(2.5), "2.5");
/// ```
pub fn general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Round to PRECISION significant digits first; the exponent must be taken
    // after rounding (9.9999996 becomes 1.00000e1).
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (PRECISION - 1 - exp) as usize;
        strip_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
