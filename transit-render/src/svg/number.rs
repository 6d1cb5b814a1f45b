//! Numeric attribute formatting.
//!
//! Coordinates and sizes are written the way a default-configured C++
//! output stream writes doubles (`%g` with six significant digits), which is
//! what reference map snapshots were produced with.

use std::fmt;

const SIGNIFICANT_DIGITS: i32 = 6;

/// Display adapter writing an `f64` with six significant digits, trailing
/// zeros trimmed, switching to scientific notation for very large or very
/// small magnitudes.
///
/// # Examples
/// ```
/// use transit_render::svg::Number;
///
/// assert_eq!(Number(10.0).to_string(), "10");
/// assert_eq!(Number(99.22834567).to_string(), "99.2283");
/// assert_eq!(Number(0.000_012_5).to_string(), "1.25e-05");
/// assert_eq!(Number(1_234_567.0).to_string(), "1.23457e+06");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // Rounding to the significant digits first fixes the decimal exponent
        // that decides between fixed and scientific notation.
        let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let exponent: i32 = exponent.parse().unwrap_or(0);

        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                trim_fraction(mantissa),
                exponent.unsigned_abs()
            )
        } else {
            let decimals = usize::try_from(SIGNIFICANT_DIGITS - 1 - exponent).unwrap_or(0);
            f.write_str(trim_fraction(&format!("{value:.decimals$}")))
        }
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
