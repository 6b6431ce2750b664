//! Conversion between kilograms and pounds, display formatting, and snapping
//! weights onto the increments a plate inventory can actually load.

use crate::rounding_mode::RoundingMode;

/// Pounds in one kilogram.
pub const LBS_PER_KG: f64 = 2.204_622_62;

/// Fraction digits carried when checking whether a value sits exactly on a
/// rounding midpoint. Any f64 midpoint at a handful of digits terminates well
/// before this.
const EXACT_DIGITS: usize = 60;

#[must_use]
pub fn kg_to_lbs(kg: f64) -> f64 {
    kg * LBS_PER_KG
}

#[must_use]
pub fn lbs_to_kg(lbs: f64) -> f64 {
    lbs / LBS_PER_KG
}

/// Formats a weight to two fraction digits, dropping the fraction entirely
/// when it rounds to `.00`.
///
/// ```
/// use barload_rs::units::display_weight;
///
/// assert_eq!(display_weight(100.5), "100.50");
/// assert_eq!(display_weight(99.999), "100");
/// ```
#[must_use]
pub fn display_weight(weight: f64) -> String {
    let fixed = to_fixed(weight, 2);
    match fixed.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => fixed,
    }
}

/// Snaps `weight` onto multiples of twice the smallest plate, the finest
/// step a pair of plates can add to the bar.
///
/// `smallest_plate` must be positive.
#[must_use]
pub fn plate_round(weight: f64, smallest_plate: f64, mode: RoundingMode) -> f64 {
    let step = smallest_plate * 2.0;
    let steps = weight / step;

    match mode {
        RoundingMode::Down => steps.floor() * step,
        RoundingMode::Up if weight % step == 0.0 => weight,
        RoundingMode::Up => steps.ceil() * step,
        RoundingMode::Nearest => {
            let below = steps.floor();
            // Midpoints go up, negative ones included.
            if steps - below >= 0.5 {
                (below + 1.0) * step
            } else {
                below * step
            }
        }
    }
}

/// `weight` rounded to the two decimals shown by [`display_weight`].
pub(crate) fn display_precision(weight: f64) -> f64 {
    display_weight(weight).parse().unwrap_or(weight)
}

/// Fixed-point formatting with `digits` fraction digits. Values exactly on a
/// midpoint round away from zero rather than to even.
pub(crate) fn to_fixed(value: f64, digits: u8) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits_len = usize::from(digits);
    let magnitude = value.abs();

    let exact = format!("{:.*}", digits_len + EXACT_DIGITS, magnitude);
    let tail = &exact[exact.len() - EXACT_DIGITS..];
    let midpoint = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    let fixed = if midpoint {
        let half_unit = 0.5 / 10_f64.powi(i32::from(digits));
        format!("{:.*}", digits_len, magnitude + half_unit)
    } else {
        format!("{magnitude:.digits_len$}")
    };

    if value < 0.0 {
        format!("-{fixed}")
    } else {
        fixed
    }
}
