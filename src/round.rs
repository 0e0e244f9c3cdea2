//! Decimal rounding
//!
//! Rounds values at a decimal position or to a decimal increment. The shift
//! happens on the printed decimal exponent rather than by multiplying with a
//! power of ten, so results stay free of binary representation artifacts
//! (`0.005` rounded to two fraction digits is `0.01`, not `0.0049…`).

use crate::types::RoundingMode;

/// Round `value` at the decimal position `10^exponent`
///
/// `exponent = -2` keeps two fraction digits, `exponent = 0` rounds to an
/// integer, `exponent = 2` rounds to hundreds. Ceil and floor stay
/// direction-absolute on negative values: `round(Ceil, -3.14159, -2)` is
/// `-3.14` while `round(Floor, -3.14159, -2)` is `-3.15`.
pub fn round(mode: RoundingMode, value: f64, exponent: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if exponent == 0 {
        return apply(mode, value);
    }
    let shifted = shift_exponent(value, -exponent);
    if !shifted.is_finite() {
        // Magnitude beyond the shift range: the position being rounded
        // cannot change the value.
        return value;
    }
    shift_exponent(apply(mode, shifted), exponent)
}

/// Round `value` to the nearest multiple of `increment`
///
/// `round_to_increment(Round, 3.14159, 0.5)` is `3.0`. Non-positive
/// increments leave the value untouched.
pub fn round_to_increment(mode: RoundingMode, value: f64, increment: f64) -> f64 {
    if !value.is_finite() || increment <= 0.0 {
        return value;
    }
    apply(mode, value / increment) * increment
}

fn apply(mode: RoundingMode, value: f64) -> f64 {
    match mode {
        RoundingMode::Ceil => value.ceil(),
        RoundingMode::Floor => value.floor(),
        RoundingMode::Round => value.round(),
        RoundingMode::Truncate => value.trunc(),
    }
}

/// Shift the decimal exponent of the printed representation by `by`.
fn shift_exponent(value: f64, by: i32) -> f64 {
    let repr = format!("{value:e}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return value;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value;
    };
    format!("{mantissa}e{}", exponent + by)
        .parse()
        .unwrap_or(value)
}
