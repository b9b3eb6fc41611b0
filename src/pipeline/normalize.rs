use crate::error::CalcError;

/// Decimal places kept in a displayed result.
pub const DECIMAL_PLACES: i32 = 12;

const SCALE: f64 = 1e12;

/// 2^53: past this, a scaled value has no fractional digits left to round.
const MAX_EXACT_SCALED: f64 = 9_007_199_254_740_992.0;

/// Display strings switch to exponent notation outside `[1e-6, 1e21)`.
const EXPONENT_ABOVE: f64 = 1e21;
const EXPONENT_BELOW: f64 = 1e-6;

/// Classifies a raw evaluation result and renders it for display.
pub fn normalize(value: f64) -> Result<String, CalcError> {
    if value.is_infinite() {
        return Err(CalcError::DivisionByZero);
    }
    if value.is_nan() {
        return Err(CalcError::evaluation("Result is not a number"));
    }
    Ok(format_number(round_to_places(value)))
}

/// Rounds to [`DECIMAL_PLACES`] to absorb binary representation noise.
///
/// An epsilon is added before scaling and ties round toward positive infinity.
pub fn round_to_places(value: f64) -> f64 {
    let scaled = (value + f64::EPSILON) * SCALE;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_SCALED {
        return value;
    }
    round_half_up(scaled) / SCALE
}

fn round_half_up(x: f64) -> f64 {
    let rounded = x.round();
    // f64::round breaks ties away from zero; move negative ties back up.
    if x - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Shortest decimal string that reads back as `value`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        format!("{}", value)
    }
}
