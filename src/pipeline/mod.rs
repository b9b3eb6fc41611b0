//! The evaluation pipeline: sanitize, validate, evaluate, normalize.

mod normalize;
mod sanitize;
mod validate;

pub use normalize::{format_number, normalize, round_to_places, DECIMAL_PLACES};
pub use sanitize::{sanitize, POWER_OPERATOR};
pub use validate::validate;

use crate::ast::Evaluator;
use crate::error::CalcError;
use crate::functions;
use log::debug;

/// Runs raw user input through the whole pipeline with the standard table.
///
/// Returns `Ok(None)` when the input is empty or blank; nothing is evaluated.
pub fn compute(raw_input: &str) -> Result<Option<String>, CalcError> {
    compute_with(functions::standard(), raw_input)
}

/// Same as [`compute`] with a caller-supplied function table.
pub fn compute_with(evaluator: &Evaluator, raw_input: &str) -> Result<Option<String>, CalcError> {
    let sanitized = sanitize(raw_input);
    if sanitized.is_empty() {
        return Ok(None);
    }

    let validated = validate(&sanitized)?;
    let value = evaluator.evaluate_expression(validated)?;
    debug!("Evaluated '{}' to {}", validated, value);

    normalize(value).map(Some)
}
