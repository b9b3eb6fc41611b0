//! Trigonometric functions. Arguments are in degrees.

use crate::ast::{Evaluator, FunctionArgs};
use crate::error::CalcError;
use minicalc_macros::calc_fn;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("sin", sin);
    evaluator.register_function("cos", cos);
    evaluator.register_function("tan", tan);
}

/// `radians = degrees * pi / 180`
pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

#[calc_fn]
fn sin(degrees: f64) -> Result<f64, CalcError> {
    Ok(to_radians(degrees).sin())
}

#[calc_fn]
fn cos(degrees: f64) -> Result<f64, CalcError> {
    Ok(to_radians(degrees).cos())
}

#[calc_fn]
fn tan(degrees: f64) -> Result<f64, CalcError> {
    Ok(to_radians(degrees).tan())
}
