use crate::ast::{Evaluator, FunctionArgs};
use crate::error::CalcError;
use minicalc_macros::calc_fn;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("sqrt", sqrt);
    evaluator.register_function("pow", pow);
    evaluator.register_function("ln", ln);
    evaluator.register_function("log", log);
    evaluator.register_function("exp", exp);
}

#[calc_fn]
fn sqrt(x: f64) -> Result<f64, CalcError> {
    Ok(x.sqrt())
}

#[calc_fn]
fn pow(base: f64, exponent: f64) -> Result<f64, CalcError> {
    Ok(base.powf(exponent))
}

/// Natural logarithm
#[calc_fn]
fn ln(x: f64) -> Result<f64, CalcError> {
    Ok(x.ln())
}

/// Base-10 logarithm
#[calc_fn]
fn log(x: f64) -> Result<f64, CalcError> {
    Ok(x.log10())
}

#[calc_fn]
fn exp(x: f64) -> Result<f64, CalcError> {
    Ok(x.exp())
}
