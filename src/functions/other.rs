use crate::ast::{Evaluator, FunctionArgs};
use crate::error::CalcError;
use minicalc_macros::calc_fn;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("abs", abs);
    evaluator.register_constant("pi", std::f64::consts::PI);
}

#[calc_fn]
fn abs(x: f64) -> Result<f64, CalcError> {
    Ok(x.abs())
}
