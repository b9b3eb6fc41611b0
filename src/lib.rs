pub mod ast;
pub mod error;
pub mod functions;
pub mod history;
pub mod pipeline;

pub use error::{CalcError, ErrorKind};
pub use pipeline::compute;

/// Parses and evaluates `expression` with the standard function table.
///
/// No sanitizing, validation or normalization: the raw `f64` is returned and
/// may be infinite or NaN.
pub fn evaluate_expression(expression: &str) -> Result<f64, CalcError> {
    functions::standard().evaluate_expression(expression)
}
