use crate::error::CalcError;

/// Evaluated positional arguments passed to a table function
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionArgs {
    pub(crate) args: Vec<f64>,
}

impl FunctionArgs {
    pub fn with_args(args: Vec<f64>) -> Self {
        Self { args }
    }

    /// Retrieves the argument at `index`
    pub fn get_number(&self, index: usize) -> Result<f64, CalcError> {
        self.args
            .get(index)
            .copied()
            .ok_or_else(|| CalcError::evaluation(format!("Missing argument {}", index + 1)))
    }

    /// Fails unless exactly `expected` arguments were supplied to `name`.
    pub fn expect_arity(&self, name: &str, expected: usize) -> Result<(), CalcError> {
        if self.args.len() == expected {
            return Ok(());
        }
        let noun = if expected == 1 { "argument" } else { "arguments" };
        Err(CalcError::evaluation(format!(
            "{} expects {} {}, got {}",
            name,
            expected,
            noun,
            self.args.len()
        )))
    }
}
