use crate::ast::{ASTNode, FunctionArgs, Parser};
use crate::error::CalcError;
use log::trace;
use std::collections::HashMap;
use std::sync::Arc;

pub type Function = Arc<dyn Fn(&FunctionArgs) -> Result<f64, CalcError> + Send + Sync>;

/// Tree-walking evaluator over a closed table of functions and constants.
///
/// Names not registered here cannot be reached from an expression.
#[derive(Default)]
pub struct Evaluator {
    pub(crate) functions: HashMap<String, Function>,
    pub(crate) constants: HashMap<String, f64>,
}

impl Evaluator {
    /// Creates an `Evaluator` with an empty table.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            constants: HashMap::new(),
        }
    }

    /// Parse an expression string into an AST.
    pub fn parse_expression(&self, expression: &str) -> Result<ASTNode, CalcError> {
        Parser::parse_expression(expression)
    }

    /// Parses and evaluates `expression` against this table.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` with the raw IEEE-754 result, which may be infinite or NaN.
    /// * `Err(CalcError::Evaluation)` if parsing or evaluation fails.
    pub fn evaluate_expression(&self, expression: &str) -> Result<f64, CalcError> {
        let ast = self.parse_expression(expression)?;
        self.evaluate_ast(&ast)
    }

    /// Evaluate a pre-parsed AST.
    pub fn evaluate_ast(&self, ast: &ASTNode) -> Result<f64, CalcError> {
        let resolved_ast = ast.resolve_identifiers(&self.constants);
        self.evaluate(&resolved_ast)
    }

    /// Registers a function with the evaluator.
    pub fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(&FunctionArgs) -> Result<f64, CalcError> + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    /// Registers a named constant, usable as a bare identifier.
    pub fn register_constant(&mut self, name: &str, value: f64) {
        self.constants.insert(name.to_string(), value);
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn has_constant(&self, name: &str) -> bool {
        self.constants.contains_key(name)
    }

    /// Evaluates an `ASTNode`.
    pub fn evaluate(&self, ast: &ASTNode) -> Result<f64, CalcError> {
        let result = match ast {
            ASTNode::Number(n) => *n,

            ASTNode::Identifier(ident) => match self.constants.get(ident) {
                Some(value) => *value,
                None if self.functions.contains_key(ident) => {
                    return Err(CalcError::evaluation(format!(
                        "'{}' is a function and must be called with arguments",
                        ident
                    )))
                }
                None => {
                    return Err(CalcError::evaluation(format!(
                        "Unknown identifier '{}'",
                        ident
                    )))
                }
            },

            ASTNode::Negate(inner) => -self.evaluate(inner)?,

            ASTNode::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left_value = self.evaluate(left)?;
                let right_value = self.evaluate(right)?;
                operator.apply(left_value, right_value)
            }

            ASTNode::FunctionCall { name, args } => {
                let function = match self.functions.get(name) {
                    Some(function) => function,
                    None if self.constants.contains_key(name) => {
                        return Err(CalcError::evaluation(format!(
                            "'{}' is a constant, not a function",
                            name
                        )))
                    }
                    None => {
                        return Err(CalcError::evaluation(format!(
                            "Unknown function '{}'",
                            name
                        )))
                    }
                };

                let values = args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<Result<Vec<f64>, CalcError>>()?;

                function(&FunctionArgs::with_args(values))?
            }

            ASTNode::Group(inner) => self.evaluate(inner)?,
        };

        trace!("Evaluated {:?} -> {}", ast, result);
        Ok(result)
    }
}
