use crate::error::CalcError;
use std::collections::HashMap;

mod evaluator;
mod function_args;
mod parser;

pub use evaluator::*;
pub use function_args::*;
pub use parser::{ExpressionParser as Parser, MAX_DEPTH};

#[derive(Debug, Clone, PartialEq)]
pub enum ASTNode {
    Number(f64),
    Identifier(String),
    Negate(Box<ASTNode>),
    BinaryOperation {
        left: Box<ASTNode>,
        operator: Operator,
        right: Box<ASTNode>,
    },
    Group(Box<ASTNode>),
    FunctionCall {
        name: String,
        args: Vec<ASTNode>,
    },
}

impl ASTNode {
    /// Recursively replaces identifiers that name a constant with their value.
    ///
    /// Identifiers that are not constants are left in place, so the evaluator can
    /// report them with the right message (unknown name vs. function used as value).
    pub fn resolve_identifiers(&self, constants: &HashMap<String, f64>) -> ASTNode {
        match self {
            ASTNode::Identifier(ident) => constants
                .get(ident)
                .map_or_else(|| self.clone(), |value| ASTNode::Number(*value)),
            ASTNode::Negate(inner) => {
                ASTNode::Negate(Box::new(inner.resolve_identifiers(constants)))
            }
            ASTNode::BinaryOperation {
                left,
                operator,
                right,
            } => ASTNode::BinaryOperation {
                left: Box::new(left.resolve_identifiers(constants)),
                operator: *operator,
                right: Box::new(right.resolve_identifiers(constants)),
            },
            ASTNode::Group(inner) => ASTNode::Group(Box::new(inner.resolve_identifiers(constants))),
            ASTNode::FunctionCall { name, args } => ASTNode::FunctionCall {
                name: name.clone(),
                args: args
                    .iter()
                    .map(|arg| arg.resolve_identifiers(constants))
                    .collect(),
            },
            ASTNode::Number(value) => ASTNode::Number(*value),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Operator {
    /// Plain IEEE-754 arithmetic. Division by zero yields an infinity or NaN;
    /// classifying those is left to the result normalizer.
    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Modulo => left % right,
            Operator::Power => left.powf(right),
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = CalcError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            "%" => Ok(Operator::Modulo),
            "**" | "^" => Ok(Operator::Power),
            _ => Err(CalcError::evaluation(format!("Unknown operator: {}", value))),
        }
    }
}
