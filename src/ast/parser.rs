use crate::ast::{ASTNode, Operator};
use crate::error::CalcError;
use log::debug;
use pest::error::LineColLocation;
use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "ast/expression.pest"]
pub struct ExpressionParser;

/// Deepest syntax tree the parser builds. Every tree walk recurses once per level.
pub const MAX_DEPTH: usize = 256;

/// A built subtree and its depth.
type Built = (ASTNode, usize);

impl ExpressionParser {
    pub fn parse_expression(input: &str) -> Result<ASTNode, CalcError> {
        debug!("Parsing expression: {}", input);
        let parse_result = ExpressionParser::parse(Rule::expression, input)
            .map_err(parse_error)?
            .next()
            .ok_or_else(|| CalcError::evaluation("Failed to parse expression"))?;

        debug!("Parse result: {:#?}", parse_result);
        let mut pairs = parse_result.into_inner();
        let (node, depth) = Self::build_sum(next_pair(&mut pairs, "expression")?)?;
        debug!("Built tree of depth {}", depth);
        Ok(node)
    }

    fn build_sum(pair: Pair<Rule>) -> Result<Built, CalcError> {
        let mut pairs = pair.into_inner();
        let (mut node, mut depth) = Self::build_product(next_pair(&mut pairs, "operand")?)?;

        while let Some(operator_pair) = pairs.next() {
            let operator = match operator_pair.as_rule() {
                Rule::PLUS => Operator::Add,
                Rule::MINUS => Operator::Subtract,
                _ => return Err(unexpected("sum operator", &operator_pair)),
            };

            let (right, right_depth) = Self::build_product(next_pair(&mut pairs, "operand")?)?;
            depth = nest(depth.max(right_depth))?;
            node = ASTNode::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        Ok((node, depth))
    }

    fn build_product(pair: Pair<Rule>) -> Result<Built, CalcError> {
        let mut pairs = pair.into_inner();
        let (mut node, mut depth) = Self::build_unary(next_pair(&mut pairs, "operand")?)?;

        while let Some(operator_pair) = pairs.next() {
            let operator = match operator_pair.as_rule() {
                Rule::STAR => Operator::Multiply,
                Rule::SLASH => Operator::Divide,
                Rule::MOD => Operator::Modulo,
                _ => return Err(unexpected("product operator", &operator_pair)),
            };

            let (right, right_depth) = Self::build_unary(next_pair(&mut pairs, "operand")?)?;
            depth = nest(depth.max(right_depth))?;
            node = ASTNode::BinaryOperation {
                left: Box::new(node),
                operator,
                right: Box::new(right),
            };
        }

        Ok((node, depth))
    }

    fn build_unary(pair: Pair<Rule>) -> Result<Built, CalcError> {
        let mut negations = 0usize;
        let mut operand = None;

        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::PLUS => {}
                Rule::MINUS => negations += 1,
                Rule::power => operand = Some(Self::build_power(inner)?),
                _ => return Err(unexpected("unary operand", &inner)),
            }
        }

        let (node, depth) = operand.ok_or_else(|| CalcError::evaluation("Expected an operand"))?;
        // Pairs of signs cancel.
        if negations % 2 == 1 {
            Ok((ASTNode::Negate(Box::new(node)), nest(depth)?))
        } else {
            Ok((node, depth))
        }
    }

    fn build_power(pair: Pair<Rule>) -> Result<Built, CalcError> {
        let mut pairs = pair.into_inner();
        let (base, base_depth) = Self::build_primary(next_pair(&mut pairs, "operand")?)?;

        match pairs.next() {
            Some(operator_pair) if operator_pair.as_rule() == Rule::POW => {
                let (exponent, exponent_depth) =
                    Self::build_unary(next_pair(&mut pairs, "exponent")?)?;
                let node = ASTNode::BinaryOperation {
                    left: Box::new(base),
                    operator: Operator::Power,
                    right: Box::new(exponent),
                };
                Ok((node, nest(base_depth.max(exponent_depth))?))
            }
            Some(other) => Err(unexpected("power operator", &other)),
            None => Ok((base, base_depth)),
        }
    }

    fn build_primary(pair: Pair<Rule>) -> Result<Built, CalcError> {
        debug!("Building primary expression: {:?}", pair);
        match pair.as_rule() {
            Rule::number => {
                let value = pair.as_str().parse::<f64>().map_err(|e| {
                    CalcError::evaluation(format!("Invalid number '{}': {}", pair.as_str(), e))
                })?;
                Ok((ASTNode::Number(value), 1))
            }
            Rule::identifier => Ok((ASTNode::Identifier(pair.as_str().to_string()), 1)),
            Rule::group => {
                let mut inner = pair.into_inner();
                let (node, depth) = Self::build_sum(next_pair(&mut inner, "grouped expression")?)?;
                Ok((ASTNode::Group(Box::new(node)), nest(depth)?))
            }
            Rule::function_call => Self::build_function_call(pair),
            _ => Err(unexpected("primary expression", &pair)),
        }
    }

    fn build_function_call(pair: Pair<Rule>) -> Result<Built, CalcError> {
        let mut inner = pair.into_inner();
        let name = next_pair(&mut inner, "function name")?.as_str().to_string();
        let mut args = Vec::new();
        let mut depth = 0;
        if let Some(arguments) = inner.next() {
            for argument in arguments.into_inner() {
                let (arg, arg_depth) = Self::build_sum(argument)?;
                depth = depth.max(arg_depth);
                args.push(arg);
            }
        }
        Ok((ASTNode::FunctionCall { name, args }, nest(depth)?))
    }
}

/// Depth of a node whose deepest child is `depth` levels deep.
fn nest(depth: usize) -> Result<usize, CalcError> {
    let depth = depth + 1;
    if depth > MAX_DEPTH {
        return Err(CalcError::evaluation(format!(
            "Expression is nested too deeply (limit {})",
            MAX_DEPTH
        )));
    }
    Ok(depth)
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, what: &str) -> Result<Pair<'i, Rule>, CalcError> {
    pairs
        .next()
        .ok_or_else(|| CalcError::evaluation(format!("Expected {}", what)))
}

fn unexpected(context: &str, pair: &Pair<Rule>) -> CalcError {
    CalcError::evaluation(format!(
        "Unexpected {:?} in {}: '{}'",
        pair.as_rule(),
        context,
        pair.as_str()
    ))
}

fn describe_rule(rule: &Rule) -> String {
    match rule {
        Rule::number => "number",
        Rule::identifier => "name",
        Rule::function_call => "function call",
        Rule::arguments => "arguments",
        Rule::group => "'('",
        Rule::PLUS => "'+'",
        Rule::MINUS => "'-'",
        Rule::STAR => "'*'",
        Rule::SLASH => "'/'",
        Rule::MOD => "'%'",
        Rule::POW => "'**'",
        Rule::EOI => "end of input",
        _ => "expression",
    }
    .to_string()
}

fn parse_error(error: pest::error::Error<Rule>) -> CalcError {
    let column = match error.line_col {
        LineColLocation::Pos((_, column)) => column,
        LineColLocation::Span((_, column), _) => column,
    };
    let error = error.renamed_rules(describe_rule);
    CalcError::evaluation(format!(
        "Parse error at column {}: {}",
        column,
        error.variant.message()
    ))
}
