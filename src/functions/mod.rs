pub mod exponential;
pub mod other;
pub mod trig;

use crate::ast::Evaluator;
use lazy_static::lazy_static;

lazy_static! {
    static ref STANDARD: Evaluator = {
        let mut evaluator = Evaluator::new();
        register_functions(&mut evaluator);
        evaluator
    };
}

pub fn register_functions(evaluator: &mut Evaluator) {
    trig::register(evaluator);
    exponential::register(evaluator);
    other::register(evaluator);
}

/// The process-wide function table, built on first use.
pub fn standard() -> &'static Evaluator {
    &*STANDARD
}

#[cfg(test)]
mod tests {
    use super::*;

    const FUNCTION_NAMES: &[&str] = &[
        "sin", "cos", "tan", "sqrt", "pow", "ln", "log", "exp", "abs",
    ];
    const CONSTANT_NAMES: &[&str] = &["pi"];

    #[test]
    fn test_standard_table_is_closed() {
        let table = standard();
        for name in FUNCTION_NAMES {
            assert!(table.has_function(name), "missing function {}", name);
        }
        for name in CONSTANT_NAMES {
            assert!(table.has_constant(name), "missing constant {}", name);
        }
        assert_eq!(table.functions.len(), FUNCTION_NAMES.len());
        assert_eq!(table.constants.len(), CONSTANT_NAMES.len());
    }

    #[test]
    fn test_standard_evaluation() {
        let table = standard();
        assert_eq!(table.evaluate_expression("sin(90)").unwrap(), 1.0);
        assert_eq!(table.evaluate_expression("pow(2,10)").unwrap(), 1024.0);
        assert_eq!(table.evaluate_expression("log(100)").unwrap(), 2.0);
        assert_eq!(table.evaluate_expression("abs(-3)").unwrap(), 3.0);
        assert_eq!(
            table.evaluate_expression("pi").unwrap(),
            std::f64::consts::PI
        );
        assert!(table.evaluate_expression("PI").is_err());
        assert!(table.evaluate_expression("Math").is_err());
    }
}
