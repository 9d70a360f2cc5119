//! Eval command handler

use crate::error::{CliError, CliResult};
use crate::EvalArgs;
use calc_widget::core::format::{format_number, parse_operand, round_result};
use calc_widget::core::Operation;
use tracing::debug;

/// A finished `a op b` calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// First operand
    pub a: f64,
    /// Operator
    pub op: Operation,
    /// Second operand
    pub b: f64,
    /// Rounded result
    pub result: f64,
}

impl Evaluation {
    /// The `Result: a op b = r` line
    #[must_use]
    pub fn result_line(&self) -> String {
        format!(
            "Result: {} {} {} = {}",
            format_number(self.a),
            self.op,
            format_number(self.b),
            format_number(self.result)
        )
    }
}

/// Parses an operand, rejecting anything that is not a number
pub fn parse_number(text: &str) -> CliResult<f64> {
    parse_operand(text).ok_or_else(|| CliError::invalid_number(text))
}

/// Parses one of `+ - * /`
pub fn parse_operation(text: &str) -> CliResult<Operation> {
    text.trim()
        .parse::<Operation>()
        .map_err(|_| CliError::invalid_operation(text))
}

/// Evaluates `a op b`
///
/// Operands are checked before the operator, so `x % 1` reports the bad
/// number rather than the bad operator.
pub fn evaluate(a: &str, op: &str, b: &str) -> CliResult<Evaluation> {
    let a = parse_number(a)?;
    let b = parse_number(b)?;
    let op = parse_operation(op)?;
    let result = round_result(op.apply(a, b)?);
    debug!(a, %op, b, result, "evaluated");
    Ok(Evaluation { a, op, b, result })
}

/// Execute the eval command
pub fn execute_eval(args: &EvalArgs) -> CliResult<()> {
    let evaluation = evaluate(&args.a, &args.op, &args.b)?;
    println!("{}", evaluation.result_line());
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use calc_widget::core::CalcError;

    #[test]
    fn test_evaluate_each_operator() {
        assert_eq!(evaluate("6", "+", "7").unwrap().result, 13.0);
        assert_eq!(evaluate("6", "-", "7").unwrap().result, -1.0);
        assert_eq!(evaluate("6", "*", "7").unwrap().result, 42.0);
        assert_eq!(evaluate("7", "/", "2").unwrap().result, 3.5);
    }

    #[test]
    fn test_result_line() {
        let line = evaluate("10", "/", "4").unwrap().result_line();
        assert_eq!(line, "Result: 10 / 4 = 2.5");
    }

    #[test]
    fn test_result_is_rounded() {
        let line = evaluate("0.1", "+", "0.2").unwrap().result_line();
        assert_eq!(line, "Result: 0.1 + 0.2 = 0.3");
    }

    #[test]
    fn test_negative_operands() {
        let line = evaluate("-3", "*", "-2.5").unwrap().result_line();
        assert_eq!(line, "Result: -3 * -2.5 = 7.5");
    }

    #[test]
    fn test_operands_may_carry_whitespace() {
        assert_eq!(evaluate(" 2 ", " + ", "3\n").unwrap().result, 5.0);
    }

    #[test]
    fn test_division_by_zero() {
        let err = evaluate("10", "/", "0").unwrap_err();
        assert!(matches!(err, CliError::Calc(CalcError::DivisionByZero)));
        assert_eq!(err.to_string(), "Error: Division by zero");
    }

    #[test]
    fn test_invalid_operation() {
        let err = evaluate("1", "%", "2").unwrap_err();
        assert_eq!(err.to_string(), "Error: Invalid operation");
    }

    #[test]
    fn test_invalid_number() {
        let err = evaluate("abc", "+", "2").unwrap_err();
        assert_eq!(err.to_string(), "Error: Please enter valid numbers");
        let err = evaluate("1", "+", "").unwrap_err();
        assert!(matches!(err, CliError::InvalidNumber { .. }));
    }

    #[test]
    fn test_number_checked_before_operator() {
        let err = evaluate("x", "%", "1").unwrap_err();
        assert!(matches!(err, CliError::InvalidNumber { .. }));
    }
}
