//! Expression evaluation pipeline: normalization, validation, parsing,
//! folding and rounding.

use crate::core::parser::{AstNode, Parser};
use crate::core::{CalcError, CalcResult};

/// Scale used to round results to 12 decimal digits, suppressing binary
/// floating-point artifacts (`0.1 + 0.2` evaluates to exactly `0.3`).
pub const ROUND_SCALE: f64 = 1e12;

/// Evaluates a restricted arithmetic expression.
///
/// Accepts digits, `+ - * / ( ) .`, whitespace and the display glyphs
/// `×`/`÷` (normalized to `*`/`/` first). Rejects empty input, characters
/// outside that set, and runs of two or more consecutive `+`, `*` or `/`.
/// Consecutive `-` is allowed so that `3*-2` stays legal.
///
/// Pure function: no state survives the call.
///
/// # Errors
///
/// Returns an [`ErrorKind::InvalidInput`](crate::core::ErrorKind) variant
/// for malformed input and an [`ErrorKind::Math`](crate::core::ErrorKind)
/// variant for division by zero or a non-finite result.
pub fn evaluate(expr: &str) -> CalcResult<f64> {
    let normalized = normalize(expr);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Err(CalcError::EmptyExpression);
    }
    validate(trimmed)?;

    let ast = Parser::parse_str(trimmed)?;
    let value = fold(&ast)?;
    if !value.is_finite() {
        return Err(CalcError::NotFinite);
    }
    Ok(round(value))
}

/// Replaces display glyphs with canonical operators
fn normalize(expr: &str) -> String {
    expr.replace('×', "*").replace('÷', "/")
}

/// Checks the character set and operator sequencing rules
fn validate(expr: &str) -> CalcResult<()> {
    let mut prev_stackable = false;
    for ch in expr.chars() {
        let allowed = ch.is_ascii_digit()
            || ch.is_whitespace()
            || matches!(ch, '+' | '-' | '*' | '/' | '(' | ')' | '.');
        if !allowed {
            return Err(CalcError::InvalidCharacter(ch));
        }
        // Runs of + * / are rejected; '-' is exempt (unary minus)
        let stackable = matches!(ch, '+' | '*' | '/');
        if stackable && prev_stackable {
            return Err(CalcError::InvalidSequence);
        }
        prev_stackable = stackable;
    }
    Ok(())
}

/// Folds an AST into a numeric value
fn fold(node: &AstNode) -> CalcResult<f64> {
    match node {
        AstNode::Number(n) => Ok(*n),
        AstNode::Negate(inner) => Ok(-fold(inner)?),
        AstNode::BinaryOp { left, op, right } => {
            let left_val = fold(left)?;
            let right_val = fold(right)?;
            op.apply(left_val, right_val)
        }
    }
}

/// Rounds to 12 decimal digits of precision
fn round(value: f64) -> f64 {
    (value * ROUND_SCALE).round() / ROUND_SCALE
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    // ===== Basic evaluation =====

    #[test]
    fn test_evaluate_number() {
        assert_eq!(evaluate("42"), Ok(42.0));
    }

    #[test]
    fn test_evaluate_addition() {
        assert_eq!(evaluate("2+3"), Ok(5.0));
    }

    #[test]
    fn test_evaluate_precedence() {
        assert_eq!(evaluate("3+2*2"), Ok(7.0));
        assert_eq!(evaluate("10-6/2"), Ok(7.0));
    }

    #[test]
    fn test_evaluate_parentheses() {
        assert_eq!(evaluate("(3+2)*2"), Ok(10.0));
        assert_eq!(evaluate("42*(3+7)"), Ok(420.0));
    }

    #[test]
    fn test_evaluate_left_to_right() {
        assert_eq!(evaluate("10-3-2"), Ok(5.0));
        assert_eq!(evaluate("16/4/2"), Ok(2.0));
    }

    #[test]
    fn test_evaluate_unary_minus() {
        assert_eq!(evaluate("-5"), Ok(-5.0));
        assert_eq!(evaluate("-5+10"), Ok(5.0));
        assert_eq!(evaluate("3*-2"), Ok(-6.0));
    }

    #[test]
    fn test_evaluate_with_whitespace() {
        assert_eq!(evaluate("  2 + 3  "), Ok(5.0));
    }

    // ===== Normalization =====

    #[test]
    fn test_evaluate_display_glyphs() {
        assert_eq!(evaluate("6×7"), Ok(42.0));
        assert_eq!(evaluate("20÷4"), Ok(5.0));
    }

    // ===== Rounding =====

    #[test]
    fn test_evaluate_rounds_float_noise() {
        assert_eq!(evaluate("0.1+0.2"), Ok(0.3));
        assert_eq!(evaluate("0.1*3"), Ok(0.3));
    }

    #[test]
    fn test_evaluate_twelve_digit_precision() {
        assert_eq!(evaluate("1/3"), Ok(0.333333333333));
    }

    // ===== Invalid input =====

    #[test]
    fn test_evaluate_empty() {
        assert_eq!(evaluate(""), Err(CalcError::EmptyExpression));
        assert_eq!(evaluate("   "), Err(CalcError::EmptyExpression));
    }

    #[test]
    fn test_evaluate_invalid_character() {
        assert_eq!(evaluate("2^3"), Err(CalcError::InvalidCharacter('^')));
        assert_eq!(evaluate("two"), Err(CalcError::InvalidCharacter('t')));
    }

    #[test]
    fn test_evaluate_consecutive_operators() {
        assert_eq!(evaluate("2++3"), Err(CalcError::InvalidSequence));
        assert_eq!(evaluate("2**3"), Err(CalcError::InvalidSequence));
        assert_eq!(evaluate("2+*3"), Err(CalcError::InvalidSequence));
        assert_eq!(evaluate("2/*3"), Err(CalcError::InvalidSequence));
    }

    #[test]
    fn test_evaluate_consecutive_minus_allowed() {
        assert_eq!(evaluate("2--3"), Ok(5.0));
        assert_eq!(evaluate("--5"), Ok(5.0));
    }

    #[test]
    fn test_evaluate_incomplete_expression() {
        let err = evaluate("3+").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_evaluate_unbalanced_parens() {
        assert!(matches!(evaluate("(1+2"), Err(CalcError::Parse(_))));
    }

    // ===== Math errors =====

    #[test]
    fn test_evaluate_division_by_zero() {
        let err = evaluate("3/0").unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
        assert_eq!(err.kind(), ErrorKind::Math);
    }

    #[test]
    fn test_evaluate_nested_division_by_zero() {
        assert_eq!(evaluate("1+2/(3-3)"), Err(CalcError::DivisionByZero));
    }

    // ===== Purity =====

    #[test]
    fn test_evaluate_is_pure() {
        assert_eq!(evaluate("2+2"), evaluate("2+2"));
    }
}
