use super::*;
use pretty_assertions::assert_eq;
use bijganit::{square, SquaringKind};

mod square_engine {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn binomial_sum() {
    let result = square("(x+3)").unwrap();
    assert_eq!(result.kind, SquaringKind::Binomial);
    assert_eq!(result.formula, "(a + b)² = a² + 2ab + b²");
    assert!(result.result.contains("x²+6x+9"));
    assert_eq!(result.steps.last().unwrap(), "= x² + 6x + 9");
  }

  #[test]
  fn binomial_difference() {
    let result = square("(x-3)").unwrap();
    assert_eq!(result.formula, "(a - b)² = a² - 2ab + b²");
    assert!(result.result.contains("x²-6x+9"));
  }

  #[test]
  fn binomial_with_coefficients() {
    assert_eq!(square("(2x+1)").unwrap().result, "4x²+4x+1");
  }

  #[test]
  fn trinomial() {
    let result = square("(a+b+c)").unwrap();
    assert_eq!(result.kind, SquaringKind::Trinomial);
    assert_eq!(result.result, "a²+b²+c²+2ab+2bc+2ac");
  }

  #[test]
  fn number() {
    let result = square("5").unwrap();
    assert_eq!(result.kind, SquaringKind::Number);
    assert_eq!(result.result, "25");
  }

  #[test]
  fn variables() {
    assert_eq!(square("x").unwrap().result, "x²");
    let scaled = square("3x").unwrap();
    assert_eq!(scaled.result, "9x²");
    assert_eq!(scaled.formula, "(ax)² = a²x²");
  }

  #[test]
  fn unsupported_shapes() {
    assert!(matches!(
      square("x+3"),
      Err(SolverError::UnsupportedExpression(_))
    ));
    assert!(matches!(
      square("(x+y+z+w)"),
      Err(SolverError::UnsupportedExpression(_))
    ));
    assert!(matches!(square("  "), Err(SolverError::NoExpressionsFound)));
  }
}

mod solve_squaring {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn caret_square() {
    let solution = solve("(x+3)^2").unwrap();
    assert_eq!(solution.problem_type, ProblemType::Squaring);
    assert_eq!(solution.variable, "বর্গ");
    assert!(solution.solution.contains("x² + 6x + 9"));
    assert_eq!(solution.solution, "(x+3)² = x² + 6x + 9");
  }

  #[test]
  fn bengali_command() {
    let solution = solve("(x-2)² কর").unwrap();
    assert_eq!(solution.solution, "(x-2)² = x² - 4x + 4");
    assert_eq!(solution.steps[0], "মূল রাশি: (x-2)");
    assert_eq!(solution.steps[1], "প্রয়োগকৃত সূত্র: (a - b)² = a² - 2ab + b²");
  }

  #[test]
  fn number_square() {
    assert_eq!(solve("square 12").unwrap().solution, "12² = 144");
  }

  #[test]
  fn huge_exponent_is_an_error_not_a_crash() {
    assert!(solve("(x^4294967295+1)^2").is_err());
    assert_eq!(
      solve("(x^64+1)^2").unwrap().solution,
      "(x⁶⁴+1)² = x¹²⁸ + 2x⁶⁴ + 1"
    );
  }
}
