use super::*;
use pretty_assertions::assert_eq;
use bijganit::functions::factor::{factor, factor_expression, Factor, FactorMethod};

fn group(text: &str) -> Factor {
  Factor::Group(text.to_string())
}

mod factor_engine {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn integer_primes() {
    assert_eq!(
      factor("12"),
      vec![Factor::Number(2), Factor::Number(2), Factor::Number(3)]
    );
    assert_eq!(factor("1"), vec![Factor::Number(1)]);
    assert_eq!(factor("0"), vec![Factor::Number(0)]);
  }

  #[test]
  fn difference_of_squares() {
    assert_eq!(factor("x^2-9"), vec![group("x-3"), group("x+3")]);
    assert_eq!(factor("4x^2-9"), vec![group("2x-3"), group("2x+3")]);
  }

  #[test]
  fn perfect_square() {
    let result = factor_expression("x^2+6x+9");
    assert_eq!(result.factors, vec![group("x+3"), group("x+3")]);
    assert_eq!(result.methods, vec![FactorMethod::PerfectSquare]);
    assert_eq!(factor("x^2-4x+4"), vec![group("x-2"), group("x-2")]);
  }

  #[test]
  fn monic_split() {
    assert_eq!(factor("x^2+5x+6"), vec![group("x+2"), group("x+3")]);
    assert_eq!(factor("x^2-x-6"), vec![group("x-3"), group("x+2")]);
  }

  #[test]
  fn monomial() {
    assert_eq!(
      factor("6x^2"),
      vec![
        Factor::Number(2),
        Factor::Number(3),
        Factor::Power {
          variable: 'x',
          power: 2
        },
      ]
    );
  }

  #[test]
  fn common_factor_pulled_out() {
    let result = factor_expression("2x^2+4x");
    assert_eq!(
      result.factors,
      vec![
        Factor::Number(2),
        Factor::Power {
          variable: 'x',
          power: 1
        },
        group("x+2"),
      ]
    );
    assert_eq!(result.display(), "2 × x × (x+2)");
  }

  #[test]
  fn common_factor_then_pattern() {
    assert_eq!(
      factor("2x^2-8"),
      vec![Factor::Number(2), group("x-2"), group("x+2")]
    );
  }

  #[test]
  fn irreducible() {
    let result = factor_expression("x^2+1");
    assert_eq!(result.factors, vec![group("x^2+1")]);
    assert_eq!(result.methods, vec![FactorMethod::Irreducible]);
  }

  #[test]
  fn parenthesized_input_shares_a_key() {
    assert_eq!(factor("(x+2)"), factor(" x + 2 "));
  }
}

mod solve_factorization {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn factor_keyword() {
    let solution = solve("factor x^2 + 5x + 6").unwrap();
    assert_eq!(solution.problem_type, ProblemType::Factorization);
    assert_eq!(solution.solution, "x²+5x+6 = (x+2) × (x+3)");
  }

  #[test]
  fn bengali_keyword() {
    let solution = solve("x^2 - 9 উৎপাদকে বিশ্লেষণ করো").unwrap();
    assert_eq!(solution.solution, "x²-9 = (x-3) × (x+3)");
  }

  #[test]
  fn nothing_to_factor() {
    assert!(matches!(
      solve("factor করো"),
      Err(SolverError::NoExpressionsFound)
    ));
  }
}

mod factor_product {
  use super::*;
  use pretty_assertions::assert_eq;
  use bijganit::syntax::Polynomial;

  fn product_at(factors: &[Factor], x: f64) -> f64 {
    factors
      .iter()
      .map(|f| f.to_polynomial().unwrap().evaluate('x', x).unwrap())
      .product()
  }

  #[test]
  fn factors_multiply_back_to_the_expression() {
    let expressions = [
      "12",
      "-18",
      "6x^3",
      "x^2-9",
      "4x^2-9",
      "-x^2+4",
      "x^2+6x+9",
      "x^2-4x+4",
      "x^2+5x+6",
      "x^2-x-6",
      "2x^2-8",
      "3x^2+6x",
      "x^3-4x",
      "x^4-16",
      "x^2+x+1",
    ];
    for expr in expressions {
      let original = Polynomial::parse(expr).unwrap();
      let factors = factor(expr);
      for x in [0.0, 1.0, 2.0, -1.0, 3.0] {
        assert_relative_eq!(
          product_at(&factors, x),
          original.evaluate('x', x).unwrap(),
          epsilon = 1e-9
        );
      }
    }
  }
}
