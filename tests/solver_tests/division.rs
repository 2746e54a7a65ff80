use super::*;
use pretty_assertions::assert_eq;
use bijganit::functions::{division_restrictions, long_divide};

mod solve_division {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn exact_division_by_a_factor() {
    let solution = solve("algebra division x^2-4, x+2").unwrap();
    assert_eq!(solution.problem_type, ProblemType::AlgebraDivision);
    assert_eq!(solution.variable, "ভাগফল");
    assert_eq!(solution.solution, "ভাগফল = x-2");
    assert_eq!(solution.steps[0], "বীজগণিতিক ভাগ: (x²-4) ÷ (x+2)");
  }

  #[test]
  fn narrates_every_method() {
    let steps = solve("algebra division x^2-4, x+2").unwrap().steps;
    for expected in [
      "পদ্ধতি ১: উৎপাদকীকরণ ব্যবহার করে",
      "ভাজ্য = x²-4 = (x-2) × (x+2)",
      "সাধারণ উৎপাদক: (x+2)",
      "পদ্ধতি ২: দীর্ঘ ভাগ পদ্ধতি",
      "ভাগশেষ = 0",
      "শর্ত: x ≠ -2",
      "যাচাইকরণ:",
      "(x-2) × (x+2) + (0) = x²-4 ✓",
      "বিকল্প পদ্ধতি: প্রতিস্থাপন",
      "lim(x→-2) (x²-4)/(x+2) = lim(x→-2) (x-2) = -4",
    ] {
      assert!(
        steps.contains(&expected.to_string()),
        "missing step: {expected}\n{steps:#?}"
      );
    }
  }

  #[test]
  fn remainder_is_reported() {
    let solution = solve("algebra division x^2+1, x+1").unwrap();
    assert_eq!(solution.solution, "ভাগফল = x-1 + (2)/(x+1)");
  }

  #[test]
  fn monomial_divisor() {
    let solution = solve("algebra division 6x^2+4x, 2x").unwrap();
    assert_eq!(solution.solution, "ভাগফল = 3x+2");
    assert!(solution.steps.contains(&"শর্ত: x ≠ 0".to_string()));
  }

  #[test]
  fn zero_divisor() {
    assert!(matches!(
      solve("algebra division x+1, 0"),
      Err(SolverError::DivisionByZero)
    ));
  }
}

mod helpers {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn long_division_quotient_and_remainder() {
    let (quotient, remainder, _) =
      long_divide(&[-6.0, 1.0, 1.0], &[-2.0, 1.0], 'x');
    assert_eq!(quotient, vec![3.0, 1.0]);
    assert_eq!(remainder, vec![0.0]);
  }

  #[test]
  fn restrictions_from_linear_factors() {
    assert_eq!(
      division_restrictions("x^2-9"),
      vec!["x ≠ 3".to_string(), "x ≠ -3".to_string()]
    );
    assert!(division_restrictions("5").is_empty());
  }
}
