use super::*;
use pretty_assertions::assert_eq;

mod plus {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn combines_like_terms() {
    let solution = solve("algebra plus 3x+2, 2x-1").unwrap();
    assert_eq!(solution.problem_type, ProblemType::AlgebraPlus);
    assert_eq!(solution.variable, "যোগফল");
    assert_eq!(solution.solution, "যোগফল = 5x+1");
    assert_eq!(solution.steps[0], "বীজগাণিতিক যোগ: 3x+2 + 2x-1");
  }

  #[test]
  fn terms_that_cancel_disappear() {
    let solution = solve("algebra plus x^2+x, 2x^2-x").unwrap();
    assert_eq!(solution.solution, "যোগফল = 3x²");
  }

  #[test]
  fn needs_two_operands() {
    assert!(matches!(
      solve("algebra plus 3x"),
      Err(SolverError::InsufficientOperands)
    ));
  }
}

mod minus {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn flips_signs_of_the_second_operand() {
    let solution = solve("algebra minus 5x+3, 2x+1").unwrap();
    assert_eq!(solution.problem_type, ProblemType::AlgebraMinus);
    assert_eq!(solution.solution, "বিয়োগফল = 3x+2");
    assert!(solution.steps.contains(&"-(2x+1) = -2x-1".to_string()));
  }

  #[test]
  fn equal_operands_give_zero() {
    let solution = solve("algebra minus 2x+1, 2x+1").unwrap();
    assert_eq!(solution.solution, "বিয়োগফল = 0");
  }
}

mod multiply {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn binomials() {
    let solution = solve("algebra multiply x+2, x+3").unwrap();
    assert_eq!(solution.problem_type, ProblemType::AlgebraMultiply);
    assert_eq!(solution.solution, "গুণফল = x²+5x+6");
    assert_eq!(solution.steps[3], "= (x²) + (3x) + (2x) + (6)");
  }

  #[test]
  fn two_letters() {
    let solution = solve("algebra multiply x+y, x-y").unwrap();
    assert_eq!(solution.solution, "গুণফল = x²-y²");
  }
}
