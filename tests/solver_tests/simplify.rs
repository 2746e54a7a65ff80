use super::*;
use pretty_assertions::assert_eq;

mod simplification {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn like_terms_are_combined() {
    let solution = solve("simplify 3x + 2x + 5").unwrap();
    assert_eq!(solution.problem_type, ProblemType::Simplification);
    assert_eq!(solution.solution, "সরলীকৃত রূপ = 5x + 5");
    assert_eq!(
      solution.steps,
      vec![
        "সরলীকরণ: 3x+2x+5",
        "",
        "সদৃশ পদগুলো একসাথে লিখি:",
        "  3x + 2x = 5x",
        "সরলীকৃত রূপ: 5x + 5",
        "(সদৃশ পদ একত্রিত করা হয়েছে)",
      ]
    );
  }

  #[test]
  fn already_simple() {
    let solution = solve("সরল করো x^2+1").unwrap();
    assert_eq!(solution.solution, "সরলীকৃত রূপ = x² + 1");
    assert_eq!(
      solution.steps.last().unwrap(),
      "(রাশিটি ইতিমধ্যে সরলতম আকারে আছে)"
    );
  }

  #[test]
  fn nothing_to_simplify() {
    assert!(matches!(
      solve("simplify করো"),
      Err(SolverError::NoExpressionsFound)
    ));
  }
}
