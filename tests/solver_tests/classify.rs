use super::*;
use pretty_assertions::assert_eq;
use bijganit::{classify, ProblemShape};

mod keyword_rules {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn arithmetic_keywords() {
    assert_eq!(
      classify("algebra plus 3x+2, 2x-1").unwrap(),
      ProblemShape::AlgebraPlus
    );
    assert_eq!(
      classify("বীজগাণিতিক বিয়োগ 5x, 2x").unwrap(),
      ProblemShape::AlgebraMinus
    );
    assert_eq!(
      classify("algebra multiply x+2, x+3").unwrap(),
      ProblemShape::AlgebraMultiply
    );
    assert_eq!(
      classify("algebra division x^2-4, x+2").unwrap(),
      ProblemShape::AlgebraDivision
    );
  }

  #[test]
  fn squaring_needs_no_equals() {
    assert_eq!(classify("(x+3)^2").unwrap(), ProblemShape::Squaring);
    assert_eq!(classify("(x+3)² কর").unwrap(), ProblemShape::Squaring);
    assert_eq!(classify("5 এর বর্গ").unwrap(), ProblemShape::Squaring);
    assert!(matches!(
      classify("x^2 + 1 = 0").unwrap(),
      ProblemShape::Quadratic { .. }
    ));
  }

  #[test]
  fn named_operation_beats_bare_square_mark() {
    assert_eq!(
      classify("expand (a+b)^2").unwrap(),
      ProblemShape::AlgebraicFormula
    );
    assert_eq!(classify("HCF x^2-4, x+2").unwrap(), ProblemShape::Hcf);
    assert_eq!(classify("factor x^2-9").unwrap(), ProblemShape::Factorization);
  }

  #[test]
  fn hcf_lcm_factor_simplify() {
    assert_eq!(classify("গসাগু নির্ণয় 12, 18").unwrap(), ProblemShape::Hcf);
    assert_eq!(classify("LCM 4, 6").unwrap(), ProblemShape::Lcm);
    assert_eq!(classify("ল.সা.গু 4, 6").unwrap(), ProblemShape::Lcm);
    assert_eq!(
      classify("simplify 3x+2x").unwrap(),
      ProblemShape::Simplification
    );
  }

  #[test]
  fn kind_matches_problem_type() {
    assert_eq!(ProblemShape::Hcf.kind(), ProblemType::Hcf);
    assert_eq!(
      ProblemShape::AlgebraPlus.kind().as_str(),
      "algebra_plus"
    );
  }
}

mod equations {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn sides_are_whitespace_free() {
    assert_eq!(
      classify("2x + 3 = 7").unwrap(),
      ProblemShape::Linear {
        left: "2x+3".to_string(),
        right: "7".to_string()
      }
    );
  }

  #[test]
  fn superscripts_route_to_quadratic() {
    assert_eq!(
      classify("x² + 5x + 6 = 0").unwrap(),
      ProblemShape::Quadratic {
        left: "x^2+5x+6".to_string(),
        right: "0".to_string()
      }
    );
  }

  #[test]
  fn numeric_square_without_letters_is_linear() {
    assert!(matches!(
      classify("3^2 = 9").unwrap(),
      ProblemShape::Linear { .. }
    ));
  }

  #[test]
  fn text_without_equals_is_malformed() {
    assert!(matches!(
      classify("hello"),
      Err(SolverError::MalformedEquation(_))
    ));
  }
}
