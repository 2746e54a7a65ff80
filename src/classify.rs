//! Decide which solver family a problem belongs to.
//!
//! Keyword rules are tried in a fixed order and the first match wins. Text
//! matching no rule must be an equation; it is split on its first `=` and
//! routed to the quadratic or linear solver.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::format::normalize_superscripts;
use crate::{ProblemType, SolverError};

/// Classified problem. Equations carry their whitespace-free sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemShape {
  AlgebraPlus,
  AlgebraMinus,
  AlgebraMultiply,
  AlgebraDivision,
  Squaring,
  AlgebraicFormula,
  Hcf,
  Lcm,
  Factorization,
  Simplification,
  Linear { left: String, right: String },
  Quadratic { left: String, right: String },
}

impl ProblemShape {
  pub fn kind(&self) -> ProblemType {
    match self {
      ProblemShape::AlgebraPlus => ProblemType::AlgebraPlus,
      ProblemShape::AlgebraMinus => ProblemType::AlgebraMinus,
      ProblemShape::AlgebraMultiply => ProblemType::AlgebraMultiply,
      ProblemShape::AlgebraDivision => ProblemType::AlgebraDivision,
      ProblemShape::Squaring => ProblemType::Squaring,
      ProblemShape::AlgebraicFormula => ProblemType::AlgebraicFormula,
      ProblemShape::Hcf => ProblemType::Hcf,
      ProblemShape::Lcm => ProblemType::Lcm,
      ProblemShape::Factorization => ProblemType::Factorization,
      ProblemShape::Simplification => ProblemType::Simplification,
      ProblemShape::Linear { .. } => ProblemType::Linear,
      ProblemShape::Quadratic { .. } => ProblemType::Quadratic,
    }
  }
}

static ALGEBRA_PLUS: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"algebra\s*plus|বীজগাণিত\w*\s*যোগ|বীজগণিত\w*\s*যোগ|^যোগ\s").unwrap()
});
static ALGEBRA_MINUS: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"algebra\s*minus|বীজগাণিত\w*\s*বিয়োগ|বীজগণিত\w*\s*বিয়োগ|^বিয়োগ\s")
    .unwrap()
});
static ALGEBRA_MULTIPLY: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"algebra\s*(multiply|gun)|বীজগাণিত\w*\s*গুণ|বীজগণিত\w*\s*গুণ|^গুণ\s")
    .unwrap()
});
static ALGEBRA_DIVISION: Lazy<Regex> = Lazy::new(|| {
  Regex::new(
    r"algebra\s*(division|divide|vag)|বীজগাণিত\w*\s*ভাগ|বীজগণিত\w*\s*ভাগ|^ভাগ\s",
  )
  .unwrap()
});
static SQUARE_WORD: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"square|বর্গ").unwrap());
static SQUARE_MARK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^2|²").unwrap());
static FORMULA: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"expand|বিস্তার|formula|সূত্র").unwrap());
static HCF: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"hcf|gcd|গসাগু|গ\.সা\.গু").unwrap());
static LCM: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"lcm|লসাগু|ল\.সা\.গু").unwrap());
static FACTOR: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"factor|উৎপাদক|বিশ্লেষণ").unwrap());
static SIMPLIFY: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"simplify|সরল|সংক্ষিপ্ত").unwrap());

type Predicate = fn(&str) -> bool;

fn is_algebra_plus(text: &str) -> bool {
  ALGEBRA_PLUS.is_match(text)
}

fn is_algebra_minus(text: &str) -> bool {
  ALGEBRA_MINUS.is_match(text)
}

fn is_algebra_multiply(text: &str) -> bool {
  ALGEBRA_MULTIPLY.is_match(text)
}

fn is_algebra_division(text: &str) -> bool {
  ALGEBRA_DIVISION.is_match(text)
}

/// An explicit square keyword, or a bare `^2`/`²` in text that is not an
/// equation and names no other operation.
fn is_squaring(text: &str) -> bool {
  if text.contains('=') {
    return false;
  }
  if SQUARE_WORD.is_match(text) {
    return true;
  }
  SQUARE_MARK.is_match(text)
    && ![&*FORMULA, &*HCF, &*LCM, &*FACTOR, &*SIMPLIFY]
      .iter()
      .any(|keyword| keyword.is_match(text))
}

fn is_formula(text: &str) -> bool {
  FORMULA.is_match(text)
}

fn is_hcf(text: &str) -> bool {
  HCF.is_match(text)
}

fn is_lcm(text: &str) -> bool {
  LCM.is_match(text)
}

fn is_factorization(text: &str) -> bool {
  FACTOR.is_match(text)
}

fn is_simplification(text: &str) -> bool {
  SIMPLIFY.is_match(text)
}

/// Keyword rules in precedence order.
fn keyword_rules() -> [(Predicate, ProblemShape); 10] {
  [
    (is_algebra_plus, ProblemShape::AlgebraPlus),
    (is_algebra_minus, ProblemShape::AlgebraMinus),
    (is_algebra_multiply, ProblemShape::AlgebraMultiply),
    (is_algebra_division, ProblemShape::AlgebraDivision),
    (is_squaring, ProblemShape::Squaring),
    (is_formula, ProblemShape::AlgebraicFormula),
    (is_hcf, ProblemShape::Hcf),
    (is_lcm, ProblemShape::Lcm),
    (is_factorization, ProblemShape::Factorization),
    (is_simplification, ProblemShape::Simplification),
  ]
}

/// Classify free-form problem text.
pub fn classify(problem: &str) -> Result<ProblemShape, SolverError> {
  let text = problem.trim().to_lowercase();

  for (matches, shape) in keyword_rules() {
    if matches(&text) {
      trace!(kind = %shape.kind(), "keyword rule matched");
      return Ok(shape);
    }
  }

  classify_equation(&text)
}

fn classify_equation(text: &str) -> Result<ProblemShape, SolverError> {
  let compact: String = normalize_superscripts(text)
    .chars()
    .filter(|c| !c.is_whitespace())
    .collect();

  let Some((left, right)) = compact.split_once('=') else {
    return Err(SolverError::MalformedEquation(
      "দয়া করে \"=\" চিহ্ন যুক্ত সমীকরণ দিন।".to_string(),
    ));
  };
  if left.is_empty() || right.is_empty() {
    return Err(SolverError::MalformedEquation(
      "সমীকরণটি সঠিকভাবে লিখুন।".to_string(),
    ));
  }

  let (left, right) = (left.to_string(), right.to_string());
  let has_square = compact.contains("^2");
  let has_letter = compact.chars().any(|c| c.is_ascii_alphabetic());
  if has_square && has_letter {
    Ok(ProblemShape::Quadratic { left, right })
  } else {
    Ok(ProblemShape::Linear { left, right })
  }
}
