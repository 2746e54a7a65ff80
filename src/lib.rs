use pest_derive::Parser;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub mod chat;
pub mod classify;
pub mod config;
pub mod extract;
pub mod format;
pub mod functions;
pub mod knowledge;
pub mod syntax;

pub use chat::{respond, respond_with_rng, ChatReply, ReplyKind};
pub use classify::{classify, ProblemShape};
pub use config::{ChatConfig, Config, SolverConfig};
pub use functions::squaring::{square, SquaringKind, SquaringResult};
pub use knowledge::{search_knowledge_base, KnowledgeEntry};

#[derive(Parser)]
#[grammar = "algebra.pest"]
pub struct AlgebraParser;

/// Solution text for a linear equation whose variable cancels to `0 = c`.
pub const NO_SOLUTION: &str = "সমাধান নেই";
/// Solution text for a linear equation that reduces to `0 = 0`.
pub const INFINITE_SOLUTIONS: &str = "অসীম সমাধান";
/// Solution text for a quadratic with negative discriminant.
pub const NO_REAL_SOLUTION: &str = "বাস্তব সমাধান নেই";
/// Suffix marking the single root of a quadratic with zero discriminant.
pub const DOUBLE_ROOT: &str = "দ্বিগুণ মূল";

#[derive(Error, Debug)]
pub enum SolverError {
  #[error("এটি একটি বৈধ সমীকরণ নয়। {0}")]
  MalformedEquation(String),
  #[error("চলক (variable) খুঁজে পাওয়া যায়নি।")]
  NoVariableFound,
  #[error("শুধুমাত্র ax²+bx+c=0 ধরনের সমীকরণ সমর্থিত")]
  UnsupportedQuadraticForm,
  #[error("কমপক্ষে দুটি বীজগাণিতিক রাশি প্রয়োজন")]
  InsufficientOperands,
  #[error("অসমর্থিত বীজগাণিতিক রাশি: {0}")]
  UnsupportedExpression(String),
  #[error("কোনো বীজগাণিতিক রাশি খুঁজে পাওয়া যায়নি")]
  NoExpressionsFound,
  #[error("শূন্য দিয়ে ভাগ করা যায় না")]
  DivisionByZero,
  #[error("রাশিটি পড়া যায়নি: {0}")]
  ParseError(#[from] Box<pest::error::Error<Rule>>),
}

impl SolverError {
  /// Usage hint shown under the error message.
  pub fn hint(&self) -> &'static str {
    match self {
      SolverError::MalformedEquation(_) | SolverError::NoVariableFound => {
        "উদাহরণ: x + 7 = 15"
      }
      SolverError::UnsupportedQuadraticForm => "উদাহরণ: x^2 + 5x + 6 = 0",
      SolverError::InsufficientOperands => {
        "উদাহরণ: HCF x^2-4, x+2 অথবা algebra plus 3x+2, 2x-1"
      }
      SolverError::UnsupportedExpression(_) | SolverError::ParseError(_) => {
        "উদাহরণ: (x+3)^2, 5x, 12"
      }
      SolverError::NoExpressionsFound => "উদাহরণ: factor x^2 - 9",
      SolverError::DivisionByZero => "ভাজক শূন্য ছাড়া অন্য রাশি দিন",
    }
  }
}

/// Shape of a solved problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
  Linear,
  Quadratic,
  Hcf,
  Lcm,
  Factorization,
  Simplification,
  Squaring,
  AlgebraPlus,
  AlgebraMinus,
  AlgebraMultiply,
  AlgebraDivision,
  AlgebraicFormula,
}

impl ProblemType {
  pub fn as_str(&self) -> &'static str {
    match self {
      ProblemType::Linear => "linear",
      ProblemType::Quadratic => "quadratic",
      ProblemType::Hcf => "hcf",
      ProblemType::Lcm => "lcm",
      ProblemType::Factorization => "factorization",
      ProblemType::Simplification => "simplification",
      ProblemType::Squaring => "squaring",
      ProblemType::AlgebraPlus => "algebra_plus",
      ProblemType::AlgebraMinus => "algebra_minus",
      ProblemType::AlgebraMultiply => "algebra_multiply",
      ProblemType::AlgebraDivision => "algebra_division",
      ProblemType::AlgebraicFormula => "algebraic_formula",
    }
  }

  /// Bengali heading used by the CLI and chat replies.
  pub fn title(&self) -> &'static str {
    match self {
      ProblemType::Linear => "রৈখিক সমীকরণ",
      ProblemType::Quadratic => "দ্বিঘাত সমীকরণ",
      ProblemType::Hcf => "গসাগু",
      ProblemType::Lcm => "লসাগু",
      ProblemType::Factorization => "উৎপাদকে বিশ্লেষণ",
      ProblemType::Simplification => "সরলীকরণ",
      ProblemType::Squaring => "বর্গ",
      ProblemType::AlgebraPlus => "বীজগাণিতিক যোগ",
      ProblemType::AlgebraMinus => "বীজগাণিতিক বিয়োগ",
      ProblemType::AlgebraMultiply => "বীজগাণিতিক গুণ",
      ProblemType::AlgebraDivision => "বীজগাণিতিক ভাগ",
      ProblemType::AlgebraicFormula => "বীজগাণিতিক সূত্র",
    }
  }
}

impl std::fmt::Display for ProblemType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A worked answer: ordered narration plus the final result line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
  #[serde(rename = "type")]
  pub problem_type: ProblemType,
  pub variable: String,
  pub steps: Vec<String>,
  pub solution: String,
  /// Numeric roots for equations; empty for every other shape.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub roots: Vec<f64>,
}

impl Solution {
  pub fn new(
    problem_type: ProblemType,
    variable: impl Into<String>,
    steps: Vec<String>,
    solution: impl Into<String>,
  ) -> Self {
    Solution {
      problem_type,
      variable: variable.into(),
      steps,
      solution: solution.into(),
      roots: Vec::new(),
    }
  }

  pub fn with_roots(mut self, roots: Vec<f64>) -> Self {
    self.roots = roots;
    self
  }
}

/// Classify `problem` and solve it with the default configuration.
///
/// ```
/// let solution = bijganit::solve("x + 7 = 15").unwrap();
/// assert_eq!(solution.solution, "x = 8");
/// ```
pub fn solve(problem: &str) -> Result<Solution, SolverError> {
  solve_with_config(problem, &SolverConfig::default())
}

pub fn solve_with_config(
  problem: &str,
  config: &SolverConfig,
) -> Result<Solution, SolverError> {
  use functions::*;

  let shape = classify(problem)?;
  debug!(kind = %shape.kind(), "classified problem");

  let solution = match shape {
    ProblemShape::AlgebraPlus => arithmetic::solve_algebra_plus(problem, config),
    ProblemShape::AlgebraMinus => {
      arithmetic::solve_algebra_minus(problem, config)
    }
    ProblemShape::AlgebraMultiply => {
      arithmetic::solve_algebra_multiply(problem, config)
    }
    ProblemShape::AlgebraDivision => {
      division::solve_algebra_division(problem, config)
    }
    ProblemShape::Squaring => squaring::solve_squaring(problem),
    ProblemShape::AlgebraicFormula => {
      formula::solve_algebraic_formula(problem, config)
    }
    ProblemShape::Hcf => hcf_lcm::solve_hcf(problem, config),
    ProblemShape::Lcm => hcf_lcm::solve_lcm(problem, config),
    ProblemShape::Factorization => factor::solve_factorization(problem, config),
    ProblemShape::Simplification => {
      simplify::solve_simplification(problem, config)
    }
    ProblemShape::Linear { left, right } => {
      linear::solve_linear(problem.trim(), &left, &right)
    }
    ProblemShape::Quadratic { left, right } => {
      quadratic::solve_quadratic(&left, &right, config)
    }
  }?;

  debug!(
    kind = %solution.problem_type,
    steps = solution.steps.len(),
    "solved problem"
  );
  Ok(solution)
}
