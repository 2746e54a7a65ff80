use tracing::debug;

use crate::config::SolverConfig;
use crate::extract::extract_expressions;
use crate::format::format_math;
use crate::syntax::Polynomial;
use crate::{ProblemType, Solution, SolverError};

/// First two operands of `problem`, parsed.
pub(crate) fn two_operands(
  problem: &str,
  config: &SolverConfig,
) -> Result<(String, Polynomial, String, Polynomial), SolverError> {
  let expressions = extract_expressions(problem, config);
  let [first, second, ..] = expressions.as_slice() else {
    return Err(SolverError::InsufficientOperands);
  };
  let left = Polynomial::parse(first)?;
  let right = Polynomial::parse(second)?;
  debug!(%first, %second, "binary operands");
  Ok((first.clone(), left, second.clone(), right))
}

// ─── Addition / subtraction / multiplication ───────────────────────────

pub fn solve_algebra_plus(
  problem: &str,
  config: &SolverConfig,
) -> Result<Solution, SolverError> {
  let (first, left, second, right) = two_operands(problem, config)?;
  let (a, b) = (format_math(&first), format_math(&second));
  let sum = format_math(&left.plus(&right).to_string());

  let steps = vec![
    format!("বীজগাণিতিক যোগ: {a} + {b}"),
    String::new(),
    "ধাপ ১: সদৃশ পদ একত্রিত করি".to_string(),
    format!("{a} + {b} = {sum}"),
  ];
  Ok(Solution::new(
    ProblemType::AlgebraPlus,
    "যোগফল",
    steps,
    format!("যোগফল = {sum}"),
  ))
}

pub fn solve_algebra_minus(
  problem: &str,
  config: &SolverConfig,
) -> Result<Solution, SolverError> {
  let (first, left, second, right) = two_operands(problem, config)?;
  let (a, b) = (format_math(&first), format_math(&second));
  let negated = Polynomial::zero().minus(&right);
  let difference = format_math(&left.minus(&right).to_string());

  let steps = vec![
    format!("বীজগাণিতিক বিয়োগ: ({a}) - ({b})"),
    String::new(),
    "ধাপ ১: দ্বিতীয় রাশির প্রতিটি পদের চিহ্ন পরিবর্তন করি".to_string(),
    format!("-({b}) = {}", format_math(&negated.to_string())),
    "ধাপ ২: সদৃশ পদ একত্রিত করি".to_string(),
    format!("({a}) - ({b}) = {difference}"),
  ];
  Ok(Solution::new(
    ProblemType::AlgebraMinus,
    "বিয়োগফল",
    steps,
    format!("বিয়োগফল = {difference}"),
  ))
}

pub fn solve_algebra_multiply(
  problem: &str,
  config: &SolverConfig,
) -> Result<Solution, SolverError> {
  let (first, left, second, right) = two_operands(problem, config)?;
  let (a, b) = (format_math(&first), format_math(&second));

  let partials: Vec<String> = left
    .terms()
    .iter()
    .flat_map(|x| right.terms().iter().map(move |y| x.times(y)))
    .map(|t| format_math(&format!("({t})")))
    .collect();
  let product = format_math(&left.times(&right).to_string());

  let steps = vec![
    format!("বীজগাণিতিক গুণ: ({a}) × ({b})"),
    String::new(),
    "ধাপ ১: প্রতিটি পদকে প্রতিটি পদের সাথে গুণ করি".to_string(),
    format!("= {}", partials.join(" + ")),
    "ধাপ ২: সদৃশ পদ একত্রিত করি".to_string(),
    format!("({a}) × ({b}) = {product}"),
  ];
  Ok(Solution::new(
    ProblemType::AlgebraMultiply,
    "গুণফল",
    steps,
    format!("গুণফল = {product}"),
  ))
}
