use tracing::debug;

use crate::config::SolverConfig;
use crate::extract::extract_expressions;
use crate::format::format_math;
use crate::syntax::{parse_terms, spaced_terms, Polynomial, Term};
use crate::{ProblemType, Solution, SolverError};

/// Combine like terms of the first expression in `problem`.
pub fn solve_simplification(
  problem: &str,
  config: &SolverConfig,
) -> Result<Solution, SolverError> {
  let expressions = extract_expressions(problem, config);
  let expr = expressions.first().ok_or(SolverError::NoExpressionsFound)?;
  let terms = parse_terms(expr)?;
  let simplified = Polynomial::from_terms(terms.iter().cloned());
  let shown = format_math(expr);
  let result = format_math(&simplified.to_spaced_string());

  let mut steps = vec![format!("সরলীকরণ: {shown}"), String::new()];
  let groups = like_term_groups(&terms);
  let combined = groups.iter().any(|g| g.len() > 1);
  if combined {
    steps.push("সদৃশ পদগুলো একসাথে লিখি:".to_string());
    for group in groups.iter().filter(|g| g.len() > 1) {
      let sum = Polynomial::from_terms(group.iter().cloned());
      steps.push(format!(
        "  {} = {}",
        format_math(&spaced_terms(group)),
        format_math(&sum.to_spaced_string())
      ));
    }
  }
  steps.push(format!("সরলীকৃত রূপ: {result}"));
  steps.push(
    if combined {
      "(সদৃশ পদ একত্রিত করা হয়েছে)"
    } else {
      "(রাশিটি ইতিমধ্যে সরলতম আকারে আছে)"
    }
    .to_string(),
  );
  debug!(%shown, %result, combined, "simplified");

  Ok(Solution::new(
    ProblemType::Simplification,
    "সরলীকরণ",
    steps,
    format!("সরলীকৃত রূপ = {result}"),
  ))
}

/// Terms bucketed by `(variable, power)`, in first-encounter order.
fn like_term_groups(terms: &[Term]) -> Vec<Vec<Term>> {
  let mut groups: Vec<Vec<Term>> = Vec::new();
  for term in terms {
    let key = term.key();
    match groups.iter_mut().find(|g| g[0].key() == key) {
      Some(group) => group.push(term.clone()),
      None => groups.push(vec![term.clone()]),
    }
  }
  groups
}
