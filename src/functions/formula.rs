use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::config::SolverConfig;
use crate::extract::extract_expressions;
use crate::format::{format_math, normalize_superscripts};
use crate::syntax::{parse_terms, Polynomial, Term};
use crate::{ProblemType, Solution, SolverError};

static GROUP_PRODUCT: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\(([^()]+)\)\(([^()]+)\)").unwrap());
static GROUP_POWER: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\(([^()]+)\)\^([23])").unwrap());

/// A recognised identity with the letters bound to the operand's terms.
struct Identity {
  formula: &'static str,
  bindings: String,
  expanded: Polynomial,
}

fn shown(term: &Term) -> String {
  format_math(&term.to_string())
}

fn power_identity(inner: &str, exponent: u32) -> Result<Identity, SolverError> {
  let terms = parse_terms(inner)?;
  let expanded = Polynomial::from_terms(terms.iter().cloned()).pow(exponent);
  match (terms.as_slice(), exponent) {
    ([a, b], 2) => Ok(Identity {
      formula: if b.coefficient < 0 {
        "(a-b)² = a² - 2ab + b²"
      } else {
        "(a+b)² = a² + 2ab + b²"
      },
      bindings: format!("a = {}, b = {}", shown(a), shown(&b.abs())),
      expanded,
    }),
    ([a, b, c], 2) => Ok(Identity {
      formula: "(a+b+c)² = a² + b² + c² + 2ab + 2bc + 2ca",
      bindings: format!("a = {}, b = {}, c = {}", shown(a), shown(b), shown(c)),
      expanded,
    }),
    ([a, b], 3) => Ok(Identity {
      formula: if b.coefficient < 0 {
        "(a-b)³ = a³ - 3a²b + 3ab² - b³"
      } else {
        "(a+b)³ = a³ + 3a²b + 3ab² + b³"
      },
      bindings: format!("a = {}, b = {}", shown(a), shown(&b.abs())),
      expanded,
    }),
    _ => Err(SolverError::UnsupportedExpression(format!("({inner})^{exponent}"))),
  }
}

fn product_identity(first: &str, second: &str) -> Result<Identity, SolverError> {
  let left = parse_terms(first)?;
  let right = parse_terms(second)?;
  let expanded = Polynomial::from_terms(left.iter().cloned())
    .times(&Polynomial::from_terms(right.iter().cloned()));

  if let ([a, b], [c, d]) = (left.as_slice(), right.as_slice()) {
    if a == c && b.coefficient == -d.coefficient && b.abs() == d.abs() {
      return Ok(Identity {
        formula: "(a-b)(a+b) = a² - b²",
        bindings: format!("a = {}, b = {}", shown(a), shown(&b.abs())),
        expanded,
      });
    }
  }
  Ok(Identity {
    formula: "(a+b)(c+d) = ac + ad + bc + bd",
    bindings: String::new(),
    expanded,
  })
}

// ─── Formula expansion problems ────────────────────────────────────────

/// Expand the first `(…)^2`, `(…)^3` or `(…)(…)` found in `problem`.
pub fn solve_algebraic_formula(
  problem: &str,
  config: &SolverConfig,
) -> Result<Solution, SolverError> {
  let text: String = normalize_superscripts(&problem.to_lowercase())
    .chars()
    .filter(|c| !c.is_whitespace())
    .collect();

  let (matched, identity) = if let Some(caps) = GROUP_POWER.captures(&text) {
    let exponent = if &caps[2] == "3" { 3 } else { 2 };
    (caps[0].to_string(), power_identity(&caps[1], exponent)?)
  } else if let Some(caps) = GROUP_PRODUCT.captures(&text) {
    (caps[0].to_string(), product_identity(&caps[1], &caps[2])?)
  } else if extract_expressions(problem, config).is_empty() {
    return Err(SolverError::NoExpressionsFound);
  } else {
    return Err(SolverError::UnsupportedExpression(problem.trim().to_string()));
  };
  debug!(%matched, formula = identity.formula, "formula expansion");

  let compact = format_math(&matched);
  let expanded = format_math(&identity.expanded.to_spaced_string());
  let mut steps = vec![format!("সূত্র: {}", identity.formula)];
  if !identity.bindings.is_empty() {
    steps.push(format!("এখানে {}", identity.bindings));
  }
  steps.push(format!("{compact} = {expanded}"));

  Ok(Solution::new(
    ProblemType::AlgebraicFormula,
    "সূত্র",
    steps,
    format!("{compact} = {expanded}"),
  ))
}
