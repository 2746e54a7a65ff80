//! Algebraic division: factor cancellation, polynomial long division, the
//! restrictions on the variable, and a verification pass.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::config::SolverConfig;
use crate::format::{format_math, format_number};
use crate::functions::arithmetic::two_operands;
use crate::functions::factor::{factor_expression, Factor};
use crate::functions::hcf_lcm::{common_factors, compose, multiplicities, FactorPower};
use crate::syntax::{Polynomial, Term};
use crate::{ProblemType, Solution, SolverError};

const EPSILON: f64 = 1e-9;

/// Quotient and remainder of a division, with the narrated work.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionOutcome {
  pub quotient: String,
  pub remainder: String,
  /// Whether `quotient × divisor + remainder` reproduced the dividend.
  pub verified: bool,
  pub steps: Vec<String>,
}

impl DivisionOutcome {
  pub fn is_exact(&self) -> bool {
    self.remainder == "0"
  }
}

// ─── Dense f64 polynomials ─────────────────────────────────────────────

fn is_zero(v: f64) -> bool {
  v.abs() < EPSILON
}

fn trim(mut coeffs: Vec<f64>) -> Vec<f64> {
  while coeffs.len() > 1 && coeffs.last().copied().is_some_and(is_zero) {
    coeffs.pop();
  }
  coeffs
}

/// Compact caret notation of dense coefficients (index = power).
fn render(coeffs: &[f64], variable: char) -> String {
  let mut out = String::new();
  for (power, &c) in coeffs.iter().enumerate().rev() {
    if is_zero(c) {
      continue;
    }
    let magnitude = format_number(c.abs());
    let body = match power {
      0 => magnitude,
      1 if magnitude == "1" => variable.to_string(),
      1 => format!("{magnitude}{variable}"),
      p if magnitude == "1" => format!("{variable}^{p}"),
      p => format!("{magnitude}{variable}^{p}"),
    };
    if c < 0.0 {
      out.push('-');
    } else if !out.is_empty() {
      out.push('+');
    }
    out.push_str(&body);
  }
  if out.is_empty() {
    "0".to_string()
  } else {
    out
  }
}

fn multiply(a: &[f64], b: &[f64]) -> Vec<f64> {
  let mut out = vec![0.0; a.len() + b.len() - 1];
  for (i, x) in a.iter().enumerate() {
    for (j, y) in b.iter().enumerate() {
      out[i + j] += x * y;
    }
  }
  trim(out)
}

fn add(a: &[f64], b: &[f64]) -> Vec<f64> {
  let mut out = vec![0.0; a.len().max(b.len())];
  for (i, x) in a.iter().enumerate() {
    out[i] += x;
  }
  for (i, y) in b.iter().enumerate() {
    out[i] += y;
  }
  trim(out)
}

fn same(a: &[f64], b: &[f64]) -> bool {
  let (a, b) = (trim(a.to_vec()), trim(b.to_vec()));
  a.len() == b.len() && a.iter().zip(&b).all(|(x, y)| is_zero(x - y))
}

fn to_dense(polynomial: &Polynomial, variable: char) -> Option<Vec<f64>> {
  polynomial
    .dense_coefficients(variable)
    .map(|c| trim(c.into_iter().map(|v| v as f64).collect()))
}

// ─── Long division ─────────────────────────────────────────────────────

/// Long division of univariate dense polynomials, one narrated line pair per
/// quotient term.
pub fn long_divide(
  dividend: &[f64],
  divisor: &[f64],
  variable: char,
) -> (Vec<f64>, Vec<f64>, Vec<String>) {
  let divisor = trim(divisor.to_vec());
  let mut remainder = trim(dividend.to_vec());
  let degree = divisor.len() - 1;
  let lead = divisor[degree];
  let mut quotient = vec![0.0; remainder.len().saturating_sub(degree).max(1)];
  let mut steps = Vec::new();
  let shown_divisor = format_math(&render(&divisor, variable));

  while remainder.len() > degree && !(remainder.len() == 1 && is_zero(remainder[0])) {
    let top = remainder.len() - 1;
    let coefficient = remainder[top] / lead;
    let shift = top - degree;
    quotient[shift] = coefficient;

    let mut term = vec![0.0; shift + 1];
    term[shift] = coefficient;
    let product = multiply(&term, &divisor);
    let negated: Vec<f64> = product.iter().map(|v| -v).collect();
    let mut next = add(&remainder, &negated);
    // The leading term cancels exactly; drop float residue.
    if next.len() > top {
      next.truncate(top);
      next = trim(next);
    }

    steps.push(format!(
      "{} × ({shown_divisor}) = {}",
      format_math(&render(&term, variable)),
      format_math(&render(&product, variable))
    ));
    steps.push(format!(
      "বিয়োগ করে পাই: {}",
      format_math(&render(&next, variable))
    ));
    remainder = if next.is_empty() { vec![0.0] } else { next };
    if top == 0 {
      break;
    }
  }

  (trim(quotient), remainder, steps)
}

fn univariate_division(
  dividend: &Polynomial,
  divisor: &Polynomial,
) -> Option<(char, DivisionOutcome)> {
  let mut letters = dividend.variables();
  letters.extend(divisor.variables());
  let variable = match letters.len() {
    0 => 'x',
    1 => letters.into_iter().next()?,
    _ => return None,
  };
  let p = to_dense(dividend, variable)?;
  let d = to_dense(divisor, variable)?;
  if d.iter().all(|&c| is_zero(c)) {
    return None;
  }

  let (quotient, remainder, mut steps) = long_divide(&p, &d, variable);
  let recomposed = add(&multiply(&quotient, &d), &remainder);
  let (q, r) = (
    format_math(&render(&quotient, variable)),
    format_math(&render(&remainder, variable)),
  );
  steps.push(format!("ভাগফল = {q}"));
  steps.push(format!("ভাগশেষ = {r}"));
  trace!(%q, %r, "long division");

  Some((
    variable,
    DivisionOutcome {
      quotient: q,
      remainder: r,
      verified: same(&recomposed, &p),
      steps,
    },
  ))
}

/// Term-by-term division by a single-term divisor; terms that do not divide
/// evenly stay in the remainder.
fn monomial_division(
  dividend: &Polynomial,
  divisor: &Polynomial,
) -> Option<DivisionOutcome> {
  let [single] = divisor.terms() else {
    return None;
  };
  let divisor_exponents = single.exponents();
  let mut quotient = Vec::new();
  let mut remainder = Vec::new();
  let mut steps = Vec::new();

  for term in dividend.terms() {
    match divide_term(term, single.coefficient, &divisor_exponents) {
      Some(q) => {
        steps.push(format!(
          "{} ÷ {} = {}",
          format_math(&term.to_string()),
          format_math(&single.to_string()),
          format_math(&q.to_string())
        ));
        quotient.push(q);
      }
      None => remainder.push(term.clone()),
    }
  }

  let quotient = Polynomial::from_terms(quotient);
  let remainder = Polynomial::from_terms(remainder);
  let recomposed = quotient.times(divisor).plus(&remainder);
  let (q, r) = (
    format_math(&quotient.to_string()),
    format_math(&remainder.to_string()),
  );
  steps.push(format!("ভাগফল = {q}"));
  steps.push(format!("ভাগশেষ = {r}"));
  Some(DivisionOutcome {
    quotient: q,
    remainder: r,
    verified: recomposed.minus(dividend).is_zero(),
    steps,
  })
}

fn divide_term(
  term: &Term,
  coefficient: i128,
  exponents: &BTreeMap<char, u32>,
) -> Option<Term> {
  if coefficient == 0 || term.coefficient % coefficient != 0 {
    return None;
  }
  let mut remaining = term.exponents();
  for (letter, &power) in exponents {
    let have = remaining.get_mut(letter)?;
    *have = have.checked_sub(power)?;
  }
  Some(Term::from_exponents(term.coefficient / coefficient, &remaining))
}

// ─── Restrictions ──────────────────────────────────────────────────────

/// Values of the variable that make the divisor zero, from its linear and
/// power factors: `x ≠ -2`, `x ≠ 0`.
pub fn division_restrictions(divisor: &str) -> Vec<String> {
  let mut restrictions: Vec<String> = Vec::new();
  for factor in factor_expression(divisor).factors {
    let restriction = match &factor {
      Factor::Power { variable, .. } => Some(format!("{variable} ≠ 0")),
      Factor::Group(_) => linear_root(&factor),
      Factor::Number(_) => None,
    };
    if let Some(r) = restriction {
      if !restrictions.contains(&r) {
        restrictions.push(r);
      }
    }
  }
  restrictions
}

fn linear_root(factor: &Factor) -> Option<String> {
  let polynomial = factor.to_polynomial().ok()?;
  let variable = polynomial.single_variable()?;
  let coeffs = polynomial.dense_coefficients(variable)?;
  let &[m, k] = coeffs.as_slice() else {
    return None;
  };
  (k != 0).then(|| format!("{variable} ≠ {}", format_number(-(m as f64) / k as f64)))
}

// ─── Division problems ─────────────────────────────────────────────────

fn remaining(set: &[FactorPower], common: &[FactorPower]) -> Vec<FactorPower> {
  set
    .iter()
    .filter_map(|(base, count)| {
      let key = base.key();
      let shared = common
        .iter()
        .find(|(b, _)| b.key() == key)
        .map(|(_, c)| *c)
        .unwrap_or(0);
      (*count > shared).then(|| (base.clone(), count - shared))
    })
    .collect()
}

fn cancellation_steps(
  shown: (&str, &str),
  dividend: &str,
  divisor: &str,
  steps: &mut Vec<String>,
) -> Option<String> {
  let dividend_factors = factor_expression(dividend);
  let divisor_factors = factor_expression(divisor);
  steps.push("পদ্ধতি ১: উৎপাদকীকরণ ব্যবহার করে".to_string());
  steps.push(format!("ভাজ্য = {} = {}", shown.0, dividend_factors.display()));
  steps.push(format!("ভাজক = {} = {}", shown.1, divisor_factors.display()));

  let sets = [
    multiplicities(&dividend_factors.factors),
    multiplicities(&divisor_factors.factors),
  ];
  let common = common_factors(&sets);
  if common.is_empty() {
    steps.push("কোনো সাধারণ উৎপাদক নেই".to_string());
    return None;
  }

  steps.push(format!("সাধারণ উৎপাদক: {}", compose(&common)));
  steps.push("সাধারণ উৎপাদক বাদ করে:".to_string());
  let numerator = compose(&remaining(&sets[0], &common));
  let denominator = compose(&remaining(&sets[1], &common));
  let reduced = if denominator == "1" {
    numerator
  } else {
    format!("({numerator})/({denominator})")
  };
  steps.push(format!("({}) ÷ ({}) = {reduced}", shown.0, shown.1));
  Some(reduced)
}

/// Divide the first extracted operand by the second.
pub fn solve_algebra_division(
  problem: &str,
  config: &SolverConfig,
) -> Result<Solution, SolverError> {
  let (first, dividend, second, divisor) = two_operands(problem, config)?;
  if divisor.is_zero() {
    return Err(SolverError::DivisionByZero);
  }
  let (p, d) = (format_math(&first), format_math(&second));

  let mut steps = vec![format!("বীজগণিতিক ভাগ: ({p}) ÷ ({d})"), String::new()];
  let shown = (p.as_str(), d.as_str());
  let cancelled = cancellation_steps(shown, &first, &second, &mut steps);

  let univariate = univariate_division(&dividend, &divisor);
  let outcome = match &univariate {
    Some((_, outcome)) => Some(outcome.clone()),
    None => monomial_division(&dividend, &divisor),
  };
  debug!(exact = ?outcome.as_ref().map(DivisionOutcome::is_exact), "division");

  if let Some(outcome) = &outcome {
    steps.push(String::new());
    steps.push("পদ্ধতি ২: দীর্ঘ ভাগ পদ্ধতি".to_string());
    steps.extend(outcome.steps.iter().cloned());
  }

  let restrictions = division_restrictions(&second);
  if !restrictions.is_empty() {
    steps.push(String::new());
    steps.push(format!("শর্ত: {}", restrictions.join(", ")));
  }

  if let Some(outcome) = &outcome {
    steps.push(String::new());
    steps.push("যাচাইকরণ:".to_string());
    steps.push("যাচাই: ভাজ্য = ভাগফল × ভাজক + ভাগশেষ".to_string());
    steps.push(format!(
      "({}) × ({d}) + ({}) = {p}{}",
      outcome.quotient,
      outcome.remainder,
      if outcome.verified { " ✓" } else { "" }
    ));
  }

  if let Some((variable, outcome)) = &univariate {
    substitution_steps(&dividend, &divisor, *variable, outcome, shown, &mut steps);
  }

  let result = match (&outcome, cancelled) {
    (Some(o), _) if o.is_exact() => o.quotient.clone(),
    (Some(o), _) => format!("{} + ({})/({d})", o.quotient, o.remainder),
    (None, Some(reduced)) => reduced,
    (None, None) => format!("({p})/({d})"),
  };

  Ok(Solution::new(
    ProblemType::AlgebraDivision,
    "ভাগফল",
    steps,
    format!("ভাগফল = {result}"),
  ))
}

/// A quadratic over a linear divisor with no remainder: the quotient is the
/// limit of the fraction at the divisor's root.
fn substitution_steps(
  dividend: &Polynomial,
  divisor: &Polynomial,
  variable: char,
  outcome: &DivisionOutcome,
  shown: (&str, &str),
  steps: &mut Vec<String>,
) {
  if dividend.degree() != 2 || divisor.degree() != 1 || !outcome.is_exact() {
    return;
  }
  let coeffs = divisor.dense_coefficients(variable).unwrap_or_default();
  let &[m, k] = coeffs.as_slice() else {
    return;
  };
  let root = -(m as f64) / k as f64;
  let Some(value) = Polynomial::parse(&outcome.quotient)
    .ok()
    .and_then(|q| q.evaluate(variable, root))
  else {
    return;
  };
  let at = format_number(root);

  steps.push(String::new());
  steps.push("বিকল্প পদ্ধতি: প্রতিস্থাপন".to_string());
  steps.push(format!("{variable} → {at} এর সীমা নির্ণয়:"));
  steps.push(format!(
    "lim({variable}→{at}) ({})/({}) = lim({variable}→{at}) ({}) = {}",
    shown.0,
    shown.1,
    outcome.quotient,
    format_number(value)
  ));
  steps.push(format!("তাই ভাগফল {} সঠিক", outcome.quotient));
}
