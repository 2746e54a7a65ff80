use tracing::trace;

use crate::config::SolverConfig;
use crate::format::{format_fixed, format_math, format_number};
use crate::syntax::Polynomial;
use crate::{
  ProblemType, Solution, SolverError, DOUBLE_ROOT, NO_REAL_SOLUTION,
};

// ─── Quadratic equations ───────────────────────────────────────────────

/// Solve `ax^2 + bx + c = 0` with the discriminant. One side must be `0`.
pub fn solve_quadratic(
  left: &str,
  right: &str,
  config: &SolverConfig,
) -> Result<Solution, SolverError> {
  let (quadratic_side, other_side) = if left.contains("^2") {
    (left, right)
  } else {
    (right, left)
  };
  if other_side != "0" {
    return Err(SolverError::UnsupportedQuadraticForm);
  }

  let (variable, a, b, c) = standard_coefficients(quadratic_side)?;
  trace!(%variable, ?a, ?b, ?c, "quadratic coefficients");

  let var = variable.to_string();
  let discriminant = b
    .saturating_mul(b)
    .saturating_sub(a.saturating_mul(c).saturating_mul(4));
  let standard = Polynomial::from_dense(&[c, b, a], variable);
  let mut steps = vec![
    format_math(&format!("{} = 0", standard.to_spaced_string())),
    format!("এখানে a = {a}, b = {b}, c = {c}"),
    format!(
      "বিচারক (D) = b² - 4ac = ({b})² - 4×({a})×({c}) = {discriminant}"
    ),
  ];

  if discriminant < 0 {
    steps.push("D < 0 হওয়ায় এই সমীকরণের বাস্তব সমাধান নেই".to_string());
    return Ok(Solution::new(
      ProblemType::Quadratic,
      var,
      steps,
      NO_REAL_SOLUTION,
    ));
  }

  let (af, bf) = (a as f64, b as f64);

  if discriminant == 0 {
    let root = -bf / (2.0 * af);
    steps.push("D = 0 হওয়ায় দুটি সমান মূল রয়েছে".to_string());
    steps.push(format!(
      "{var} = -b/2a = -({b})/(2×{a}) = {}",
      format_number(root)
    ));
    return Ok(
      Solution::new(
        ProblemType::Quadratic,
        var.clone(),
        steps,
        format!("{var} = {} ({DOUBLE_ROOT})", format_number(root)),
      )
      .with_roots(vec![root]),
    );
  }

  let places = config.precision;
  let root_d = (discriminant as f64).sqrt();
  let x1 = (-bf + root_d) / (2.0 * af);
  let x2 = (-bf - root_d) / (2.0 * af);
  steps.push(format!(
    "√D = √{discriminant} = {}",
    format_fixed(root_d, places)
  ));
  steps.push(format!("{var} = [-b ± √D]/2a"));
  steps.push(format!(
    "{var}₁ = [-({b}) + {}]/(2×{a}) = {}",
    format_fixed(root_d, places),
    format_fixed(x1, places)
  ));
  steps.push(format!(
    "{var}₂ = [-({b}) - {}]/(2×{a}) = {}",
    format_fixed(root_d, places),
    format_fixed(x2, places)
  ));

  Ok(
    Solution::new(
      ProblemType::Quadratic,
      var.clone(),
      steps,
      format!(
        "{var}₁ = {}, {var}₂ = {}",
        format_fixed(x1, places),
        format_fixed(x2, places)
      ),
    )
    .with_roots(vec![x1, x2]),
  )
}

/// `(variable, a, b, c)` of a single-variable polynomial of degree exactly 2.
fn standard_coefficients(
  side: &str,
) -> Result<(char, i128, i128, i128), SolverError> {
  let polynomial = Polynomial::parse(side)
    .map_err(|_| SolverError::UnsupportedQuadraticForm)?;
  let variable = polynomial
    .single_variable()
    .ok_or(SolverError::UnsupportedQuadraticForm)?;
  let coeffs = polynomial
    .dense_coefficients(variable)
    .filter(|c| c.len() == 3 && c[2] != 0)
    .ok_or(SolverError::UnsupportedQuadraticForm)?;
  Ok((variable, coeffs[2], coeffs[1], coeffs[0]))
}
