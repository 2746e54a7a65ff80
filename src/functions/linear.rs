use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::format::{format_math, format_number};
use crate::{
  ProblemType, Solution, SolverError, INFINITE_SOLUTIONS, NO_SOLUTION,
};

static FRACTION_SIDE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^\((.+)\)/([0-9]+)$").unwrap());

// ─── Linear equations ──────────────────────────────────────────────────

/// Solve `left = right` for its first letter. Sides are whitespace-free.
///
/// `(expr)/n = k` is first multiplied out to `expr = n·k`.
pub fn solve_linear(
  original: &str,
  left: &str,
  right: &str,
) -> Result<Solution, SolverError> {
  let variable = first_letter(left)
    .or_else(|| first_letter(right))
    .ok_or(SolverError::NoVariableFound)?;

  let mut steps = vec![format_math(original)];

  if let Some(caps) = FRACTION_SIDE.captures(left) {
    if let Ok(result) = right.parse::<f64>() {
      let numerator = &caps[1];
      let denominator: f64 = caps[2]
        .parse()
        .map_err(|_| malformed_term(&caps[2]))?;
      let product = result * denominator;
      steps.push(format!("{} = {}", format_math(left), format_number(result)));
      steps.push(format!(
        "{} = {} × {}",
        format_math(numerator),
        format_number(result),
        format_number(denominator)
      ));
      steps.push(format!(
        "{} = {}",
        format_math(numerator),
        format_number(product)
      ));
      return solve_sides(variable, numerator, &format_number(product), steps);
    }
  }

  solve_sides(variable, left, right, steps)
}

fn solve_sides(
  variable: char,
  left: &str,
  right: &str,
  mut steps: Vec<String>,
) -> Result<Solution, SolverError> {
  let (left_coeff, left_const) = parse_side(left, variable)?;
  let (right_coeff, right_const) = parse_side(right, variable)?;
  let coefficient = left_coeff - right_coeff;
  let constant = right_const - left_const;
  trace!(%variable, coefficient, constant, "collected linear terms");

  if coefficient == 0.0 {
    steps.push(format!("সব চলক বাদ দিলে: 0 = {}", format_number(constant)));
    let solution = if constant == 0.0 {
      steps.push("সমীকরণের অসীম সমাধান আছে".to_string());
      INFINITE_SOLUTIONS
    } else {
      steps.push("কোনো সমাধান নেই".to_string());
      NO_SOLUTION
    };
    return Ok(Solution::new(
      ProblemType::Linear,
      variable.to_string(),
      steps,
      solution,
    ));
  }

  let value = constant / coefficient;
  steps.push(format!(
    "চলক এক পাশে স্থানান্তর: {}{} = {}",
    coefficient_prefix(coefficient),
    variable,
    format_number(constant)
  ));
  steps.push(format!(
    "{} = {} ÷ {}",
    variable,
    format_number(constant),
    format_number(coefficient)
  ));
  steps.push(format!("{} = {}", variable, format_number(value)));

  Ok(
    Solution::new(
      ProblemType::Linear,
      variable.to_string(),
      steps,
      format!("{} = {}", variable, format_number(value)),
    )
    .with_roots(vec![value]),
  )
}

fn first_letter(side: &str) -> Option<char> {
  side.chars().find(|c| c.is_ascii_alphabetic())
}

/// `1` renders as nothing and `-1` as a bare minus.
fn coefficient_prefix(coefficient: f64) -> String {
  if coefficient == 1.0 {
    String::new()
  } else if coefficient == -1.0 {
    "-".to_string()
  } else {
    format_number(coefficient)
  }
}

/// Split a side on `+`/`-` and return `(variable coefficient, constant)`.
fn parse_side(side: &str, variable: char) -> Result<(f64, f64), SolverError> {
  let normalized = side.replace('-', "+-");
  let mut coefficient = 0.0;
  let mut constant = 0.0;

  for term in normalized.split('+').filter(|t| !t.is_empty()) {
    if term.contains(variable) {
      let rest = term.replacen(variable, "", 1);
      let rest = rest.trim_end_matches('*');
      coefficient += parse_coefficient(rest).ok_or_else(|| malformed_term(term))?;
    } else {
      let bare = term.trim_start_matches('-');
      if bare.is_empty() || bare.starts_with('/') {
        return Err(malformed_term(term));
      }
      constant += parse_coefficient(term).ok_or_else(|| malformed_term(term))?;
    }
  }
  Ok((coefficient, constant))
}

/// `""`, `-`, `3`, `-2.5`, `/2`, `3/4`: a coefficient left after removing
/// the variable from a term.
fn parse_coefficient(text: &str) -> Option<f64> {
  let (numerator, denominator) = match text.split_once('/') {
    Some((n, d)) => (n, Some(d)),
    None => (text, None),
  };
  let numerator = match numerator {
    "" => 1.0,
    "-" => -1.0,
    n => n.parse::<f64>().ok()?,
  };
  match denominator {
    None => Some(numerator),
    Some(d) => {
      let d = d.parse::<f64>().ok()?;
      (d != 0.0).then_some(numerator / d)
    }
  }
}

fn malformed_term(term: &str) -> SolverError {
  SolverError::MalformedEquation(format!("পদ '{term}' বোঝা যায়নি।"))
}
