use tracing::trace;

use crate::config::SolverConfig;
use crate::extract::extract_expressions;
use crate::format::{format_math, superscript};
use crate::functions::factor::{
  factor_expression, prime_factors, Factor, Factorization,
};
use crate::{ProblemType, Solution, SolverError};

/// A base factor raised to a multiplicity.
pub type FactorPower = (Factor, u32);

/// Base factors of one multiset with their multiplicities, in first
/// encounter order. Composite numbers are split into primes, `x^3` counts
/// as base `x` three times, and the units `1`/`-1` are dropped.
pub fn multiplicities(factors: &[Factor]) -> Vec<FactorPower> {
  let mut out: Vec<FactorPower> = Vec::new();
  let mut add = |base: Factor, count: u32| {
    let key = base.key();
    match out.iter_mut().find(|(b, _)| b.key() == key) {
      Some((_, existing)) => *existing = existing.saturating_add(count),
      None => out.push((base, count)),
    }
  };

  for factor in factors {
    match factor {
      Factor::Number(1) | Factor::Number(-1) => {}
      Factor::Number(n) if *n > 1 => {
        for p in prime_factors(*n) {
          add(Factor::Number(p), 1);
        }
      }
      Factor::Number(n) => add(Factor::Number(*n), 1),
      Factor::Power { variable, power } => add(
        Factor::Power {
          variable: *variable,
          power: 1,
        },
        *power,
      ),
      Factor::Group(_) => add(factor.clone(), 1),
    }
  }
  out
}

fn count_of(set: &[FactorPower], key: &str) -> u32 {
  set
    .iter()
    .find(|(b, _)| b.key() == key)
    .map(|(_, c)| *c)
    .unwrap_or(0)
}

/// Bases present in every set, at their minimum multiplicity, in the order
/// of the first set.
pub fn common_factors(sets: &[Vec<FactorPower>]) -> Vec<FactorPower> {
  let Some(first) = sets.first() else {
    return Vec::new();
  };
  first
    .iter()
    .filter_map(|(base, _)| {
      let key = base.key();
      let min = sets.iter().map(|s| count_of(s, &key)).min().unwrap_or(0);
      (min > 0).then(|| (base.clone(), min))
    })
    .collect()
}

/// Every base that appears anywhere, at its maximum multiplicity, in
/// encounter order.
pub fn all_factors(sets: &[Vec<FactorPower>]) -> Vec<FactorPower> {
  let mut out: Vec<FactorPower> = Vec::new();
  for (base, _) in sets.iter().flatten() {
    let key = base.key();
    if out.iter().any(|(b, _)| b.key() == key) {
      continue;
    }
    let max = sets.iter().map(|s| count_of(s, &key)).max().unwrap_or(0);
    out.push((base.clone(), max));
  }
  out
}

/// `(x+2)²`, `x³`, `3`
pub fn power_display(base: &Factor, count: u32) -> String {
  let shown = format_math(&base.to_string());
  if count > 1 {
    format!("{shown}{}", superscript(count))
  } else {
    shown
  }
}

/// Numeric part multiplied out first, then symbolic factors with their
/// powers; `1` when nothing is left.
pub fn compose(factors: &[FactorPower]) -> String {
  let mut numeric: Option<i128> = None;
  let mut symbolic = Vec::new();
  for (base, count) in factors {
    match base {
      Factor::Number(n) => {
        let value = n.saturating_pow(*count);
        numeric = Some(numeric.unwrap_or(1).saturating_mul(value));
      }
      _ => symbolic.push(power_display(base, *count)),
    }
  }

  match (numeric, symbolic.is_empty()) {
    (None, true) => "1".to_string(),
    (Some(n), true) => n.to_string(),
    (numeric, false) => {
      let mut parts = Vec::new();
      if let Some(n) = numeric.filter(|&n| n != 1) {
        parts.push(n.to_string());
      }
      parts.extend(symbolic);
      parts.join(" × ")
    }
  }
}

// ─── HCF / LCM problems ────────────────────────────────────────────────

struct Operands {
  shown: Vec<String>,
  factorizations: Vec<Factorization>,
  sets: Vec<Vec<FactorPower>>,
}

fn factor_operands(
  problem: &str,
  config: &SolverConfig,
) -> Result<Operands, SolverError> {
  let expressions = extract_expressions(problem, config);
  if expressions.len() < 2 {
    return Err(SolverError::InsufficientOperands);
  }
  let factorizations: Vec<Factorization> =
    expressions.iter().map(|e| factor_expression(e)).collect();
  let sets = factorizations
    .iter()
    .map(|f| multiplicities(&f.factors))
    .collect();
  Ok(Operands {
    shown: expressions.iter().map(|e| format_math(e)).collect(),
    factorizations,
    sets,
  })
}

fn factorization_steps(operands: &Operands, steps: &mut Vec<String>) {
  steps.push("ধাপ ১: প্রতিটি রাশিকে উৎপাদকে বিশ্লেষণ করি".to_string());
  for (shown, factorization) in
    operands.shown.iter().zip(&operands.factorizations)
  {
    steps.push(format!("{shown} = {}", factorization.display()));
    for method in &factorization.methods {
      steps.push(format!("   {}", method.note()));
    }
  }
  steps.push(String::new());
}

fn counts_line(base: &Factor, sets: &[Vec<FactorPower>]) -> String {
  let key = base.key();
  sets
    .iter()
    .enumerate()
    .map(|(i, s)| format!("রাশি {}: ঘাত {}", i + 1, count_of(s, &key)))
    .collect::<Vec<_>>()
    .join(", ")
}

/// Highest common factor of the operands found in `problem`.
pub fn solve_hcf(
  problem: &str,
  config: &SolverConfig,
) -> Result<Solution, SolverError> {
  let operands = factor_operands(problem, config)?;
  let common = common_factors(&operands.sets);
  trace!(common = ?common, "hcf factors");

  let mut steps = vec![
    format!("বীজগাণিতিক গসাগু নির্ণয়: {}", operands.shown.join(", ")),
    String::new(),
  ];
  factorization_steps(&operands, &mut steps);

  steps.push("ধাপ ২: সাধারণ উৎপাদক খুঁজে বের করি".to_string());
  if common.is_empty() {
    steps.push("কোনো সাধারণ উৎপাদক নেই (রাশিগুলো সহমৌলিক)".to_string());
  }
  for (base, min) in &common {
    steps.push(format!(
      "  {} → {} → সর্বনিম্ন ঘাত {min}",
      power_display(base, 1),
      counts_line(base, &operands.sets)
    ));
  }
  steps.push(String::new());

  let value = compose(&common);
  steps.push(format!("∴ গসাগু = {value}"));

  Ok(Solution::new(
    ProblemType::Hcf,
    "গসাগু",
    steps,
    format!("গসাগু = {value}"),
  ))
}

/// Lowest common multiple of the operands found in `problem`.
pub fn solve_lcm(
  problem: &str,
  config: &SolverConfig,
) -> Result<Solution, SolverError> {
  let operands = factor_operands(problem, config)?;
  let all = all_factors(&operands.sets);
  trace!(all = ?all, "lcm factors");

  let mut steps = vec![
    format!("বীজগাণিতিক লসাগু নির্ণয়: {}", operands.shown.join(", ")),
    String::new(),
  ];
  factorization_steps(&operands, &mut steps);

  steps.push("ধাপ ২: সব উৎপাদকের সর্বোচ্চ ঘাত নিই".to_string());
  steps.push("মনে রাখি: লসাগু = সব আলাদা উৎপাদকের সর্বোচ্চ ঘাত".to_string());
  for (base, max) in &all {
    steps.push(format!(
      "  {} → {} → সর্বোচ্চ ঘাত {max}",
      power_display(base, 1),
      counts_line(base, &operands.sets)
    ));
  }
  steps.push(String::new());

  let value = compose(&all);
  steps.push(format!("∴ লসাগু = {value}"));

  Ok(Solution::new(
    ProblemType::Lcm,
    "লসাগু",
    steps,
    format!("লসাগু = {value}"),
  ))
}
