use std::fmt;

use tracing::trace;

use crate::config::SolverConfig;
use crate::extract::extract_expressions;
use crate::format::format_math;
use crate::syntax::{normalize_operand, Polynomial};
use crate::{ProblemType, Solution, SolverError};

/// Trial division stops at this divisor; what is left stays one factor.
const TRIAL_DIVISION_LIMIT: i128 = 1_000_000;

/// One entry of a factor multiset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factor {
  /// Integer factor, usually a prime.
  Number(i128),
  /// Power-tagged variable `x^n`.
  Power { variable: char, power: u32 },
  /// Parenthesized polynomial, stored normalized and without parentheses.
  Group(String),
}

impl Factor {
  pub fn group(text: &str) -> Self {
    Factor::Group(normalize_operand(text))
  }

  /// Comparison key: `(x+2)`, ` x + 2 ` and `x+2` share one.
  pub fn key(&self) -> String {
    match self {
      Factor::Number(n) => n.to_string(),
      Factor::Power { variable, power: 1 } => variable.to_string(),
      Factor::Power { variable, power } => format!("{variable}^{power}"),
      Factor::Group(inner) => inner.clone(),
    }
  }

  pub fn is_numeric(&self) -> bool {
    matches!(self, Factor::Number(_))
  }

  pub fn to_polynomial(&self) -> Result<Polynomial, SolverError> {
    match self {
      Factor::Number(n) => Ok(Polynomial::constant(*n)),
      Factor::Power { .. } | Factor::Group(_) => Polynomial::parse(&self.key()),
    }
  }
}

impl fmt::Display for Factor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Factor::Group(inner) => write!(f, "({inner})"),
      other => f.write_str(&other.key()),
    }
  }
}

/// Which rule produced a factorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorMethod {
  Prime,
  Monomial,
  DifferenceOfSquares,
  PerfectSquare,
  SplitMiddleTerm,
  CommonFactor,
  Irreducible,
}

impl FactorMethod {
  /// Teaching note shown under the factorization.
  pub fn note(&self) -> &'static str {
    match self {
      FactorMethod::Prime => "(মৌলিক উৎপাদকে বিশ্লেষণ)",
      FactorMethod::Monomial => "(সহগকে মৌলিক উৎপাদকে ও চলককে ঘাত আকারে লেখা হয়েছে)",
      FactorMethod::DifferenceOfSquares => {
        "(বর্গের বিয়োগ সূত্র: a² - b² = (a-b)(a+b))"
      }
      FactorMethod::PerfectSquare => "(পূর্ণবর্গ সূত্র: a² ± 2ab + b² = (a ± b)²)",
      FactorMethod::SplitMiddleTerm => {
        "(মধ্যপদ বিশ্লেষণ: x² + (p+q)x + pq = (x+p)(x+q))"
      }
      FactorMethod::CommonFactor => "(সাধারণ উৎপাদক বের করা হয়েছে)",
      FactorMethod::Irreducible => "(এই রাশিটি আর ভাঙা যায় না)",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
  pub factors: Vec<Factor>,
  pub methods: Vec<FactorMethod>,
}

impl Factorization {
  fn single(factors: Vec<Factor>, method: FactorMethod) -> Self {
    Factorization {
      factors,
      methods: vec![method],
    }
  }

  fn irreducible(cleaned: &str) -> Self {
    Factorization::single(
      vec![Factor::Group(cleaned.to_string())],
      FactorMethod::Irreducible,
    )
  }

  /// Factors rendered for display, joined with `×`.
  pub fn display(&self) -> String {
    self
      .factors
      .iter()
      .map(|f| format_math(&f.to_string()))
      .collect::<Vec<_>>()
      .join(" × ")
  }
}

// ─── Factor ────────────────────────────────────────────────────────────

/// Factor multiset of `expr`. Never fails: unknown shapes come back as one
/// irreducible group.
pub fn factor(expr: &str) -> Vec<Factor> {
  factor_expression(expr).factors
}

/// Factor `expr`, recording which rules applied.
///
/// Rules in order: integer primes, monomials, difference of squares,
/// perfect-square trinomial, monic quadratic split, common monomial
/// extraction (then the quadratic rules again on what remains).
pub fn factor_expression(expr: &str) -> Factorization {
  let cleaned = normalize_operand(expr);
  let result = factor_cleaned(&cleaned);
  trace!(expr = %cleaned, factors = ?result.factors, methods = ?result.methods, "factored");
  result
}

fn factor_cleaned(cleaned: &str) -> Factorization {
  if !cleaned.is_empty() && cleaned.chars().all(|c| c.is_ascii_digit()) {
    return match cleaned.parse::<i128>() {
      Ok(n) if n <= 1 => {
        Factorization::single(vec![Factor::Number(n)], FactorMethod::Prime)
      }
      Ok(n) => Factorization::single(
        prime_factors(n).into_iter().map(Factor::Number).collect(),
        FactorMethod::Prime,
      ),
      Err(_) => Factorization::irreducible(cleaned),
    };
  }

  let Ok(polynomial) = Polynomial::parse(cleaned) else {
    return Factorization::irreducible(cleaned);
  };
  if polynomial.is_zero() {
    return Factorization::irreducible(cleaned);
  }
  if polynomial.len() == 1 {
    return factor_monomial(&polynomial);
  }

  let Some((variable, coeffs)) = polynomial
    .single_variable()
    .and_then(|v| polynomial.dense_coefficients(v).map(|c| (v, c)))
  else {
    return Factorization::irreducible(cleaned);
  };

  if let Some((factors, method)) = quadratic_forms(&coeffs, variable) {
    return Factorization::single(factors, method);
  }
  common_monomial(&coeffs, variable)
    .unwrap_or_else(|| Factorization::irreducible(cleaned))
}

/// `c·x^a·y^b` → sign, primes of `|c|`, then each letter with its power.
fn factor_monomial(polynomial: &Polynomial) -> Factorization {
  let mut factors = Vec::new();
  let Some(term) = polynomial.terms().first() else {
    return Factorization::single(factors, FactorMethod::Monomial);
  };
  if term.coefficient < 0 {
    factors.push(Factor::Number(-1));
  }
  let magnitude = term.coefficient.abs();
  if magnitude > 1 {
    factors.extend(prime_factors(magnitude).into_iter().map(Factor::Number));
  }
  for (variable, power) in term.exponents() {
    factors.push(Factor::Power { variable, power });
  }
  if factors.is_empty() {
    factors.push(Factor::Number(1));
  }
  Factorization::single(factors, FactorMethod::Monomial)
}

/// Degree-2 patterns on dense coefficients `[c, b, a]`.
fn quadratic_forms(
  coeffs: &[i128],
  variable: char,
) -> Option<(Vec<Factor>, FactorMethod)> {
  let &[c, b, a] = coeffs else {
    return None;
  };

  if b == 0 && a > 0 && c < 0 {
    if let (Some(ra), Some(rc)) = (exact_sqrt(a), exact_sqrt(-c)) {
      return Some((
        vec![linear(ra, -rc, variable), linear(ra, rc, variable)],
        FactorMethod::DifferenceOfSquares,
      ));
    }
  }

  if a == 1 && b != 0 && c > 0 {
    if let Some(m) = exact_sqrt(c) {
      if b.abs() == 2 * m {
        let root = linear(1, m * b.signum(), variable);
        return Some((vec![root.clone(), root], FactorMethod::PerfectSquare));
      }
    }
  }

  // (x+p)(x+q) with p+q = b, pq = c: p and q are the roots of
  // t² - bt + c, smaller one first.
  if a == 1 && c != 0 {
    let discriminant = b.checked_mul(b)?.checked_sub(c.checked_mul(4)?)?;
    let s = exact_sqrt(discriminant)?;
    if (b - s) % 2 == 0 {
      let (p, q) = ((b - s) / 2, (b + s) / 2);
      return Some((
        vec![linear(1, p, variable), linear(1, q, variable)],
        FactorMethod::SplitMiddleTerm,
      ));
    }
  }

  None
}

/// Pull out the coefficient GCD and the lowest power of the variable, then
/// try the quadratic patterns on what is left.
fn common_monomial(coeffs: &[i128], variable: char) -> Option<Factorization> {
  let lowest = coeffs.iter().position(|&c| c != 0)?;
  let gcd = coeffs.iter().copied().filter(|&c| c != 0).fold(0, gcd_i128);
  if gcd <= 1 && lowest == 0 {
    return None;
  }
  trace!(?gcd, lowest, "common monomial");

  let reduced: Vec<i128> = coeffs[lowest..].iter().map(|c| c / gcd).collect();
  let mut factorization =
    Factorization::single(Vec::new(), FactorMethod::CommonFactor);
  if gcd > 1 {
    factorization.factors.push(Factor::Number(gcd));
  }
  if lowest > 0 {
    factorization.factors.push(Factor::Power {
      variable,
      power: lowest as u32,
    });
  }
  match quadratic_forms(&reduced, variable) {
    Some((inner, method)) => {
      factorization.factors.extend(inner);
      factorization.methods.push(method);
    }
    None => factorization.factors.push(Factor::Group(
      Polynomial::from_dense(&reduced, variable).to_string(),
    )),
  }
  Some(factorization)
}

/// `(k·x + m)` as a group factor.
fn linear(k: i128, m: i128, variable: char) -> Factor {
  Factor::Group(Polynomial::from_dense(&[m, k], variable).to_string())
}

/// GCD of two i128 values.
pub fn gcd_i128(a: i128, b: i128) -> i128 {
  let (mut a, mut b) = (a.abs(), b.abs());
  while b != 0 {
    let t = b;
    b = a % b;
    a = t;
  }
  a
}

/// Integer square root when `n` is a perfect square.
pub fn exact_sqrt(n: i128) -> Option<i128> {
  if n < 0 {
    return None;
  }
  let guess = (n as f64).sqrt().round() as i128;
  (guess.saturating_sub(1)..=guess.saturating_add(1))
    .find(|&r| r >= 0 && r.checked_mul(r) == Some(n))
}

/// Prime factors of `n > 1` in ascending order, with repetition.
pub fn prime_factors(mut n: i128) -> Vec<i128> {
  let mut factors = Vec::new();
  let mut divisor = 2;
  while divisor <= TRIAL_DIVISION_LIMIT && divisor * divisor <= n {
    while n % divisor == 0 {
      factors.push(divisor);
      n /= divisor;
    }
    divisor += if divisor == 2 { 1 } else { 2 };
  }
  if n > 1 {
    factors.push(n);
  }
  factors
}

// ─── Factorization problems ────────────────────────────────────────────

/// Factor the first operand found in `problem`.
pub fn solve_factorization(
  problem: &str,
  config: &SolverConfig,
) -> Result<Solution, SolverError> {
  let expressions = extract_expressions(problem, config);
  let expr = expressions.first().ok_or(SolverError::NoExpressionsFound)?;

  let factorization = factor_expression(expr);
  let shown = format_math(expr);
  let product = factorization.display();

  let mut steps = vec![format!("উৎপাদকে বিশ্লেষণ: {shown}"), String::new()];
  steps.push(format!("{shown} = {product}"));
  for method in &factorization.methods {
    steps.push(method.note().to_string());
  }

  Ok(Solution::new(
    ProblemType::Factorization,
    "উৎপাদক",
    steps,
    format!("{shown} = {product}"),
  ))
}
