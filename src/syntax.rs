//! Term model: monomials, polynomials and their caret-notation text.
//!
//! Operands are parsed with the `algebra.pest` grammar. Like terms share a
//! `(variable, power)` key and are combined on construction; non-constant
//! terms keep first-encounter order and the constant is rendered last.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use pest::iterators::Pair;
use pest::Parser;

use crate::format::superscript_value;
use crate::{AlgebraParser, Rule, SolverError};

/// A single monomial `coefficient · variable^power`.
///
/// `variable` is a canonical key: one letter (`x`), or for mixed monomials
/// the sorted letters with their exponents (`x^2y`) and `power == 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
  pub coefficient: i128,
  pub variable: Option<String>,
  pub power: u32,
}

impl Term {
  pub fn constant(value: i128) -> Self {
    Term {
      coefficient: value,
      variable: None,
      power: 0,
    }
  }

  pub fn monomial(coefficient: i128, variable: char, power: u32) -> Self {
    let mut exponents = BTreeMap::new();
    exponents.insert(variable, power);
    Term::from_exponents(coefficient, &exponents)
  }

  /// Build a term from a letter → exponent map. Zero exponents are dropped.
  pub fn from_exponents(
    coefficient: i128,
    exponents: &BTreeMap<char, u32>,
  ) -> Self {
    let letters: Vec<(char, u32)> = exponents
      .iter()
      .filter(|&(_, &e)| e > 0)
      .map(|(&c, &e)| (c, e))
      .collect();
    match letters.as_slice() {
      [] => Term::constant(coefficient),
      [(letter, power)] => Term {
        coefficient,
        variable: Some(letter.to_string()),
        power: *power,
      },
      _ => {
        let key = letters
          .iter()
          .map(|(l, e)| {
            if *e == 1 {
              l.to_string()
            } else {
              format!("{l}^{e}")
            }
          })
          .collect::<String>();
        Term {
          coefficient,
          variable: Some(key),
          power: 1,
        }
      }
    }
  }

  pub fn is_constant(&self) -> bool {
    self.variable.is_none()
  }

  /// Like terms have equal keys.
  pub fn key(&self) -> (Option<String>, u32) {
    match &self.variable {
      None => (None, 0),
      Some(v) => (Some(v.clone()), self.power),
    }
  }

  /// Letter → exponent map of the variable part.
  pub fn exponents(&self) -> BTreeMap<char, u32> {
    let mut map = BTreeMap::new();
    if let Some(variable) = &self.variable {
      for (letter, exponent) in split_variable_key(variable) {
        let entry = map.entry(letter).or_insert(0u32);
        *entry = entry.saturating_add(exponent.saturating_mul(self.power));
      }
    }
    map
  }

  /// Total degree.
  pub fn degree(&self) -> u32 {
    self
      .exponents()
      .values()
      .fold(0u32, |acc, &e| acc.saturating_add(e))
  }

  pub fn times(&self, other: &Term) -> Term {
    let mut exponents = self.exponents();
    for (letter, exponent) in other.exponents() {
      let entry = exponents.entry(letter).or_insert(0);
      *entry = entry.saturating_add(exponent);
    }
    Term::from_exponents(
      self.coefficient.saturating_mul(other.coefficient),
      &exponents,
    )
  }

  pub fn scaled(&self, factor: i128) -> Term {
    Term {
      coefficient: self.coefficient.saturating_mul(factor),
      ..self.clone()
    }
  }

  pub fn negated(&self) -> Term {
    self.scaled(-1)
  }

  pub fn abs(&self) -> Term {
    Term {
      coefficient: self.coefficient.abs(),
      ..self.clone()
    }
  }

  /// Variable part alone: `x^2` for `-3x^2`, empty for constants.
  pub fn variable_part(&self) -> String {
    match &self.variable {
      None => String::new(),
      Some(v) if self.power == 1 => v.clone(),
      Some(v) => format!("{v}^{}", self.power),
    }
  }

  /// Value with every letter replaced by `value(letter)`.
  pub fn evaluate(&self, value: impl Fn(char) -> f64) -> f64 {
    self
      .exponents()
      .iter()
      .fold(self.coefficient as f64, |acc, (&letter, &e)| {
        acc * value(letter).powi(i32::try_from(e).unwrap_or(i32::MAX))
      })
  }
}

impl fmt::Display for Term {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let vars = self.variable_part();
    if vars.is_empty() {
      return write!(f, "{}", self.coefficient);
    }
    match self.coefficient {
      1 => write!(f, "{vars}"),
      -1 => write!(f, "-{vars}"),
      c => write!(f, "{c}{vars}"),
    }
  }
}

/// `x^2y` → `[('x', 2), ('y', 1)]`
fn split_variable_key(key: &str) -> Vec<(char, u32)> {
  let mut out = Vec::new();
  let mut chars = key.chars().peekable();
  while let Some(letter) = chars.next() {
    let mut exponent = 1;
    if chars.peek() == Some(&'^') {
      chars.next();
      let mut digits = String::new();
      while let Some(d) = chars.peek().copied().filter(char::is_ascii_digit) {
        digits.push(d);
        chars.next();
      }
      exponent = digits.parse().unwrap_or(1);
    }
    out.push((letter, exponent));
  }
  out
}

/// Largest exponent accepted on a single letter of a typed operand, and the
/// largest degree expanded into dense coefficients.
pub const MAX_DENSE_DEGREE: u32 = 64;

/// Sum of terms with like terms combined and zero terms dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
  terms: Vec<Term>,
}

impl Polynomial {
  pub fn zero() -> Self {
    Polynomial::default()
  }

  pub fn constant(value: i128) -> Self {
    Polynomial::from_terms([Term::constant(value)])
  }

  pub fn from_terms<I: IntoIterator<Item = Term>>(terms: I) -> Self {
    let mut combined: Vec<Term> = Vec::new();
    let mut constant: i128 = 0;
    for term in terms {
      if term.is_constant() {
        constant = constant.saturating_add(term.coefficient);
        continue;
      }
      let key = term.key();
      match combined.iter_mut().find(|t| t.key() == key) {
        Some(existing) => {
          existing.coefficient =
            existing.coefficient.saturating_add(term.coefficient)
        }
        None => combined.push(term),
      }
    }
    combined.retain(|t| t.coefficient != 0);
    if constant != 0 {
      combined.push(Term::constant(constant));
    }
    Polynomial { terms: combined }
  }

  /// Dense coefficients (index = power) back to a polynomial, highest power
  /// first.
  pub fn from_dense(coefficients: &[i128], variable: char) -> Self {
    Polynomial::from_terms(
      coefficients
        .iter()
        .enumerate()
        .rev()
        .map(|(power, &c)| Term::monomial(c, variable, power as u32)),
    )
  }

  pub fn parse(text: &str) -> Result<Self, SolverError> {
    Ok(Polynomial::from_terms(parse_terms(text)?))
  }

  pub fn terms(&self) -> &[Term] {
    &self.terms
  }

  pub fn len(&self) -> usize {
    self.terms.len()
  }

  pub fn is_empty(&self) -> bool {
    self.terms.is_empty()
  }

  pub fn is_zero(&self) -> bool {
    self.terms.is_empty()
  }

  pub fn constant_term(&self) -> i128 {
    self
      .terms
      .iter()
      .filter(|t| t.is_constant())
      .map(|t| t.coefficient)
      .sum()
  }

  pub fn plus(&self, other: &Polynomial) -> Polynomial {
    Polynomial::from_terms(self.terms.iter().chain(&other.terms).cloned())
  }

  pub fn minus(&self, other: &Polynomial) -> Polynomial {
    Polynomial::from_terms(
      self
        .terms
        .iter()
        .cloned()
        .chain(other.terms.iter().map(Term::negated)),
    )
  }

  pub fn times(&self, other: &Polynomial) -> Polynomial {
    Polynomial::from_terms(
      self
        .terms
        .iter()
        .flat_map(|a| other.terms.iter().map(move |b| a.times(b))),
    )
  }

  pub fn pow(&self, exponent: u32) -> Polynomial {
    (0..exponent).fold(Polynomial::constant(1), |acc, _| acc.times(self))
  }

  pub fn variables(&self) -> BTreeSet<char> {
    self.terms.iter().flat_map(|t| t.exponents().into_keys()).collect()
  }

  /// The only letter used, if exactly one appears.
  pub fn single_variable(&self) -> Option<char> {
    let vars = self.variables();
    if vars.len() == 1 {
      vars.into_iter().next()
    } else {
      None
    }
  }

  pub fn degree(&self) -> u32 {
    self.terms.iter().map(Term::degree).max().unwrap_or(0)
  }

  /// Dense coefficients in `variable`, index = power. `None` when another
  /// letter appears.
  pub fn dense_coefficients(&self, variable: char) -> Option<Vec<i128>> {
    if self.degree() > MAX_DENSE_DEGREE {
      return None;
    }
    let mut coeffs = vec![0i128; self.degree() as usize + 1];
    for term in &self.terms {
      let exponents = term.exponents();
      if exponents.keys().any(|&l| l != variable) {
        return None;
      }
      let power = exponents.get(&variable).copied().unwrap_or(0);
      coeffs[power as usize] += term.coefficient;
    }
    Some(coeffs)
  }

  /// Value at `variable = x`; `None` when other letters appear.
  pub fn evaluate(&self, variable: char, x: f64) -> Option<f64> {
    if self.variables().iter().any(|&l| l != variable) {
      return None;
    }
    Some(self.terms.iter().map(|t| t.evaluate(|_| x)).sum())
  }

  /// Caret notation with spaced operators: `x^2 - 6x + 9`.
  pub fn to_spaced_string(&self) -> String {
    join_terms(&self.terms, " + ", " - ")
  }
}

impl fmt::Display for Polynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&join_terms(&self.terms, "+", "-"))
  }
}

/// Terms as written, without combining: `3x + 2x - x`.
pub fn spaced_terms(terms: &[Term]) -> String {
  join_terms(terms, " + ", " - ")
}

fn join_terms(terms: &[Term], plus: &str, minus: &str) -> String {
  if terms.is_empty() {
    return "0".to_string();
  }
  let mut out = String::new();
  for (i, term) in terms.iter().enumerate() {
    if i == 0 {
      out.push_str(&term.to_string());
    } else if term.coefficient < 0 {
      out.push_str(minus);
      out.push_str(&term.abs().to_string());
    } else {
      out.push_str(plus);
      out.push_str(&term.to_string());
    }
  }
  out
}

// ─── Parsing ──────────────────────────────────────────────────────────────

/// Whitespace removed, lowercased, one enclosing pair of parentheses
/// stripped.
pub fn normalize_operand(text: &str) -> String {
  let compact: String = text
    .chars()
    .filter(|c| !c.is_whitespace())
    .collect::<String>()
    .to_lowercase();
  strip_outer_parens(&compact).to_string()
}

/// Strip one pair of parentheses only when it wraps the whole text, so
/// `(x+1)(x+2)` is left alone.
pub fn strip_outer_parens(text: &str) -> &str {
  if !(text.starts_with('(') && text.ends_with(')')) {
    return text;
  }
  let mut depth = 0i32;
  for (i, c) in text.char_indices() {
    match c {
      '(' => depth += 1,
      ')' => {
        depth -= 1;
        if depth == 0 && i != text.len() - 1 {
          return text;
        }
      }
      _ => {}
    }
  }
  &text[1..text.len() - 1]
}

/// Signed terms in written order, without combining like terms.
pub fn parse_terms(text: &str) -> Result<Vec<Term>, SolverError> {
  let cleaned = normalize_operand(text);
  let mut pairs =
    AlgebraParser::parse(Rule::Expression, &cleaned).map_err(Box::new)?;
  let expression = pairs
    .next()
    .ok_or_else(|| SolverError::UnsupportedExpression(text.to_string()))?;

  let mut terms = Vec::new();
  for pair in expression.into_inner() {
    match pair.as_rule() {
      Rule::LeadingTerm | Rule::TrailingTerm => terms.push(signed_term(pair)?),
      _ => {}
    }
  }
  Ok(terms)
}

fn signed_term(pair: Pair<'_, Rule>) -> Result<Term, SolverError> {
  let source = pair.as_str().to_string();
  let mut negative = false;
  let mut term = None;
  for inner in pair.into_inner() {
    match inner.as_rule() {
      Rule::Sign => negative = inner.as_str() == "-",
      Rule::Term => term = Some(term_from_pair(inner)?),
      _ => {}
    }
  }
  let term = term.ok_or(SolverError::UnsupportedExpression(source))?;
  Ok(if negative { term.negated() } else { term })
}

fn term_from_pair(pair: Pair<'_, Rule>) -> Result<Term, SolverError> {
  let source = pair.as_str().to_string();
  let mut coefficient: i128 = 1;
  let mut exponents: BTreeMap<char, u32> = BTreeMap::new();

  for inner in pair.into_inner() {
    match inner.as_rule() {
      Rule::Coefficient => {
        coefficient = inner
          .as_str()
          .parse()
          .map_err(|_| SolverError::UnsupportedExpression(source.clone()))?;
      }
      Rule::Factor => {
        let mut parts = inner.into_inner();
        let letter = parts
          .next()
          .and_then(|l| l.as_str().chars().next())
          .ok_or_else(|| SolverError::UnsupportedExpression(source.clone()))?;
        let power = match parts.next() {
          Some(exponent) => exponent_value(exponent)
            .ok_or_else(|| SolverError::UnsupportedExpression(source.clone()))?,
          None => 1,
        };
        let total = exponents.entry(letter).or_insert(0);
        *total = total
          .checked_add(power)
          .filter(|&t| t <= MAX_DENSE_DEGREE)
          .ok_or_else(|| SolverError::UnsupportedExpression(source.clone()))?;
      }
      _ => {}
    }
  }
  Ok(Term::from_exponents(coefficient, &exponents))
}

/// Exponent of one letter, `None` above `MAX_DENSE_DEGREE`.
fn exponent_value(pair: Pair<'_, Rule>) -> Option<u32> {
  let inner = pair.into_inner().next()?;
  let value: u32 = match inner.as_rule() {
    Rule::Power => inner.as_str().parse().ok(),
    Rule::SuperscriptPower => inner
      .as_str()
      .chars()
      .try_fold(0u32, |acc, c| {
        acc.checked_mul(10)?.checked_add(superscript_value(c)?)
      }),
    _ => None,
  }?;
  (value <= MAX_DENSE_DEGREE).then_some(value)
}
