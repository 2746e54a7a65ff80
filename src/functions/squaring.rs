use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::format::{format_math, normalize_superscripts};
use crate::syntax::{parse_terms, strip_outer_parens, Polynomial, Term};
use crate::{ProblemType, Solution, SolverError};

static SQUARING_WORDS: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"(?i)বর্গ\s*করো?|বর্গ\s*কর|square(\s*of)?|করো|কর|বর্গ").unwrap()
});
static SCALED_VARIABLE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^([0-9]*)([a-z])$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SquaringKind {
  Binomial,
  Trinomial,
  Number,
  Variable,
}

/// A squared expression with the formula used and the worked steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SquaringResult {
  pub original: String,
  pub steps: Vec<String>,
  /// Compact display form, e.g. `x²+6x+9`.
  pub result: String,
  pub formula: String,
  #[serde(rename = "type")]
  pub kind: SquaringKind,
}

// ─── Square ────────────────────────────────────────────────────────────

/// Square a number, a (scaled) variable, or a parenthesized binomial or
/// trinomial.
pub fn square(expression: &str) -> Result<SquaringResult, SolverError> {
  let cleaned: String = normalize_superscripts(expression)
    .chars()
    .filter(|c| !c.is_whitespace())
    .collect::<String>()
    .to_lowercase();
  let unsupported = || SolverError::UnsupportedExpression(expression.trim().to_string());

  if cleaned.is_empty() {
    return Err(SolverError::NoExpressionsFound);
  }
  if cleaned.chars().all(|c| c.is_ascii_digit()) {
    let n: i128 = cleaned.parse().map_err(|_| unsupported())?;
    return square_number(&cleaned, n).ok_or_else(unsupported);
  }
  if let Some(caps) = SCALED_VARIABLE.captures(&cleaned) {
    let letter = caps[2].chars().next().ok_or_else(unsupported)?;
    return match &caps[1] {
      "" => Ok(square_variable(letter)),
      coefficient => {
        let a: i128 = coefficient.parse().map_err(|_| unsupported())?;
        Ok(square_scaled_variable(&cleaned, a, letter))
      }
    };
  }

  let inner = strip_outer_parens(&cleaned);
  if inner.len() == cleaned.len() {
    return Err(unsupported());
  }
  let terms = parse_terms(inner).map_err(|_| unsupported())?;
  match terms.as_slice() {
    [a, b] => Ok(square_binomial(&cleaned, a, b)),
    [a, b, c] => Ok(square_trinomial(&cleaned, a, b, c)),
    _ => Err(unsupported()),
  }
}

fn square_number(original: &str, n: i128) -> Option<SquaringResult> {
  let value = n.checked_mul(n)?;
  Some(SquaringResult {
    original: original.to_string(),
    steps: vec![format!("{n}² = {n} × {n}"), format!("= {value}")],
    result: value.to_string(),
    formula: "a² = a × a".to_string(),
    kind: SquaringKind::Number,
  })
}

fn square_variable(letter: char) -> SquaringResult {
  SquaringResult {
    original: letter.to_string(),
    steps: vec![format!("{letter}² = {letter} × {letter}"), format!("= {letter}²")],
    result: format!("{letter}²"),
    formula: "x² = x × x".to_string(),
    kind: SquaringKind::Variable,
  }
}

fn square_scaled_variable(original: &str, a: i128, letter: char) -> SquaringResult {
  let squared = Term::monomial(a.saturating_mul(a), letter, 2);
  let result = format_math(&squared.to_string());
  SquaringResult {
    original: original.to_string(),
    steps: vec![
      format!("({original})² = ({a} × {letter})²"),
      format!("= {a}² × {letter}²"),
      format!("= {} × {letter}²", squared.coefficient),
      format!("= {result}"),
    ],
    result,
    formula: "(ax)² = a²x²".to_string(),
    kind: SquaringKind::Variable,
  }
}

fn shown(term: &Term) -> String {
  format_math(&term.to_string())
}

fn square_binomial(original: &str, a: &Term, b: &Term) -> SquaringResult {
  let addition = b.coefficient >= 0;
  let b_abs = b.abs();
  let formula = if addition {
    "(a + b)² = a² + 2ab + b²"
  } else {
    "(a - b)² = a² - 2ab + b²"
  };
  let expanded = Polynomial::from_terms([
    a.times(a),
    a.times(b).scaled(2),
    b.times(b),
  ]);
  let shown_original = format_math(original);
  let (sa, sb) = (shown(a), shown(&b_abs));

  SquaringResult {
    original: shown_original.clone(),
    steps: vec![
      format!("{shown_original}² এর জন্য সূত্র প্রয়োগ করি"),
      format!("সূত্র: {formula}"),
      format!("এখানে a = {sa}, b = {sb}"),
      format!(
        "{shown_original}² = ({sa})² {} 2({sa})({sb}) + ({sb})²",
        if addition { '+' } else { '-' }
      ),
      format!("= {}", format_math(&expanded.to_spaced_string())),
    ],
    result: format_math(&expanded.to_string()),
    formula: formula.to_string(),
    kind: SquaringKind::Binomial,
  }
}

fn square_trinomial(original: &str, a: &Term, b: &Term, c: &Term) -> SquaringResult {
  let formula = "(a + b + c)² = a² + b² + c² + 2ab + 2bc + 2ca";
  let expanded = Polynomial::from_terms([
    a.times(a),
    b.times(b),
    c.times(c),
    a.times(b).scaled(2),
    b.times(c).scaled(2),
    c.times(a).scaled(2),
  ]);
  let shown_original = format_math(original);
  let (sa, sb, sc) = (shown(a), shown(b), shown(c));

  SquaringResult {
    original: shown_original.clone(),
    steps: vec![
      format!("{shown_original}² এর জন্য ত্রিপদী সূত্র প্রয়োগ করি"),
      format!("সূত্র: {formula}"),
      format!("এখানে a = {sa}, b = {sb}, c = {sc}"),
      format!(
        "= ({sa})² + ({sb})² + ({sc})² + 2({sa})({sb}) + 2({sb})({sc}) + 2({sc})({sa})"
      ),
      format!("= {}", format_math(&expanded.to_spaced_string())),
    ],
    result: format_math(&expanded.to_string()),
    formula: formula.to_string(),
    kind: SquaringKind::Trinomial,
  }
}

// ─── Squaring problems ─────────────────────────────────────────────────

/// Strip the square keywords and a trailing `^2`, then square what is left.
pub fn solve_squaring(problem: &str) -> Result<Solution, SolverError> {
  let without_words = SQUARING_WORDS.replace_all(problem, "");
  let compact: String = normalize_superscripts(&without_words)
    .chars()
    .filter(|c| !c.is_whitespace())
    .collect();
  let before_equals = compact.split('=').next().unwrap_or_default();
  let expression = before_equals.strip_suffix("^2").unwrap_or(before_equals);
  debug!(expression, "squaring");

  let squared = square(expression)?;
  let spaced = squared
    .steps
    .last()
    .and_then(|s| s.strip_prefix("= "))
    .unwrap_or(&squared.result)
    .to_string();

  let mut steps = vec![
    format!("মূল রাশি: {}", squared.original),
    format!("প্রয়োগকৃত সূত্র: {}", squared.formula),
    String::new(),
  ];
  steps.extend(squared.steps.iter().cloned());

  Ok(Solution::new(
    ProblemType::Squaring,
    "বর্গ",
    steps,
    format!("{}² = {spaced}", squared.original),
  ))
}
