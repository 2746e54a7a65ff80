//! Pull algebraic operands out of free-form mixed-language text.
//!
//! Three passes, most specific first: whole polynomials, single terms, bare
//! integers. A later match that lies inside an earlier one is dropped, so
//! `x^2-4` is never followed by its own `x^2`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use crate::config::SolverConfig;
use crate::format::normalize_superscripts;

static MULTI_TERM: Lazy<Regex> = Lazy::new(|| {
  Regex::new(
    r"(?i)\b[0-9]*([a-z](\^?[0-9]+)?)+([+-][0-9]*([a-z](\^?[0-9]+)?)+)*([+-][0-9]+)?\b",
  )
  .unwrap()
});
static SINGLE_TERM: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)\b[0-9]*([a-z](\^?[0-9]+)?)+\b").unwrap());
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[0-9]+\b").unwrap());

static SPACED_OPERATOR: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\s*([+\-^])\s*").unwrap());

static ALLOWED_CHARS: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[a-z0-9+\-^()]+$").unwrap());

/// Operands found in `text`, in discovery order, at most
/// `config.max_expressions` of them.
pub fn extract_expressions(text: &str, config: &SolverConfig) -> Vec<String> {
  let compact = prepare(text);
  let mut accepted: Vec<(usize, usize, String)> = Vec::new();

  for pattern in [&*MULTI_TERM, &*SINGLE_TERM, &*INTEGER] {
    for found in pattern.find_iter(&compact) {
      let candidate = found.as_str().to_lowercase();
      let (start, end) = (found.start(), found.end());
      let inside_earlier = accepted.iter().any(|(s, e, _)| start >= *s && end <= *e);
      let duplicate = accepted.iter().any(|(_, _, c)| *c == candidate);
      if inside_earlier
        || duplicate
        || has_word_term(&candidate)
        || !is_valid_expression(&candidate)
      {
        continue;
      }
      trace!(candidate = %candidate, start, end, "accepted operand");
      accepted.push((start, end, candidate));
    }
  }

  accepted.sort_by_key(|(start, _, _)| *start);
  accepted
    .into_iter()
    .map(|(_, _, c)| c)
    .take(config.max_expressions)
    .collect()
}

/// Superscripts back to carets, non-ASCII letters blanked out (so Bengali
/// words act as separators) and spaces around `+`, `-`, `^` removed.
fn prepare(text: &str) -> String {
  let ascii: String = normalize_superscripts(text)
    .chars()
    .map(|c| if c.is_ascii() { c } else { ' ' })
    .collect();
  SPACED_OPERATOR.replace_all(&ascii, "$1").into_owned()
}

/// A term of two or more letters with no digit or caret, such as `hcf` or
/// `plus`. Monomials like `xy` need a coefficient or exponent to count.
fn has_word_term(candidate: &str) -> bool {
  candidate.split(['+', '-']).any(|term| {
    term.chars().filter(char::is_ascii_alphabetic).count() > 1
      && !term.chars().any(|c| c.is_ascii_digit() || c == '^')
  })
}

/// A pure integer, or letters/digits/operators that neither start nor end
/// with an operator.
pub fn is_valid_expression(candidate: &str) -> bool {
  if candidate.is_empty() {
    return false;
  }
  if candidate.chars().all(|c| c.is_ascii_digit()) {
    return true;
  }
  if !candidate.chars().any(|c| c.is_ascii_alphabetic()) {
    return false;
  }
  if !ALLOWED_CHARS.is_match(candidate) {
    return false;
  }
  let bad_edge = |c: Option<char>| matches!(c, Some('+' | '-' | '^'));
  !(bad_edge(candidate.chars().next()) || bad_edge(candidate.chars().last()))
}
