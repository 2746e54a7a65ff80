//! Display formatting for caret-notation math text.
//!
//! `format_math` turns `3*x^2 + x*x` into `3x² + x²`. It never strips
//! whitespace and applying it twice changes nothing.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static DOUBLE_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*").unwrap());
static CARET_POWER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^([0-9]+)").unwrap());
static LETTER_PRODUCT: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"[a-zA-Z][⁰¹²³⁴⁵⁶⁷⁸⁹]*(?:\*[a-zA-Z][⁰¹²³⁴⁵⁶⁷⁸⁹]*)+").unwrap()
});
static NUMBER_TIMES_LETTER: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"([0-9]+)\*([a-zA-Z])").unwrap());

const SUPERSCRIPT_DIGITS: [char; 10] =
  ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Superscript rendering of a non-negative integer, digit by digit.
pub fn superscript(n: u32) -> String {
  n.to_string()
    .chars()
    .filter_map(|c| c.to_digit(10))
    .map(|d| SUPERSCRIPT_DIGITS[d as usize])
    .collect()
}

/// Digit value of a superscript character.
pub fn superscript_value(c: char) -> Option<u32> {
  SUPERSCRIPT_DIGITS
    .iter()
    .position(|&s| s == c)
    .map(|d| d as u32)
}

/// Rewrite superscript runs back to caret notation: `x²` → `x^2`.
pub fn normalize_superscripts(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut digits = String::new();
  for c in text.chars() {
    match superscript_value(c) {
      Some(d) => digits.push(char::from(b'0' + d as u8)),
      None => {
        if !digits.is_empty() {
          out.push('^');
          out.push_str(&digits);
          digits.clear();
        }
        out.push(c);
      }
    }
  }
  if !digits.is_empty() {
    out.push('^');
    out.push_str(&digits);
  }
  out
}

/// Formatter for display: superscripts, juxtaposed coefficients, `×`.
pub fn format_math(expr: &str) -> String {
  let text = DOUBLE_STAR.replace_all(expr, "^");
  let text = CARET_POWER.replace_all(&text, |caps: &Captures| {
    caps[1]
      .chars()
      .filter_map(|c| c.to_digit(10))
      .map(|d| SUPERSCRIPT_DIGITS[d as usize])
      .collect::<String>()
  });
  let text = LETTER_PRODUCT
    .replace_all(&text, |caps: &Captures| collapse_letter_run(&caps[0]));
  let text = NUMBER_TIMES_LETTER.replace_all(&text, "$1$2");
  text.replace('*', "×")
}

/// `x*x²*y` → `x³*y`: adjacent factors of the same letter add exponents.
fn collapse_letter_run(run: &str) -> String {
  let mut factors: Vec<(char, u32)> = Vec::new();
  for factor in run.split('*') {
    let mut chars = factor.chars();
    let Some(letter) = chars.next() else {
      continue;
    };
    let exponent = chars
      .try_fold(0u32, |acc, c| {
        acc.checked_mul(10)?.checked_add(superscript_value(c)?)
      })
      .filter(|&e| e > 0)
      .unwrap_or(1);
    match factors.last_mut() {
      Some((last, total)) if *last == letter => {
        *total = total.saturating_add(exponent)
      }
      _ => factors.push((letter, exponent)),
    }
  }
  factors
    .iter()
    .map(|&(letter, e)| {
      if e == 1 {
        letter.to_string()
      } else {
        format!("{letter}{}", superscript(e))
      }
    })
    .collect::<Vec<_>>()
    .join("*")
}

/// Shortest decimal rendering: integers without a fractional part, no `-0`.
pub fn format_number(value: f64) -> String {
  if value == 0.0 {
    return "0".to_string();
  }
  if value.fract() == 0.0 && value.abs() < 1e15 {
    return format!("{}", value as i64);
  }
  format!("{value}")
}

/// Fixed-point rendering with `places` decimals, no `-0.000`.
pub fn format_fixed(value: f64, places: usize) -> String {
  let rendered = format!("{value:.places$}");
  if rendered.starts_with('-') && rendered[1..].chars().all(|c| c == '0' || c == '.')
  {
    rendered[1..].to_string()
  } else {
    rendered
  }
}
