use super::*;
use pretty_assertions::assert_eq;

mod solve_quadratic {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn two_real_roots() {
    let solution = solve("x^2 + 5x + 6 = 0").unwrap();
    assert_eq!(solution.problem_type, ProblemType::Quadratic);
    assert_eq!(solution.solution, "x₁ = -2.000, x₂ = -3.000");
    assert_relative_eq!(solution.roots[0], -2.0);
    assert_relative_eq!(solution.roots[1], -3.0);
  }

  #[test]
  fn steps_cite_the_discriminant() {
    let solution = solve("x^2 + 5x + 6 = 0").unwrap();
    assert_eq!(solution.steps[0], "x² + 5x + 6 = 0");
    assert_eq!(solution.steps[1], "এখানে a = 1, b = 5, c = 6");
    assert_eq!(
      solution.steps[2],
      "বিচারক (D) = b² - 4ac = (5)² - 4×(1)×(6) = 1"
    );
  }

  #[test]
  fn unicode_superscript_input() {
    let solution = solve("x² - 5x + 6 = 0").unwrap();
    assert_eq!(solution.solution, "x₁ = 3.000, x₂ = 2.000");
  }

  #[test]
  fn double_root() {
    let solution = solve("x^2 - 6x + 9 = 0").unwrap();
    assert_eq!(solution.solution, "x = 3 (দ্বিগুণ মূল)");
    assert_eq!(solution.roots, vec![3.0]);
  }

  #[test]
  fn no_real_roots() {
    let solution = solve("x^2 + 1 = 0").unwrap();
    assert_eq!(solution.solution, bijganit::NO_REAL_SOLUTION);
    assert!(solution.roots.is_empty());
  }

  #[test]
  fn irrational_roots_use_precision() {
    let config = SolverConfig {
      precision: 2,
      ..SolverConfig::default()
    };
    let solution = solve_with_config("x^2 - 2 = 0", &config).unwrap();
    assert_eq!(solution.solution, "x₁ = 1.41, x₂ = -1.41");
    assert_relative_eq!(solution.roots[0], 2f64.sqrt(), epsilon = 1e-12);
  }

  #[test]
  fn roots_satisfy_the_equation() {
    let solution = solve("2x^2 - 7x + 3 = 0").unwrap();
    for x in solution.roots {
      assert_relative_eq!(2.0 * x * x - 7.0 * x + 3.0, 0.0, epsilon = 1e-9);
    }
  }

  #[test]
  fn other_side_must_be_zero() {
    assert!(matches!(
      solve("x^2 + 5x + 6 = 1"),
      Err(SolverError::UnsupportedQuadraticForm)
    ));
  }

  #[test]
  fn huge_exponent_is_an_error_not_a_crash() {
    assert!(matches!(
      solve("x^2 + x^4294967295x = 0"),
      Err(SolverError::UnsupportedQuadraticForm)
    ));
  }
}

mod vieta {
  use super::*;
  use pretty_assertions::assert_eq;

  fn equation(a: i32, b: i32, c: i32) -> String {
    let lead = match a {
      1 => "x^2".to_string(),
      -1 => "-x^2".to_string(),
      a => format!("{a}x^2"),
    };
    let mut text = lead;
    if b != 0 {
      let sign = if b < 0 { '-' } else { '+' };
      text.push_str(&format!(" {sign} {}x", b.abs()));
    }
    if c != 0 {
      let sign = if c < 0 { '-' } else { '+' };
      text.push_str(&format!(" {sign} {}", c.abs()));
    }
    format!("{text} = 0")
  }

  #[test]
  fn root_sum_and_product() {
    let cases = [
      (1, 5, 6),
      (2, -7, 3),
      (1, 0, -2),
      (3, 2, -1),
      (-1, 4, 5),
      (1, -3, -10),
      (4, 1, -3),
    ];
    for (a, b, c) in cases {
      let text = equation(a, b, c);
      let solution = solve(&text).unwrap();
      assert_eq!(solution.roots.len(), 2, "{text}");
      let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
      assert_relative_eq!(solution.roots[0] + solution.roots[1], -b / a, epsilon = 1e-9);
      assert_relative_eq!(solution.roots[0] * solution.roots[1], c / a, epsilon = 1e-9);
    }
  }
}
