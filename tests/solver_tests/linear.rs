use super::*;
use pretty_assertions::assert_eq;

mod solve_linear {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn simple_addition() {
    let solution = solve("x + 7 = 15").unwrap();
    assert_eq!(solution.problem_type, ProblemType::Linear);
    assert_eq!(solution.variable, "x");
    assert_eq!(solution.solution, "x = 8");
    assert_relative_eq!(solution.roots[0], 8.0);
  }

  #[test]
  fn coefficient_and_constant() {
    let solution = solve("2x + 3 = 7").unwrap();
    assert_eq!(solution.solution, "x = 2");
    assert_eq!(
      solution.steps,
      vec![
        "2x + 3 = 7",
        "চলক এক পাশে স্থানান্তর: 2x = 4",
        "x = 4 ÷ 2",
        "x = 2",
      ]
    );
  }

  #[test]
  fn variable_on_both_sides() {
    let solution = solve("3x - 5 = 2x + 1").unwrap();
    assert_eq!(solution.solution, "x = 6");
  }

  #[test]
  fn negative_coefficient() {
    let solution = solve("-x + 4 = 10").unwrap();
    assert_eq!(solution.solution, "x = -6");
  }

  #[test]
  fn non_integer_result_is_decimal() {
    let solution = solve("3y = 1").unwrap();
    assert_eq!(solution.variable, "y");
    assert_relative_eq!(solution.roots[0], 1.0 / 3.0);
    assert!(solution.solution.starts_with("y = 0.333"));
  }

  #[test]
  fn fraction_form() {
    let solution = solve("(x+3)/2 = 5").unwrap();
    assert_eq!(solution.solution, "x = 7");
    assert!(solution.steps.contains(&"x+3 = 10".to_string()));
  }

  #[test]
  fn infinite_solutions() {
    let solution = solve("x + 1 = x + 1").unwrap();
    assert_eq!(solution.solution, bijganit::INFINITE_SOLUTIONS);
    assert!(solution.roots.is_empty());
  }

  #[test]
  fn no_solution() {
    let solution = solve("x + 1 = x + 2").unwrap();
    assert_eq!(solution.solution, bijganit::NO_SOLUTION);
    assert!(solution.roots.is_empty());
  }

  #[test]
  fn no_variable() {
    assert!(matches!(solve("5 = 5"), Err(SolverError::NoVariableFound)));
  }

  #[test]
  fn missing_equals() {
    assert!(matches!(
      solve("x + 7"),
      Err(SolverError::MalformedEquation(_))
    ));
  }

  #[test]
  fn empty_side() {
    assert!(matches!(
      solve("x + 7 ="),
      Err(SolverError::MalformedEquation(_))
    ));
  }

  #[test]
  fn same_input_same_steps() {
    assert_eq!(solve("4x - 2 = 10").unwrap(), solve("4x - 2 = 10").unwrap());
  }
}

mod linear_family {
  use super::*;
  use pretty_assertions::assert_eq;

  fn equation(a: i32, b: i32, c: i32) -> String {
    let lead = match a {
      1 => "x".to_string(),
      -1 => "-x".to_string(),
      a => format!("{a}x"),
    };
    let sign = if b < 0 { '-' } else { '+' };
    format!("{lead} {sign} {} = {c}", b.abs())
  }

  #[test]
  fn root_is_c_minus_b_over_a() {
    for a in [1, -1, 2, -3, 5] {
      for b in [-4, 0, 3, 7] {
        for c in [-5, 0, 10] {
          let text = equation(a, b, c);
          let solution = solve(&text).unwrap();
          assert_eq!(solution.problem_type, ProblemType::Linear, "{text}");
          assert_relative_eq!(
            solution.roots[0],
            f64::from(c - b) / f64::from(a),
            epsilon = 1e-12
          );
        }
      }
    }
  }
}
