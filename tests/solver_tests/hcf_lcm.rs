use super::*;
use pretty_assertions::assert_eq;

mod hcf {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn polynomial_hcf() {
    let solution = solve("HCF x^2-4, x+2").unwrap();
    assert_eq!(solution.problem_type, ProblemType::Hcf);
    assert_eq!(solution.variable, "গসাগু");
    assert_eq!(solution.solution, "গসাগু = (x+2)");
    assert!(solution.steps.contains(&"x²-4 = (x-2) × (x+2)".to_string()));
    assert!(solution.steps.contains(&"x+2 = (x+2)".to_string()));
  }

  #[test]
  fn numeric_hcf_is_evaluated() {
    assert_eq!(solve("HCF 12, 18").unwrap().solution, "গসাগু = 6");
  }

  #[test]
  fn coprime_operands() {
    let solution = solve("গসাগু 8, 15").unwrap();
    assert_eq!(solution.solution, "গসাগু = 1");
    assert!(solution
      .steps
      .contains(&"কোনো সাধারণ উৎপাদক নেই (রাশিগুলো সহমৌলিক)".to_string()));
  }

  #[test]
  fn repeated_factor_keeps_minimum_power() {
    let solution = solve("hcf x^2+6x+9, x^2-9").unwrap();
    assert_eq!(solution.solution, "গসাগু = (x+3)");
  }

  #[test]
  fn needs_two_operands() {
    assert!(matches!(
      solve("HCF x+2"),
      Err(SolverError::InsufficientOperands)
    ));
  }
}

mod lcm {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn numeric_lcm_is_evaluated() {
    assert_eq!(solve("LCM 12, 18").unwrap().solution, "লসাগু = 36");
  }

  #[test]
  fn polynomial_lcm() {
    let solution = solve("lcm x^2-4, x+2").unwrap();
    assert_eq!(solution.problem_type, ProblemType::Lcm);
    assert_eq!(solution.solution, "লসাগু = (x-2) × (x+2)");
  }

  #[test]
  fn repeated_factor_keeps_maximum_power() {
    let solution = solve("lcm x^2+6x+9, x+3").unwrap();
    assert_eq!(solution.solution, "লসাগু = (x+3)²");
  }

  #[test]
  fn mixed_letter_monomials() {
    assert_eq!(solve("lcm x^2, x^3y").unwrap().solution, "লসাগু = x³ × y");
    assert_eq!(solve("hcf x^2, x^3y").unwrap().solution, "গসাগু = x²");
  }
}

mod multiset {
  use bijganit::functions::factor::{factor, Factor};
  use bijganit::functions::{all_factors, common_factors, multiplicities};
  use pretty_assertions::assert_eq;

  #[test]
  fn common_and_all() {
    let sets = vec![
      multiplicities(&factor("x^2-4")),
      multiplicities(&factor("x^2+4x+4")),
    ];
    let x_plus_2 = Factor::Group("x+2".to_string());
    assert_eq!(common_factors(&sets), vec![(x_plus_2.clone(), 1)]);
    assert_eq!(
      all_factors(&sets),
      vec![(Factor::Group("x-2".to_string()), 1), (x_plus_2, 2)]
    );
  }

  #[test]
  fn powers_count_as_repeated_bases() {
    assert_eq!(
      multiplicities(&factor("4x^3")),
      vec![
        (Factor::Number(2), 2),
        (
          Factor::Power {
            variable: 'x',
            power: 1
          },
          3
        ),
      ]
    );
  }
}

mod hcf_times_lcm {
  use super::*;
  use pretty_assertions::assert_eq;

  fn value(solution: &str, label: &str) -> i128 {
    solution
      .strip_prefix(label)
      .and_then(|rest| rest.strip_prefix(" = "))
      .unwrap()
      .parse()
      .unwrap()
  }

  #[test]
  fn equals_the_product_of_the_operands() {
    for (a, b) in [(12, 18), (8, 15), (24, 36), (7, 21), (10, 4), (45, 60)] {
      let hcf = value(&solve(&format!("HCF {a}, {b}")).unwrap().solution, "গসাগু");
      let lcm = value(&solve(&format!("LCM {a}, {b}")).unwrap().solution, "লসাগু");
      assert_eq!(hcf * lcm, a * b, "HCF × LCM of {a}, {b}");
    }
  }
}
