// Solvers are organized by problem shape
pub mod arithmetic;
pub mod division;
pub mod factor;
pub mod formula;
pub mod hcf_lcm;
pub mod linear;
pub mod quadratic;
pub mod simplify;
pub mod squaring;

// Re-export the engines callers use directly
pub use division::{division_restrictions, long_divide};
pub use factor::{factor, factor_expression, gcd_i128, Factor, Factorization};
pub use hcf_lcm::{all_factors, common_factors, multiplicities};
