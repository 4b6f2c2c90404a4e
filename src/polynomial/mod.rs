// src/polynomial/mod.rs

pub mod coefficient;
pub mod polynomial;
pub mod arithmetic;
pub mod division;
pub mod calculus;
pub mod root_finding;
pub mod fitting;
pub mod serialization;

pub use coefficient::Coefficient;
pub use polynomial::Polynomial;
pub use division::DivRem;
pub use root_finding::RootEstimate;
pub use fitting::{fit_linear, fit_quadratic, fit_linear_with, fit_quadratic_with, fit_polynomial_with};
