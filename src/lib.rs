// src/lib.rs

//! Dense univariate polynomial arithmetic.
//!
//! A [`Polynomial`] stores its coefficients highest degree first and is
//! immutable: addition, subtraction, multiplication, Euclidean division,
//! evaluation, differentiation, integration, Newton-Raphson root finding and
//! small integer least-squares fits all return fresh values.
//!
//! ```
//! use polyarith::poly;
//!
//! let p = poly![1i64, -3, 2];
//! assert_eq!(p.evaluate(1), 0);
//! assert_eq!(p.to_string(), "1X^2 + -3X + 2");
//!
//! let (q, r) = poly![1.0, 0.0, 0.0] / poly![1.0, 0.0];
//! assert_eq!(q, poly![1.0, 0.0]);
//! assert!(r.is_zero());
//! ```

pub mod config;
pub mod error;
pub mod polynomial;

pub use crate::config::{PolyConfig, RootConfig, FitConfig};
pub use error::{Error, Result};
pub use polynomial::{
    fit_linear, fit_linear_with, fit_polynomial_with, fit_quadratic, fit_quadratic_with, Coefficient, DivRem,
    Polynomial, RootEstimate,
};
