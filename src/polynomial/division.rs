// src/polynomial/division.rs

use std::ops::Div;
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::polynomial::coefficient::Coefficient;
use crate::polynomial::polynomial::Polynomial;

/// Quotient and remainder of a Euclidean division.
pub type DivRem = (Polynomial<f64>, Polynomial<f64>);

impl<T: Coefficient> Polynomial<T> {
    /// Long division from the highest-degree end.
    ///
    /// Returns `(quotient, remainder)` with
    /// `self == quotient * divisor + remainder` and
    /// `degree(remainder) < degree(divisor)`. Arithmetic is carried out in
    /// `f64` whatever the coefficient type. When the dividend has fewer
    /// coefficients than the divisor the quotient is zero and the remainder
    /// is the dividend.
    pub fn div_rem(&self, divisor: &Polynomial<T>) -> Result<DivRem> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let mut remainder: Vec<f64> = self.coefficients().iter().map(|c| c.as_()).collect();
        let divisor: Vec<f64> = divisor.coefficients().iter().map(|c| c.as_()).collect();

        if remainder.len() < divisor.len() {
            debug!(
                "Dividend has {} coefficients, divisor has {}; degree too low to divide",
                remainder.len(),
                divisor.len()
            );
            return Ok((Polynomial::zero(), Polynomial::new(remainder)));
        }

        let shift = remainder.len() - divisor.len();
        let lead = divisor[0];
        let mut quotient = Vec::with_capacity(shift + 1);

        for step in 0..=shift {
            let ratio = remainder[step] / lead;
            quotient.push(ratio);
            trace!("Division step {}: ratio {}", step, ratio);

            if ratio != 0.0 {
                for (offset, &d) in divisor.iter().enumerate() {
                    remainder[step + offset] -= ratio * d;
                }
            }
        }

        // the top shift+1 slots are eliminated
        let remainder = remainder.split_off(shift + 1);
        debug!("Divided into {} quotient and {} remainder coefficients", quotient.len(), remainder.len());
        Ok((Polynomial::new(quotient), Polynomial::new(remainder)))
    }

    /// `dividend / self`, with `self` as the divisor.
    pub fn rdiv_rem<D: Into<Polynomial<T>>>(&self, dividend: D) -> Result<DivRem> {
        let dividend: Polynomial<T> = dividend.into();
        dividend.div_rem(self)
    }

    pub fn quotient(&self, divisor: &Polynomial<T>) -> Result<Polynomial<f64>> {
        self.div_rem(divisor).map(|(quotient, _)| quotient)
    }

    pub fn remainder(&self, divisor: &Polynomial<T>) -> Result<Polynomial<f64>> {
        self.div_rem(divisor).map(|(_, remainder)| remainder)
    }
}

fn divide_or_panic<T: Coefficient>(dividend: &Polynomial<T>, divisor: &Polynomial<T>) -> DivRem {
    match dividend.div_rem(divisor) {
        Ok(result) => result,
        Err(e) => panic!("{}", e),
    }
}

/// # Panics
///
/// Panics if the divisor is the zero polynomial. Use [`Polynomial::div_rem`]
/// for a fallible division.
impl<T: Coefficient, R: Into<Polynomial<T>>> Div<R> for Polynomial<T> {
    type Output = DivRem;

    fn div(self, divisor: R) -> DivRem {
        divide_or_panic(&self, &divisor.into())
    }
}

impl<T: Coefficient, R: Into<Polynomial<T>>> Div<R> for &Polynomial<T> {
    type Output = DivRem;

    fn div(self, divisor: R) -> DivRem {
        divide_or_panic(self, &divisor.into())
    }
}

impl<T: Coefficient> Div<Polynomial<T>> for Vec<T> {
    type Output = DivRem;

    fn div(self, divisor: Polynomial<T>) -> DivRem {
        divide_or_panic(&Polynomial::new(self), &divisor)
    }
}

macro_rules! impl_scalar_lhs_div {
    ($($scalar:ty),*) => {
        $(
            impl Div<Polynomial<$scalar>> for $scalar {
                type Output = DivRem;

                fn div(self, divisor: Polynomial<$scalar>) -> DivRem {
                    divide_or_panic(&Polynomial::constant(self), &divisor)
                }
            }
        )*
    };
}

impl_scalar_lhs_div!(i8, i16, i32, i64, i128, f32, f64);
