// src/polynomial/calculus.rs

use log::debug;

use crate::polynomial::coefficient::Coefficient;
use crate::polynomial::polynomial::Polynomial;

impl<T: Coefficient> Polynomial<T> {
    /// First derivative. A constant differentiates to zero.
    pub fn derivative(&self) -> Self {
        // the exponent factor is accumulated so integer types need no cast
        let mut exponent = T::zero();
        let derived: Vec<T> = self
            .ascending()
            .into_iter()
            .skip(1)
            .map(|c| {
                exponent = exponent + T::one();
                c * exponent
            })
            .collect();
        Polynomial::from_ascending(derived)
    }

    /// Derivative of the given order; applying it more times than the
    /// degree yields the zero polynomial.
    pub fn differentiate(&self, order: usize) -> Self {
        let mut result = self.clone();
        for _ in 0..order {
            if result.is_zero() {
                break;
            }
            result = result.derivative();
        }
        result
    }

    /// Antiderivative with the given constant term. Each coefficient is
    /// divided by its new exponent, so the result is real-valued.
    pub fn indefinite_integral(&self, constant: f64) -> Polynomial<f64> {
        let ascending = self.ascending();
        let mut integrated = Vec::with_capacity(ascending.len() + 1);
        integrated.push(constant);
        for (exponent, c) in ascending.into_iter().enumerate() {
            let c: f64 = c.as_();
            integrated.push(c / (exponent + 1) as f64);
        }
        Polynomial::from_ascending(integrated)
    }

    /// Antiderivative applied `order` times.
    ///
    /// The same `constant` is added on every pass, so for `order > 1` it
    /// also leaks into the higher terms (`integrate(2, c)` of `0` is
    /// `cX + c`). Use [`Polynomial::integrate_with_constants`] to choose a
    /// constant per pass.
    pub fn integrate(&self, order: usize, constant: f64) -> Polynomial<f64> {
        let mut result = self.to_f64();
        for _ in 0..order {
            result = result.indefinite_integral(constant);
        }
        debug!("Integrated {} times with constant {}", order, constant);
        result
    }

    /// One antiderivative pass per entry of `constants`, in order.
    pub fn integrate_with_constants(&self, constants: &[f64]) -> Polynomial<f64> {
        constants
            .iter()
            .fold(self.to_f64(), |acc, &constant| acc.indefinite_integral(constant))
    }

    /// `F(upper) - F(lower)` for an antiderivative `F`.
    pub fn definite_integral(&self, lower: f64, upper: f64) -> f64 {
        let antiderivative = self.indefinite_integral(0.0);
        antiderivative.evaluate_f64(upper) - antiderivative.evaluate_f64(lower)
    }
}
