// src/polynomial/root_finding.rs

use serde::{Deserialize, Serialize};
use log::{debug, trace, warn};

use crate::config::RootConfig;
use crate::error::{Error, Result};
use crate::polynomial::coefficient::Coefficient;
use crate::polynomial::polynomial::Polynomial;

/// Outcome of a Newton-Raphson search.
///
/// `value` is the last iterate whether or not the search converged; a
/// non-finite `value` means a step divided by a vanishing derivative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootEstimate {
    pub value: f64,
    pub iterations: usize,
    pub converged: bool,
}

impl RootEstimate {
    pub fn into_result(self) -> Result<f64> {
        if self.converged {
            Ok(self.value)
        } else {
            Err(Error::NoConvergence {
                last_estimate: self.value,
                iterations: self.iterations,
            })
        }
    }
}

/// `f(x) / f'(x)`, taken as zero when `x` is already an exact root.
fn newton_step<T: Coefficient>(f: &Polynomial<T>, derivative: &Polynomial<T>, x: f64) -> f64 {
    let fx = f.evaluate_f64(x);
    if fx == 0.0 {
        0.0
    } else {
        fx / derivative.evaluate_f64(x)
    }
}

impl<T: Coefficient> Polynomial<T> {
    /// Refines `initial_guess` with `x <- x - f(x)/f'(x)` until the step is
    /// below 1e-4 or 100000 iterations have run.
    pub fn find_root(&self, initial_guess: f64) -> RootEstimate {
        self.find_root_with(initial_guess, &RootConfig::default())
    }

    pub fn find_root_with(&self, initial_guess: f64, config: &RootConfig) -> RootEstimate {
        let derivative = self.derivative();
        let mut x = initial_guess;
        let mut iterations = 0;
        let mut step = newton_step(self, &derivative, x);

        while (step.is_nan() || step.abs() >= config.tolerance) && iterations < config.max_iterations {
            step = newton_step(self, &derivative, x);
            x -= step;
            iterations += 1;
            trace!("Newton iteration {}: x = {}, step = {}", iterations, x, step);
            if !step.is_finite() {
                break;
            }
        }

        let converged = step.is_finite() && step.abs() < config.tolerance;
        if converged {
            debug!("Root {} found from guess {} after {} iterations", x, initial_guess, iterations);
        } else {
            warn!(
                "Root search from {} stopped after {} iterations without converging (x = {}, step = {})",
                initial_guess, iterations, x, step
            );
        }

        RootEstimate {
            value: x,
            iterations,
            converged,
        }
    }
}
