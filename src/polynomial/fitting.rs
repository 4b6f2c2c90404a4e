// src/polynomial/fitting.rs

use rayon::prelude::*;
use log::{debug, warn};

use crate::config::FitConfig;
use crate::error::{Error, Result};
use crate::polynomial::coefficient::Coefficient;
use crate::polynomial::polynomial::Polynomial;

#[derive(Debug, Clone)]
struct Candidate {
    coefficients: Vec<i64>,
    distance: f64,
}

/// Fits `a*X + b` by searching `a` in `[1, 20)` and `b` in `[0, 20)`.
pub fn fit_linear<T: Coefficient>(xs: &[T], ys: &[T]) -> Result<Polynomial<i64>> {
    fit_polynomial_with(xs, ys, 1, &FitConfig::default())
}

/// Fits `a*X^2 + b*X + c` by searching `a` in `[1, 20)` and `b`, `c` in `[0, 20)`.
pub fn fit_quadratic<T: Coefficient>(xs: &[T], ys: &[T]) -> Result<Polynomial<i64>> {
    fit_polynomial_with(xs, ys, 2, &FitConfig::default())
}

pub fn fit_linear_with<T: Coefficient>(xs: &[T], ys: &[T], config: &FitConfig) -> Result<Polynomial<i64>> {
    fit_polynomial_with(xs, ys, 1, config)
}

pub fn fit_quadratic_with<T: Coefficient>(xs: &[T], ys: &[T], config: &FitConfig) -> Result<Polynomial<i64>> {
    fit_polynomial_with(xs, ys, 2, config)
}

/// Exhaustive integer grid search minimising `sum |f(x_k) - y_k|^2`.
///
/// The leading coefficient runs over `[leading_min, coefficient_max)` and
/// the remaining `degree` coefficients over `[other_min, coefficient_max)`.
/// Among equal distances the candidate met first in lexicographic order
/// wins, whether or not the search runs in parallel. If no candidate comes
/// in under `distance_ceiling` the zero polynomial is returned.
pub fn fit_polynomial_with<T: Coefficient>(
    xs: &[T],
    ys: &[T],
    degree: usize,
    config: &FitConfig,
) -> Result<Polynomial<i64>> {
    if xs.len() != ys.len() {
        return Err(Error::LengthMismatch { xs: xs.len(), ys: ys.len() });
    }

    let points: Vec<(f64, f64)> = xs.iter().zip(ys).map(|(x, y)| (x.as_(), y.as_())).collect();
    let leading: Vec<i64> = (config.leading_min..config.coefficient_max).collect();

    let row = |lead: i64| best_in_row(&points, lead, degree, config);
    let best = if config.parallel {
        leading.par_iter().filter_map(|&lead| row(lead)).reduce_with(earlier_unless_better)
    } else {
        leading.iter().filter_map(|&lead| row(lead)).reduce(earlier_unless_better)
    };

    match best {
        Some(candidate) => {
            debug!(
                "Degree {} fit over {} points: {:?} with squared error {}",
                degree,
                points.len(),
                candidate.coefficients,
                candidate.distance
            );
            Ok(Polynomial::new(candidate.coefficients))
        }
        None => {
            warn!("No degree {} candidate came under the distance ceiling {}", degree, config.distance_ceiling);
            Ok(Polynomial::zero())
        }
    }
}

fn earlier_unless_better(earlier: Candidate, later: Candidate) -> Candidate {
    if later.distance < earlier.distance {
        later
    } else {
        earlier
    }
}

fn squared_error(candidate: &Polynomial<i64>, points: &[(f64, f64)]) -> f64 {
    points
        .iter()
        .map(|&(x, y)| (candidate.evaluate_f64(x) - y).abs().powi(2))
        .sum()
}

/// Best candidate with the given leading coefficient, scanning the other
/// coefficients odometer-style with the constant term turning fastest.
fn best_in_row(points: &[(f64, f64)], lead: i64, degree: usize, config: &FitConfig) -> Option<Candidate> {
    if config.other_min >= config.coefficient_max && degree > 0 {
        return None;
    }

    let mut best: Option<Candidate> = None;
    let mut ceiling = config.distance_ceiling;
    let mut tail = vec![config.other_min; degree];

    loop {
        let mut coefficients = Vec::with_capacity(degree + 1);
        coefficients.push(lead);
        coefficients.extend_from_slice(&tail);
        let distance = squared_error(&Polynomial::new(coefficients.clone()), points);
        if distance < ceiling {
            ceiling = distance;
            best = Some(Candidate { coefficients, distance });
        }

        let mut position = degree;
        loop {
            if position == 0 {
                return best;
            }
            position -= 1;
            tail[position] += 1;
            if tail[position] < config.coefficient_max {
                break;
            }
            tail[position] = config.other_min;
        }
    }
}
