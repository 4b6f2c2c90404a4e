// src/polynomial/polynomial.rs

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use num::NumCast;
use log::trace;

use crate::error::{Error, Result};
use crate::polynomial::coefficient::Coefficient;

/// A dense univariate polynomial.
///
/// Coefficients are stored highest degree first, so `[1, 0, -3]` is
/// `X^2 - 3`. Every constructor normalizes: leading zeros are stripped and
/// the zero polynomial is stored as the single coefficient `[0]`. Values
/// are never mutated after construction; every operation returns a new
/// polynomial.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<T = f64> {
    coefficients: Vec<T>,
}

/// Builds a polynomial from a list of scalars, highest degree first.
///
/// ```
/// use polyarith::poly;
/// let p = poly![1.0, 0.0, -3.0];
/// assert_eq!(p.to_string(), "1X^2 + -3");
/// ```
#[macro_export]
macro_rules! poly {
    ($($coefficient:expr),* $(,)?) => {
        $crate::Polynomial::new(vec![$($coefficient),*])
    };
}

impl<T: Coefficient> Polynomial<T> {
    pub fn new(coefficients: Vec<T>) -> Self {
        Polynomial { coefficients: normalize(coefficients) }
    }

    pub fn zero() -> Self {
        Polynomial { coefficients: vec![T::zero()] }
    }

    pub fn one() -> Self {
        Polynomial { coefficients: vec![T::one()] }
    }

    pub fn constant(value: T) -> Self {
        Polynomial::new(vec![value])
    }

    /// `coefficient * X^exponent`
    pub fn monomial(coefficient: T, exponent: usize) -> Self {
        let mut coefficients = vec![T::zero(); exponent + 1];
        coefficients[0] = coefficient;
        Polynomial::new(coefficients)
    }

    /// Coefficients, highest degree first.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Number of stored coefficients; the zero polynomial has one.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Degree of the polynomial, or `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        if self.is_zero() {
            None
        } else {
            Some(self.coefficients.len() - 1)
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    pub fn is_constant(&self) -> bool {
        self.coefficients.len() == 1
    }

    pub fn leading_coefficient(&self) -> T {
        self.coefficients[0]
    }

    /// Coefficient of `X^exponent`; zero past the degree.
    pub fn coefficient(&self, exponent: usize) -> T {
        let top = self.coefficients.len() - 1;
        if exponent > top {
            T::zero()
        } else {
            self.coefficients[top - exponent]
        }
    }

    /// Coefficients lowest degree first, as an owned copy.
    pub(crate) fn ascending(&self) -> Vec<T> {
        self.coefficients.iter().rev().copied().collect()
    }

    /// Rebuilds a polynomial from lowest-degree-first coefficients.
    pub(crate) fn from_ascending(mut coefficients: Vec<T>) -> Self {
        coefficients.reverse();
        Polynomial::new(coefficients)
    }

    /// Multiplies every coefficient by `factor`.
    pub fn scale(&self, factor: T) -> Self {
        Polynomial::new(self.coefficients.iter().map(|&c| c * factor).collect())
    }

    /// Evaluates the polynomial at `x` as `sum(c_i * x^(degree - i))`.
    ///
    /// `0^0` is taken as `1`, so a constant evaluates to itself everywhere.
    pub fn evaluate(&self, x: T) -> T {
        let top = self.coefficients.len() - 1;
        let mut result = T::zero();
        for (i, &c) in self.coefficients.iter().enumerate() {
            result = result + c * num::pow(x, top - i);
        }
        result
    }

    /// Evaluates the polynomial at a real point, widening coefficients to `f64`.
    pub fn evaluate_f64(&self, x: f64) -> f64 {
        let top = self.coefficients.len() - 1;
        let mut result = 0.0;
        for (i, c) in self.coefficients.iter().enumerate() {
            let c: f64 = c.as_();
            result += c * num::pow(x, top - i);
        }
        result
    }

    pub fn to_f64(&self) -> Polynomial<f64> {
        Polynomial::new(self.coefficients.iter().map(|c| c.as_()).collect())
    }

    /// Converts every coefficient to `U`, failing if one does not fit or
    /// would lose its fractional part.
    pub fn cast<U: Coefficient>(&self) -> Result<Polynomial<U>> {
        let coefficients = self.coefficients
            .iter()
            .map(|&c| {
                let converted = <U as NumCast>::from(c)
                    .ok_or_else(|| Error::InvalidCoefficient { value: c.to_string() })?;
                let widened: f64 = converted.as_();
                let original: f64 = c.as_();
                if widened != original && !(widened.is_nan() && original.is_nan()) {
                    return Err(Error::InvalidCoefficient { value: c.to_string() });
                }
                Ok(converted)
            })
            .collect::<Result<Vec<U>>>()?;
        Ok(Polynomial::new(coefficients))
    }
}

/// Strips leading zero coefficients; an all-zero or empty input becomes `[0]`.
fn normalize<T: Coefficient>(mut coefficients: Vec<T>) -> Vec<T> {
    match coefficients.iter().position(|c| !c.is_zero()) {
        Some(0) => coefficients,
        Some(first) => {
            coefficients.drain(..first);
            coefficients
        }
        None => vec![T::zero()],
    }
}

impl<T: Coefficient> Default for Polynomial<T> {
    fn default() -> Self {
        Polynomial::zero()
    }
}

impl<T: Coefficient> From<Vec<T>> for Polynomial<T> {
    fn from(coefficients: Vec<T>) -> Self {
        Polynomial::new(coefficients)
    }
}

impl<T: Coefficient> From<&[T]> for Polynomial<T> {
    fn from(coefficients: &[T]) -> Self {
        Polynomial::new(coefficients.to_vec())
    }
}

impl<T: Coefficient, const N: usize> From<[T; N]> for Polynomial<T> {
    fn from(coefficients: [T; N]) -> Self {
        Polynomial::new(coefficients.to_vec())
    }
}

impl<T: Coefficient> From<T> for Polynomial<T> {
    fn from(value: T) -> Self {
        Polynomial::constant(value)
    }
}

impl<T: Coefficient> From<&Polynomial<T>> for Polynomial<T> {
    fn from(polynomial: &Polynomial<T>) -> Self {
        polynomial.clone()
    }
}

impl<T: Coefficient> From<Polynomial<T>> for Vec<T> {
    fn from(polynomial: Polynomial<T>) -> Self {
        polynomial.coefficients
    }
}

impl<T: Coefficient> Display for Polynomial<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top = self.coefficients.len() - 1;
        let mut output = String::new();
        for (i, c) in self.coefficients.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if !output.is_empty() {
                output += " + ";
            }
            match f.precision() {
                Some(precision) => output += &format!("{:.*}", precision, c),
                None => output += &c.to_string(),
            }
            match top - i {
                0 => {}
                1 => output.push('X'),
                power => output += &format!("X^{}", power),
            }
        }
        if output.is_empty() {
            output.push('0');
        }
        write!(f, "{}", output)
    }
}

impl<T: Coefficient> FromStr for Polynomial<T> {
    type Err = Error;

    /// Reads the `Display` format back, e.g. `"1X^2 + -3"`.
    fn from_str(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::Parse { input: input.to_string(), reason: "empty input".to_string() });
        }

        // lowest degree first while terms arrive in any order
        let mut ascending: Vec<T> = Vec::new();
        for term in trimmed.split(" + ") {
            let (coefficient, exponent) = parse_term::<T>(term.trim())
                .map_err(|reason| Error::Parse { input: input.to_string(), reason })?;
            trace!("Parsed term '{}' as {} * X^{}", term, coefficient, exponent);
            if ascending.len() <= exponent {
                ascending.resize(exponent + 1, T::zero());
            }
            ascending[exponent] = ascending[exponent] + coefficient;
        }
        Ok(Polynomial::from_ascending(ascending))
    }
}

fn parse_term<T: Coefficient>(term: &str) -> std::result::Result<(T, usize), String> {
    let (head, exponent) = match term.find(|ch: char| ch == 'X' || ch == 'x') {
        None => (term, 0),
        Some(at) => {
            let power = &term[at + 1..];
            let exponent = if power.is_empty() {
                1
            } else {
                power
                    .strip_prefix('^')
                    .and_then(|p| p.trim().parse::<usize>().ok())
                    .ok_or_else(|| format!("invalid power in term '{}'", term))?
            };
            (&term[..at], exponent)
        }
    };

    let coefficient = match head.trim() {
        "" | "+" if exponent > 0 => T::one(),
        "-" if exponent > 0 => -T::one(),
        digits => T::from_str_radix(digits, 10)
            .map_err(|_| format!("invalid coefficient '{}' in term '{}'", digits, term))?,
    };
    Ok((coefficient, exponent))
}
