// src/polynomial/coefficient.rs

use std::fmt::{Debug, Display};
use num::traits::AsPrimitive;
use num::{Num, NumCast, Signed};

/// Numeric types a polynomial can carry as coefficients.
///
/// Every signed primitive (`i8` through `i128`, `f32`, `f64`) qualifies.
/// Operations that are inherently real-valued widen to `f64` through
/// `AsPrimitive`; checked conversions between coefficient types go through
/// `NumCast`.
pub trait Coefficient:
    Num + Signed + NumCast + Copy + PartialOrd + AsPrimitive<f64> + Display + Debug + Send + Sync + 'static
{
}

impl<T> Coefficient for T where
    T: Num + Signed + NumCast + Copy + PartialOrd + AsPrimitive<f64> + Display + Debug + Send + Sync + 'static
{
}
