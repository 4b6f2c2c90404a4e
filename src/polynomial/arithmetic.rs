// src/polynomial/arithmetic.rs

use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg, Sub};
use log::trace;

use crate::polynomial::coefficient::Coefficient;
use crate::polynomial::polynomial::Polynomial;

/// Adds two highest-first coefficient sequences aligned at the constant term.
fn add_coefficients<T: Coefficient>(left: &[T], right: &[T]) -> Vec<T> {
    let mut result = vec![T::zero(); left.len().max(right.len())];
    for (slot, &c) in result.iter_mut().rev().zip(left.iter().rev()) {
        *slot = *slot + c;
    }
    for (slot, &c) in result.iter_mut().rev().zip(right.iter().rev()) {
        *slot = *slot + c;
    }
    result
}

fn negate_coefficients<T: Coefficient>(coefficients: &[T]) -> Vec<T> {
    coefficients.iter().map(|&c| -c).collect()
}

impl<T: Coefficient> Polynomial<T> {
    pub fn plus(left: &Polynomial<T>, right: &Polynomial<T>) -> Self {
        Polynomial::new(add_coefficients(left.coefficients(), right.coefficients()))
    }

    pub fn minus(left: &Polynomial<T>, right: &Polynomial<T>) -> Self {
        let negated = negate_coefficients(right.coefficients());
        Polynomial::new(add_coefficients(left.coefficients(), &negated))
    }

    /// Schoolbook convolution: an `m+1` by `n+1` coefficient product has
    /// `m+n+1` coefficients.
    pub fn multiply(left: &Polynomial<T>, right: &Polynomial<T>) -> Self {
        let mut coefficients = vec![T::zero(); left.len() + right.len() - 1];
        for (i, &a) in left.coefficients().iter().enumerate() {
            for (j, &b) in right.coefficients().iter().enumerate() {
                coefficients[i + j] = coefficients[i + j] + a * b;
            }
        }
        trace!("Multiplied {} by {} coefficients", left.len(), right.len());
        Polynomial::new(coefficients)
    }

    pub fn square(&self) -> Self {
        Polynomial::multiply(self, self)
    }

    /// Raises the polynomial to `exponent` by repeated squaring.
    pub fn pow(&self, mut exponent: u32) -> Self {
        let mut base = self.clone();
        let mut result = Polynomial::one();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = Polynomial::multiply(&result, &base);
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.square();
            }
        }
        result
    }

    /// The monic polynomial `(X - r_1)(X - r_2)...` with the given roots.
    pub fn from_roots(roots: &[T]) -> Self {
        let factors: Vec<Polynomial<T>> = roots
            .iter()
            .map(|&root| Polynomial::new(vec![T::one(), -root]))
            .collect();
        Polynomial::product(&factors)
    }

    pub fn product(polys: &[Polynomial<T>]) -> Self {
        polys.iter().fold(Polynomial::one(), |acc, poly| Polynomial::multiply(&acc, poly))
    }
}

macro_rules! impl_binary_op {
    ($op_trait:ident, $method:ident, $algorithm:path) => {
        impl<T: Coefficient, R: Into<Polynomial<T>>> $op_trait<R> for Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, other: R) -> Polynomial<T> {
                $algorithm(&self, &other.into())
            }
        }

        impl<T: Coefficient, R: Into<Polynomial<T>>> $op_trait<R> for &Polynomial<T> {
            type Output = Polynomial<T>;

            fn $method(self, other: R) -> Polynomial<T> {
                $algorithm(self, &other.into())
            }
        }

        impl<T: Coefficient> $op_trait<Polynomial<T>> for Vec<T> {
            type Output = Polynomial<T>;

            fn $method(self, other: Polynomial<T>) -> Polynomial<T> {
                $algorithm(&Polynomial::new(self), &other)
            }
        }
    };
}

impl_binary_op!(Add, add, Polynomial::plus);
impl_binary_op!(Sub, sub, Polynomial::minus);
impl_binary_op!(Mul, mul, Polynomial::multiply);

/// Scalar-on-the-left forms, e.g. `2.0 * p`, `1 - p` and `4 == p`.
macro_rules! impl_scalar_lhs_ops {
    ($($scalar:ty),*) => {
        $(
            impl Add<Polynomial<$scalar>> for $scalar {
                type Output = Polynomial<$scalar>;

                fn add(self, other: Polynomial<$scalar>) -> Polynomial<$scalar> {
                    Polynomial::plus(&Polynomial::constant(self), &other)
                }
            }

            impl Sub<Polynomial<$scalar>> for $scalar {
                type Output = Polynomial<$scalar>;

                fn sub(self, other: Polynomial<$scalar>) -> Polynomial<$scalar> {
                    Polynomial::minus(&Polynomial::constant(self), &other)
                }
            }

            impl Mul<Polynomial<$scalar>> for $scalar {
                type Output = Polynomial<$scalar>;

                fn mul(self, other: Polynomial<$scalar>) -> Polynomial<$scalar> {
                    other.scale(self)
                }
            }

            impl PartialEq<Polynomial<$scalar>> for $scalar {
                fn eq(&self, other: &Polynomial<$scalar>) -> bool {
                    other == self
                }
            }
        )*
    };
}

impl_scalar_lhs_ops!(i8, i16, i32, i64, i128, f32, f64);

impl<T: Coefficient> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        -&self
    }
}

impl<T: Coefficient> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial::new(negate_coefficients(self.coefficients()))
    }
}

/// A polynomial equals a scalar only when it is that constant.
impl<T: Coefficient> PartialEq<T> for Polynomial<T> {
    fn eq(&self, other: &T) -> bool {
        self.is_constant() && self.leading_coefficient() == *other
    }
}

impl<T: Coefficient> Sum for Polynomial<T> {
    fn sum<I: Iterator<Item = Polynomial<T>>>(iter: I) -> Self {
        iter.fold(Polynomial::zero(), |acc, p| Polynomial::plus(&acc, &p))
    }
}

impl<'a, T: Coefficient> Sum<&'a Polynomial<T>> for Polynomial<T> {
    fn sum<I: Iterator<Item = &'a Polynomial<T>>>(iter: I) -> Self {
        iter.fold(Polynomial::zero(), |acc, p| Polynomial::plus(&acc, p))
    }
}

impl<T: Coefficient> Product for Polynomial<T> {
    fn product<I: Iterator<Item = Polynomial<T>>>(iter: I) -> Self {
        iter.fold(Polynomial::one(), |acc, p| Polynomial::multiply(&acc, &p))
    }
}

impl<'a, T: Coefficient> Product<&'a Polynomial<T>> for Polynomial<T> {
    fn product<I: Iterator<Item = &'a Polynomial<T>>>(iter: I) -> Self {
        iter.fold(Polynomial::one(), |acc, p| Polynomial::multiply(&acc, p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poly;

    #[test]
    fn test_add_aligns_constant_terms() {
        let a = poly![1i64, 2, 3];
        let b = poly![10i64, 20];
        assert_eq!(&a + &b, poly![1i64, 12, 23]);
        assert_eq!(&b + &a, poly![1i64, 12, 23]);
    }

    #[test]
    fn test_add_scalar_touches_constant_only() {
        let a = poly![1i64, 2, 3];
        assert_eq!(&a + 4i64, poly![1i64, 2, 7]);
        assert_eq!(4i64 + a, poly![1i64, 2, 7]);
    }

    #[test]
    fn test_add_sequence() {
        let a = poly![1.0, 0.0];
        assert_eq!(&a + vec![2.0, 3.0, 4.0], poly![2.0, 4.0, 4.0]);
        assert_eq!(vec![2.0, 3.0, 4.0] + a, poly![2.0, 4.0, 4.0]);
    }

    #[test]
    fn test_add_cancels_leading_terms() {
        let a = poly![1i64, 2, 3];
        let b = poly![-1i64, -2, 0];
        let sum = a + b;
        assert_eq!(sum, poly![3i64]);
        assert_eq!(sum.degree(), Some(0));
    }

    #[test]
    fn test_sub() {
        let a = poly![1i64, 2, 3];
        let b = poly![5i64, 1];
        assert_eq!(&a - &b, poly![1i64, -3, 2]);
        assert_eq!(&b - &a, poly![-1i64, 3, -2]);
        assert_eq!(&a - &a, Polynomial::zero());
        assert_eq!(10i64 - poly![1i64, 2], poly![-1i64, 8]);
    }

    #[test]
    fn test_operands_unchanged() {
        let a = poly![3i64, 2, 1];
        let b = poly![1i64, 5];
        let _ = &a + &b;
        let _ = &a - &b;
        let _ = &a * &b;
        assert_eq!(a.coefficients(), &[3, 2, 1]);
        assert_eq!(b.coefficients(), &[1, 5]);
    }

    #[test]
    fn test_difference_of_squares() {
        let product = poly![1i64, 1] * poly![1i64, -1];
        assert_eq!(product, poly![1i64, 0, -1]);
    }

    #[test]
    fn test_mul_scalar() {
        let a = poly![1.5, -2.0];
        assert_eq!(&a * 2.0, poly![3.0, -4.0]);
        assert_eq!(2.0f64 * a.clone(), poly![3.0, -4.0]);
        assert_eq!(&a * 0.0, Polynomial::zero());
    }

    #[test]
    fn test_neg() {
        let a = poly![1i64, -2, 3];
        assert_eq!(-&a, poly![-1i64, 2, -3]);
        assert_eq!(-(-a.clone()), a);
    }

    #[test]
    fn test_scalar_equality() {
        assert!(poly![4i64] == 4i64);
        assert!(poly![0i64, 0, 4] == 4i64);
        assert!(poly![1i64, 4] != 4i64);
        assert!(Polynomial::<f64>::zero() == 0.0);
    }

    #[test]
    fn test_scalar_equality_is_symmetric() {
        let constant = poly![0i64, 4];
        assert!(4i64 == constant);
        assert!(constant == 4i64);
        assert!(5i64 != constant);
        assert!(4i64 != poly![1i64, 4]);
        assert!(0.0f64 == Polynomial::<f64>::zero());
        assert!(2.5f32 == poly![2.5f32]);
    }

    #[test]
    fn test_pow_and_square() {
        let x_plus_one = poly![1i64, 1];
        assert_eq!(x_plus_one.square(), poly![1i64, 2, 1]);
        assert_eq!(x_plus_one.pow(3), poly![1i64, 3, 3, 1]);
        assert_eq!(x_plus_one.pow(0), Polynomial::one());
    }

    #[test]
    fn test_from_roots() {
        let p = Polynomial::from_roots(&[1i64, 2]);
        assert_eq!(p, poly![1i64, -3, 2]);
        assert_eq!(p.evaluate(1), 0);
        assert_eq!(p.evaluate(2), 0);
        assert_eq!(Polynomial::<i64>::from_roots(&[]), Polynomial::one());
    }

    #[test]
    fn test_sum_and_product_iterators() {
        let polys = vec![poly![1i64, 0], poly![2i64], poly![1i64, 1]];
        let total: Polynomial<i64> = polys.iter().sum();
        assert_eq!(total, poly![2i64, 3]);
        let product: Polynomial<i64> = polys.into_iter().product();
        assert_eq!(product, poly![2i64, 2, 0]);
    }
}
