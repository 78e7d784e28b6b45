//! Exact rational scalars and vectors.
//!
//! The whole pipeline runs over `BigRational`: arbitrary-precision
//! numerators and denominators, so dot products and 1-norm normalization
//! stay exact for any integer input, however large. Every comparison is an
//! exact sign test. No epsilons anywhere.

use nalgebra::DVector;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

/// Exact rational scalar (arbitrary precision).
pub type Rat = BigRational;

/// Exact coordinate vector (dynamic dimension).
pub type RatVec = DVector<Rat>;

/// Whole-number rational.
#[inline]
pub fn rat(n: i64) -> Rat {
    Rat::from_integer(n.into())
}

/// Rational `p/q`. Panics if `q == 0` (as `Ratio::new` does).
#[inline]
pub fn ratio(p: i64, q: i64) -> Rat {
    Rat::new(p.into(), q.into())
}

/// Vector from integer coordinates.
pub fn vec_i64(coords: &[i64]) -> RatVec {
    RatVec::from_iterator(coords.len(), coords.iter().map(|&c| rat(c)))
}

/// Sum of absolute coordinate values.
pub fn one_norm(v: &RatVec) -> Rat {
    v.iter().fold(Rat::zero(), |acc, x| acc + x.abs())
}

/// Scale a vector by `1 / s`. Panics if `s == 0`; callers check first.
pub fn scale_down(v: &RatVec, s: &Rat) -> RatVec {
    v.map(|x| x / s.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_norm_sums_absolute_values() {
        let v = RatVec::from_vec(vec![ratio(1, 2), rat(-3), rat(0)]);
        assert_eq!(one_norm(&v), ratio(7, 2));
    }

    #[test]
    fn scale_down_normalizes_to_unit_one_norm() {
        let v = vec_i64(&[2, -2]);
        let n = one_norm(&v);
        let u = scale_down(&v, &n);
        assert_eq!(one_norm(&u), rat(1));
        assert_eq!(u[0], ratio(1, 2));
        assert_eq!(u[1], ratio(-1, 2));
    }

    #[test]
    fn arithmetic_is_arbitrary_precision() {
        // A sum that overflows every fixed-width integer type.
        let v = vec_i64(&[i64::MAX, i64::MAX]);
        let total = one_norm(&v);
        assert_eq!(total, rat(i64::MAX) + rat(i64::MAX));
        assert!(total > rat(i64::MAX));
    }
}
