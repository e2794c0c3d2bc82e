#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::real::Real;

/// Largest histogram key. Errors of `2^64` ULP and more, and unbounded
/// errors, all land here.
pub const MAX_KEY: u64 = u64::MAX;

/// Error of one candidate value against its reference.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorRecord<V> {
    /// `|candidate - reference|`
    pub abs: V,
    /// `abs / ulp(reference)`; never NaN, `+inf` when unbounded.
    pub ulps: V,
}

impl<V: Real> ErrorRecord<V> {
    pub fn exact() -> Self {
        Self { abs: V::zero(), ulps: V::zero() }
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.ulps.is_infinite()
    }

    /// Histogram bucket of this error.
    #[inline]
    pub fn key(&self) -> u64 {
        bucket_key(self.ulps)
    }
}

/// Spacing of representable values at `r`: `2^(exponent(r) - (precision - 1))`.
///
/// The exponent is clamped at the smallest normal exponent, so zero and all
/// subnormals share the subnormal spacing (`2^-1074` for `f64`). Infinities
/// give infinity and NaN gives NaN.
#[inline]
pub fn ulp<V: Real>(r: V) -> V {
    if !r.is_finite() {
        return r.abs();
    }
    let e = r
        .exponent()
        .map_or(V::MIN_NORMAL_EXP, |e| e.max(V::MIN_NORMAL_EXP));
    V::exp2i(e - (V::MANTISSA_DIGITS as i32 - 1))
}

/// ULP error of `candidate` measured against `reference`.
///
/// * equal values (equal infinities too) and NaN against NaN are exact;
/// * any other pair with a non-finite side has an unbounded error;
/// * otherwise `|candidate - reference| / ulp(reference)`, which may still
///   overflow to infinity for far-apart finite values.
pub fn ulp_error<V: Real>(reference: V, candidate: V) -> ErrorRecord<V> {
    if reference == candidate || (reference.is_nan() && candidate.is_nan()) {
        return ErrorRecord::exact();
    }

    let abs = (candidate - reference).abs();
    if !reference.is_finite() || !candidate.is_finite() {
        return ErrorRecord { abs, ulps: V::infinity() };
    }

    ErrorRecord { abs, ulps: abs / ulp(reference) }
}

/// Truncate a ULP error to its histogram key, clamping at [`MAX_KEY`].
#[inline]
pub fn bucket_key<V: Real>(ulps: V) -> u64 {
    // None for NaN, infinities and anything at or above 2^64
    ulps.to_u64().unwrap_or(MAX_KEY)
}
