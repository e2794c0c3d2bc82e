use core::fmt::{Debug, Display, LowerExp};

use num_traits::Float;
use rand::distr::uniform::SampleUniform;

/// Binary floating-point type the checker can measure.
///
/// On top of [`Float`] this exposes the IEEE layout facts the ULP computation
/// needs: precision, the normal exponent range, the true binary exponent of a
/// value (subnormals included) and exact powers of two.
pub trait Real:
    Float + Debug + Display + LowerExp + SampleUniform + Send + Sync + 'static
{
    /// Significand precision in bits, hidden bit included (53 for `f64`).
    const MANTISSA_DIGITS: u32;
    /// Exponent of the smallest positive normal value (-1022 for `f64`).
    const MIN_NORMAL_EXP: i32;
    /// Exponent of the largest finite value (1023 for `f64`).
    const MAX_NORMAL_EXP: i32;

    /// `floor(log2(|x|))`, exact for subnormals too.
    /// `None` for zero, infinities and NaN.
    fn exponent(self) -> Option<i32>;

    /// Exact `2^k`; zero below the subnormal range, infinity above the finite one.
    fn exp2i(k: i32) -> Self;

    /// `x * 2^n`, rounded once.
    ///
    /// Large `|n|` is split into at most two pre-scalings. Those keep values
    /// of moderate magnitude normal, so a subnormal result comes from the
    /// final multiplication alone.
    fn scalbn(self, n: i32) -> Self {
        let max = Self::MAX_NORMAL_EXP;
        let min = Self::MIN_NORMAL_EXP;
        // 2^down takes 1.0 to the bottom of the normal range with a full
        // significand to spare
        let down = min + Self::MANTISSA_DIGITS as i32 - 1;

        let mut y = self;
        let mut n = n;
        if n > max {
            y = y * Self::exp2i(max);
            n -= max;
            if n > max {
                y = y * Self::exp2i(max);
                n = (n - max).min(max);
            }
        } else if n < min {
            y = y * Self::exp2i(down);
            n -= down;
            if n < min {
                y = y * Self::exp2i(down);
                n = (n - down).max(min);
            }
        }
        y * Self::exp2i(n)
    }
}

impl Real for f32 {
    const MANTISSA_DIGITS: u32 = f32::MANTISSA_DIGITS;
    const MIN_NORMAL_EXP: i32 = f32::MIN_EXP - 1;
    const MAX_NORMAL_EXP: i32 = f32::MAX_EXP - 1;

    #[inline]
    fn exponent(self) -> Option<i32> {
        let bits = self.to_bits();
        let e = ((bits >> 23) & 0xFF) as i32;
        let mant = bits & 0x007F_FFFF;

        match e {
            0xFF => None,
            0 if mant == 0 => None,
            // subnormal: value = mant * 2^-149
            0 => Some(-149 + 31 - mant.leading_zeros() as i32),
            _ => Some(e - 127),
        }
    }

    #[inline]
    fn exp2i(k: i32) -> Self {
        if k > 127 {
            f32::INFINITY
        } else if k >= -126 {
            f32::from_bits(((k + 127) as u32) << 23)
        } else if k >= -149 {
            f32::from_bits(1u32 << (k + 149))
        } else {
            0.0
        }
    }
}

impl Real for f64 {
    const MANTISSA_DIGITS: u32 = f64::MANTISSA_DIGITS;
    const MIN_NORMAL_EXP: i32 = f64::MIN_EXP - 1;
    const MAX_NORMAL_EXP: i32 = f64::MAX_EXP - 1;

    #[inline]
    fn exponent(self) -> Option<i32> {
        let bits = self.to_bits();
        let e = ((bits >> 52) & 0x7FF) as i32;
        let mant = bits & 0x000F_FFFF_FFFF_FFFF;

        match e {
            0x7FF => None,
            0 if mant == 0 => None,
            // subnormal: value = mant * 2^-1074
            0 => Some(-1074 + 63 - mant.leading_zeros() as i32),
            _ => Some(e - 1023),
        }
    }

    #[inline]
    fn exp2i(k: i32) -> Self {
        if k > 1023 {
            f64::INFINITY
        } else if k >= -1022 {
            f64::from_bits(((k + 1023) as u64) << 52)
        } else if k >= -1074 {
            f64::from_bits(1u64 << (k + 1074))
        } else {
            0.0
        }
    }
}
