/// `a * b + c`: fused unless the `nofma` feature asks for a separate
/// multiply and add.
#[inline]
pub fn fma(a: f64, b: f64, c: f64) -> f64 {
    #[cfg(feature = "nofma")]
    {
        a * b + c
    }
    #[cfg(not(feature = "nofma"))]
    {
        a.mul_add(b, c)
    }
}

/// `c[0] + x*(c[1] + x*(c[2] + ...))`; zero for no coefficients.
#[inline]
pub fn horner(x: f64, coeffs: &[f64]) -> f64 {
    let Some((&last, rest)) = coeffs.split_last() else {
        return 0.0;
    };
    rest.iter().rev().fold(last, |acc, &c| fma(x, acc, c))
}

/// Monic variant: the leading coefficient 1 is implied, so
/// `horner1(x, [q0, q1]) = q0 + x*(q1 + x)`.
#[inline]
pub fn horner1(x: f64, coeffs: &[f64]) -> f64 {
    let Some((&last, rest)) = coeffs.split_last() else {
        return 1.0;
    };
    rest.iter().rev().fold(x + last, |acc, &c| fma(x, acc, c))
}
