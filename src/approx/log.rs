use core::f64::consts::SQRT_2;

use crate::approx::horner::{fma, horner, horner1};
use crate::core::Real;

// ln(2) split as LN2_C3 + LN2_C4 for exact g*LN2_C3.
const LN2_C3: f64 = 0.693359375;
const LN2_C4: f64 = -2.121944400546905827679e-4;

// log(1+z) ~ z - z^2/2 + z^3 * P(z)/Q(z); Q is monic of order 5.
const P_LOG: [f64; 6] = [
    7.70838733755885391666E0,
    1.79368678507819816313e1,
    1.44989225341610930846e1,
    4.70579119878881725854e0,
    4.97494994976747001425e-1,
    1.01875663804580931796e-4,
];

const Q_LOG: [f64; 5] = [
    2.31251620126765340583E1,
    7.11544750618563894466e1,
    8.29875266912776603211e1,
    4.52279145837532221105e1,
    1.12873587189167450590e1,
];

/// Fast natural logarithm: split `x = u * 2^g` with `u` in `[sqrt(2)/2, sqrt(2)]`
/// and evaluate the rational approximation on `z = u - 1`.
pub fn log_c(x: f64) -> f64 {
    let Some(e) = x.exponent() else {
        // zero, infinities and NaN
        return if x == 0.0 {
            f64::NEG_INFINITY
        } else if x == f64::INFINITY {
            x
        } else {
            f64::NAN
        };
    };
    if x < 0.0 {
        return f64::NAN;
    }

    let mut g = e as f64;
    let mut u = x.scalbn(-e);
    if u > SQRT_2 {
        u /= 2.0;
        g += 1.0;
    }

    let z = u - 1.0;
    let pz = horner(z, &P_LOG);
    let qz = horner1(z, &Q_LOG);

    let z2 = z * z;
    let z3 = z2 * z;

    let mut r = z3 * pz / qz;
    r = fma(z2, -0.5, fma(g, LN2_C4, r)) + z;
    fma(g, LN2_C3, r)
}

/// `log_c(1 + x)`, losing the low bits of `x` in the addition.
pub fn log1p_naive(x: f64) -> f64 {
    log_c(1.0 + x)
}
