use crate::approx::horner::{fma, horner};
use crate::core::Real;

// Cephes exp: rational approximation R(g)/R(-g) of order 6, with the odd
// part g*P(g^2) and the even part Q(g^2).
const P_EXP: [f64; 3] = [
    9.99999999999999999910E-1,
    3.02994407707441961300E-2,
    1.26177193074810590878E-4,
];

const Q_EXP: [f64; 4] = [
    2.00000000000000000009E0,
    2.27265548208155028766E-1,
    2.52448340349684104192E-3,
    3.00198505138664455042E-6,
];

// ln(2) split as LN2_C1 + LN2_C2 so n*LN2_C1 is exact.
const LN2_C1: f64 = 6.93145751953125E-1;
const LN2_C2: f64 = 1.42860682030941723212E-6;

const LN2_INV: f64 = 1.4426950408889634073599;

/// Smallest argument with a normal `exp`.
pub const EXP_MIN_ARG: f64 = -708.3964185322641;
/// Largest argument with a finite `exp`.
pub const EXP_MAX_ARG: f64 = 709.782712893384;
/// Below this `exp` rounds to zero.
const EXP_UNDERFLOW_ARG: f64 = -745.1332191019412;

/// Fast `exp(x)`: reduce by `n = round(x / ln 2)`, evaluate the rational
/// approximation on the remainder, scale by `2^n`.
pub fn exp_c(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x > EXP_MAX_ARG {
        return f64::INFINITY;
    }
    if x < EXP_UNDERFLOW_ARG {
        return 0.0;
    }

    let n = fma(LN2_INV, x, 0.5).floor();
    let mut g = fma(n, -LN2_C1, x);
    g = fma(n, -LN2_C2, g);

    let gg = g * g;
    let odd = g * horner(gg, &P_EXP);
    let even = horner(gg, &Q_EXP);

    // R(g)/R(-g) - 1 = 2*g*P(g^2) / (Q(g^2) - g*P(g^2))
    let expg = fma(2.0, odd / (even - odd), 1.0);

    expg.scalbn(n as i32)
}

/// `exp_c(x) - 1`, without any care for cancellation near zero.
pub fn expm1_naive(x: f64) -> f64 {
    exp_c(x) - 1.0
}
