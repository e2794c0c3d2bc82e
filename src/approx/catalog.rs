//! Named reference and candidate functions.

use crate::approx::exp::{exp_c, expm1_naive};
use crate::approx::log::{log1p_naive, log_c};
use crate::function::UnaryFn;

// ---- references (Rust's libm) ----

pub fn std_exp() -> UnaryFn<f64> {
    UnaryFn::new("std::exp", f64::exp)
}

pub fn std_expm1() -> UnaryFn<f64> {
    UnaryFn::new("std::expm1", f64::exp_m1)
}

pub fn std_log() -> UnaryFn<f64> {
    UnaryFn::new("std::log", f64::ln).with_domain(0.0, f64::INFINITY)
}

pub fn std_log1p() -> UnaryFn<f64> {
    UnaryFn::new("std::log1p", f64::ln_1p).with_domain(-1.0, f64::INFINITY)
}

// ---- candidates ----

pub fn exp_c_fn() -> UnaryFn<f64> {
    UnaryFn::new("exp_c", exp_c)
}

pub fn expm1_naive_fn() -> UnaryFn<f64> {
    UnaryFn::new("exp_c(x)-1", expm1_naive)
}

pub fn log_c_fn() -> UnaryFn<f64> {
    UnaryFn::new("log_c", log_c).with_domain(0.0, f64::INFINITY)
}

pub fn log1p_naive_fn() -> UnaryFn<f64> {
    UnaryFn::new("log_c(1+x)", log1p_naive).with_domain(-1.0, f64::INFINITY)
}
