//! Measure the accuracy of fast approximations of elementary functions in
//! units in the last place.
//!
//! [`ulp_check`] samples a candidate against a reference and builds a
//! histogram of integer ULP errors along with the worst sample; [`render`]
//! turns that into a bounded-size text chart.

pub mod core;
pub use crate::core::*;

pub mod error;
pub use error::{Error, Result};

pub mod function;
pub use function::UnaryFn;

pub mod harness;
pub use harness::{harness, Interval, Options};

#[cfg(feature = "approx")]
pub mod approx;
#[cfg(feature = "approx")]
pub use approx::*;
