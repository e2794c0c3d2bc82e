pub mod real;
pub mod ulp;
pub mod histogram;
pub mod check;
pub mod render;

pub use check::*;
pub use histogram::*;
pub use real::*;
pub use render::*;
pub use ulp::*;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
