pub mod horner;
pub use horner::*;
pub mod exp;
pub use exp::*;
pub mod log;
pub use log::*;
pub mod catalog;
pub use catalog::*;
pub mod suite;
pub use suite::*;

#[cfg(test)]
#[path = "tests/mod.rs"]
mod tests;
