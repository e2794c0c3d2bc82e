use core::fmt;
use core::str::FromStr;

use crate::approx::catalog::*;
use crate::approx::exp::{EXP_MAX_ARG, EXP_MIN_ARG};
use crate::error::{Error, Result};
use crate::function::UnaryFn;
use crate::harness::Interval;

/// A reference/candidate pair and the intervals it is checked on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Suite {
    Exp,
    Log,
    Expm1,
    Log1p,
}

impl Suite {
    pub const ALL: [Suite; 4] = [Suite::Exp, Suite::Log, Suite::Expm1, Suite::Log1p];

    pub fn name(self) -> &'static str {
        match self {
            Suite::Exp => "exp",
            Suite::Log => "log",
            Suite::Expm1 => "expm1",
            Suite::Log1p => "log1p",
        }
    }

    pub fn reference(self) -> UnaryFn<f64> {
        match self {
            Suite::Exp => std_exp(),
            Suite::Log => std_log(),
            Suite::Expm1 => std_expm1(),
            Suite::Log1p => std_log1p(),
        }
    }

    pub fn candidate(self) -> UnaryFn<f64> {
        match self {
            Suite::Exp => exp_c_fn(),
            Suite::Log => log_c_fn(),
            Suite::Expm1 => expm1_naive_fn(),
            Suite::Log1p => log1p_naive_fn(),
        }
    }

    /// Default intervals: near zero and the full normal range for `exp`,
    /// a wide positive range for `log`, near zero for the `*1p`/`*m1` pair.
    pub fn intervals(self) -> Result<Vec<Interval<f64>>> {
        let bounds: &[(f64, f64)] = match self {
            Suite::Exp => &[(-0.1, 0.1), (EXP_MIN_ARG, EXP_MAX_ARG)],
            Suite::Log => &[(0.003, 2300.0)],
            Suite::Expm1 | Suite::Log1p => &[(-0.01, 0.01)],
        };
        bounds.iter().map(|&(lb, ub)| Interval::new(lb, ub)).collect()
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suite {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Suite::ALL
            .into_iter()
            .find(|suite| suite.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownSuite(s.to_string()))
    }
}
