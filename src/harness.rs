use core::fmt;
use std::io::Write;

use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::core::{render, try_ulp_check, Real, RenderOptions};
use crate::error::{Error, Result};
use crate::function::UnaryFn;

pub const DEFAULT_COUNT: usize = 10_000;
pub const DEFAULT_SEED: u64 = 12345;

/// Settings shared by every interval of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Samples per interval.
    pub count: usize,
    /// Seed of the generator, reset for each interval.
    pub seed: u64,
    /// Dump `x`, `ref(x)`, `eval(x)` rows instead of a histogram.
    pub raw: bool,
    /// Write one JSON object per interval instead of text.
    #[cfg(feature = "serde")]
    pub json: bool,
    pub render: RenderOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: DEFAULT_SEED,
            raw: false,
            #[cfg(feature = "serde")]
            json: false,
            render: RenderOptions::default(),
        }
    }
}

/// Half-open sampling interval `[lb, ub)` with finite, ordered bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Interval<V> {
    pub lb: V,
    pub ub: V,
}

impl<V: Real> Interval<V> {
    pub fn new(lb: V, ub: V) -> Result<Self> {
        if lb.is_finite() && ub.is_finite() && lb < ub {
            Ok(Self { lb, ub })
        } else {
            Err(Self::invalid(lb, ub))
        }
    }

    fn invalid(lb: V, ub: V) -> Error {
        Error::Interval {
            lb: lb.to_string(),
            ub: ub.to_string(),
        }
    }

    /// Uniform generator over the interval, reproducible from `seed`.
    pub fn sampler(&self, seed: u64) -> Result<impl FnMut() -> V> {
        let dist = Uniform::new(self.lb, self.ub).map_err(|_| Self::invalid(self.lb, self.ub))?;
        let mut rng = StdRng::seed_from_u64(seed);
        Ok(move || dist.sample(&mut rng))
    }
}

impl<V: fmt::Display> fmt::Display for Interval<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lb, self.ub)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize)]
struct JsonReport<'a, V> {
    reference: &'a str,
    candidate: &'a str,
    interval: Interval<V>,
    count: u64,
    unbounded: u64,
    report: &'a crate::core::Report<V>,
}

/// Compare `candidate` against `reference` on `interval` and write the result.
///
/// In raw mode every sample is written as a row instead. A domain error from
/// either function aborts the interval and is returned.
pub fn harness<W, V>(
    out: &mut W,
    options: &Options,
    reference: &UnaryFn<V>,
    candidate: &UnaryFn<V>,
    interval: Interval<V>,
) -> Result<()>
where
    W: Write + ?Sized,
    V: Real,
    V: SerializeIfEnabled,
{
    let generator = interval.sampler(options.seed)?;

    if options.raw {
        return raw(out, options.count, reference, candidate, interval, generator);
    }

    let count = options.count;
    emit::debug!(
        "checking {reference} against {candidate} on {interval} with {count} samples",
        reference: reference.name(),
        candidate: candidate.name(),
        #[emit::as_display]
        interval,
        count,
    );

    let check = try_ulp_check(
        options.count,
        |x| reference.try_call(x),
        |x| candidate.try_call(x),
        generator,
    )?;

    if check.unbounded > 0 {
        let unbounded = check.unbounded;
        emit::warn!(
            "{unbounded} of {count} samples of {candidate} have an unbounded error",
            unbounded,
            count,
            candidate: candidate.name(),
        );
    }
    if let Some(worst) = &check.worst {
        emit::debug!(
            "worst error of {candidate} is {ulps} ULP at {x}",
            candidate: candidate.name(),
            #[emit::as_debug]
            ulps: worst.error.ulps,
            #[emit::as_debug]
            x: worst.x,
        );
    }

    let report = render(&check, &options.render);

    #[cfg(feature = "serde")]
    if options.json {
        let json = JsonReport {
            reference: reference.name(),
            candidate: candidate.name(),
            interval,
            count: check.count(),
            unbounded: check.unbounded,
            report: &report,
        };
        serde_json::to_writer(&mut *out, &json)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{} vs {} on {}", reference.name(), candidate.name(), interval)?;
    report.write_to(out)?;
    writeln!(out)?;
    Ok(())
}

fn raw<W, V, G>(
    out: &mut W,
    count: usize,
    reference: &UnaryFn<V>,
    candidate: &UnaryFn<V>,
    interval: Interval<V>,
    mut generator: G,
) -> Result<()>
where
    W: Write + ?Sized,
    V: Real,
    G: FnMut() -> V,
{
    writeln!(out, "# lb={}; ub={}", interval.lb, interval.ub)?;
    writeln!(out, "# x {} {}", reference.name(), candidate.name())?;

    for _ in 0..count {
        let x = generator();
        let r = reference.try_call(x)?;
        let y = candidate.try_call(x)?;
        writeln!(out, "{x:>25.17e}{r:>25.17e}{y:>25.17e}")?;
    }
    Ok(())
}

/// `Serialize` when the `serde` feature is on, nothing otherwise.
#[cfg(feature = "serde")]
pub trait SerializeIfEnabled: Serialize {}
#[cfg(feature = "serde")]
impl<T: Serialize> SerializeIfEnabled for T {}

#[cfg(not(feature = "serde"))]
pub trait SerializeIfEnabled {}
#[cfg(not(feature = "serde"))]
impl<T> SerializeIfEnabled for T {}
