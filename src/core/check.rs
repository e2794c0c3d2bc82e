use core::convert::Infallible;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::core::histogram::Histogram;
use crate::core::real::Real;
use crate::core::ulp::{ulp_error, ErrorRecord};

/// One evaluation: the input, both outputs and the error between them.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample<V> {
    pub x: V,
    pub reference: V,
    pub candidate: V,
    pub error: ErrorRecord<V>,
}

impl<V: Real> Sample<V> {
    pub fn new(x: V, reference: V, candidate: V) -> Self {
        Self {
            x,
            reference,
            candidate,
            error: ulp_error(reference, candidate),
        }
    }
}

/// Result of comparing a candidate against a reference over `n` inputs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UlpCheck<V> {
    pub histogram: Histogram,
    /// First sample with the largest ULP error; `None` until one is recorded.
    pub worst: Option<Sample<V>>,
    /// Samples whose ULP error is `+inf`: a non-finite value disagreeing
    /// with the other side, or a finite error too large to represent.
    pub unbounded: u64,
}

impl<V> Default for UlpCheck<V> {
    fn default() -> Self {
        Self {
            histogram: Histogram::new(),
            worst: None,
            unbounded: 0,
        }
    }
}

impl<V: Real> UlpCheck<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of samples recorded.
    #[inline]
    pub fn count(&self) -> u64 {
        self.histogram.total()
    }

    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }

    /// Fold one sample into the histogram and the worst case.
    pub fn record(&mut self, sample: Sample<V>) {
        // replaced only on strict improvement, so ties keep the first sample
        match self.worst {
            Some(worst) if sample.error.ulps <= worst.error.ulps => {}
            _ => self.worst = Some(sample),
        }

        if sample.error.is_unbounded() {
            self.unbounded += 1;
        }
        self.histogram.record(sample.error.key());
    }
}

/// Draw `n` inputs from `generator` and compare `candidate` against `reference`.
///
/// Every step calls `generator`, `reference` and `candidate` once, in that
/// order. The first error returned by either function ends the check and is
/// passed through unchanged.
pub fn try_ulp_check<V, E, R, C, G>(
    n: usize,
    mut reference: R,
    mut candidate: C,
    mut generator: G,
) -> Result<UlpCheck<V>, E>
where
    V: Real,
    R: FnMut(V) -> Result<V, E>,
    C: FnMut(V) -> Result<V, E>,
    G: FnMut() -> V,
{
    let mut check = UlpCheck::new();

    for _ in 0..n {
        let x = generator();
        let r = reference(x)?;
        let y = candidate(x)?;
        check.record(Sample::new(x, r, y));
    }

    Ok(check)
}

/// [`try_ulp_check`] for total functions.
pub fn ulp_check<V, R, C, G>(n: usize, mut reference: R, mut candidate: C, generator: G) -> UlpCheck<V>
where
    V: Real,
    R: FnMut(V) -> V,
    C: FnMut(V) -> V,
    G: FnMut() -> V,
{
    let checked = try_ulp_check::<V, Infallible, _, _, _>(
        n,
        |x| Ok(reference(x)),
        |x| Ok(candidate(x)),
        generator,
    );

    match checked {
        Ok(check) => check,
        Err(never) => match never {},
    }
}
