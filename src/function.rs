use core::fmt;

use crate::core::Real;
use crate::error::{Error, Result};

/// A named unary function `V -> V`, optionally restricted to a closed domain.
pub struct UnaryFn<V> {
    name: String,
    domain: Option<(V, V)>,
    f: Box<dyn Fn(V) -> V + Send + Sync>,
}

impl<V: Real> UnaryFn<V> {
    pub fn new<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            domain: None,
            f: Box::new(f),
        }
    }

    /// Restrict evaluation to `[lo, hi]`; infinite bounds are allowed.
    pub fn with_domain(mut self, lo: V, hi: V) -> Self {
        self.domain = Some((lo, hi));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn domain(&self) -> Option<(V, V)> {
        self.domain
    }

    /// Evaluate without checking the domain.
    #[inline]
    pub fn call(&self, x: V) -> V {
        (self.f)(x)
    }

    /// Evaluate, failing with [`Error::Domain`] outside the domain.
    pub fn try_call(&self, x: V) -> Result<V> {
        if let Some((lo, hi)) = self.domain {
            if !(lo <= x && x <= hi) {
                return Err(Error::Domain {
                    function: self.name.clone(),
                    x: format!("{x:?}"),
                });
            }
        }
        Ok(self.call(x))
    }
}

impl<V: fmt::Debug> fmt::Debug for UnaryFn<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryFn")
            .field("name", &self.name)
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

impl<V> fmt::Display for UnaryFn<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
