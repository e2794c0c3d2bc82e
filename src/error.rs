use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Sampling interval is empty, inverted or not finite.
    #[error("invalid sampling interval [{lb}, {ub}]")]
    Interval { lb: String, ub: String },

    /// A function was evaluated outside its declared domain.
    #[error("{function} is not defined at x = {x}")]
    Domain { function: String, x: String },

    #[error("unknown suite `{0}` (expected one of: exp, log, expm1, log1p)")]
    UnknownSuite(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
