//! Pipeline error taxonomy.
//!
//! Every error here is fatal for the current run: once one occurs, no
//! efficiency vector and no ranking are produced. Errors are raised at
//! the point of detection; the pipeline runner attaches the identity of
//! the offending judgment matrix via [`EvalError::for_judgment`].

use std::fmt;

use thiserror::Error;

/// Identifies a judgment matrix within one evaluation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum JudgmentId {
    /// The top-level (indicator-group) judgment matrix.
    TopLevel,
    /// A second-level judgment matrix, by 0-based group position.
    Group(usize),
}

impl fmt::Display for JudgmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JudgmentId::TopLevel => write!(f, "top-level judgment matrix"),
            JudgmentId::Group(i) => write!(f, "second-level judgment matrix {i}"),
        }
    }
}

/// A fatal evaluation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvalError {
    /// The configuration was rejected by `EvalConfig::validate`.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A judgment matrix is not square.
    #[error("judgment matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A judgment matrix is too small for priority extraction.
    #[error("priority extraction requires at least 2 items, got {size}")]
    PrioritySize { size: usize },

    /// An error annotated with the judgment matrix it refers to.
    #[error("{id}: {source}")]
    Judgment {
        id: JudgmentId,
        #[source]
        source: Box<EvalError>,
    },

    /// Top-level priority length does not match the second-level matrix count.
    #[error("top-level judgment matrix covers {top} groups but {groups} second-level matrices were supplied")]
    GroupCountMismatch { top: usize, groups: usize },

    /// Flat static weight length does not match the data's indicator count.
    #[error("combined static weights cover {weights} indicators but the data has {indicators}")]
    IndicatorCountMismatch { weights: usize, indicators: usize },

    /// An alternative's weighted-deviation row summed to zero, so its
    /// dynamic weights cannot be normalized. Signals malformed input.
    #[error("alternative {alternative} has a zero weighted-deviation sum; dynamic weights cannot be normalized")]
    ZeroWeightRow { alternative: usize },
}

impl EvalError {
    /// Wraps the error with the identity of the judgment matrix it
    /// refers to.
    pub fn for_judgment(self, id: JudgmentId) -> EvalError {
        EvalError::Judgment {
            id,
            source: Box::new(self),
        }
    }
}
