//! Input and output types for a scoring run.

use thiserror::Error;

use crate::error::EvalError;
use crate::matrix::Mat;
use crate::normalize::DirectionSpec;
use crate::ranking::RankedEntry;

/// Input snapshot for one scoring run.
///
/// The runner treats all fields as immutable for the duration of the
/// run; exclusive read access is the caller's discipline.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalInput {
    /// Raw indicator data: one row per alternative, one column per
    /// leaf indicator.
    pub data: Mat,

    /// Benefit/cost classification of the indicator rows (indices into
    /// the indicator axis).
    pub directions: DirectionSpec,

    /// Judgment matrix over the indicator groups. Its size fixes the
    /// number of groups.
    pub top_level: Mat,

    /// One judgment matrix per indicator group, in group order. The
    /// group sizes must sum to the data's indicator count.
    pub second_level: Vec<Mat>,
}

/// Intermediate artifacts of one run, populated stage by stage.
///
/// On a successful run every field is `Some`; on a failed run the trace
/// holds whatever was computed before the failure.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalTrace {
    /// Normalized data, indicators × alternatives.
    pub normalized: Option<Mat>,

    /// Normalized performance matrix A, alternatives × indicators.
    pub performance: Option<Mat>,

    /// Consistent form of the top-level judgment matrix.
    pub top_consistent: Option<Mat>,

    /// Top-level priority vector.
    pub top_priority: Option<Vec<f64>>,

    /// Consistent forms of the second-level matrices, in group order.
    pub group_consistent: Option<Vec<Mat>>,

    /// Second-level priority vectors, in group order.
    pub group_priorities: Option<Vec<Vec<f64>>>,

    /// Flat static weight vector over all leaf indicators.
    pub static_weights: Option<Vec<f64>>,

    /// Deviation-degree matrix, alternatives × indicators.
    pub deviation: Option<Mat>,

    /// Row-stochastic dynamic weight matrix, alternatives × indicators.
    pub dynamic_weights: Option<Mat>,
}

/// Successful outcome of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalReport {
    /// One efficiency value per alternative, in input order.
    pub efficiency: Vec<f64>,

    /// Alternatives sorted by efficiency, descending.
    pub ranking: Vec<RankedEntry>,

    /// Every intermediate artifact of the run.
    pub trace: EvalTrace,
}

/// A failed run: the fatal error plus the artifacts computed before it.
///
/// No efficiency vector and no ranking exist on failure; the partial
/// trace is for diagnosis by the caller's logging layer.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{error}")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvalFailure {
    pub error: EvalError,
    pub trace: EvalTrace,
}
