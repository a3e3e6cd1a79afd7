//! Direction-aware min-max normalization of raw indicator data.
//!
//! Raw indicator values arrive on arbitrary scales and in both
//! orientations: for benefit (positive) indicators a higher value is
//! better, for cost (negative) indicators a lower value is better.
//! Normalization rescales each classified indicator row into [0, 1] so
//! that **higher always means better** downstream — the convention the
//! deviation weighting in [`crate::weighting`] relies on.
//!
//! Degenerate-input policies are part of the contract, not bugs:
//!
//! - a constant indicator row normalizes to 1.0 in every column
//!   (maximally favorable, not neutral);
//! - row indices past the end of the matrix are skipped silently;
//! - rows listed in neither direction set stay at zero.

mod scaler;
mod types;

pub use scaler::normalize;
pub use types::DirectionSpec;
