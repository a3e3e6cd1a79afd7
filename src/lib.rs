//! Multi-indicator efficiency scoring and ranking.
//!
//! Scores a set of alternatives (pieces of equipment, candidate
//! technologies) on multiple indicators by combining two weight sources:
//!
//! - **Static weights**: fuzzy pairwise judgment matrices are transformed
//!   into additively consistent form, reduced to priority vectors, and a
//!   two-level hierarchy of those vectors is flattened into one weight
//!   per leaf indicator.
//! - **Dynamic weights**: per alternative, each indicator's weight is
//!   amplified by how far that alternative's normalized value deviates
//!   from the column mean, then row-normalized. An alternative far below
//!   average on an indicator gets that indicator up-weighted, amplifying
//!   its weakness.
//!
//! The final efficiency value per alternative is the dot product of its
//! normalized indicator values and its own dynamic weight row; the
//! output is a descending ranking.
//!
//! # Modules
//!
//! - [`matrix`]: the small dense row-major matrix carried through every
//!   stage.
//! - [`normalize`]: direction-aware min-max rescaling of raw indicator
//!   rows into [0, 1].
//! - [`fuzzy`]: judgment matrix → consistent matrix → priority vector.
//! - [`weighting`]: static weight combination and deviation-degree
//!   dynamic weighting.
//! - [`ranking`]: efficiency values and the descending stable ranking.
//! - [`eval`]: the whole pipeline as a single runner, with a full
//!   intermediate-artifact trace for external display/logging layers.
//!
//! # Architecture
//!
//! Every stage is a pure function of its inputs: nothing is mutated
//! after creation, no state is carried between runs, and re-running on
//! identical inputs yields identical outputs. The per-judgment-matrix
//! chains are independent and can be evaluated in parallel under the
//! `parallel` feature; results never depend on chain ordering.

pub mod error;
pub mod eval;
pub mod fuzzy;
pub mod matrix;
pub mod normalize;
pub mod ranking;
pub mod weighting;
