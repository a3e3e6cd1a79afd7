//! Efficiency values and the final descending ranking.

mod engine;

pub use engine::{efficiency_values, rank, RankedEntry};
