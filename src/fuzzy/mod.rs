//! Fuzzy judgment matrix handling.
//!
//! A judgment matrix encodes pairwise preference strength between `n`
//! items on a [0, 1] fuzzy scale. Two operations turn it into weights:
//!
//! 1. [`to_consistent`] rewrites the matrix into additively consistent
//!    form (`Q[i][j] + Q[j][i] = 1` for all pairs), removing local
//!    inconsistency in a single closed-form pass.
//! 2. [`priority_vector`] reduces the consistent matrix to one weight
//!    per item from its row sums.
//!
//! Both accept arbitrary real entries; no reciprocity is required of
//! the input. The chains for distinct judgment matrices are fully
//! independent of each other.
//!
//! # References
//!
//! Fuzzy complementary judgment matrices and their priority formula:
//! Zhang (2000), "Fuzzy Analytical Hierarchy Process"

mod consistent;
mod priority;

pub use consistent::to_consistent;
pub use priority::priority_vector;
