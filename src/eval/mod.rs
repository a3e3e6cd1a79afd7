//! Whole-pipeline scoring runner.
//!
//! Composes the stage functions into one run: normalization, the
//! consistency → priority chain per judgment matrix, static weight
//! combination, deviation-degree dynamic weighting, and the final
//! efficiency ranking. Every intermediate artifact lands in an
//! [`EvalTrace`] so an external display or logging layer can render the
//! full computation; a failed run returns the typed error together with
//! whatever artifacts were computed before the failure.
//!
//! # Examples
//!
//! ```
//! use effirank::eval::{EvalConfig, EvalInput, EvalRunner};
//! use effirank::matrix::Mat;
//! use effirank::normalize::DirectionSpec;
//!
//! // Four benefit indicators in two groups, three alternatives.
//! let input = EvalInput {
//!     data: Mat::from_rows(&[
//!         vec![1.0, 4.0, 1.0, 4.0],
//!         vec![2.0, 5.0, 2.0, 5.0],
//!         vec![3.0, 6.0, 3.0, 6.0],
//!     ]),
//!     directions: DirectionSpec::new(vec![0, 1, 2, 3], vec![]),
//!     top_level: Mat::full(2, 2, 0.5),
//!     second_level: vec![Mat::full(2, 2, 0.5), Mat::full(2, 2, 0.5)],
//! };
//!
//! let report = EvalRunner::run(&input, &EvalConfig::default()).unwrap();
//! assert_eq!(report.ranking[0].alternative, 3);
//! assert_eq!(report.ranking[2].alternative, 1);
//! ```

mod config;
mod runner;
mod types;

pub use config::EvalConfig;
pub use runner::EvalRunner;
pub use types::{EvalFailure, EvalInput, EvalReport, EvalTrace};
