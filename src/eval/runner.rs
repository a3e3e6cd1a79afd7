//! Whole-pipeline execution.

use tracing::debug;

use crate::error::{EvalError, JudgmentId};
use crate::fuzzy::{priority_vector, to_consistent};
use crate::matrix::Mat;
use crate::normalize::normalize;
use crate::ranking::{efficiency_values, rank, RankedEntry};
use crate::weighting::{combine, deviation_degrees, dynamic_weights};

use super::config::EvalConfig;
use super::types::{EvalFailure, EvalInput, EvalReport, EvalTrace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Executes the scoring pipeline.
///
/// Every invocation recomputes all stages from scratch; there is no
/// cached or incremental state, so re-running on identical inputs
/// yields identical outputs.
pub struct EvalRunner;

impl EvalRunner {
    /// Runs one full scoring pass over `input`.
    ///
    /// On success the report carries the efficiency vector, the
    /// descending ranking, and a fully populated trace. On failure the
    /// returned [`EvalFailure`] carries the fatal error plus whatever
    /// trace artifacts were computed before it; no ranking is ever
    /// fabricated from partial results.
    pub fn run(input: &EvalInput, config: &EvalConfig) -> Result<EvalReport, EvalFailure> {
        let mut trace = EvalTrace::default();
        match run_stages(input, config, &mut trace) {
            Ok((efficiency, ranking)) => Ok(EvalReport {
                efficiency,
                ranking,
                trace,
            }),
            Err(error) => Err(EvalFailure { error, trace }),
        }
    }
}

fn run_stages(
    input: &EvalInput,
    config: &EvalConfig,
    trace: &mut EvalTrace,
) -> Result<(Vec<f64>, Vec<RankedEntry>), EvalError> {
    config.validate().map_err(EvalError::Config)?;

    validate_judgment(&input.top_level, JudgmentId::TopLevel)?;
    for (g, m) in input.second_level.iter().enumerate() {
        validate_judgment(m, JudgmentId::Group(g))?;
    }

    if input.top_level.rows() != input.second_level.len() {
        return Err(EvalError::GroupCountMismatch {
            top: input.top_level.rows(),
            groups: input.second_level.len(),
        });
    }

    let leaf_count: usize = input.second_level.iter().map(|m| m.rows()).sum();
    if leaf_count != input.data.cols() {
        return Err(EvalError::IndicatorCountMismatch {
            weights: leaf_count,
            indicators: input.data.cols(),
        });
    }

    // Normalization works on indicator rows; the input data arrives as
    // alternatives x indicators, so it goes through a transpose
    // round-trip.
    let by_indicator = input.data.transpose();
    let normalized = normalize(&by_indicator, &input.directions);
    let performance = normalized.transpose();
    debug!(
        indicators = normalized.rows(),
        alternatives = normalized.cols(),
        "normalized raw data"
    );
    trace.normalized = Some(normalized);
    trace.performance = Some(performance.clone());

    let (top_consistent, top_priority) =
        priority_chain(&input.top_level).map_err(|e| e.for_judgment(JudgmentId::TopLevel))?;
    let chains = group_chains(&input.second_level, config.parallel)?;
    let (group_consistent, group_priorities): (Vec<Mat>, Vec<Vec<f64>>) =
        chains.into_iter().unzip();
    debug!(groups = group_priorities.len(), "extracted priority vectors");
    trace.top_consistent = Some(top_consistent);
    trace.group_consistent = Some(group_consistent);

    let static_weights = combine(&top_priority, &group_priorities)?;
    debug!(leaf_weights = static_weights.len(), "combined static weights");
    trace.top_priority = Some(top_priority);
    trace.group_priorities = Some(group_priorities);
    trace.static_weights = Some(static_weights.clone());

    let deviation = deviation_degrees(&performance, config.alpha, config.beta);
    trace.deviation = Some(deviation.clone());
    let dynamic = dynamic_weights(&deviation, &static_weights)?;
    debug!("computed dynamic weight matrix");
    trace.dynamic_weights = Some(dynamic.clone());

    let efficiency = efficiency_values(&performance, &dynamic);
    let ranking = rank(&efficiency);
    debug!(alternatives = efficiency.len(), "ranked alternatives");
    Ok((efficiency, ranking))
}

fn validate_judgment(m: &Mat, id: JudgmentId) -> Result<(), EvalError> {
    if !m.is_square() {
        return Err(EvalError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        }
        .for_judgment(id));
    }
    if m.rows() < 2 {
        return Err(EvalError::PrioritySize { size: m.rows() }.for_judgment(id));
    }
    Ok(())
}

/// One judgment matrix's chain: consistency transform, then priority
/// extraction.
fn priority_chain(r: &Mat) -> Result<(Mat, Vec<f64>), EvalError> {
    let q = to_consistent(r);
    let w = priority_vector(&q)?;
    Ok((q, w))
}

#[cfg(feature = "parallel")]
fn group_chains(matrices: &[Mat], parallel: bool) -> Result<Vec<(Mat, Vec<f64>)>, EvalError> {
    if parallel {
        matrices
            .par_iter()
            .enumerate()
            .map(|(g, m)| priority_chain(m).map_err(|e| e.for_judgment(JudgmentId::Group(g))))
            .collect()
    } else {
        sequential_chains(matrices)
    }
}

#[cfg(not(feature = "parallel"))]
fn group_chains(matrices: &[Mat], _parallel: bool) -> Result<Vec<(Mat, Vec<f64>)>, EvalError> {
    sequential_chains(matrices)
}

fn sequential_chains(matrices: &[Mat]) -> Result<Vec<(Mat, Vec<f64>)>, EvalError> {
    matrices
        .iter()
        .enumerate()
        .map(|(g, m)| priority_chain(m).map_err(|e| e.for_judgment(JudgmentId::Group(g))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::DirectionSpec;

    /// Four benefit indicators in two uniform groups, three
    /// alternatives with strictly increasing performance.
    fn uniform_input() -> EvalInput {
        EvalInput {
            data: Mat::from_rows(&[
                vec![1.0, 4.0, 1.0, 4.0],
                vec![2.0, 5.0, 2.0, 5.0],
                vec![3.0, 6.0, 3.0, 6.0],
            ]),
            directions: DirectionSpec::new(vec![0, 1, 2, 3], vec![]),
            top_level: Mat::full(2, 2, 0.5),
            second_level: vec![Mat::full(2, 2, 0.5), Mat::full(2, 2, 0.5)],
        }
    }

    /// The documented 3-alternative, 34-indicator configuration with
    /// judgment matrix sizes {7; 6,3,3,7,8,4,3}.
    fn documented_input() -> EvalInput {
        let data = Mat::from_rows(&[
            vec![
                0.8, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0, 1.0, 3.0, 4.0, 1.0, 2.0, 1.0, 3.0, 2.0, 1.0,
                1.0, 1.0, 2.0, 3.0, 3.0, 2.0, 2.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
                0.0, 0.0,
            ],
            vec![
                0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 10.0, 2.0, 2.0, 4.0, 1.0, 1.0, 1.0, 3.0, 1.0, 1.0,
                1.0, 2.0, 3.0, 3.0, 3.0, 1.0, 1.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
                0.0, 0.0,
            ],
            vec![
                0.0, 0.0, 0.4, 0.0, 0.0, 0.0, 5.0, 3.0, 1.0, 2.0, 1.0, 4.0, 1.0, 4.0, 2.0, 2.0,
                2.0, 1.0, 4.0, 3.0, 3.0, 1.0, 1.0, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
                0.0, 0.0,
            ],
        ]);
        let directions = DirectionSpec::new(
            vec![0, 1, 2, 3, 4, 5, 8, 19, 20, 23, 26, 27, 28, 29, 30, 31, 32, 33],
            vec![6, 7, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 21, 22, 24, 25],
        );
        let top_level = Mat::from_rows(&[
            vec![0.5, 0.6, 0.7, 0.7, 0.6, 0.6, 0.9],
            vec![0.4, 0.5, 0.8, 0.7, 0.6, 0.6, 0.9],
            vec![0.3, 0.2, 0.5, 0.5, 0.5, 0.5, 0.9],
            vec![0.3, 0.3, 0.5, 0.5, 0.5, 0.5, 0.5],
            vec![0.4, 0.4, 0.5, 0.5, 0.5, 0.5, 0.5],
            vec![0.4, 0.4, 0.5, 0.5, 0.5, 0.5, 0.5],
            vec![0.1, 0.1, 0.1, 0.5, 0.5, 0.5, 0.5],
        ]);
        let second_level = vec![
            Mat::from_rows(&[
                vec![0.5, 0.55, 0.6, 0.7, 0.8, 0.9],
                vec![0.45, 0.5, 0.55, 0.6, 0.7, 0.8],
                vec![0.4, 0.45, 0.5, 0.55, 0.6, 0.7],
                vec![0.3, 0.4, 0.45, 0.5, 0.55, 0.6],
                vec![0.2, 0.3, 0.4, 0.45, 0.5, 0.55],
                vec![0.1, 0.2, 0.3, 0.4, 0.45, 0.5],
            ]),
            Mat::from_rows(&[
                vec![0.5, 0.2, 0.1],
                vec![0.8, 0.5, 0.3],
                vec![0.9, 0.7, 0.5],
            ]),
            Mat::full(3, 3, 0.5),
            Mat::full(7, 7, 0.5),
            Mat::full(8, 8, 0.5),
            Mat::full(4, 4, 0.5),
            Mat::full(3, 3, 0.5),
        ];
        EvalInput {
            data,
            directions,
            top_level,
            second_level,
        }
    }

    #[test]
    fn test_uniform_hierarchy_ranks_by_performance() {
        let report = EvalRunner::run(&uniform_input(), &EvalConfig::default()).unwrap();

        // Per-indicator normalization maps the three alternatives to
        // 0, 0.5, 1 on every indicator.
        assert!((report.efficiency[0]).abs() < 1e-12);
        assert!((report.efficiency[1] - 0.5).abs() < 1e-12);
        assert!((report.efficiency[2] - 1.0).abs() < 1e-12);

        let order: Vec<usize> = report.ranking.iter().map(|e| e.alternative).collect();
        assert_eq!(order, vec![3, 2, 1]);

        let weights = report.trace.static_weights.as_ref().unwrap();
        for w in weights {
            assert!((w - 0.25).abs() < 1e-12);
        }
    }

    #[test]
    fn test_trace_fully_populated_on_success() {
        let report = EvalRunner::run(&uniform_input(), &EvalConfig::default()).unwrap();
        let trace = &report.trace;

        assert!(trace.normalized.is_some());
        assert!(trace.performance.is_some());
        assert!(trace.top_consistent.is_some());
        assert!(trace.top_priority.is_some());
        assert!(trace.group_consistent.is_some());
        assert!(trace.group_priorities.is_some());
        assert!(trace.static_weights.is_some());
        assert!(trace.deviation.is_some());
        assert!(trace.dynamic_weights.is_some());

        assert_eq!(trace.normalized.as_ref().unwrap().rows(), 4);
        assert_eq!(trace.performance.as_ref().unwrap().rows(), 3);
        assert_eq!(trace.group_consistent.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn test_single_level_chain_matches_row_mean_order() {
        // Two positive indicators, three alternatives; one 2x2 uniform
        // judgment matrix stands in for the whole hierarchy.
        let data = Mat::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let normalized = normalize(&data, &DirectionSpec::new(vec![0, 1], vec![]));
        for j in 0..3 {
            assert!((normalized.get(0, j) - [0.0, 0.5, 1.0][j]).abs() < 1e-12);
            assert!((normalized.get(1, j) - [0.0, 0.5, 1.0][j]).abs() < 1e-12);
        }

        let weights = priority_vector(&to_consistent(&Mat::full(2, 2, 0.5))).unwrap();
        assert!((weights[0] - 0.5).abs() < 1e-12);
        assert!((weights[1] - 0.5).abs() < 1e-12);

        let a = normalized.transpose();
        let devs = deviation_degrees(&a, 0.01, 0.01);
        let dynamic = dynamic_weights(&devs, &weights).unwrap();
        let ranking = rank(&efficiency_values(&a, &dynamic));

        // Identical to the unweighted row-mean order of the normalized
        // data: alternative 3 > 2 > 1.
        let order: Vec<usize> = ranking.iter().map(|e| e.alternative).collect();
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn test_documented_configuration_runs_clean() {
        let report = EvalRunner::run(&documented_input(), &EvalConfig::default()).unwrap();

        assert_eq!(report.efficiency.len(), 3);
        let mut ids: Vec<usize> = report.ranking.iter().map(|e| e.alternative).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);

        let dynamic = report.trace.dynamic_weights.as_ref().unwrap();
        for i in 0..dynamic.rows() {
            assert!((dynamic.row_sum(i) - 1.0).abs() < 1e-9);
        }

        let weights = report.trace.static_weights.as_ref().unwrap();
        assert_eq!(weights.len(), 34);
    }

    #[test]
    fn test_runs_are_idempotent() {
        let input = documented_input();
        let config = EvalConfig::default();

        let first = EvalRunner::run(&input, &config).unwrap();
        let second = EvalRunner::run(&input, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_config_rejected_before_any_work() {
        let failure =
            EvalRunner::run(&uniform_input(), &EvalConfig::default().with_alpha(0.0)).unwrap_err();

        assert!(matches!(failure.error, EvalError::Config(_)));
        assert!(failure.trace.normalized.is_none());
    }

    #[test]
    fn test_non_square_judgment_identified() {
        let mut input = uniform_input();
        input.second_level[1] = Mat::zeros(2, 3);
        let failure = EvalRunner::run(&input, &EvalConfig::default()).unwrap_err();

        assert_eq!(
            failure.error,
            EvalError::NotSquare { rows: 2, cols: 3 }.for_judgment(JudgmentId::Group(1))
        );
    }

    #[test]
    fn test_undersized_top_level_identified() {
        let mut input = uniform_input();
        input.top_level = Mat::full(1, 1, 0.5);
        let failure = EvalRunner::run(&input, &EvalConfig::default()).unwrap_err();

        assert_eq!(
            failure.error,
            EvalError::PrioritySize { size: 1 }.for_judgment(JudgmentId::TopLevel)
        );
    }

    #[test]
    fn test_group_count_mismatch() {
        let mut input = uniform_input();
        input.top_level = Mat::full(3, 3, 0.5);
        let failure = EvalRunner::run(&input, &EvalConfig::default()).unwrap_err();

        assert_eq!(
            failure.error,
            EvalError::GroupCountMismatch { top: 3, groups: 2 }
        );
    }

    #[test]
    fn test_indicator_count_mismatch() {
        let mut input = uniform_input();
        input.second_level = vec![Mat::full(2, 2, 0.5), Mat::full(3, 3, 0.5)];
        input.top_level = Mat::full(2, 2, 0.5);
        let failure = EvalRunner::run(&input, &EvalConfig::default()).unwrap_err();

        assert_eq!(
            failure.error,
            EvalError::IndicatorCountMismatch {
                weights: 5,
                indicators: 4
            }
        );
    }

    #[test]
    fn test_zero_weight_row_keeps_partial_trace() {
        // Group 0's judgment matrix produces the priority vector
        // [-2, 3], so the static weights come out [-1, 1.5, 0.25, 0.25].
        // Indicator 0 normalizes to [0, 0, 0, 1] (column mean 0.25) and
        // indicators 1-3 are constant (deviation exactly 1), which with
        // alpha = beta = 0.25 makes alternative 0's weighted-deviation
        // row sum exactly zero: -1*2 + 1.5 + 0.25 + 0.25 = 0.
        let input = EvalInput {
            data: Mat::from_rows(&[
                vec![0.0, 5.0, 5.0, 5.0],
                vec![0.0, 5.0, 5.0, 5.0],
                vec![0.0, 5.0, 5.0, 5.0],
                vec![1.0, 5.0, 5.0, 5.0],
            ]),
            directions: DirectionSpec::new(vec![0, 1, 2, 3], vec![]),
            top_level: Mat::full(2, 2, 0.5),
            second_level: vec![
                Mat::from_rows(&[vec![0.0, 0.0], vec![5.0, 5.0]]),
                Mat::full(2, 2, 0.5),
            ],
        };
        let config = EvalConfig::default().with_alpha(0.25).with_beta(0.25);

        let failure = EvalRunner::run(&input, &config).unwrap_err();
        assert_eq!(failure.error, EvalError::ZeroWeightRow { alternative: 0 });

        // Everything up to the deviation matrix was computed and is
        // available for diagnosis; the dynamic weights are not.
        assert!(failure.trace.normalized.is_some());
        assert!(failure.trace.static_weights.is_some());
        assert!(failure.trace.deviation.is_some());
        assert!(failure.trace.dynamic_weights.is_none());

        let weights = failure.trace.static_weights.as_ref().unwrap();
        let expected = [-1.0, 1.5, 0.25, 0.25];
        for (got, want) in weights.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_chains_match_sequential() {
        let input = documented_input();
        let sequential = EvalRunner::run(&input, &EvalConfig::default()).unwrap();
        let parallel =
            EvalRunner::run(&input, &EvalConfig::default().with_parallel(true)).unwrap();
        assert_eq!(sequential, parallel);
    }
}
