//! Min-max rescaling per indicator row.

use crate::matrix::Mat;

use super::types::DirectionSpec;

/// Normalizes raw indicator data into [0, 1], row by row.
///
/// `data` holds one row per indicator and one column per alternative.
/// For a positive row, the row maximum maps to 1.0 and the minimum to
/// 0.0; for a negative row the mapping is inverted. A constant row
/// (max == min) maps to 1.0 in every column. Indices past the end of
/// the matrix are skipped; rows in neither set stay at zero.
///
/// Pure transform with no error paths for well-formed input. An empty
/// row (zero alternatives) is a caller contract violation.
pub fn normalize(data: &Mat, directions: &DirectionSpec) -> Mat {
    let mut out = Mat::zeros(data.rows(), data.cols());

    for &i in &directions.positive {
        if i >= data.rows() {
            continue;
        }
        let row = data.row(i);
        let (min, max) = min_max(row);
        for j in 0..data.cols() {
            let v = if max != min {
                (row[j] - min) / (max - min)
            } else {
                1.0
            };
            out.set(i, j, v);
        }
    }

    // Negative rows run second; an index listed in both sets ends up
    // with the cost orientation.
    for &i in &directions.negative {
        if i >= data.rows() {
            continue;
        }
        let row = data.row(i);
        let (min, max) = min_max(row);
        for j in 0..data.cols() {
            let v = if max != min {
                (max - row[j]) / (max - min)
            } else {
                1.0
            };
            out.set(i, j, v);
        }
    }

    out
}

fn min_max(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min, max)
}
