//! Deviation degrees and per-alternative dynamic weights.

use crate::error::EvalError;
use crate::matrix::Mat;

/// Computes the deviation-degree factor of every cell from its column
/// mean.
///
/// `a` holds one row per alternative and one column per indicator,
/// already normalized so that higher means better. With `s[j]` the
/// column means:
///
/// - `A[i][j] <= s[j]`: `S[i][j] = (alpha + s[j]) / (alpha + A[i][j])`
/// - otherwise:         `S[i][j] = (beta + A[i][j]) / (beta + s[j])`
///
/// Both branches are >= 1, growing with the distance from the mean.
/// `alpha` and `beta` are small positive constants guarding against
/// division by zero when a cell or mean is exactly 0.
///
/// Requires at least one alternative row; column means are undefined on
/// an empty matrix.
pub fn deviation_degrees(a: &Mat, alpha: f64, beta: f64) -> Mat {
    let (rows, cols) = (a.rows(), a.cols());

    let mut means = vec![0.0; cols];
    for j in 0..cols {
        for i in 0..rows {
            means[j] += a.get(i, j);
        }
        means[j] /= rows as f64;
    }

    let mut s = Mat::zeros(rows, cols);
    for i in 0..rows {
        for j in 0..cols {
            let v = a.get(i, j);
            let d = if v <= means[j] {
                (alpha + means[j]) / (alpha + v)
            } else {
                (beta + v) / (beta + means[j])
            };
            s.set(i, j, d);
        }
    }
    s
}

/// Blends static weights with deviation degrees and row-normalizes,
/// producing each alternative's own indicator weight row.
///
/// Every cell of `devs` is multiplied by its indicator's static weight,
/// then each row is divided by its sum so the output is row-stochastic.
/// A row whose weighted sum is zero cannot be normalized and is
/// reported as [`EvalError::ZeroWeightRow`] — malformed input, never
/// silently skipped.
pub fn dynamic_weights(devs: &Mat, static_weights: &[f64]) -> Result<Mat, EvalError> {
    if static_weights.len() != devs.cols() {
        return Err(EvalError::IndicatorCountMismatch {
            weights: static_weights.len(),
            indicators: devs.cols(),
        });
    }

    let mut out = Mat::zeros(devs.rows(), devs.cols());
    for i in 0..devs.rows() {
        let weighted: Vec<f64> = (0..devs.cols())
            .map(|j| static_weights[j] * devs.get(i, j))
            .collect();
        let sum: f64 = weighted.iter().sum();
        if sum == 0.0 {
            return Err(EvalError::ZeroWeightRow { alternative: i });
        }
        for (j, w) in weighted.iter().enumerate() {
            out.set(i, j, w / sum);
        }
    }
    Ok(out)
}
