//! Priority (ranking) vector extraction.

use crate::error::EvalError;
use crate::matrix::Mat;

/// Derives a priority vector from a consistent matrix's row sums.
///
/// With `a = (n - 1) / 2`, each weight is
/// `w[i] = 1/n - 1/(2a) + rowSum(f[i]) / (n * a)`. For the all-0.5
/// matrix (a maximally ambiguous relation) this yields the uniform
/// vector `1/n`. The output is *not* renormalized: the formula leaves
/// minor drift from an exact unit sum, and downstream consumers must
/// only assume an approximate sum.
///
/// A matrix smaller than 2×2 makes `a = 0` and the formula undefined;
/// it is rejected with [`EvalError::PrioritySize`] rather than
/// propagating NaN.
pub fn priority_vector(f: &Mat) -> Result<Vec<f64>, EvalError> {
    let n = f.rows();
    if n < 2 {
        return Err(EvalError::PrioritySize { size: n });
    }

    let nf = n as f64;
    let a = (nf - 1.0) / 2.0;
    Ok((0..n)
        .map(|i| 1.0 / nf - 1.0 / (2.0 * a) + f.row_sum(i) / (nf * a))
        .collect())
}
