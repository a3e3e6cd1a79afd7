//! Consistency transformation.

use crate::matrix::Mat;

/// Transforms a fuzzy judgment matrix into an additively consistent one.
///
/// With `xi[i]` the row sums of `r`, the output is
/// `Q[i][j] = (xi[i] - xi[j]) / (2n) + 0.5`. The result is consistent
/// by construction for any real-valued square input: the diagonal is
/// exactly 0.5 and `Q[i][j] + Q[j][i] = 1` for every pair. Single
/// closed-form pass, O(n²), no iteration or convergence check.
///
/// # Panics
///
/// Panics if `r` is not square. The pipeline runner validates shapes
/// up front and reports a typed error instead.
pub fn to_consistent(r: &Mat) -> Mat {
    assert!(r.is_square(), "judgment matrix must be square");
    let n = r.rows();
    let xi: Vec<f64> = (0..n).map(|i| r.row_sum(i)).collect();

    let mut q = Mat::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            q.set(i, j, (xi[i] - xi[j]) / (2.0 * n as f64) + 0.5);
        }
    }
    q
}
