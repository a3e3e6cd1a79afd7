//! Score computation and stable descending sort.

use std::fmt;

use crate::matrix::Mat;

/// One ranked alternative.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedEntry {
    /// 1-based rank position; 1 is best.
    pub rank: usize,
    /// 1-based alternative id, in original input order.
    pub alternative: usize,
    /// The efficiency value.
    pub score: f64,
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} alternative {}: {:.4}",
            self.rank, self.alternative, self.score
        )
    }
}

/// Computes one efficiency value per alternative: the dot product of
/// its normalized indicator row and its own dynamic weight row.
///
/// `a` and `w` must have the same alternatives × indicators shape.
pub fn efficiency_values(a: &Mat, w: &Mat) -> Vec<f64> {
    debug_assert_eq!((a.rows(), a.cols()), (w.rows(), w.cols()));
    (0..a.rows())
        .map(|i| {
            a.row(i)
                .iter()
                .zip(w.row(i))
                .map(|(x, wi)| x * wi)
                .sum()
        })
        .collect()
}

/// Ranks alternatives by efficiency value, descending.
///
/// The sort is stable, so equal scores keep their original order: the
/// lower original index ranks higher on an exact tie.
pub fn rank(values: &[f64]) -> Vec<RankedEntry> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    indices
        .iter()
        .enumerate()
        .map(|(pos, &i)| RankedEntry {
            rank: pos + 1,
            alternative: i + 1,
            score: values[i],
        })
        .collect()
}
