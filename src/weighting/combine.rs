//! Two-level priority combination.

use crate::error::EvalError;

/// Distributes second-level priority vectors under their top-level
/// weights into one flat static weight vector.
///
/// For each group `i`, every entry of `groups[i]` is scaled by `top[i]`
/// and appended in group order. The output length is the sum of the
/// group lengths; it is not padded or truncated — the pipeline runner
/// checks it against the data's leaf-indicator count.
pub fn combine(top: &[f64], groups: &[Vec<f64>]) -> Result<Vec<f64>, EvalError> {
    if top.len() != groups.len() {
        return Err(EvalError::GroupCountMismatch {
            top: top.len(),
            groups: groups.len(),
        });
    }

    let total: usize = groups.iter().map(|g| g.len()).sum();
    let mut flat = Vec::with_capacity(total);
    for (weight, group) in top.iter().zip(groups) {
        flat.extend(group.iter().map(|w| w * weight));
    }
    Ok(flat)
}
