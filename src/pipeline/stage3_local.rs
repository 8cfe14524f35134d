use crate::model::evaluation::LocalCurve;
use crate::pipeline::EvalError;

pub fn validate_omega(omega: f64) -> Result<(), EvalError> {
    if !omega.is_finite() || omega <= 0.0 {
        return Err(EvalError::InvalidInput(format!(
            "omega must be a positive finite number, got {omega}"
        )));
    }
    Ok(())
}

/// Local unlinkability of a single bin.
///
/// Bins without non-mated support are fully linkable. Elsewhere the
/// posterior odds `omega * LR` are mapped onto `2 * p / (1 + p) - 1` and any
/// evidence against linkage (`omega * LR <= 1`) is floored at 0.
pub fn local_d(mated: f64, non_mated: f64, omega: f64) -> (f64, f64) {
    if non_mated == 0.0 {
        return (f64::INFINITY, 1.0);
    }
    let lr = mated / non_mated;
    let odds = omega * lr;
    if odds <= 1.0 {
        return (lr, 0.0);
    }
    (lr, 2.0 * (odds / (1.0 + odds)) - 1.0)
}

pub fn compute_local_d(
    mated_density: &[f64],
    non_mated_density: &[f64],
    omega: f64,
) -> Result<LocalCurve, EvalError> {
    if mated_density.len() != non_mated_density.len() {
        return Err(EvalError::InvalidInput(format!(
            "density length mismatch: mated={}, non-mated={}",
            mated_density.len(),
            non_mated_density.len()
        )));
    }
    validate_omega(omega)?;

    let n = mated_density.len();
    let mut likelihood_ratio = Vec::with_capacity(n);
    let mut d = Vec::with_capacity(n);
    for (&m, &nm) in mated_density.iter().zip(non_mated_density) {
        let (lr, value) = local_d(m, nm, omega);
        likelihood_ratio.push(lr);
        d.push(value);
    }
    Ok(LocalCurve {
        likelihood_ratio,
        d,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_local.rs"]
mod tests;
