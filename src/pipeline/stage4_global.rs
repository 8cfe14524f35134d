use crate::pipeline::EvalError;

/// Trapezoidal integral of `y` over the nodes `x`.
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    let mut acc = 0f64;
    for i in 1..x.len().min(y.len()) {
        acc += (x[i] - x[i - 1]) * (y[i] + y[i - 1]) / 2.0;
    }
    acc
}

/// System unlinkability: `integral of D(s) * mated_density(s) ds` over the
/// bin centers.
pub fn compute_dsys(centers: &[f64], d: &[f64], mated_density: &[f64]) -> Result<f64, EvalError> {
    if centers.len() != d.len() || centers.len() != mated_density.len() {
        return Err(EvalError::InvalidInput(format!(
            "length mismatch: centers={}, d={}, mated density={}",
            centers.len(),
            d.len(),
            mated_density.len()
        )));
    }
    let weighted: Vec<f64> = d
        .iter()
        .zip(mated_density)
        .map(|(&d, &m)| d * m)
        .collect();
    Ok(trapezoid(centers, &weighted))
}

pub fn first_non_positive_index(d: &[f64]) -> Option<usize> {
    d.iter().position(|&v| v <= 0.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_global.rs"]
mod tests;
