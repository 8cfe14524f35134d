use crate::model::params::{MAX_DEFAULT_BINS, MAX_N_BINS, N_BINS_SENTINEL, SAMPLES_PER_BIN};
use crate::model::partition::BinPartition;
use crate::pipeline::EvalError;

/// `min(n_mated / 10, 100)`, never below one bin.
pub fn default_n_bins(n_mated: usize) -> usize {
    (n_mated / SAMPLES_PER_BIN).min(MAX_DEFAULT_BINS).max(1)
}

pub fn resolve_n_bins(requested: Option<i64>, n_mated: usize) -> Result<usize, EvalError> {
    match requested {
        None | Some(N_BINS_SENTINEL) => Ok(default_n_bins(n_mated)),
        Some(n) if n < 1 => Err(EvalError::InvalidInput(format!(
            "number of bins must be at least 1, got {n}"
        ))),
        Some(n) => usize::try_from(n)
            .ok()
            .filter(|&n| n <= MAX_N_BINS)
            .ok_or_else(|| {
                EvalError::InvalidInput(format!(
                    "number of bins must be at most {MAX_N_BINS}, got {n}"
                ))
            }),
    }
}

pub fn compute_bin_partition(
    mated: &[f64],
    non_mated: &[f64],
    n_bins: usize,
) -> Result<BinPartition, EvalError> {
    if mated.is_empty() || non_mated.is_empty() {
        return Err(EvalError::InvalidInput(
            "score sets must not be empty".to_string(),
        ));
    }
    if n_bins < 1 {
        return Err(EvalError::InvalidInput(
            "number of bins must be at least 1".to_string(),
        ));
    }
    if n_bins > MAX_N_BINS {
        return Err(EvalError::InvalidInput(format!(
            "number of bins must be at most {MAX_N_BINS}, got {n_bins}"
        )));
    }

    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for &v in mated.iter().chain(non_mated) {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !(lo.is_finite() && hi.is_finite()) {
        return Err(EvalError::InvalidInput(
            "score range is not finite".to_string(),
        ));
    }
    if hi <= lo {
        return Err(EvalError::InvalidInput(format!(
            "score range has zero width (all scores equal {lo})"
        )));
    }

    let edges = linspace(lo, hi, n_bins + 1);
    // Edges collapse when the range spans fewer representable values than bins.
    if !edges.windows(2).all(|w| w[1] > w[0]) {
        return Err(EvalError::InvalidInput(format!(
            "score range [{lo}, {hi}] too narrow for {n_bins} bins"
        )));
    }
    let centers = edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect();
    Ok(BinPartition { edges, centers })
}

/// Evenly spaced points including both endpoints; the last point is `stop`
/// exactly.
fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    let intervals = (num - 1) as f64;
    let step = (stop - start) / intervals;
    let mut out = Vec::with_capacity(num);
    for i in 0..num - 1 {
        out.push(start + i as f64 * step);
    }
    out.push(stop);
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_bins.rs"]
mod tests;
