pub mod stage1_bins;
pub mod stage2_density;
pub mod stage3_local;
pub mod stage4_global;
pub mod stage5_report;

use crate::model::evaluation::Evaluation;
use crate::model::params::EvalParams;
use crate::pipeline::stage1_bins::{compute_bin_partition, resolve_n_bins};
use crate::pipeline::stage2_density::estimate_density;
use crate::pipeline::stage3_local::compute_local_d;
use crate::pipeline::stage4_global::{compute_dsys, first_non_positive_index};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Population {
    Mated,
    NonMated,
}

impl Population {
    pub fn label(self) -> &'static str {
        match self {
            Population::Mated => "mated",
            Population::NonMated => "non-mated",
        }
    }
}

/// Rejects empty or non-finite sample sets before anything is binned.
pub fn validate_scores(scores: &[f64], population: Population) -> Result<(), EvalError> {
    if scores.is_empty() {
        return Err(EvalError::InvalidInput(format!(
            "{} score set is empty",
            population.label()
        )));
    }
    if let Some((idx, v)) = scores.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(EvalError::InvalidInput(format!(
            "{} score #{} is not finite ({})",
            population.label(),
            idx,
            v
        )));
    }
    Ok(())
}

pub fn evaluate(
    mated: &[f64],
    non_mated: &[f64],
    params: &EvalParams,
) -> Result<Evaluation, EvalError> {
    validate_scores(mated, Population::Mated)?;
    validate_scores(non_mated, Population::NonMated)?;

    let n_bins = resolve_n_bins(params.n_bins, mated.len())?;
    let partition = compute_bin_partition(mated, non_mated, n_bins)?;

    let mated_density = estimate_density(mated, &partition);
    let non_mated_density = estimate_density(non_mated, &partition);

    let curve = compute_local_d(&mated_density, &non_mated_density, params.omega)?;
    let dsys = compute_dsys(&partition.centers, &curve.d, &mated_density)?;
    let first_non_positive = first_non_positive_index(&curve.d);

    Ok(Evaluation {
        partition,
        mated_density,
        non_mated_density,
        curve,
        dsys,
        first_non_positive,
        omega: params.omega,
        n_bins,
        n_mated: mated.len(),
        n_non_mated: non_mated.len(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/evaluate.rs"]
mod tests;
