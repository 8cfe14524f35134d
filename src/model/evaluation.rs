use crate::model::partition::BinPartition;

#[derive(Debug, Clone, PartialEq)]
pub struct LocalCurve {
    /// Mated over non-mated density; `+inf` where the non-mated density is 0.
    pub likelihood_ratio: Vec<f64>,
    pub d: Vec<f64>,
}

/// Everything one run hands to the report writers.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub partition: BinPartition,
    pub mated_density: Vec<f64>,
    pub non_mated_density: Vec<f64>,
    pub curve: LocalCurve,
    pub dsys: f64,
    pub first_non_positive: Option<usize>,
    pub omega: f64,
    pub n_bins: usize,
    pub n_mated: usize,
    pub n_non_mated: usize,
}

impl Evaluation {
    /// Score at which D first drops to 0, if it ever does.
    pub fn first_non_positive_center(&self) -> Option<f64> {
        self.first_non_positive.map(|idx| self.partition.centers[idx])
    }

    pub fn empty_mated_bins(&self) -> usize {
        self.mated_density.iter().filter(|&&v| v == 0.0).count()
    }

    pub fn empty_non_mated_bins(&self) -> usize {
        self.non_mated_density.iter().filter(|&&v| v == 0.0).count()
    }
}
