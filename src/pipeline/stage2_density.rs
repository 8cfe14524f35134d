use crate::model::partition::BinPartition;

pub fn count_bins(scores: &[f64], partition: &BinPartition) -> Vec<u64> {
    let mut counts = vec![0u64; partition.n_bins()];
    for &v in scores {
        if let Some(bin) = partition.bin_index(v) {
            counts[bin] += 1;
        }
    }
    counts
}

/// Normalized histogram: `sum(density[i] * width[i]) == 1` unless no sample
/// falls inside the partition, in which case every bin is 0.
pub fn estimate_density(scores: &[f64], partition: &BinPartition) -> Vec<f64> {
    let counts = count_bins(scores, partition);
    let total: u64 = counts.iter().sum();
    if total == 0 {
        return vec![0.0; counts.len()];
    }
    let total = total as f64;
    counts
        .iter()
        .enumerate()
        .map(|(bin, &c)| c as f64 / (total * partition.width(bin)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_density.rs"]
mod tests;
