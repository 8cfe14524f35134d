/// Uniform bin partition shared by the mated and non-mated populations.
#[derive(Debug, Clone, PartialEq)]
pub struct BinPartition {
    pub edges: Vec<f64>,
    pub centers: Vec<f64>,
}

impl BinPartition {
    pub fn n_bins(&self) -> usize {
        self.centers.len()
    }

    pub fn lower(&self) -> f64 {
        self.edges[0]
    }

    pub fn upper(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    pub fn width(&self, bin: usize) -> f64 {
        self.edges[bin + 1] - self.edges[bin]
    }

    /// Bins are half-open `[lo, hi)` except the last one, which also holds
    /// the upper edge. Values outside the partition have no bin.
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        if !(value >= self.lower() && value <= self.upper()) {
            return None;
        }
        let idx = self.edges.partition_point(|&e| e <= value);
        Some(idx.saturating_sub(1).min(self.n_bins() - 1))
    }
}
