pub const DEFAULT_OMEGA: f64 = 1.0;
pub const N_BINS_SENTINEL: i64 = -1;
pub const SAMPLES_PER_BIN: usize = 10;
pub const MAX_DEFAULT_BINS: usize = 100;
pub const MAX_N_BINS: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalParams {
    /// Prior odds of a mated pair over a non-mated pair.
    pub omega: f64,
    /// Requested bin count; `None` or [`N_BINS_SENTINEL`] selects the default.
    pub n_bins: Option<i64>,
}

impl EvalParams {
    pub fn new(omega: f64, n_bins: Option<i64>) -> Self {
        Self { omega, n_bins }
    }
}

impl Default for EvalParams {
    fn default() -> Self {
        Self {
            omega: DEFAULT_OMEGA,
            n_bins: None,
        }
    }
}
