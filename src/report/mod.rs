pub mod json;
pub mod text;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PopulationSummary {
    pub path: String,
    pub format: String,
    pub compressed: bool,
    pub n_scores: usize,
    pub min: f64,
    pub max: f64,
    pub empty_bins: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReferenceLine {
    pub bin: usize,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurveData {
    pub bin_edges: Vec<f64>,
    pub bin_centers: Vec<f64>,
    pub mated_density: Vec<f64>,
    pub non_mated_density: Vec<f64>,
    /// `null` where the non-mated density is 0.
    pub likelihood_ratio: Vec<Option<f64>>,
    pub d_local: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub title: String,
    pub mated: PopulationSummary,
    pub non_mated: PopulationSummary,
    pub omega: f64,
    pub n_bins: usize,
    pub dsys: f64,
    pub d_first_zero: Option<ReferenceLine>,
    pub curve: CurveData,
}

#[derive(Debug, Clone)]
pub struct ReportContext {
    pub title: String,
    pub dsys: f64,
    pub omega: f64,
    pub n_bins: usize,
    pub n_mated: usize,
    pub n_non_mated: usize,
    pub d_first_zero: Option<f64>,
    pub d_max: f64,
    pub fully_linkable_bins: usize,
    pub mated_outside_overlap: f64,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Title line as annotated on the unlinkability figure.
pub fn title_line(title: &str, dsys: f64) -> String {
    format!("{}, Dsys = {:.2}", title, dsys)
}
