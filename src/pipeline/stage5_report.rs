use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::ScoreSet;
use crate::model::evaluation::Evaluation;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    CurveData, PopulationSummary, ReferenceLine, ReportContext, SummaryData, ToolMeta,
};

pub const CURVE_FILE: &str = "unlinkability.tsv";
pub const SUMMARY_FILE: &str = "summary.json";
pub const REPORT_FILE: &str = "report.txt";

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub evaluation: &'a Evaluation,
    pub mated: &'a ScoreSet,
    pub non_mated: &'a ScoreSet,
    pub title: String,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_curve_tsv(input.evaluation, &out_dir.join(CURVE_FILE))?;

    let summary = build_summary(input);
    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join(SUMMARY_FILE), &json)?;

    let report = render_report_text(&build_report_context(input));
    write_text(&out_dir.join(REPORT_FILE), &report)?;

    tracing::info!(
        out_dir = %out_dir.display(),
        "wrote {}, {} and {}",
        CURVE_FILE,
        SUMMARY_FILE,
        REPORT_FILE
    );
    Ok(())
}

fn write_curve_tsv(eval: &Evaluation, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "bin",
        "lower_edge",
        "upper_edge",
        "center",
        "mated_density",
        "non_mated_density",
        "likelihood_ratio",
        "d_local",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;

    let edges = &eval.partition.edges;
    for bin in 0..eval.n_bins {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            bin,
            edges[bin],
            edges[bin + 1],
            eval.partition.centers[bin],
            eval.mated_density[bin],
            eval.non_mated_density[bin],
            format_ratio(eval.curve.likelihood_ratio[bin]),
            eval.curve.d[bin],
        )?;
    }
    w.flush()
}

fn format_ratio(v: f64) -> String {
    if v.is_finite() {
        v.to_string()
    } else {
        "inf".to_string()
    }
}

fn build_summary(input: &Stage5Input<'_>) -> SummaryData {
    let eval = input.evaluation;
    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        title: input.title.clone(),
        mated: population_summary(input.mated, eval.empty_mated_bins()),
        non_mated: population_summary(input.non_mated, eval.empty_non_mated_bins()),
        omega: eval.omega,
        n_bins: eval.n_bins,
        dsys: eval.dsys,
        d_first_zero: eval.first_non_positive.map(|bin| ReferenceLine {
            bin,
            score: eval.partition.centers[bin],
        }),
        curve: CurveData {
            bin_edges: eval.partition.edges.clone(),
            bin_centers: eval.partition.centers.clone(),
            mated_density: eval.mated_density.clone(),
            non_mated_density: eval.non_mated_density.clone(),
            likelihood_ratio: eval
                .curve
                .likelihood_ratio
                .iter()
                .map(|&v| v.is_finite().then_some(v))
                .collect(),
            d_local: eval.curve.d.clone(),
        },
    }
}

fn population_summary(set: &ScoreSet, empty_bins: usize) -> PopulationSummary {
    let (min, max) = set.range().unwrap_or((0.0, 0.0));
    PopulationSummary {
        path: set.path.display().to_string(),
        format: format!("{:?}", set.format),
        compressed: set.compressed,
        n_scores: set.len(),
        min,
        max,
        empty_bins,
    }
}

fn build_report_context(input: &Stage5Input<'_>) -> ReportContext {
    let eval = input.evaluation;
    let d_max = eval.curve.d.iter().copied().fold(0.0, f64::max);
    let fully_linkable_bins = eval
        .non_mated_density
        .iter()
        .filter(|&&v| v == 0.0)
        .count();
    let mut mated_outside_overlap = 0f64;
    for bin in 0..eval.n_bins {
        if eval.non_mated_density[bin] == 0.0 {
            mated_outside_overlap += eval.mated_density[bin] * eval.partition.width(bin);
        }
    }
    ReportContext {
        title: input.title.clone(),
        dsys: eval.dsys,
        omega: eval.omega,
        n_bins: eval.n_bins,
        n_mated: eval.n_mated,
        n_non_mated: eval.n_non_mated,
        d_first_zero: eval.first_non_positive_center(),
        d_max,
        fully_linkable_bins,
        mated_outside_overlap,
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
