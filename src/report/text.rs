use crate::report::{ReportContext, format_f64_6, title_line};

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str("Biometric Template Unlinkability Report\n");
    out.push_str("=======================================\n\n");
    out.push_str(&format!("{}\n\n", title_line(&ctx.title, ctx.dsys)));

    out.push_str("1. Inputs\n");
    out.push_str(&format!("Mated scores: {}\n", ctx.n_mated));
    out.push_str(&format!("Non-mated scores: {}\n", ctx.n_non_mated));
    out.push_str(&format!("Omega: {}\n", format_f64_6(ctx.omega)));
    out.push_str(&format!("Bins: {}\n\n", ctx.n_bins));

    out.push_str("2. System unlinkability\n");
    out.push_str(&format!("Dsys: {}\n", format_f64_6(ctx.dsys)));
    out.push_str(&format!("{}\n\n", linkability_statement(ctx.dsys)));

    out.push_str("3. Local unlinkability\n");
    out.push_str(&format!("Max D(s): {}\n", format_f64_6(ctx.d_max)));
    out.push_str(&format!(
        "Bins with D(s) = 1 (no non-mated support): {}\n",
        ctx.fully_linkable_bins
    ));
    out.push_str(&format!(
        "Mated mass outside non-mated support: {}\n",
        format_f64_6(ctx.mated_outside_overlap)
    ));
    match ctx.d_first_zero {
        Some(score) => out.push_str(&format!(
            "D(s) first reaches 0 at score {}\n",
            format_f64_6(score)
        )),
        None => out.push_str("D(s) is positive over the whole score range\n"),
    }

    out
}

pub fn linkability_statement(dsys: f64) -> &'static str {
    if dsys < 0.05 {
        "Mated and non-mated score distributions overlap almost completely; templates are practically unlinkable."
    } else if dsys < 0.25 {
        "Low linkability: a small share of mated comparisons can be told apart from non-mated ones."
    } else if dsys < 0.5 {
        "Moderate linkability: a noticeable share of mated comparisons is distinguishable."
    } else {
        "High linkability: most mated comparisons reveal that the templates share an identity."
    }
}
