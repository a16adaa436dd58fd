use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{validate, BreakdownView, PointsEngine, Receipt, ReceiptError};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a receipt JSON payload
    pub(crate) path: PathBuf,
    /// Print the points and breakdown as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { path, json } = args;
    print!("{}", score_file(&path, json)?);
    Ok(())
}

/// Scores locally; no server or store is involved.
fn score_file(path: &Path, json: bool) -> Result<String, AppError> {
    let raw = fs::read(path)?;
    let receipt: Receipt = serde_json::from_slice(&raw)?;

    let validated = validate(&receipt).map_err(ReceiptError::from)?;
    let outcome = PointsEngine::new().score(&validated);
    let view = BreakdownView {
        points: outcome.points,
        breakdown: outcome.breakdown(),
    };

    if json {
        let mut rendered = serde_json::to_string_pretty(&view)?;
        rendered.push('\n');
        return Ok(rendered);
    }

    let mut rendered = format!(
        "Receipt from {} on {} at {} ({} items, total {})\n\n",
        receipt.retailer,
        receipt.purchase_date,
        receipt.purchase_time,
        receipt.items.len(),
        receipt.total
    );
    rendered.push_str(&render_breakdown(&view));
    Ok(rendered)
}

/// Shared by `score` and `submit`.
pub(crate) fn render_breakdown(view: &BreakdownView) -> String {
    let mut rendered = format!("Total Points: {}\n\n", view.points);
    rendered.push_str("Breakdown of Points:\n");
    for line in &view.breakdown {
        rendered.push_str(&format!("- {line}\n"));
    }
    rendered
}
