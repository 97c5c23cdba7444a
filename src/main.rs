use std::io::Read;

use anyhow::{Context, Result};

use churn_predictor::artifacts::ArtifactBundle;
use churn_predictor::config::ArtifactConfig;
use churn_predictor::profile::CustomerProfile;
use churn_predictor::report::{self, ReportRow};
use churn_predictor::scorer::ChurnScorer;

/// Launches with no flags: artifacts are read from fixed filenames in the
/// current directory, one customer profile arrives as JSON on stdin, and
/// the result plus the report CSV are written out.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ArtifactConfig::default();
    let artifacts = ArtifactBundle::load(&config)?;
    let scorer = ChurnScorer::new(artifacts);

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read customer profile from stdin")?;
    let profile: CustomerProfile =
        serde_json::from_str(&input).context("Invalid customer profile JSON")?;

    let prediction = scorer.predict(&profile)?;
    print!("{}", report::render_text(&prediction));

    let report_path = config.path_of(report::REPORT_FILE);
    report::save(&[ReportRow::new(&prediction)], &report_path)?;
    println!();
    println!("Report written to {}", report_path.display());

    Ok(())
}
