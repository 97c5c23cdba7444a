//! Result rendering and the downloadable report.
//!
//! The report is a small CSV, one row per prediction, generated on demand.
//! Nothing is persisted beyond it.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;

use crate::scorer::Prediction;

/// Default filename for the exported report.
pub const REPORT_FILE: &str = "churn_prediction_report.csv";

/// One exported prediction record.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Churn Probability (%)")]
    pub churn_probability_pct: u8,
    #[serde(rename = "Risk Level")]
    pub risk_level: String,
}

impl ReportRow {
    /// Build a row for a prediction, stamped with the current local time.
    pub fn new(prediction: &Prediction) -> Self {
        Self::with_timestamp(prediction, Local::now().to_rfc3339())
    }

    /// Build a row with an explicit timestamp. Keeps report output
    /// reproducible in tests.
    pub fn with_timestamp(prediction: &Prediction, timestamp: String) -> Self {
        Self {
            timestamp,
            churn_probability_pct: prediction.percent,
            risk_level: prediction.band.label().to_string(),
        }
    }
}

/// Serialize rows as CSV (header plus one line per row).
pub fn write_csv<W: Write>(rows: &[ReportRow], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer
            .serialize(row)
            .context("Failed to serialize report row")?;
    }
    csv_writer.flush().context("Failed to flush report")?;
    Ok(())
}

/// Write the report file at `path`.
pub fn save<P: AsRef<Path>>(rows: &[ReportRow], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create report file: {}", path.display()))?;
    write_csv(rows, file)?;
    log::info!("Wrote {} report row(s) to {}", rows.len(), path.display());
    Ok(())
}

/// Plain-text rendering of one prediction result: probability metric, risk
/// label, triggered risk factors and the recommended action.
pub fn render_text(prediction: &Prediction) -> String {
    let mut out = String::new();
    writeln!(out, "Prediction Result").unwrap();
    writeln!(out, "Churn Probability: {}%", prediction.percent).unwrap();
    writeln!(out, "{}", prediction.band.label()).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Key Risk Factors").unwrap();
    if prediction.flags.is_empty() {
        writeln!(out, "No major churn risk factors detected").unwrap();
    } else {
        for flag in &prediction.flags {
            writeln!(out, "- {}", flag.description()).unwrap();
        }
    }
    writeln!(out).unwrap();
    writeln!(out, "Recommended Action").unwrap();
    writeln!(out, "{}", prediction.recommendation).unwrap();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::RiskFlag;
    use crate::risk::RiskBand;

    fn high_prediction() -> Prediction {
        Prediction {
            probability: 0.75,
            percent: 75,
            band: RiskBand::High,
            flags: vec![RiskFlag::HighAge, RiskFlag::SingleProduct],
            recommendation: "Assign relationship manager & offer loyalty incentives",
        }
    }

    #[test]
    fn csv_has_expected_header_and_one_row_per_prediction() {
        let rows = vec![
            ReportRow::with_timestamp(&high_prediction(), "2026-08-06T12:00:00+00:00".to_string()),
            ReportRow::with_timestamp(&high_prediction(), "2026-08-06T12:05:00+00:00".to_string()),
        ];
        let mut buf = Vec::new();
        write_csv(&rows, &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Timestamp,Churn Probability (%),Risk Level");
        assert_eq!(lines[1], "2026-08-06T12:00:00+00:00,75,High Risk");
    }

    #[test]
    fn render_text_lists_flags_and_recommendation() {
        let text = render_text(&high_prediction());
        assert!(text.contains("Churn Probability: 75%"));
        assert!(text.contains("High Risk"));
        assert!(text.contains("- High Age"));
        assert!(text.contains("- Single Product Usage"));
        assert!(text.contains("Assign relationship manager"));
    }

    #[test]
    fn render_text_handles_empty_flags() {
        let mut prediction = high_prediction();
        prediction.flags.clear();
        let text = render_text(&prediction);
        assert!(text.contains("No major churn risk factors detected"));
    }
}
