//! Result presentation: colored table and metrics JSON

use anyhow::Result;
use colored::Colorize;

use crate::jacoco::CoverageResult;

/// Print results as an aligned table, one row per scope
pub fn print_table(results: &[CoverageResult]) {
    for result in results {
        let percent = colorize_percent(result.ratio);

        if result.file.is_empty() {
            println!("{} {}", percent, result.sdk.bold());
        } else {
            println!("{}   {}", percent, result.file);
        }
    }
}

fn colorize_percent(ratio: f64) -> colored::ColoredString {
    let percent = format!("{:>6.1}%", ratio * 100.0);
    if ratio >= 0.8 {
        percent.green()
    } else if ratio >= 0.5 {
        percent.yellow()
    } else {
        percent.red()
    }
}

/// Serialize results into the metrics-reporting payload shape
pub fn to_json(results: &[CoverageResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
