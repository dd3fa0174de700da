//! Line-coverage aggregation over a parsed report

use std::fs;
use std::path::Path;

use crate::error::Result;
use super::{CoverageResult, ReportDocument, ReportNode};

const LINE_COUNTER: &str = "LINE";
const SOURCEFILE_TAG: &str = "sourcefile";

/// Parse a JaCoCo XML report file
pub fn parse_report(path: &Path, sdk: &str) -> Result<Vec<CoverageResult>> {
    let content = fs::read_to_string(path)?;
    parse_report_string(&content, sdk)
}

/// Parse JaCoCo XML report content from a string
pub fn parse_report_string(xml: &str, sdk: &str) -> Result<Vec<CoverageResult>> {
    let document = ReportDocument::parse(xml)?;
    parse(sdk, &document)
}

/// Extract one result per scope: the SDK-level aggregate first, then one
/// per source file in document order. Any error aborts the whole parse
/// with no partial results.
pub fn parse(sdk: &str, document: &ReportDocument) -> Result<Vec<CoverageResult>> {
    let mut results = Vec::new();

    let root = document.root()?;
    results.push(CoverageResult {
        sdk: sdk.to_string(),
        file: String::new(),
        ratio: ratio_of(root)?,
    });

    for source in document.find_all(SOURCEFILE_TAG) {
        // A nameless sourcefile result would be meaningless, so this is
        // fatal rather than skipped
        let name = source.attribute("name")?;
        results.push(CoverageResult {
            sdk: sdk.to_string(),
            file: name.to_string(),
            ratio: ratio_of(source)?,
        });
    }

    Ok(results)
}

/// Line-coverage ratio of a single node. No LINE counter means no
/// coverage data and yields 0.0.
pub fn ratio_of(node: &ReportNode) -> Result<f64> {
    Ok(node
        .counter(LINE_COUNTER)?
        .map(|counter| counter.ratio())
        .unwrap_or(0.0))
}
