//! Covx - JaCoCo coverage metrics extractor
//!
//! A library for turning JaCoCo XML line-coverage reports into per-SDK
//! and per-file coverage ratios:
//! - Report document model with document-order tag search
//! - One ratio per scope: SDK aggregate first, then each source file
//! - Metrics-payload-ready serialization of results

pub mod config;
pub mod error;
pub mod jacoco;
pub mod output;

pub use error::{Error, Result};
pub use jacoco::{
    parse_report, parse_report_string, Counter, CoverageResult, ReportDocument, ReportNode,
};
