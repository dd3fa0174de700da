//! JaCoCo XML report parsing
//!
//! Provides:
//! - Report document model (node tree with document-order tag search)
//! - Line-coverage aggregation per SDK and per source file

mod document;
mod parser;

pub use document::*;
pub use parser::*;

use serde::Serialize;

/// Covered/missed line counts attached to one report node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub covered: u64,
    pub missed: u64,
}

impl Counter {
    pub fn total(&self) -> u64 {
        self.covered + self.missed
    }

    /// Covered lines over total measurable lines, in [0, 1].
    /// A 0/0 counter means nothing to measure and yields 0.0.
    pub fn ratio(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        self.covered as f64 / self.total() as f64
    }
}

/// One line-coverage ratio, scoped to a whole SDK (`file` empty) or a
/// single source file within it. Serializes directly into the
/// metrics-reporting payload shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageResult {
    pub sdk: String,
    pub file: String,
    pub ratio: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_ratio() {
        let counter = Counter {
            covered: 80,
            missed: 20,
        };
        assert!((counter.ratio() - 0.8).abs() < f64::EPSILON);

        let full = Counter {
            covered: 10,
            missed: 0,
        };
        assert_eq!(full.ratio(), 1.0);
    }

    #[test]
    fn test_counter_ratio_zero_total() {
        let counter = Counter {
            covered: 0,
            missed: 0,
        };
        assert_eq!(counter.ratio(), 0.0);
    }
}
