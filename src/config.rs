use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub project: Project,
    /// SDK name -> report path; paths may be glob patterns
    #[serde(default)]
    pub reports: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct Project {
    pub name: String,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse covx.toml")?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (sdk, pattern) in &self.reports {
            if pattern.trim().is_empty() {
                anyhow::bail!("Report path for SDK '{}' is empty", sdk);
            }
        }

        Ok(())
    }

    /// Resolve the report path configured for an SDK. Glob patterns are
    /// expanded and the first match wins.
    pub fn report_path(&self, sdk: &str) -> Result<PathBuf> {
        let pattern = self
            .reports
            .get(sdk)
            .with_context(|| format!("No report configured for SDK '{}'", sdk))?;

        resolve_report(pattern)
    }

    pub fn sdk_names(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.reports.keys().collect();
        names.sort();
        names
    }
}

/// Expand a report path that may contain glob metacharacters
pub fn resolve_report(pattern: &str) -> Result<PathBuf> {
    if !pattern.contains(['*', '?', '[']) {
        return Ok(PathBuf::from(pattern));
    }

    glob::glob(pattern)
        .with_context(|| format!("Invalid glob pattern: {}", pattern))?
        .find_map(|entry| entry.ok())
        .with_context(|| format!("No report matches pattern: {}", pattern))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[project]
name = "firebase-android-sdk"

[reports]
firebase-common = "firebase-common/build/reports/jacoco/report.xml"
firebase-database = "firebase-database/build/reports/jacoco/*.xml"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.project.name, "firebase-android-sdk");
        assert_eq!(config.reports.len(), 2);
        assert_eq!(
            config.sdk_names(),
            vec!["firebase-common", "firebase-database"]
        );
    }

    #[test]
    fn test_empty_report_path_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[project]
name = "p"

[reports]
sdk = ""
"#
        )
        .unwrap();

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_resolve_report_literal_path() {
        let path = resolve_report("build/report.xml").unwrap();
        assert_eq!(path, PathBuf::from("build/report.xml"));
    }

    #[test]
    fn test_resolve_report_glob() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.xml");
        fs::write(&report, "<report/>").unwrap();

        let pattern = format!("{}/*.xml", dir.path().display());
        assert_eq!(resolve_report(&pattern).unwrap(), report);
    }

    #[test]
    fn test_resolve_report_glob_no_match() {
        let dir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.xml", dir.path().display());
        assert!(resolve_report(&pattern).is_err());
    }
}
