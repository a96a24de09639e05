//! Run report for a single evaluation
//!
//! Selected with `--report` (or `report = "..."` in the config file):
//! - `human` (or `1`) → human-readable summary to stderr
//! - `json` → JSON to stderr
//! - `json:/path` → JSON to file
//! - `0` or empty → no report
//!
//! The report never goes to stdout, which carries only the result.

use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Output format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFormat {
    Human,
    Json,
}

/// Output destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stderr,
    File(PathBuf),
}

/// Parsed report configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub destination: ReportDestination,
}

impl ReportConfig {
    /// Parse a report spec; `Ok(None)` means reporting is off
    pub fn parse(spec: &str) -> Result<Option<Self>, String> {
        match spec.trim() {
            "" | "0" => Ok(None),
            "1" | "human" => Ok(Some(ReportConfig {
                format: ReportFormat::Human,
                destination: ReportDestination::Stderr,
            })),
            "json" => Ok(Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::Stderr,
            })),
            s if s.starts_with("json:") => {
                let path = &s[5..];
                if path.is_empty() {
                    return Err("Report spec 'json:' is missing a file path".to_string());
                }
                Ok(Some(ReportConfig {
                    format: ReportFormat::Json,
                    destination: ReportDestination::File(PathBuf::from(path)),
                }))
            }
            other => Err(format!(
                "Unknown report spec '{}' (expected human, json, or json:/path)",
                other
            )),
        }
    }
}

/// What one evaluation produced
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub n: u32,
    pub value: u64,
    pub algorithm: String,
    /// Recursive calls made (naive evaluator only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calls: Option<u64>,
    pub elapsed_ms: f64,
}

impl RunReport {
    pub fn render(&self, format: &ReportFormat) -> Result<String, String> {
        match format {
            ReportFormat::Json => serde_json::to_string(self)
                .map_err(|e| format!("Failed to encode report: {}", e)),
            ReportFormat::Human => Ok(self.render_human()),
        }
    }

    fn render_human(&self) -> String {
        let mut out = String::new();
        out.push_str("=== fib report ===\n");
        out.push_str(&format!("  n:          {}\n", self.n));
        out.push_str(&format!("  value:      {}\n", self.value));
        out.push_str(&format!("  algorithm:  {}\n", self.algorithm));
        if let Some(calls) = self.calls {
            out.push_str(&format!("  calls:      {}\n", calls));
        }
        out.push_str(&format!("  elapsed:    {:.3} ms\n", self.elapsed_ms));
        out
    }

    /// Write the report where `config` says
    pub fn emit(&self, config: &ReportConfig) -> Result<(), String> {
        let text = self.render(&config.format)?;
        match &config.destination {
            ReportDestination::Stderr => writeln!(std::io::stderr().lock(), "{}", text.trim_end())
                .map_err(|e| format!("Failed to write report: {}", e)),
            ReportDestination::File(path) => std::fs::write(path, text).map_err(|e| {
                format!("Failed to write report to {}: {}", path.display(), e)
            }),
        }
    }
}
