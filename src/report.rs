//! Output formatting for nakedret results.
//!
//! Supports three output formats:
//! - Text: one line per finding, the classic `file:line func naked returns
//!   on N line function` form
//! - JSON: structured output for programmatic consumption
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::detect::{DetectionResult, Diagnostic, RULE_ID};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
    Sarif,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Text => write!(f, "text"),
            Format::Json => write!(f, "json"),
            Format::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "sarif" => Ok(Format::Sarif),
            _ => Err(format!(
                "invalid format {:?}, must be 'text', 'json', or 'sarif'",
                s
            )),
        }
    }
}

// =============================================================================
// Text Format
// =============================================================================

/// Write one line per diagnostic.
pub fn write_text<W: Write>(out: &mut W, result: &DetectionResult) -> anyhow::Result<()> {
    for diagnostic in &result.diagnostics {
        writeln!(out, "{}", diagnostic)?;
    }
    Ok(())
}

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub max_lines: u32,
    pub files_scanned: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Write results in JSON format.
pub fn write_json<W: Write>(
    out: &mut W,
    result: &DetectionResult,
    max_lines: u32,
) -> anyhow::Result<()> {
    let report = JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        max_lines,
        files_scanned: result.scanned,
        diagnostics: result.diagnostics.clone(),
    };

    let json = serde_json::to_string_pretty(&report)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

// =============================================================================
// SARIF Format
// =============================================================================

const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const TOOL_NAME: &str = "nakedret";

#[derive(Serialize, Deserialize)]
pub struct SarifReport {
    pub version: String,
    #[serde(rename = "$schema")]
    pub schema: String,
    pub runs: Vec<SarifRun>,
}

#[derive(Serialize, Deserialize)]
pub struct SarifRun {
    pub tool: SarifTool,
    pub results: Vec<SarifResult>,
}

#[derive(Serialize, Deserialize)]
pub struct SarifTool {
    pub driver: SarifDriver,
}

#[derive(Serialize, Deserialize)]
pub struct SarifDriver {
    pub name: String,
    pub version: String,
    pub rules: Vec<SarifRule>,
}

#[derive(Serialize, Deserialize)]
pub struct SarifRule {
    pub id: String,
    pub name: String,
    #[serde(rename = "shortDescription")]
    pub short_description: SarifMessage,
    #[serde(rename = "fullDescription")]
    pub full_description: SarifMessage,
    #[serde(rename = "defaultConfiguration")]
    pub default_config: SarifRuleConfig,
}

#[derive(Serialize, Deserialize)]
pub struct SarifRuleConfig {
    pub level: String,
}

#[derive(Serialize, Deserialize)]
pub struct SarifResult {
    #[serde(rename = "ruleId")]
    pub rule_id: String,
    pub level: String,
    pub message: SarifMessage,
    pub locations: Vec<SarifLocation>,
}

#[derive(Serialize, Deserialize)]
pub struct SarifMessage {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
pub struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    pub physical_location: SarifPhysicalLocation,
}

#[derive(Serialize, Deserialize)]
pub struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    pub artifact_location: SarifArtifact,
    pub region: SarifRegion,
}

#[derive(Serialize, Deserialize)]
pub struct SarifArtifact {
    pub uri: String,
}

#[derive(Serialize, Deserialize)]
pub struct SarifRegion {
    #[serde(rename = "startLine")]
    pub start_line: usize,
}

fn naked_return_rule() -> SarifRule {
    SarifRule {
        id: RULE_ID.to_string(),
        name: "NakedReturn".to_string(),
        short_description: SarifMessage {
            text: "Naked return in a long function with named results".to_string(),
        },
        full_description: SarifMessage {
            text: "A bare return in a long function silently returns whatever the named \
                   result variables hold at that point."
                .to_string(),
        },
        default_config: SarifRuleConfig {
            level: "warning".to_string(),
        },
    }
}

fn diagnostic_to_sarif(d: &Diagnostic) -> SarifResult {
    SarifResult {
        rule_id: RULE_ID.to_string(),
        level: "warning".to_string(),
        message: SarifMessage {
            text: format!("{} naked returns on {} line function", d.function, d.span),
        },
        locations: vec![SarifLocation {
            physical_location: SarifPhysicalLocation {
                artifact_location: SarifArtifact {
                    uri: d.file.replace('\\', "/"),
                },
                region: SarifRegion { start_line: d.line },
            },
        }],
    }
}

/// Write results in SARIF format.
pub fn write_sarif<W: Write>(out: &mut W, result: &DetectionResult) -> anyhow::Result<()> {
    let report = SarifReport {
        version: SARIF_VERSION.to_string(),
        schema: SARIF_SCHEMA.to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: TOOL_NAME.to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    rules: vec![naked_return_rule()],
                },
            },
            results: result.diagnostics.iter().map(diagnostic_to_sarif).collect(),
        }],
    };

    let json = serde_json::to_string_pretty(&report)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

/// Write `result` in `format`.
pub fn write<W: Write>(
    out: &mut W,
    format: Format,
    result: &DetectionResult,
    max_lines: u32,
) -> anyhow::Result<()> {
    match format {
        Format::Text => write_text(out, result),
        Format::Json => write_json(out, result, max_lines),
        Format::Sarif => write_sarif(out, result),
    }
}
