//! Request and response bodies for the policy responder API
//!
//! Incoming requests are deserialized leniently (every field optional) and then
//! normalized into `PolicySpec` / `AnalysisSpec`, which is where required
//! fields are enforced and defaults are applied.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FRAMEWORK: &str = "general security";
pub const DEFAULT_LANGUAGE: &str = "Rego";
pub const DEFAULT_ANALYSIS_TYPE: &str = "explain";

pub const SERVICE_NAME: &str = "Niyama BitNet AI Service";
pub const SERVICE_DESCRIPTION: &str =
    "AI-powered policy generation and analysis using BitNet b1.58 2B4T";
pub const SERVICE_VERSION: &str = "1.0.0";

/// Output format selected by the request's `language` label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyFormat {
    Rego,
    Generic,
}

impl PolicyFormat {
    /// Only `rego` (any casing) selects Rego; every other label is generic.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("rego") {
            PolicyFormat::Rego
        } else {
            PolicyFormat::Generic
        }
    }
}

/// POST /generate-policy body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerationRequest {
    pub description: Option<String>,
    pub framework: Option<String>,
    pub language: Option<String>,
}

/// Validated generation input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicySpec {
    pub description: String,
    pub framework: String,
    /// Label as supplied by the caller, echoed back verbatim
    pub language: String,
    pub format: PolicyFormat,
}

impl GenerationRequest {
    pub fn into_spec(self) -> Result<PolicySpec, AppError> {
        let description = required(self.description, "description")?;
        let framework = self
            .framework
            .unwrap_or_else(|| DEFAULT_FRAMEWORK.to_string());
        let language = self.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
        let format = PolicyFormat::from_label(&language);

        Ok(PolicySpec {
            description,
            framework,
            language,
            format,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationResponse {
    pub policy: String,
    pub description: String,
    pub framework: String,
    pub language: String,
    pub note: String,
}

/// POST /analyze-policy body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisRequest {
    pub policy: Option<String>,
    pub analysis_type: Option<String>,
}

/// Validated analysis input. `analysis_type` is an opaque label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSpec {
    pub policy: String,
    pub analysis_type: String,
}

impl AnalysisRequest {
    pub fn into_spec(self) -> Result<AnalysisSpec, AppError> {
        let policy = required(self.policy, "policy")?;
        let analysis_type = self
            .analysis_type
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_ANALYSIS_TYPE.to_string());

        Ok(AnalysisSpec {
            policy,
            analysis_type,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResponse {
    pub analysis: String,
    pub suggestions: Vec<String>,
    pub compliance: Vec<String>,
    pub issues: Vec<String>,
}

/// GET /health body. No inference backend is ever loaded in mock mode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
    pub version: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            model_loaded: false,
            version: SERVICE_VERSION.to_string(),
        }
    }
}

/// GET / body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceInfo {
    pub name: String,
    pub description: String,
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            name: SERVICE_NAME.to_string(),
            description: SERVICE_DESCRIPTION.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AppError::MissingField { field }),
    }
}
