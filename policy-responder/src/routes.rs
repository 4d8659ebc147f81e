//! HTTP route handlers for the policy responder API

use crate::{
    error::{AppError, AppResult},
    models::{
        AnalysisRequest, AnalysisResponse, GenerationRequest, GenerationResponse, HealthStatus,
        ServiceInfo,
    },
    render, AppState,
};
use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use tracing::{debug, error, info};

/// GET / - Service metadata
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(state.service.as_ref().clone())
}

/// GET /health - Constant health triple; `model_loaded` is always false
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

/// POST /generate-policy - Render a placeholder policy from a description
pub async fn generate_policy(
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> AppResult<Json<GenerationResponse>> {
    debug!("Handling POST /generate-policy");

    let Json(request) = payload?;
    let spec = request.into_spec()?;

    info!("Generating mock policy for: {}", spec.description);

    let policy = render::render_policy(&spec)
        .context("Failed to render policy document")
        .map_err(|e| log_internal("Error generating policy", e))?;

    Ok(Json(GenerationResponse {
        policy,
        description: spec.description,
        framework: spec.framework,
        language: spec.language,
        note: render::MOCK_NOTE.to_string(),
    }))
}

/// POST /analyze-policy - Return placeholder analysis for a submitted policy
pub async fn analyze_policy(
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> AppResult<Json<AnalysisResponse>> {
    debug!("Handling POST /analyze-policy");

    let Json(request) = payload?;
    let spec = request.into_spec()?;

    info!("Analyzing policy with type: {}", spec.analysis_type);

    let analysis = render::render_analysis(&spec)
        .context("Failed to render policy analysis")
        .map_err(|e| log_internal("Error analyzing policy", e))?;

    Ok(Json(AnalysisResponse {
        analysis,
        suggestions: render::mock_suggestions(),
        compliance: render::mock_compliance(),
        issues: render::mock_issues(),
    }))
}

/// Log an internal failure with its full cause chain before it is returned.
fn log_internal(what: &str, err: anyhow::Error) -> AppError {
    error!("{}: {}", what, err);
    error!("Trace: {:?}", err);
    AppError::Internal(err)
}
