//! Cost analysis endpoint
//!
//! Accepts the dashboard form fields, applies the configured simulated
//! latency, and returns the estimator's projection. One analysis per
//! session at a time.

use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::{
    auth::AuthInfo,
    config::Config,
    error::AppError,
    estimator::{self, AnalysisInput, AnalysisResult, CloudProvider, WorkloadType},
    session::{InFlightAnalyses, SessionStore},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<SessionStore>,
    pub analyses: Arc<InFlightAnalyses>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub provider: CloudProvider,
    pub workload_type: WorkloadType,
    /// Free-text form field: number or numeric string
    #[serde(default)]
    pub monthly_spend: Value,
    /// Free-text form field: number or numeric string
    #[serde(default)]
    pub instance_count: Value,
}

/// Handle POST /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthInfo>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    // Hold the slot for the whole simulated computation; dropped on return
    // or when the client disconnects.
    let _guard = state.analyses.begin(&auth.token).ok_or_else(|| {
        AppError::AnalysisInProgress("An analysis is already running for this session".to_string())
    })?;

    let latency = state.config.analysis.simulated_latency_ms;
    if latency > 0 {
        tokio::time::sleep(Duration::from_millis(latency)).await;
    }

    let input = AnalysisInput::new(
        req.provider,
        req.workload_type,
        coerce_f64(&req.monthly_spend),
        coerce_u64(&req.instance_count),
    );

    let result = estimator::estimate(&input);

    info!(
        user = %auth.email,
        provider = ?input.provider,
        workload = ?input.workload_type,
        spend = input.monthly_spend,
        "Analysis completed: projected monthly savings ${:.2}",
        result.projected_monthly_savings
    );

    Ok(Json(result))
}

/// Parse a form value as a float, treating anything unparsable as 0
fn coerce_f64(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Parse a form value as an integer, treating anything unparsable as 0.
/// Fractional numbers are truncated; negative values become 0.
fn coerce_u64(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f as u64).unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}
