//! Report export endpoint
//!
//! Turns a completed analysis into the downloadable JSON report. The
//! Content-Disposition header carries the timestamped filename so the
//! browser saves it directly.

use axum::{
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    error::AppError,
    estimator::{AnalysisResult, CloudProvider, WorkloadType},
    report,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub provider: CloudProvider,
    pub workload_type: WorkloadType,
    pub result: AnalysisResult,
}

/// Handle POST /api/report
pub async fn handle_export(Json(req): Json<ExportRequest>) -> Result<Response, AppError> {
    let now = Utc::now();
    let document = report::build_report(req.provider, req.workload_type, &req.result, now);
    let filename = report::report_filename(now);

    let headers = [
        (CONTENT_TYPE, "application/json".to_string()),
        (
            CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((headers, Json(document)).into_response())
}
