//! Report exporter
//!
//! Serializes an analysis into the downloadable report document. The field
//! names and the `$X.XX/month` impact rendering match the dashboard's
//! exported JSON.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::estimator::{AnalysisResult, CloudProvider, Priority, WorkloadType};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReport {
    pub analysis_date: String,
    pub cloud_provider: String,
    pub workload_type: String,
    pub current_monthly_spend: f64,
    pub projected_monthly_savings: f64,
    pub projected_annual_savings: f64,
    pub savings_percentage: String,
    pub recommendations: Vec<ReportRecommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRecommendation {
    pub priority: Priority,
    pub action: String,
    pub impact: String,
    pub description: String,
}

/// Build the report document for a completed analysis
pub fn build_report(
    provider: CloudProvider,
    workload_type: WorkloadType,
    result: &AnalysisResult,
    generated_at: DateTime<Utc>,
) -> CostReport {
    CostReport {
        analysis_date: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        cloud_provider: provider.display_name().to_string(),
        workload_type: workload_type.display_name().to_string(),
        current_monthly_spend: result.current_spend,
        projected_monthly_savings: result.projected_monthly_savings,
        projected_annual_savings: result.projected_annual_savings,
        savings_percentage: result.savings_percentage.clone(),
        recommendations: result
            .recommendations
            .iter()
            .map(|rec| ReportRecommendation {
                priority: rec.priority,
                action: rec.action.clone(),
                impact: rec.impact_label(),
                description: rec.description.clone(),
            })
            .collect(),
    }
}

/// Download filename, keyed by the generation timestamp
pub fn report_filename(generated_at: DateTime<Utc>) -> String {
    format!(
        "cost-optimization-report-{}.json",
        generated_at.timestamp_millis()
    )
}
