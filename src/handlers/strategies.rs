use axum::{response::IntoResponse, Json};
use serde::Serialize;

use crate::catalog::{Effort, Impact, STRATEGIES};

#[derive(Debug, Serialize)]
pub struct StrategiesResponse {
    pub strategies: Vec<StrategyEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyEntry {
    pub category: &'static str,
    /// Range label as shown in the UI, e.g. "25-40%"
    pub savings: String,
    pub impact: Impact,
    pub effort: Effort,
    pub description: &'static str,
    pub implementation_examples: &'static [&'static str],
}

/// Handle GET /api/strategies
/// Returns the static optimization-strategy catalog.
pub async fn list_strategies() -> impl IntoResponse {
    let strategies = STRATEGIES
        .iter()
        .map(|s| StrategyEntry {
            category: s.category,
            savings: s.savings_label(),
            impact: s.impact,
            effort: s.effort,
            description: s.description,
            implementation_examples: s.implementation_examples,
        })
        .collect();

    Json(StrategiesResponse { strategies })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_strategies() {
        let response = list_strategies().await.into_response();
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn test_entry_serialization() {
        let entry = StrategyEntry {
            category: "Right-Sizing",
            savings: "25-40%".to_string(),
            impact: Impact::High,
            effort: Effort::Low,
            description: "desc",
            implementation_examples: &["one"],
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["savings"], "25-40%");
        assert_eq!(json["impact"], "High");
        assert_eq!(json["effort"], "Low");
        assert!(json["implementationExamples"].is_array());
    }
}
