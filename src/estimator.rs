//! Savings estimator
//!
//! Maps user-supplied cloud metrics to a savings projection and an ordered
//! list of recommendations. The spend math is deterministic; only the two
//! cosmetic score fields draw from a random source, which is injectable for
//! tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum number of recommendations returned per analysis
pub const MAX_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Oci,
    Aws,
    Azure,
    Gcp,
}

impl CloudProvider {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Oci => "Oracle Cloud (OCI)",
            Self::Aws => "Amazon Web Services",
            Self::Azure => "Microsoft Azure",
            Self::Gcp => "Google Cloud Platform",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadType {
    Compute,
    Storage,
    Database,
    Gpu,
}

impl WorkloadType {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Compute => "Compute/VM Instances",
            Self::Storage => "Block Storage",
            Self::Database => "Database Services",
            Self::Gpu => "GPU/AI Workloads",
        }
    }

    /// Savings-multiplier range (min, max) for this workload type
    pub fn savings_range(&self) -> (f64, f64) {
        match self {
            Self::Compute => (0.25, 0.45),
            Self::Storage => (0.30, 0.55),
            Self::Database => (0.20, 0.40),
            Self::Gpu => (0.35, 0.60),
        }
    }
}

/// Validated estimator input
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub provider: CloudProvider,
    pub workload_type: WorkloadType,
    pub monthly_spend: f64,
    pub instance_count: u64,
}

impl AnalysisInput {
    /// Build an input, coercing invalid spend values to 0.
    ///
    /// Negative or non-finite spend is treated the same as an empty form
    /// field in the UI: it becomes 0 rather than an error.
    pub fn new(
        provider: CloudProvider,
        workload_type: WorkloadType,
        monthly_spend: f64,
        instance_count: u64,
    ) -> Self {
        let monthly_spend = if monthly_spend.is_finite() && monthly_spend > 0.0 {
            monthly_spend
        } else {
            0.0
        };

        Self {
            provider,
            workload_type,
            monthly_spend,
            instance_count,
        }
    }
}

/// Recommendation severity, ordered from most to least urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub action: String,
    pub impact_per_month: f64,
    pub description: String,
}

impl Recommendation {
    /// Impact formatted the way the dashboard and the exported report show it
    pub fn impact_label(&self) -> String {
        format!("${:.2}/month", self.impact_per_month)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub current_spend: f64,
    pub projected_monthly_savings: f64,
    pub projected_annual_savings: f64,
    /// Percentage with one decimal place, e.g. "35.0"
    pub savings_percentage: String,
    pub recommendations: Vec<Recommendation>,
    pub utilization_score: u8,
    pub waste_score: u8,
}

/// Run an analysis using the thread-local RNG for the cosmetic scores
pub fn estimate(input: &AnalysisInput) -> AnalysisResult {
    estimate_with_rng(input, &mut rand::thread_rng())
}

/// Run an analysis with a caller-provided random source
pub fn estimate_with_rng<R: Rng>(input: &AnalysisInput, rng: &mut R) -> AnalysisResult {
    let (min, max) = input.workload_type.savings_range();
    let avg_savings_rate = (min + max) / 2.0;

    let projected_monthly_savings = input.monthly_spend * avg_savings_rate;
    let projected_annual_savings = projected_monthly_savings * 12.0;

    AnalysisResult {
        current_spend: input.monthly_spend,
        projected_monthly_savings,
        projected_annual_savings,
        savings_percentage: format!("{:.1}", avg_savings_rate * 100.0),
        recommendations: build_recommendations(
            input.workload_type,
            input.instance_count,
            input.monthly_spend,
        ),
        utilization_score: rng.gen_range(50..80),
        waste_score: rng.gen_range(20..60),
    }
}

/// Build the ordered recommendation list: workload-specific entries first,
/// then the two universal entries, capped at `MAX_RECOMMENDATIONS`.
fn build_recommendations(
    workload: WorkloadType,
    instances: u64,
    spend: f64,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    match workload {
        WorkloadType::Compute => {
            let underutilized = (instances as f64 * 0.4).floor() as u64;
            recommendations.push(Recommendation {
                priority: Priority::Critical,
                action: "Right-size overprovisioned instances".to_string(),
                impact_per_month: spend * 0.15,
                description: format!(
                    "Analysis shows {} instances running at <40% CPU utilization",
                    underutilized
                ),
            });
            recommendations.push(Recommendation {
                priority: Priority::High,
                action: "Implement auto-scaling groups".to_string(),
                impact_per_month: spend * 0.12,
                description: "Deploy traffic-based scaling to reduce idle capacity during off-peak hours".to_string(),
            });
        }
        WorkloadType::Gpu => {
            recommendations.push(Recommendation {
                priority: Priority::Critical,
                action: "Optimize GPU utilization".to_string(),
                impact_per_month: spend * 0.25,
                description: "GPU instances show 45% idle time - implement job scheduling and queuing".to_string(),
            });
            recommendations.push(Recommendation {
                priority: Priority::High,
                action: "Consider multi-instance GPU sharing".to_string(),
                impact_per_month: spend * 0.18,
                description: "MIG (Multi-Instance GPU) can partition H100/H200 GPUs for smaller workloads".to_string(),
            });
        }
        WorkloadType::Storage => {
            recommendations.push(Recommendation {
                priority: Priority::High,
                action: "Implement storage lifecycle policies".to_string(),
                impact_per_month: spend * 0.20,
                description: "Move infrequently accessed data to archive tier automatically".to_string(),
            });
            recommendations.push(Recommendation {
                priority: Priority::Medium,
                action: "Enable compression and deduplication".to_string(),
                impact_per_month: spend * 0.10,
                description: "Reduce storage footprint by 40-60% on average".to_string(),
            });
        }
        WorkloadType::Database => {
            recommendations.push(Recommendation {
                priority: Priority::Critical,
                action: "Review database instance sizing".to_string(),
                impact_per_month: spend * 0.18,
                description: "Current instances appear overprovisioned for workload patterns".to_string(),
            });
            recommendations.push(Recommendation {
                priority: Priority::High,
                action: "Implement read replicas for analytics".to_string(),
                impact_per_month: spend * 0.15,
                description: "Offload reporting queries to lower-cost read replicas".to_string(),
            });
        }
    }

    recommendations.push(Recommendation {
        priority: Priority::High,
        action: "Purchase reserved capacity".to_string(),
        impact_per_month: spend * 0.30,
        description: "1-year commitment could save 30-40% on baseline capacity".to_string(),
    });

    recommendations.push(Recommendation {
        priority: Priority::Medium,
        action: "Tag and track resource ownership".to_string(),
        impact_per_month: spend * 0.08,
        description: "Identify and eliminate orphaned resources and unused capacity".to_string(),
    });

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
