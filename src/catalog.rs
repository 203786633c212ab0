//! Static optimization-strategy catalog
//!
//! Reference content rendered verbatim by the strategies endpoint. The
//! entries have no lifecycle and are never derived from user input.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effort {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy)]
pub struct OptimizationStrategy {
    pub category: &'static str,
    pub savings_min_pct: u8,
    pub savings_max_pct: u8,
    pub impact: Impact,
    pub effort: Effort,
    pub description: &'static str,
    pub implementation_examples: &'static [&'static str],
}

impl OptimizationStrategy {
    /// Savings range as shown in the UI, e.g. "25-40%"
    pub fn savings_label(&self) -> String {
        format!("{}-{}%", self.savings_min_pct, self.savings_max_pct)
    }
}

pub const STRATEGIES: &[OptimizationStrategy] = &[
    OptimizationStrategy {
        category: "Right-Sizing",
        savings_min_pct: 25,
        savings_max_pct: 40,
        impact: Impact::High,
        effort: Effort::Low,
        description: "Analyze utilization metrics and downsize overprovisioned instances",
        implementation_examples: &[
            "CPU utilization < 40% for 30+ days",
            "Memory usage < 50% consistently",
            "Network throughput underutilized",
        ],
    },
    OptimizationStrategy {
        category: "Reserved Capacity",
        savings_min_pct: 30,
        savings_max_pct: 60,
        impact: Impact::High,
        effort: Effort::Medium,
        description: "Commit to 1-3 year terms for predictable workloads",
        implementation_examples: &[
            "Identify stable baseline capacity",
            "Mix reserved and on-demand",
            "Negotiate enterprise agreements",
        ],
    },
    OptimizationStrategy {
        category: "Spot/Preemptible Instances",
        savings_min_pct: 60,
        savings_max_pct: 90,
        impact: Impact::High,
        effort: Effort::High,
        description: "Use interruptible capacity for fault-tolerant workloads",
        implementation_examples: &[
            "Batch processing jobs",
            "CI/CD pipelines",
            "Dev/test environments",
        ],
    },
    OptimizationStrategy {
        category: "Storage Tiering",
        savings_min_pct: 40,
        savings_max_pct: 70,
        impact: Impact::Medium,
        effort: Effort::Low,
        description: "Move cold data to lower-cost storage tiers",
        implementation_examples: &[
            "Archive data > 90 days old",
            "Implement lifecycle policies",
            "Use object storage for backups",
        ],
    },
    OptimizationStrategy {
        category: "Auto-Scaling",
        savings_min_pct: 15,
        savings_max_pct: 35,
        impact: Impact::Medium,
        effort: Effort::Medium,
        description: "Dynamic capacity based on demand patterns",
        implementation_examples: &[
            "Scale down during off-hours",
            "Weekend/holiday schedules",
            "Traffic-based triggers",
        ],
    },
    OptimizationStrategy {
        category: "Multi-Cloud Strategy",
        savings_min_pct: 20,
        savings_max_pct: 45,
        impact: Impact::High,
        effort: Effort::High,
        description: "Leverage pricing competition and workload placement",
        implementation_examples: &[
            "Price arbitrage opportunities",
            "Geographic optimization",
            "Workload-specific provider selection",
        ],
    },
];
