/// Integration tests covering the analysis-to-report pipeline
use chrono::{TimeZone, Utc};
use cost_optimizer::{
    estimator::{
        estimate, estimate_with_rng, AnalysisInput, CloudProvider, Priority, WorkloadType,
        MAX_RECOMMENDATIONS,
    },
    report::{build_report, report_filename},
};
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn test_compute_analysis_end_to_end() {
    let input = AnalysisInput::new(CloudProvider::Oci, WorkloadType::Compute, 50000.0, 150);
    let result = estimate(&input);

    assert_eq!(result.projected_monthly_savings, 17500.0);
    assert_eq!(result.projected_annual_savings, 210000.0);
    assert_eq!(result.savings_percentage, "35.0");

    let generated_at = Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap();
    let report = build_report(input.provider, input.workload_type, &result, generated_at);

    assert_eq!(report.cloud_provider, "Oracle Cloud (OCI)");
    assert_eq!(report.workload_type, "Compute/VM Instances");
    assert_eq!(report.current_monthly_spend, 50000.0);
    assert_eq!(report.recommendations[0].impact, "$7500.00/month");
    assert_eq!(
        report_filename(generated_at),
        format!(
            "cost-optimization-report-{}.json",
            generated_at.timestamp_millis()
        )
    );
}

#[test]
fn test_gpu_analysis_end_to_end() {
    let input = AnalysisInput::new(CloudProvider::Gcp, WorkloadType::Gpu, 10000.0, 20);
    let result = estimate(&input);

    assert_eq!(result.projected_monthly_savings, 4750.0);
    assert_eq!(result.savings_percentage, "47.5");

    let critical = &result.recommendations[0];
    assert_eq!(critical.priority, Priority::Critical);
    assert_eq!(critical.impact_label(), "$2500.00/month");
}

#[test]
fn test_every_workload_includes_universal_recommendations() {
    for workload in [
        WorkloadType::Compute,
        WorkloadType::Storage,
        WorkloadType::Database,
        WorkloadType::Gpu,
    ] {
        let input = AnalysisInput::new(CloudProvider::Azure, workload, 20000.0, 40);
        let result = estimate(&input);

        assert!(result.recommendations.len() <= MAX_RECOMMENDATIONS);
        let actions: Vec<&str> = result
            .recommendations
            .iter()
            .map(|r| r.action.as_str())
            .collect();
        assert!(actions.contains(&"Purchase reserved capacity"));
        assert!(actions.contains(&"Tag and track resource ownership"));
    }
}

#[test]
fn test_report_round_trips_through_json() {
    let input = AnalysisInput::new(CloudProvider::Aws, WorkloadType::Database, 7500.0, 12);
    let result = estimate_with_rng(&input, &mut StdRng::seed_from_u64(99));
    let report = build_report(input.provider, input.workload_type, &result, Utc::now());

    let json = serde_json::to_string_pretty(&report).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["cloudProvider"], "Amazon Web Services");
    assert_eq!(parsed["workloadType"], "Database Services");
    assert_eq!(parsed["savingsPercentage"], "30.0");
    assert_eq!(
        parsed["recommendations"].as_array().unwrap().len(),
        result.recommendations.len()
    );
}
