// ==========================================
// DashboardApi 集成测试
// ==========================================
// 测试范围:
// 1. 上传评估: CSV 字节 → DashboardReport
// 2. 本地化结论: zh-CN / en / es
// 3. 覆盖诊断: 配置默认值与请求覆写
// ==========================================


use nurse_shift_feasibility::api::{ApiError, EvaluationOptions};
use nurse_shift_feasibility::domain::UploadFormat;
use nurse_shift_feasibility::importer::{MatrixImporter, MatrixImporterImpl};
use test_helpers::{scenario_rows, test_state, to_csv, write_csv};

fn with_locale(locale: &str) -> EvaluationOptions {
    EvaluationOptions {
        locale: Some(locale.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_upload_scenario_report() {
    let state = test_state(&[]);
    let csv = to_csv(&scenario_rows());

    let report = state
        .dashboard_api
        .evaluate_upload("Xij.csv", UploadFormat::Csv, csv.as_bytes(), &with_locale("es"))
        .await
        .expect("评估失败");

    assert_eq!(report.feasibility.hours, vec![32, 48, 40]);
    assert_eq!(report.feasibility.total_assigned_hours, 120);
    assert_eq!(report.feasibility.available_hours, 120);
    assert_eq!(report.feasibility.idle_hours, 0);
    assert_eq!(report.verdict.violation_count, 1);
    assert!(report.verdict.headline.contains("NO es factible"));
    assert_eq!(
        report.verdict.notes,
        vec!["Número de enfermeras que exceden el límite: 1"]
    );
    assert_eq!(report.matrix.row_count(), 3);
}

#[tokio::test]
async fn test_default_locale_from_config() {
    let state = test_state(&[("default_locale", "en")]);
    let report = state
        .dashboard_api
        .evaluate_matrix(vec![vec![1, 0, 1]], &EvaluationOptions::default())
        .await
        .unwrap();

    assert_eq!(report.locale, "en");
    assert!(report.verdict.headline.starts_with("The model is FEASIBLE"));
}

#[tokio::test]
async fn test_coverage_defaults_from_config() {
    let state = test_state(&[("coverage_min_per_slot", "2"), ("coverage_max_per_slot", "2")]);
    let report = state
        .dashboard_api
        .evaluate_matrix(scenario_rows(), &with_locale("en"))
        .await
        .unwrap();

    let coverage = report.coverage.expect("覆盖诊断应启用");
    // 班次 1-4 有 3 人, 5 有 2 人, 6 有 1 人, 7-21 无人
    assert_eq!(coverage.overstaffed.len(), 4);
    assert_eq!(coverage.understaffed.len(), 16);
    assert_eq!(coverage.understaffed[0].slot, 6);
    assert_eq!(coverage.understaffed[0].gap, 1);
    assert!(!coverage.is_covered);
    // 覆盖诊断不影响工时判定
    assert_eq!(report.feasibility.violation_count, 1);
}

#[tokio::test]
async fn test_invalid_coverage_bounds_rejected() {
    let state = test_state(&[]);
    let options = EvaluationOptions {
        min_per_slot: Some(3),
        max_per_slot: Some(1),
        ..Default::default()
    };

    let err = state
        .dashboard_api
        .evaluate_matrix(vec![vec![1]], &options)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[tokio::test]
async fn test_partial_last_group() {
    let state = test_state(&[]);
    let options = EvaluationOptions {
        group_size: Some(4),
        ..Default::default()
    };

    let report = state
        .dashboard_api
        .evaluate_matrix(vec![vec![1; 10]], &options)
        .await
        .unwrap();

    let groups = &report.slot_load.per_group;
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[2].first_slot, 9);
    assert_eq!(groups[2].last_slot, 10);
    assert!(groups[2].is_partial);
    assert_eq!(groups[2].total, 2);
}

#[tokio::test]
async fn test_evaluate_imported_file() {
    let state = test_state(&[]);
    let file = write_csv("1,1,1,1,1\n");
    let imported = MatrixImporterImpl::new()
        .import_from_csv(file.path())
        .await
        .unwrap();

    let report = state
        .dashboard_api
        .evaluate_imported(&imported, &EvaluationOptions::default())
        .await
        .unwrap();

    assert!(report.feasibility.is_feasible);
    assert_eq!(report.source_name.as_deref(), Some(imported.source_name.as_str()));
}

#[tokio::test]
async fn test_reports_are_independent() {
    let state = test_state(&[]);
    let options = EvaluationOptions::default();

    let first = state
        .dashboard_api
        .evaluate_matrix(scenario_rows(), &options)
        .await
        .unwrap();
    let second = state
        .dashboard_api
        .evaluate_matrix(scenario_rows(), &options)
        .await
        .unwrap();

    assert_ne!(first.evaluation_id, second.evaluation_id);
    assert_eq!(first.feasibility, second.feasibility);
    assert_eq!(first.slot_load, second.slot_load);
}
