// ==========================================
// 配置层集成测试
// ==========================================
// 测试目标: JSON 配置文件 → ConfigManager → AppState → 各 API
// ==========================================


use nurse_shift_feasibility::api::{CalculatorRequest, EvaluationOptions, WorkerShiftInput};
use nurse_shift_feasibility::app::AppState;
use nurse_shift_feasibility::config::{ConfigError, ConfigManager, EvaluationConfigReader};
use std::io::Write;
use tempfile::NamedTempFile;
use test_helpers::row_with_ones;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("无法创建临时文件");
    write!(file, "{}", content).expect("写入失败");
    file
}

#[tokio::test]
async fn test_file_config_drives_all_apis() {
    let file = config_file(
        r#"{
            "capacity_limit_hours": 36,
            "shift_length_hours": 12,
            "slots_per_day": 2,
            "max_calculator_shifts": 14,
            "default_locale": "en"
        }"#,
    );
    let state = AppState::from_config_path(file.path()).expect("配置加载失败");

    let params = state.model_api.parameters().await.unwrap();
    assert_eq!(params.capacity_limit_hours, 36);
    assert_eq!(params.max_shifts_within_limit, 3);
    assert_eq!(params.slots_per_week, 14);

    let report = state
        .dashboard_api
        .evaluate_matrix(vec![row_with_ones(3, 14), row_with_ones(4, 14)], &EvaluationOptions::default())
        .await
        .unwrap();
    assert_eq!(report.feasibility.hours, vec![36, 48]);
    assert_eq!(report.feasibility.violation_count, 1);
    assert_eq!(report.slot_load.group_size, 2);
    assert_eq!(report.slot_load.per_group.len(), 7);
    assert_eq!(report.locale, "en");

    let response = state
        .calculator_api
        .evaluate_worker(&CalculatorRequest {
            worker: WorkerShiftInput {
                worker_name: None,
                shifts_worked: 14,
            },
            locale: None,
        })
        .await
        .unwrap();
    assert_eq!(response.outcome.hours, 168);
    assert_eq!(response.outcome.worker_name, "Worker 1");
}

#[test]
fn test_malformed_file_is_error() {
    let file = config_file("{ this is not json");
    let err = ConfigManager::new(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::FormatError { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[tokio::test]
async fn test_snapshot_round_trips_effective_values() {
    let file = config_file(r#"{"coverage_min_per_slot": 1, "server_port": "9000"}"#);
    let config = ConfigManager::new(file.path()).unwrap();

    let snapshot: serde_json::Value = serde_json::from_str(&config.snapshot().unwrap()).unwrap();
    assert_eq!(snapshot["coverage_min_per_slot"], 1);
    assert_eq!(snapshot["server_port"], 9000);
    assert_eq!(config.get_coverage_bounds().await.unwrap(), (Some(1), None));
}
