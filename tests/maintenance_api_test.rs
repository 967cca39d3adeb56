// ==========================================
// MaintenanceApi 集成测试
// ==========================================
// 测试目标: 提交日志 → 历史查看 → 驾驶舱汇总 的完整流程
// ==========================================

mod test_helpers;

use maintenance_hub::api::{ApiError, MaintenanceApi};
use maintenance_hub::app::AppState;
use maintenance_hub::repository::LogStore;
use maintenance_hub::domain::{Issue, Shift, ValidationError};
use maintenance_hub::engine::{ALL_MACHINES, PLACEHOLDER_NOTICE};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::sync::Arc;
use test_helpers::{create_test_log_path, date, submit_request, test_config};

#[test]
fn test_submit_log_computes_oee_and_machine() {
    let (_dir, path) = create_test_log_path();
    let state = AppState::new(test_config(path)).expect("AppState should initialize");

    let response = state
        .maintenance_api
        .submit_log(submit_request(date(2025, 3, 1), 40, "Exit belt cut", "Replace exit belt"))
        .expect("submit should succeed");

    assert_eq!(response.record.oee_percent, 97.83);
    assert_eq!(response.record.machine, "Press 40 & Wrapper 41");
    assert_eq!(response.record.shift, Shift::First);
    assert!(response.summary.contains("PNG1080"));

    let stored = state.log_store.load_all().unwrap();
    assert_eq!(stored, vec![response.record]);
}

#[test]
fn test_submit_rejects_bad_input_without_writing() {
    let (_dir, path) = create_test_log_path();
    let state = AppState::new(test_config(path.clone())).unwrap();
    let api = &state.maintenance_api;

    // 故障与措施不匹配
    let err = api
        .submit_log(submit_request(date(2025, 3, 1), 40, "None", "Replace exit belt"))
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::ValidationError(ValidationError::FixNotAllowed { .. })
    ));

    // 班次越界
    let mut request = submit_request(date(2025, 3, 1), 40, "None", "None");
    request.shift = 4;
    assert_eq!(api.submit_log(request).unwrap_err().code(), "VALIDATION_ERROR");

    // 压机编号不在列表内（奇数为包装机）
    let err = api
        .submit_log(submit_request(date(2025, 3, 1), 41, "None", "None"))
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::ValidationError(ValidationError::UnknownPress(41))
    ));

    // 操作员ID超长
    let mut request = submit_request(date(2025, 3, 1), 40, "None", "None");
    request.operator_id = "OPERATOR-12345".to_string();
    assert!(api.submit_log(request).is_err());

    // 未知故障
    let err = api
        .submit_log(submit_request(date(2025, 3, 1), 40, "Motor overheat", "None"))
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::ValidationError(ValidationError::UnknownIssue(_))
    ));

    assert!(!path.exists());
}

#[test]
fn test_history_and_dashboard_flow() {
    let (_dir, path) = create_test_log_path();
    let state = AppState::new(test_config(path)).unwrap();
    let api = &state.maintenance_api;

    // 空存储
    let history = api.list_history(ALL_MACHINES).unwrap();
    assert!(history.records.is_empty());
    assert_eq!(history.machine_options, vec!["All".to_string()]);
    assert!(api.get_dashboard().unwrap().is_empty());

    api.submit_log(submit_request(date(2025, 3, 1), 40, "Exit belt cut", "Replace exit belt"))
        .unwrap();
    api.submit_log(submit_request(
        date(2025, 3, 3),
        42,
        "Cube crash on bridge",
        "Blow powder with airgun",
    ))
    .unwrap();
    api.submit_log(submit_request(date(2025, 3, 2), 40, "None", "None"))
        .unwrap();

    let history = api.list_history(ALL_MACHINES).unwrap();
    let days: Vec<_> = history.records.iter().map(|r| r.date).collect();
    assert_eq!(days, vec![date(2025, 3, 3), date(2025, 3, 2), date(2025, 3, 1)]);
    assert_eq!(
        history.machine_options,
        vec![
            "All".to_string(),
            "Press 40 & Wrapper 41".to_string(),
            "Press 42 & Wrapper 43".to_string(),
        ]
    );

    let press_40 = api.list_history("Press 40 & Wrapper 41").unwrap();
    assert_eq!(press_40.records.len(), 2);
    assert_eq!(press_40.selected_machine, "Press 40 & Wrapper 41");

    let dashboard = api.get_dashboard().unwrap();
    assert_eq!(dashboard.total_records, 3);
    assert_eq!(dashboard.daily_oee.len(), 3);
    assert_eq!(dashboard.issue_frequency.values().sum::<usize>(), 3);
    assert_eq!(dashboard.downtime_by_issue.get(&Issue::ExitBeltCut), Some(&10));

    assert!(matches!(
        api.list_history("  "),
        Err(ApiError::InvalidInput(_))
    ));
}

#[test]
fn test_corrupt_store_reported_as_storage_error() {
    let (_dir, path) = create_test_log_path();
    fs::write(&path, "garbage,header\n1,2\n").unwrap();

    // 启动不受影响
    let state = AppState::new(test_config(path)).expect("corrupt file must not block startup");

    let err = state.maintenance_api.get_dashboard().unwrap_err();
    let response = err.to_response();
    assert_eq!(response.code, "STORAGE_ERROR");

    assert!(state.maintenance_api.list_history(ALL_MACHINES).is_err());
}

#[test]
fn test_option_lists_and_placeholder_prediction() {
    let (_dir, path) = create_test_log_path();
    let state = AppState::new(test_config(path)).unwrap();
    let api = &state.maintenance_api;

    assert_eq!(api.list_issue_options(), Issue::ALL.to_vec());
    assert_eq!(
        api.list_fix_options("Exit belt cut").unwrap(),
        vec!["Replace exit belt".to_string()]
    );
    assert!(api.list_fix_options("Motor overheat").is_err());

    let presses = api.list_press_options();
    assert_eq!(presses.first().map(|p| p.label()), Some("Press 40 & Wrapper 41".to_string()));

    let mut rng = StdRng::seed_from_u64(2025);
    let prediction = api.predict_next_issue_with(&mut rng);
    assert_ne!(prediction.issue, Issue::NoIssue);
    assert!((6.0..=7.9).contains(&prediction.expected_runtime_hours));
    assert_eq!(prediction.notice, PLACEHOLDER_NOTICE);

    let random = api.predict_next_issue();
    assert!(Issue::KNOWN.contains(&random.issue));
}

#[test]
fn test_api_rejects_inverted_prediction_range() {
    let (_dir, path) = create_test_log_path();
    let mut config = test_config(path.clone());
    config.prediction_runtime_min = 7.9;
    config.prediction_runtime_max = 6.0;

    let result = MaintenanceApi::new(Arc::new(LogStore::new(&path)), Arc::new(config.clone()));
    match result {
        Err(err) => assert_eq!(err.code(), "INVALID_INPUT"),
        Ok(_) => panic!("inverted prediction range must be rejected"),
    }

    assert!(AppState::new(config).is_err());
}
