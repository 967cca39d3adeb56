// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供临时日志文件、测试配置、测试记录生成等功能
// ==========================================

#![allow(dead_code)]

use chrono::NaiveDate;
use maintenance_hub::api::SubmitLogRequest;
use maintenance_hub::config::AppConfig;
use maintenance_hub::domain::{Issue, MaintenanceRecord, Shift};
use std::path::PathBuf;
use tempfile::TempDir;

/// 创建临时目录与其中的日志文件路径（文件尚未创建）
///
/// # 返回
/// - TempDir: 临时目录（需要保持存活）
/// - PathBuf: 日志文件路径
pub fn create_test_log_path() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("mamba_logs.csv");
    (dir, path)
}

/// 指向临时日志文件的测试配置
pub fn test_config(log_file: PathBuf) -> AppConfig {
    AppConfig {
        log_file,
        ..AppConfig::default()
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// 生成一条合法的测试记录
pub fn make_record(
    day: NaiveDate,
    press_id: u32,
    runtime_hours: f64,
    downtime_minutes: u32,
    issue: Issue,
    fix: &str,
) -> MaintenanceRecord {
    MaintenanceRecord::new(
        day,
        Shift::First,
        format!("Press {} & Wrapper {}", press_id, press_id + 1),
        "PNG1080",
        runtime_hours,
        downtime_minutes,
        issue,
        fix,
    )
    .expect("valid test record")
}

/// 生成一条合法的提交请求
pub fn submit_request(day: NaiveDate, press_id: u32, issue: &str, fix: &str) -> SubmitLogRequest {
    SubmitLogRequest {
        date: day,
        shift: 1,
        press_id,
        operator_id: "PNG1080".to_string(),
        runtime_hours: 7.5,
        downtime_minutes: 10,
        issue: issue.to_string(),
        fix: fix.to_string(),
    }
}
