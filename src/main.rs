// ==========================================
// 设备维护日志系统 - 启动入口
// ==========================================
// 装配 AppState 并输出当前日志汇总
// 交互界面由外部展示层提供
// ==========================================

use maintenance_hub::app::{get_default_config_path, AppState};
use maintenance_hub::config::AppConfig;
use maintenance_hub::engine::ALL_MACHINES;

fn main() -> anyhow::Result<()> {
    maintenance_hub::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", maintenance_hub::APP_NAME);
    tracing::info!("系统版本: {}", maintenance_hub::VERSION);
    tracing::info!("==================================================");

    let config = AppConfig::load(get_default_config_path())
        .map_err(|e| anyhow::anyhow!("配置加载失败: {}", e))?;
    let app_state = AppState::new(config).map_err(|e| anyhow::anyhow!("无法初始化AppState: {}", e))?;
    let api = &app_state.maintenance_api;

    // 日志文件损坏时只提示，不退出
    match api.get_dashboard() {
        Ok(dashboard) if dashboard.is_empty() => {
            tracing::info!("暂无维护日志");
        }
        Ok(dashboard) => {
            tracing::info!("维护日志共 {} 条", dashboard.total_records);
            for day in &dashboard.daily_oee {
                tracing::info!("  {} 平均OEE: {:.2}%", day.date, day.mean_oee_percent);
            }
            for (issue, minutes) in &dashboard.downtime_by_issue {
                tracing::info!("  {} 停机合计: {} 分钟", issue, minutes);
            }
            for (issue, count) in &dashboard.issue_frequency {
                tracing::info!("  {} 次数: {}", issue, count);
            }

            let history = api.list_history(ALL_MACHINES)?;
            if let Some(latest) = history.records.first() {
                tracing::info!(
                    "最新记录: {} {} 第{}班 OEE {}%",
                    latest.date,
                    latest.machine,
                    latest.shift,
                    latest.oee_percent
                );
            }
        }
        Err(e) => {
            let response = e.to_response();
            tracing::warn!("[{}] {}", response.code, response.message);
        }
    }

    let prediction = api.predict_next_issue();
    tracing::info!(
        "{} | 下一故障: {} | 预计运行 {} 小时",
        prediction.notice,
        prediction.issue,
        prediction.expected_runtime_hours
    );

    Ok(())
}
