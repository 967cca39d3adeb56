// ==========================================
// 设备维护日志系统 - 引擎层
// ==========================================
// 职责: 报表汇总与占位预测
// 红线: Engine 不读写文件,只处理传入的记录
// ==========================================

pub mod prediction;
pub mod report;

// 重导出核心引擎
pub use prediction::{PlaceholderPrediction, PlaceholderPredictor, PLACEHOLDER_NOTICE};
pub use report::{
    build_dashboard, filter_by_machine, issue_frequency, machine_options, mean_oee_by_date,
    total_downtime_by_issue, DailyOee, MaintenanceDashboard, ALL_MACHINES,
};
