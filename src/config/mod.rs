// ==========================================
// 设备维护日志系统 - 配置层
// ==========================================
// 职责: 系统配置加载与校验
// 存储: JSON 文件（可选）
// ==========================================

pub mod app_config;

// 重导出核心配置
pub use app_config::{AppConfig, DEFAULT_LOG_FILE};
