// ==========================================
// 设备维护日志系统 - 应用层
// ==========================================
// 职责: 启动装配,连接展示层与后端
// ==========================================

pub mod state;

// 重导出
pub use state::{get_default_config_path, AppState, DEFAULT_CONFIG_FILE};
