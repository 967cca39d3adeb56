// ==========================================
// 设备维护日志系统 - API 层
// ==========================================
// 职责: 展示层调用的业务接口
// 红线: 展示层不得自行计算 OEE
// ==========================================

pub mod error;
pub mod maintenance_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use maintenance_api::{HistoryView, MaintenanceApi, SubmitLogRequest, SubmitLogResponse};
