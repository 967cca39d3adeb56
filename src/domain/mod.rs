// ==========================================
// 设备维护日志系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型、字段校验规则
// 红线: 不含文件访问逻辑,不含报表逻辑
// ==========================================

pub mod error;
pub mod maintenance_record;
pub mod types;

// 重导出核心类型
pub use error::{ValidationError, ValidationResult};
pub use maintenance_record::{
    compute_oee, validate_operator_id, MaintenanceRecord, DOWNTIME_MINUTES_MAX,
    OPERATOR_ID_MAX_CHARS, RUNTIME_HOURS_MAX,
};
pub use types::{Issue, MachinePair, Shift};
