// ==========================================
// 设备维护日志系统 - 数据仓储层
// ==========================================
// 红线: Repository 不含报表逻辑
// ==========================================
// 职责: 提供持久化接口,屏蔽 CSV 文件细节
// ==========================================

pub mod error;
pub mod log_store;

// 重导出核心仓储
pub use error::{StoreError, StoreResult};
pub use log_store::{LogStore, LOG_HEADER};
