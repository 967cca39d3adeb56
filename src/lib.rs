// ==========================================
// 设备维护日志系统 - 核心库
// ==========================================
// 职责: 压机/包装机班次维护日志的录入、存储与汇总
// 存储: 单个 CSV 文件（只追加）
// 展示层: 外部，通过 api::MaintenanceApi 调用
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - CSV 日志存储
pub mod repository;

// 引擎层 - 报表汇总与占位预测
pub mod engine;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 业务接口
pub mod api;

// 应用层 - 启动装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{compute_oee, Issue, MachinePair, MaintenanceRecord, Shift, ValidationError};

// 存储
pub use repository::{LogStore, StoreError};

// 引擎
pub use engine::{MaintenanceDashboard, PlaceholderPrediction, PlaceholderPredictor};

// API
pub use api::{ApiError, MaintenanceApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "设备维护日志系统";
