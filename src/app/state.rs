// ==========================================
// 设备维护日志系统 - 应用状态
// ==========================================
// 职责: 启动时构造一次的对象图（配置 → 日志存储 → API）
// 约束: 不使用全局可变状态，展示层持有 AppState 并按引用调用
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::MaintenanceApi;
use crate::config::AppConfig;
use crate::repository::LogStore;

/// 默认配置文件名（工作目录下，可缺省）
pub const DEFAULT_CONFIG_FILE: &str = "maintenance_hub.json";

/// 应用状态
pub struct AppState {
    /// 应用配置
    pub config: Arc<AppConfig>,

    /// 日志存储（追加/全量读取）
    pub log_store: Arc<LogStore>,

    /// 维护日志API
    pub maintenance_api: Arc<MaintenanceApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 配置无效
    ///
    /// # 说明
    /// 日志文件损坏不会阻止启动，仅记录警告；后续查询会返回存储错误
    pub fn new(config: AppConfig) -> Result<Self, String> {
        config.validate()?;
        tracing::info!("初始化AppState，日志文件: {}", config.log_file.display());

        let config = Arc::new(config);
        let log_store = Arc::new(LogStore::new(config.log_file.clone()));

        match log_store.load_all() {
            Ok(records) => tracing::info!("已有维护记录 {} 条", records.len()),
            Err(e) => tracing::warn!("日志文件暂不可用(将继续启动): {}", e),
        }

        let maintenance_api = Arc::new(
            MaintenanceApi::new(log_store.clone(), config.clone()).map_err(|e| e.to_string())?,
        );

        tracing::info!("AppState初始化完成");
        Ok(Self {
            config,
            log_store,
            maintenance_api,
        })
    }
}

/// 获取默认配置文件路径
pub fn get_default_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_CONFIG_FILE)
}
