// ==========================================
// 设备维护日志系统 - 应用配置
// ==========================================
// 职责: 日志文件路径、可选压机编号、占位预测区间
// 存储: 可选 JSON 文件，缺失时使用默认值
// ==========================================

use crate::domain::MachinePair;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::path::{Path, PathBuf};

/// 默认日志文件名（工作目录下）
pub const DEFAULT_LOG_FILE: &str = "mamba_logs.csv";

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV 日志文件路径
    pub log_file: PathBuf,

    /// 压机编号起点（含）
    pub press_id_start: u32,
    /// 压机编号终点（不含）
    pub press_id_end: u32,
    /// 压机编号步长（压机/包装机成对编号）
    pub press_id_step: u32,

    /// 占位预测运行时间区间（小时）
    pub prediction_runtime_min: f64,
    pub prediction_runtime_max: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            press_id_start: 40,
            press_id_end: 90,
            press_id_step: 2,
            prediction_runtime_min: 6.0,
            prediction_runtime_max: 7.9,
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    ///
    /// # 返回
    /// - Ok(AppConfig): 文件不存在时返回默认配置；未给出的字段取默认值
    /// - Err: 文件不可读、JSON 格式错误或配置值无效
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {}", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&raw)?;
        config.validate()?;

        tracing::info!("已加载配置文件: {}", path.display());
        Ok(config)
    }

    /// 校验配置值
    pub fn validate(&self) -> Result<(), String> {
        if self.press_id_step == 0 {
            return Err("press_id_step 不能为 0".to_string());
        }
        if self.press_id_start >= self.press_id_end {
            return Err(format!(
                "压机编号范围为空: [{}, {})",
                self.press_id_start, self.press_id_end
            ));
        }
        if !(self.prediction_runtime_min <= self.prediction_runtime_max) {
            return Err(format!(
                "预测运行时间区间无效: [{}, {}]",
                self.prediction_runtime_min, self.prediction_runtime_max
            ));
        }
        Ok(())
    }

    /// 可选的压机-包装机组合
    pub fn machine_pairs(&self) -> Vec<MachinePair> {
        (self.press_id_start..self.press_id_end)
            .step_by(self.press_id_step.max(1) as usize)
            .map(MachinePair::new)
            .collect()
    }

    /// 压机编号是否在可选范围内
    pub fn is_known_press(&self, press_id: u32) -> bool {
        self.machine_pairs().iter().any(|p| p.press_id == press_id)
    }
}
