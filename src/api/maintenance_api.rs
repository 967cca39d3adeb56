// ==========================================
// 设备维护日志系统 - 维护日志 API
// ==========================================
// 职责: 展示层调用的唯一入口（提交日志、历史查看、驾驶舱汇总、占位预测、下拉选项）
// 约束: 展示层只传录入值，OEE 与机组标识均在此计算
// 架构: API 层 → Repository (LogStore) / Engine (report, prediction)
// ==========================================

use std::sync::Arc;

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::config::AppConfig;
use crate::domain::{Issue, MachinePair, MaintenanceRecord, Shift, ValidationError};
use crate::engine::prediction::{PlaceholderPrediction, PlaceholderPredictor};
use crate::engine::report::{self, MaintenanceDashboard};
use crate::repository::LogStore;

// ==========================================
// 请求/响应结构
// ==========================================

/// 提交维护日志请求（展示层录入值）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitLogRequest {
    pub date: NaiveDate,
    pub shift: u8,
    pub press_id: u32,
    pub operator_id: String,
    pub runtime_hours: f64,
    pub downtime_minutes: u32,
    pub issue: String,
    pub fix: String,
}

/// 提交维护日志响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitLogResponse {
    pub record: MaintenanceRecord,
    /// 提交确认文字
    pub summary: String,
}

/// 历史日志视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryView {
    /// 机组下拉选项（首项为 "All"）
    pub machine_options: Vec<String>,
    /// 当前选中的机组
    pub selected_machine: String,
    /// 过滤后的记录（按日期降序）
    pub records: Vec<MaintenanceRecord>,
}

// ==========================================
// MaintenanceApi - 维护日志 API
// ==========================================
pub struct MaintenanceApi {
    log_store: Arc<LogStore>,
    config: Arc<AppConfig>,
    predictor: PlaceholderPredictor,
}

impl MaintenanceApi {
    /// 创建新的MaintenanceApi实例
    ///
    /// # 参数
    /// - log_store: 启动时构造的日志存储
    /// - config: 应用配置
    ///
    /// # 返回
    /// - Err(ApiError::InvalidInput): 配置无效（如预测区间上下限颠倒）
    pub fn new(log_store: Arc<LogStore>, config: Arc<AppConfig>) -> ApiResult<Self> {
        config
            .validate()
            .map_err(|e| ApiError::InvalidInput(format!("配置无效: {}", e)))?;

        let predictor =
            PlaceholderPredictor::new(config.prediction_runtime_min, config.prediction_runtime_max);
        Ok(Self {
            log_store,
            config,
            predictor,
        })
    }

    // ==========================================
    // 日志录入
    // ==========================================

    /// 提交维护日志
    ///
    /// # 返回
    /// - Ok(SubmitLogResponse): 已写入的记录与确认文字
    /// - Err(ApiError::ValidationError): 字段取值无效，未写入
    /// - Err(ApiError::StorageError): 文件写入失败
    pub fn submit_log(&self, request: SubmitLogRequest) -> ApiResult<SubmitLogResponse> {
        let shift = Shift::try_from(request.shift)?;

        if !self.config.is_known_press(request.press_id) {
            return Err(ValidationError::UnknownPress(request.press_id).into());
        }
        let machine = MachinePair::new(request.press_id);

        let issue: Issue = request.issue.parse()?;

        let record = MaintenanceRecord::new(
            request.date,
            shift,
            machine.label(),
            request.operator_id.trim(),
            request.runtime_hours,
            request.downtime_minutes,
            issue,
            request.fix,
        )?;

        self.log_store.append(&record)?;

        let summary = format!(
            "日志已提交: 操作员 {} / {} / {} / 第{}班 | 运行 {} 小时, 停机 {} 分钟, OEE {}% | 故障: {}, 处理: {}",
            record.operator_id,
            record.machine,
            record.date,
            record.shift,
            record.runtime_hours,
            record.downtime_minutes,
            record.oee_percent,
            record.issue,
            record.fix
        );

        Ok(SubmitLogResponse { record, summary })
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 历史日志查看（按机组过滤，日期降序）
    ///
    /// # 参数
    /// - machine_or_all: "All" 或机组标识
    pub fn list_history(&self, machine_or_all: &str) -> ApiResult<HistoryView> {
        let selected = machine_or_all.trim();
        if selected.is_empty() {
            return Err(ApiError::InvalidInput("机组选择不能为空".to_string()));
        }

        let records = self.log_store.load_all()?;

        Ok(HistoryView {
            machine_options: report::machine_options(&records),
            selected_machine: selected.to_string(),
            records: report::filter_by_machine(&records, selected),
        })
    }

    /// 驾驶舱汇总（OEE 趋势、停机分布、故障频次）
    pub fn get_dashboard(&self) -> ApiResult<MaintenanceDashboard> {
        let records = self.log_store.load_all()?;
        let dashboard = report::build_dashboard(&records);
        tracing::debug!("驾驶舱汇总完成: total_records={}", dashboard.total_records);
        Ok(dashboard)
    }

    // ==========================================
    // 占位预测
    // ==========================================

    /// 预测下一故障与运行时间（占位: 均匀随机，无模型）
    pub fn predict_next_issue(&self) -> PlaceholderPrediction {
        self.predict_next_issue_with(&mut rand::thread_rng())
    }

    /// 使用指定随机源的占位预测（便于测试复现）
    pub fn predict_next_issue_with<R: Rng + ?Sized>(&self, rng: &mut R) -> PlaceholderPrediction {
        self.predictor.predict(rng)
    }

    // ==========================================
    // 下拉选项
    // ==========================================

    /// 可选压机-包装机组合
    pub fn list_press_options(&self) -> Vec<MachinePair> {
        self.config.machine_pairs()
    }

    /// 可选故障类型（含 "None"）
    pub fn list_issue_options(&self) -> Vec<Issue> {
        Issue::ALL.to_vec()
    }

    /// 指定故障的可选处理措施
    pub fn list_fix_options(&self, issue: &str) -> ApiResult<Vec<String>> {
        let issue: Issue = issue.parse()?;
        Ok(issue.allowed_fixes().iter().map(|f| f.to_string()).collect())
    }
}
