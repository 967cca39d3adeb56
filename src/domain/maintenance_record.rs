// ==========================================
// 设备维护日志系统 - 维护记录领域模型
// ==========================================
// 一条记录 = 一次提交的班次维护日志
// 红线: OEE 只能由运行时间/停机时间计算，不接受直接录入
// 红线: 记录追加后不可修改
// ==========================================

use crate::domain::error::{ValidationError, ValidationResult};
use crate::domain::types::{Issue, Shift};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 操作员ID最大长度
pub const OPERATOR_ID_MAX_CHARS: usize = 10;

/// 单班运行时间上限 (小时)
pub const RUNTIME_HOURS_MAX: f64 = 8.0;

/// 单班停机时间上限 (分钟)
pub const DOWNTIME_MINUTES_MAX: u32 = 120;

// ==========================================
// OEE 计算
// ==========================================

/// 计算简化 OEE (%)
///
/// `100 - downtime / (runtime * 60 + downtime) * 100`，四舍五入到 2 位小数。
/// 运行与停机均为 0 时计划时间为 0，按 0.00 处理。
pub fn compute_oee(runtime_hours: f64, downtime_minutes: u32) -> f64 {
    let downtime = downtime_minutes as f64;
    let planned_minutes = runtime_hours * 60.0 + downtime;
    if planned_minutes <= 0.0 {
        return 0.0;
    }
    round2(100.0 - downtime / planned_minutes * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==========================================
// MaintenanceRecord - 维护记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub date: NaiveDate,        // 日期
    pub shift: Shift,           // 班次
    pub machine: String,        // 机组 ("Press 40 & Wrapper 41")
    pub operator_id: String,    // 操作员ID
    pub runtime_hours: f64,     // 运行时间 (小时)
    pub downtime_minutes: u32,  // 停机时间 (分钟)
    pub oee_percent: f64,       // OEE (%)，由 compute_oee 得出
    pub issue: Issue,           // 故障类型
    pub fix: String,            // 处理措施
}

impl MaintenanceRecord {
    /// 创建维护记录（校验字段并计算 OEE）
    ///
    /// # 返回
    /// - Ok(MaintenanceRecord): 通过校验的记录
    /// - Err(ValidationError): 任一字段越界或故障/措施不匹配
    pub fn new(
        date: NaiveDate,
        shift: Shift,
        machine: impl Into<String>,
        operator_id: impl Into<String>,
        runtime_hours: f64,
        downtime_minutes: u32,
        issue: Issue,
        fix: impl Into<String>,
    ) -> ValidationResult<Self> {
        let record = Self {
            date,
            shift,
            machine: machine.into(),
            operator_id: operator_id.into(),
            runtime_hours,
            downtime_minutes,
            oee_percent: compute_oee(runtime_hours, downtime_minutes),
            issue,
            fix: fix.into(),
        };
        record.validate()?;
        Ok(record)
    }

    /// 按运行/停机时间重新计算的 OEE
    pub fn expected_oee(&self) -> f64 {
        compute_oee(self.runtime_hours, self.downtime_minutes)
    }

    /// 校验全部字段取值
    pub fn validate(&self) -> ValidationResult<()> {
        if self.machine.trim().is_empty() {
            return Err(ValidationError::MachineMissing);
        }
        check_trimmed("machine", &self.machine)?;

        validate_operator_id(&self.operator_id)?;

        if !(0.0..=RUNTIME_HOURS_MAX).contains(&self.runtime_hours) {
            return Err(ValidationError::ValueRangeError {
                field: "runtime_hours".to_string(),
                value: self.runtime_hours,
                min: 0.0,
                max: RUNTIME_HOURS_MAX,
            });
        }

        if self.downtime_minutes > DOWNTIME_MINUTES_MAX {
            return Err(ValidationError::ValueRangeError {
                field: "downtime_minutes".to_string(),
                value: self.downtime_minutes as f64,
                min: 0.0,
                max: DOWNTIME_MINUTES_MAX as f64,
            });
        }

        self.issue.check_fix(&self.fix)?;

        let expected = self.expected_oee();
        if self.oee_percent != expected {
            return Err(ValidationError::OeeMismatch {
                expected,
                actual: self.oee_percent,
            });
        }

        Ok(())
    }
}

/// 校验操作员ID: 非空、无首尾空白且不超过 10 个字符
pub fn validate_operator_id(operator_id: &str) -> ValidationResult<()> {
    if operator_id.trim().is_empty() {
        return Err(ValidationError::OperatorIdMissing);
    }
    check_trimmed("operator_id", operator_id)?;
    if operator_id.chars().count() > OPERATOR_ID_MAX_CHARS {
        return Err(ValidationError::OperatorIdTooLong {
            value: operator_id.to_string(),
            max: OPERATOR_ID_MAX_CHARS,
        });
    }
    Ok(())
}

// CSV 读取时会去除首尾空白，写入的值必须已去除
fn check_trimmed(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim() != value {
        return Err(ValidationError::UntrimmedField {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}
