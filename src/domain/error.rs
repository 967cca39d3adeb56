// ==========================================
// 设备维护日志系统 - 字段校验错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 字段取值校验错误
///
/// 写入前校验失败时返回，保证不会产生半条记录
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("班次无效: {0}（仅支持 1/2/3）")]
    InvalidShift(i64),

    #[error("操作员ID不能为空")]
    OperatorIdMissing,

    #[error("操作员ID过长: {value}（最多 {max} 个字符）")]
    OperatorIdTooLong { value: String, max: usize },

    #[error("字段首尾不能有空白 (字段 {field}): {value:?}")]
    UntrimmedField { field: String, value: String },

    #[error("数值范围错误 (字段 {field}): 值 {value} 超出范围 [{min}, {max}]")]
    ValueRangeError {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("未知故障类型: {0}")]
    UnknownIssue(String),

    #[error("处理措施与故障不匹配: issue={issue}, fix={fix}")]
    FixNotAllowed { issue: String, fix: String },

    #[error("机组标识不能为空")]
    MachineMissing,

    #[error("压机编号不在可选范围内: {0}")]
    UnknownPress(u32),

    #[error("OEE 必须由运行/停机时间计算: 期望 {expected}，实际 {actual}")]
    OeeMismatch { expected: f64, actual: f64 },
}

/// Result 类型别名
pub type ValidationResult<T> = Result<T, ValidationError>;
