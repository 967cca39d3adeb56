// ==========================================
// 设备维护日志系统 - 日志存储错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::ValidationError;
use thiserror::Error;

/// 日志存储错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    // ===== 写入前校验 =====
    #[error("数据验证失败: {0}")]
    Validation(#[from] ValidationError),

    // ===== 文件相关错误 =====
    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("文件写入失败: {0}")]
    FileWriteError(String),

    // ===== 文件内容损坏 =====
    #[error("表头不匹配: 期望 [{expected}]，实际 [{actual}]")]
    HeaderMismatch { expected: String, actual: String },

    #[error("记录损坏 (行 {row}): {message}")]
    CorruptRecord { row: usize, message: String },
}

impl StoreError {
    /// 是否为写入前的字段校验错误
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }

    /// 是否为文件读写/损坏类错误（存储不可用，需要外部修复）
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            StoreError::FileReadError(_)
                | StoreError::FileWriteError(_)
                | StoreError::HeaderMismatch { .. }
                | StoreError::CorruptRecord { .. }
        )
    }
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        let row = err
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(0);
        match err.kind() {
            csv::ErrorKind::Io(_) => StoreError::FileReadError(err.to_string()),
            _ => StoreError::CorruptRecord {
                row,
                message: err.to_string(),
            },
        }
    }
}

/// Result 类型别名
pub type StoreResult<T> = Result<T, StoreError>;
