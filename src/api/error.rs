// ==========================================
// 设备维护日志系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换存储错误为用户友好的错误消息
// 展示层收到错误后显示非致命提示，不中断页面
// ==========================================

use crate::domain::ValidationError;
use crate::repository::error::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据验证失败: {0}")]
    ValidationError(#[from] ValidationError),

    /// 日志文件不可读或已损坏，需要外部修复后才能继续使用
    #[error("日志存储不可用: {0}")]
    StorageError(String),
}

// ==========================================
// 从 StoreError 转换
// ==========================================
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(e) => ApiError::ValidationError(e),
            StoreError::FileReadError(msg) => {
                ApiError::StorageError(format!("文件读取失败: {}", msg))
            }
            StoreError::FileWriteError(msg) => {
                ApiError::StorageError(format!("文件写入失败: {}", msg))
            }
            e @ StoreError::HeaderMismatch { .. } => ApiError::StorageError(e.to_string()),
            e @ StoreError::CorruptRecord { .. } => ApiError::StorageError(e.to_string()),
        }
    }
}

impl ApiError {
    /// 稳定错误代码（供展示层区分提示类型）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::ValidationError(_) => "VALIDATION_ERROR",
            ApiError::StorageError(_) => "STORAGE_ERROR",
        }
    }

    /// 转换为展示层错误响应
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

/// 错误响应（返回给展示层）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
