// ==========================================
// 护理排班可行性看板 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，将引擎/导入/配置错误转换为用户友好的错误消息
// 约定: 错误信息必须包含显式原因（行列位置、越界值）
// ==========================================

use crate::config::ConfigError;
use crate::engine::error::EngineError;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    /// 矩阵校验失败（带 1-based 行列位置）
    #[error("矩阵校验失败: {message}")]
    MatrixValidationError {
        message: String,
        row: Option<usize>,
        column: Option<usize>,
    },

    #[error("取值越界: {0}")]
    OutOfRange(String),

    // ==========================================
    // 导入错误
    // ==========================================
    #[error("文件格式不支持: {0}")]
    UnsupportedFormat(String),

    #[error("文件导入失败: {0}")]
    ImportError(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let message = err.to_string();
        match err {
            EngineError::EmptyMatrix => ApiError::MatrixValidationError {
                message,
                row: None,
                column: None,
            },
            EngineError::RaggedRow { row, .. } => ApiError::MatrixValidationError {
                message,
                row: Some(row),
                column: None,
            },
            EngineError::NonBinaryCell { row, column, .. }
            | EngineError::BlankCell { row, column } => ApiError::MatrixValidationError {
                message,
                row: Some(row),
                column: Some(column),
            },
            EngineError::InvalidGroupSize(_) | EngineError::InvalidCoverageBounds { .. } => {
                ApiError::InvalidInput(message)
            }
            EngineError::ShiftCountOutOfRange { .. } => ApiError::OutOfRange(message),
        }
    }
}

// ==========================================
// 从 ImportError 转换
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::InvalidMatrix(engine_err) => engine_err.into(),
            ImportError::UnsupportedFormat(ext) => ApiError::UnsupportedFormat(ext),
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
