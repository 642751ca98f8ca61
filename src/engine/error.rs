// ==========================================
// 护理排班可行性看板 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 分类: 无效输入 (InvalidInput) / 取值越界 (Range)
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
///
/// 所有错误都是终止性的：不返回部分结果，也没有重试的意义
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    // ===== 无效输入 =====
    #[error("矩阵为空: 至少需要 1 行 1 列")]
    EmptyMatrix,

    #[error("矩阵不规则 (第 {row} 行): 期望 {expected} 列，实际 {actual} 列")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("单元格非二元值 (第 {row} 行, 第 {column} 列): {value}")]
    NonBinaryCell {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("单元格为空 (第 {row} 行, 第 {column} 列)")]
    BlankCell { row: usize, column: usize },

    #[error("分组大小无效: {0}（必须 ≥ 1）")]
    InvalidGroupSize(usize),

    #[error("覆盖约束无效: 最少人数 {min} 大于最多人数 {max}")]
    InvalidCoverageBounds { min: u32, max: u32 },

    // ===== 取值越界 =====
    #[error("班次数越界: {value} 不在 [{min}, {max}] 范围内")]
    ShiftCountOutOfRange { value: i64, min: u32, max: u32 },
}

impl EngineError {
    /// 是否属于取值越界类错误（其余均为无效输入）
    pub fn is_range_error(&self) -> bool {
        matches!(self, EngineError::ShiftCountOutOfRange { .. })
    }
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
