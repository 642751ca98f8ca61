// ==========================================
// 护理排班可行性看板 - 引擎层
// ==========================================
// 职责: 矩阵校验、工时可行性、班次负荷、覆盖校验、单人计算器
// 红线: 纯函数, 不做 I/O, 不持有共享可变状态
// ==========================================

pub mod calculator;
pub mod coverage;
pub mod error;
pub mod feasibility;
pub mod matrix_validator;
pub mod slot_load;

// 重导出核心引擎
pub use calculator::{ShiftQuery, SingleWorkerCalculator};
pub use coverage::CoverageChecker;
pub use error::{EngineError, EngineResult};
pub use feasibility::FeasibilityEvaluator;
pub use matrix_validator::MatrixValidator;
pub use slot_load::SlotLoadAggregator;
