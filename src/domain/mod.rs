// ==========================================
// 护理排班可行性看板 - 领域模型层
// ==========================================
// 职责: 定义指派矩阵、评估结果、模型常量
// 红线: 不含 I/O, 不含引擎逻辑
// ==========================================

pub mod assignment;
pub mod report;
pub mod types;

// 重导出核心类型
pub use assignment::{AssignmentMatrix, ImportedMatrix};
pub use report::{
    CalculatorOutcome, CoverageReport, FeasibilityReport, GroupLoad, RedistributionOutcome,
    SlotCoverageViolation, SlotLoadSummary, WorkerHoursSummary,
};
pub use types::UploadFormat;
