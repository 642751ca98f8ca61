// ==========================================
// 护理排班可行性看板 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 供 HTTP 路由与 CLI 调用
// ==========================================

pub mod calculator_api;
pub mod dashboard_api;
pub mod error;
pub mod model_api;

// 重导出核心类型
pub use calculator_api::{
    CalculatorApi, CalculatorRequest, CalculatorResponse, RedistributionRequest,
    RedistributionResponse, WorkerShiftInput,
};
pub use dashboard_api::{DashboardApi, DashboardReport, EvaluationOptions, Verdict};
pub use error::{ApiError, ApiResult};
pub use model_api::{ModelApi, ModelParameters, VariableGrowthRow, DEFAULT_VARIABLE_TABLE};
