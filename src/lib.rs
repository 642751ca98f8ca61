// ==========================================
// 护理排班可行性看板 - 核心库
// ==========================================
// 模型: X_ij ∈ {0,1}, 护士 i 是否排在班次 j
// 约束: Σ_j X_ij · h ≤ WH（默认 h = 8, WH = 40）
// 技术栈: axum + tokio + calamine
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 矩阵与评估结果
pub mod domain;

// 引擎层 - 纯计算
pub mod engine;

// 导入层 - 外部表格
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - 共享状态与 HTTP
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AssignmentMatrix, CalculatorOutcome, CoverageReport, FeasibilityReport, ImportedMatrix,
    RedistributionOutcome, SlotLoadSummary, UploadFormat,
};

// 引擎
pub use engine::{
    CoverageChecker, EngineError, FeasibilityEvaluator, MatrixValidator, ShiftQuery,
    SingleWorkerCalculator, SlotLoadAggregator,
};

// API
pub use api::{CalculatorApi, DashboardApi, ModelApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "护理排班可行性看板";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_locales_loaded() {
        let locales = i18n::available_locales();
        for expected in ["zh-CN", "en", "es"] {
            assert!(locales.contains(&expected), "missing locale {}", expected);
        }
    }
}
