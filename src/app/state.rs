// ==========================================
// 护理排班可行性看板 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// 说明: 所有字段均为 Arc，可廉价克隆给每个请求
// ==========================================

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api::{CalculatorApi, DashboardApi, ModelApi};
use crate::config::{default_config_path, ConfigManager, ConfigResult, CONFIG_PATH_ENV};
use crate::config::EvaluationConfigReader;
use crate::importer::MatrixImporterImpl;

/// 应用状态
///
/// 包含所有API实例和共享配置
#[derive(Clone)]
pub struct AppState {
    /// 生效配置
    pub config: Arc<ConfigManager>,

    /// 看板API（矩阵评估）
    pub dashboard_api: Arc<DashboardApi>,

    /// 单人计算器API
    pub calculator_api: Arc<CalculatorApi>,

    /// 模型说明API
    pub model_api: Arc<ModelApi>,
}

impl AppState {
    /// 基于已加载的配置创建 AppState
    pub fn new(config: ConfigManager) -> Self {
        let config = Arc::new(config);
        let default_locale = config.default_locale();
        let reader: Arc<dyn EvaluationConfigReader> = config.clone();

        tracing::info!(
            config_source = ?config.source(),
            default_locale = %default_locale,
            "初始化AppState"
        );

        let importer = Arc::new(MatrixImporterImpl::new());

        Self {
            dashboard_api: Arc::new(DashboardApi::new(
                importer,
                reader.clone(),
                default_locale.clone(),
            )),
            calculator_api: Arc::new(CalculatorApi::new(reader.clone(), default_locale)),
            model_api: Arc::new(ModelApi::new(reader)),
            config,
        }
    }

    /// 从配置文件创建 AppState
    ///
    /// # 参数
    /// - config_path: JSON 配置文件路径（不存在时使用默认值）
    pub fn from_config_path(config_path: &Path) -> ConfigResult<Self> {
        Ok(Self::new(ConfigManager::new(config_path)?))
    }
}

/// 获取默认配置文件路径
///
/// # 返回
/// - 环境变量 NURSE_SHIFT_CONFIG_PATH（非空时）
/// - 否则: 用户配置目录/nurse-shift-feasibility/config.json
pub fn get_default_config_path() -> PathBuf {
    // 允许通过环境变量显式指定配置路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    default_config_path()
}
