// ==========================================
// 护理排班可行性看板 - 配置层
// ==========================================
// 职责: 系统配置管理, 支持文件 + 环境变量覆写
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod evaluation_config_trait;

// 重导出核心配置管理器
pub use config_manager::{
    config_keys, default_config_path, ConfigError, ConfigManager, ConfigResult, CONFIG_PATH_ENV,
};
pub use evaluation_config_trait::EvaluationConfigReader;
