// ==========================================
// 护理排班可行性看板 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、环境变量覆写
// 存储: JSON 文件（扁平 key-value）
// 优先级: 环境变量 NURSE_SHIFT_<KEY> > 配置文件 > 内置默认值
// ==========================================

use crate::config::evaluation_config_trait::EvaluationConfigReader;
use crate::domain::types::{
    DAYS_PER_WEEK, DEFAULT_CAPACITY_LIMIT_HOURS, DEFAULT_MAX_CALCULATOR_SHIFTS,
    DEFAULT_SHIFT_LENGTH_HOURS, DEFAULT_SLOTS_PER_DAY, HOURS_PER_WEEK,
};
use crate::i18n;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "NURSE_SHIFT_CONFIG_PATH";

/// 环境变量覆写前缀
pub const ENV_PREFIX: &str = "NURSE_SHIFT_";

/// 默认上传体积上限（10 MiB）
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// ==========================================
// ConfigError - 配置层错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: {path}: {message}")]
    FormatError { path: String, message: String },

    #[error("配置值无效: {key}={value}")]
    InvalidValue { key: String, value: String },

    #[error("配置序列化失败: {0}")]
    SerializeError(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: BTreeMap<String, String>,
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 从指定 JSON 文件加载，并应用环境变量覆写
    ///
    /// # 说明
    /// - 文件不存在时使用内置默认值
    /// - 文件内容必须是 JSON 对象，值可以是字符串/数字/布尔/null
    pub fn new<P: AsRef<Path>>(config_path: P) -> ConfigResult<Self> {
        let path = config_path.as_ref();
        let mut manager = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
                path: path.display().to_string(),
                source,
            })?;
            let mut manager = Self::from_json_str(&raw).map_err(|e| match e {
                ConfigError::FormatError { message, .. } => ConfigError::FormatError {
                    path: path.display().to_string(),
                    message,
                },
                other => other,
            })?;
            manager.source = Some(path.to_path_buf());
            manager
        } else {
            tracing::info!(path = %path.display(), "配置文件不存在，使用默认配置");
            Self::default()
        };

        manager.apply_env_overrides();
        Ok(manager)
    }

    /// 从 JSON 文本构造（不读取环境变量）
    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let parsed: Value = serde_json::from_str(raw).map_err(|e| ConfigError::FormatError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;

        let object = match parsed {
            Value::Object(map) => map,
            other => {
                return Err(ConfigError::FormatError {
                    path: "<inline>".to_string(),
                    message: format!("顶层必须是 JSON 对象, 实际为: {}", other),
                })
            }
        };

        let values = object
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Null => None,
                Value::String(s) => Some((key, s)),
                other => Some((key, other.to_string())),
            })
            .collect();

        Ok(Self {
            values,
            source: None,
        })
    }

    /// 从键值对构造（测试与嵌入场景）
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            source: None,
        }
    }

    /// 配置来源文件（None 表示未读取文件）
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 应用 NURSE_SHIFT_<KEY> 环境变量覆写
    fn apply_env_overrides(&mut self) {
        for key in config_keys::ALL {
            let env_key = format!("{}{}", ENV_PREFIX, key.to_uppercase());
            if let Ok(value) = std::env::var(&env_key) {
                tracing::debug!(config_key = key, env = %env_key, "环境变量覆写配置");
                self.values.insert(key.to_string(), value);
            }
        }
    }

    /// 读取配置原始值
    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// 读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key).unwrap_or(default).to_string()
    }

    /// 解析配置值；格式错误时记录告警并回退默认值
    fn parse_or_default<T: FromStr + Copy>(&self, key: &str, default: T) -> T {
        match self.get_config_value(key) {
            None => default,
            Some(raw) => raw.parse::<T>().unwrap_or_else(|_| {
                tracing::warn!(config_key = key, raw_value = %raw, "配置格式错误，使用默认值");
                default
            }),
        }
    }

    /// 解析可选配置值；未设置返回 None，格式错误返回 InvalidValue
    fn parse_optional<T: FromStr>(&self, key: &str) -> ConfigResult<Option<T>> {
        self.get_config_value(key)
            .map(|raw| {
                raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: raw.to_string(),
                })
            })
            .transpose()
    }

    /// 读取小时类配置，取值须在 [min, HOURS_PER_WEEK]
    fn weekly_hours(&self, key: &str, default: u32, min: u32) -> ConfigResult<u32> {
        let value = self.parse_or_default(key, default);
        if value < min || value > HOURS_PER_WEEK {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        Ok(value)
    }

    // ===== 服务配置 =====

    pub fn server_host(&self) -> String {
        self.get_config_or_default(config_keys::SERVER_HOST, "0.0.0.0")
    }

    pub fn server_port(&self) -> u16 {
        self.parse_or_default(config_keys::SERVER_PORT, 8080)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.parse_or_default(config_keys::MAX_UPLOAD_BYTES, DEFAULT_MAX_UPLOAD_BYTES)
    }

    pub fn default_locale(&self) -> String {
        self.get_config_or_default(config_keys::DEFAULT_LOCALE, i18n::DEFAULT_LOCALE)
    }

    /// 获取生效配置的快照（JSON格式）
    ///
    /// # 用途
    /// - 启动日志
    /// - 评估结果溯源
    pub fn snapshot(&self) -> ConfigResult<String> {
        let mut map = Map::new();
        map.insert(
            config_keys::CAPACITY_LIMIT_HOURS.into(),
            self.parse_or_default(config_keys::CAPACITY_LIMIT_HOURS, DEFAULT_CAPACITY_LIMIT_HOURS)
                .into(),
        );
        map.insert(
            config_keys::SHIFT_LENGTH_HOURS.into(),
            self.parse_or_default(config_keys::SHIFT_LENGTH_HOURS, DEFAULT_SHIFT_LENGTH_HOURS)
                .into(),
        );
        map.insert(
            config_keys::SLOTS_PER_DAY.into(),
            self.parse_or_default(config_keys::SLOTS_PER_DAY, DEFAULT_SLOTS_PER_DAY)
                .into(),
        );
        map.insert(
            config_keys::DAYS_PER_WEEK.into(),
            self.parse_or_default(config_keys::DAYS_PER_WEEK, DAYS_PER_WEEK)
                .into(),
        );
        map.insert(
            config_keys::MAX_CALCULATOR_SHIFTS.into(),
            self.parse_or_default(
                config_keys::MAX_CALCULATOR_SHIFTS,
                DEFAULT_MAX_CALCULATOR_SHIFTS,
            )
            .into(),
        );
        map.insert(
            config_keys::COVERAGE_MIN_PER_SLOT.into(),
            self.parse_optional::<u32>(config_keys::COVERAGE_MIN_PER_SLOT)?
                .into(),
        );
        map.insert(
            config_keys::COVERAGE_MAX_PER_SLOT.into(),
            self.parse_optional::<u32>(config_keys::COVERAGE_MAX_PER_SLOT)?
                .into(),
        );
        map.insert(config_keys::DEFAULT_LOCALE.into(), self.default_locale().into());
        map.insert(config_keys::SERVER_HOST.into(), self.server_host().into());
        map.insert(config_keys::SERVER_PORT.into(), self.server_port().into());
        map.insert(
            config_keys::MAX_UPLOAD_BYTES.into(),
            self.max_upload_bytes().into(),
        );

        Ok(serde_json::to_string(&Value::Object(map))?)
    }
}

/// 默认配置文件路径: <config_dir>/nurse-shift-feasibility/config.json
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nurse-shift-feasibility")
        .join("config.json")
}

// ==========================================
// EvaluationConfigReader Trait 实现
// ==========================================
#[async_trait]
impl EvaluationConfigReader for ConfigManager {
    // ===== 工时配置 =====

    async fn get_capacity_limit_hours(&self) -> ConfigResult<u32> {
        self.weekly_hours(
            config_keys::CAPACITY_LIMIT_HOURS,
            DEFAULT_CAPACITY_LIMIT_HOURS,
            0,
        )
    }

    async fn get_shift_length_hours(&self) -> ConfigResult<u32> {
        self.weekly_hours(config_keys::SHIFT_LENGTH_HOURS, DEFAULT_SHIFT_LENGTH_HOURS, 1)
    }

    async fn get_max_calculator_shifts(&self) -> ConfigResult<u32> {
        Ok(self.parse_or_default(
            config_keys::MAX_CALCULATOR_SHIFTS,
            DEFAULT_MAX_CALCULATOR_SHIFTS,
        ))
    }

    // ===== 时段配置 =====

    async fn get_slots_per_day(&self) -> ConfigResult<usize> {
        let value = self.parse_or_default(config_keys::SLOTS_PER_DAY, DEFAULT_SLOTS_PER_DAY);
        if value == 0 {
            return Err(ConfigError::InvalidValue {
                key: config_keys::SLOTS_PER_DAY.to_string(),
                value: value.to_string(),
            });
        }
        Ok(value)
    }

    async fn get_days_per_week(&self) -> ConfigResult<usize> {
        Ok(self.parse_or_default(config_keys::DAYS_PER_WEEK, DAYS_PER_WEEK))
    }

    // ===== 覆盖配置 =====

    async fn get_coverage_bounds(&self) -> ConfigResult<(Option<u32>, Option<u32>)> {
        Ok((
            self.parse_optional(config_keys::COVERAGE_MIN_PER_SLOT)?,
            self.parse_optional(config_keys::COVERAGE_MAX_PER_SLOT)?,
        ))
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 工时
    pub const CAPACITY_LIMIT_HOURS: &str = "capacity_limit_hours";
    pub const SHIFT_LENGTH_HOURS: &str = "shift_length_hours";
    pub const MAX_CALCULATOR_SHIFTS: &str = "max_calculator_shifts";

    // 时段
    pub const SLOTS_PER_DAY: &str = "slots_per_day";
    pub const DAYS_PER_WEEK: &str = "days_per_week";

    // 覆盖（未设置则不检查）
    pub const COVERAGE_MIN_PER_SLOT: &str = "coverage_min_per_slot";
    pub const COVERAGE_MAX_PER_SLOT: &str = "coverage_max_per_slot";

    // 界面
    pub const DEFAULT_LOCALE: &str = "default_locale";

    // 服务
    pub const SERVER_HOST: &str = "server_host";
    pub const SERVER_PORT: &str = "server_port";
    pub const MAX_UPLOAD_BYTES: &str = "max_upload_bytes";

    pub const ALL: [&str; 11] = [
        CAPACITY_LIMIT_HOURS,
        SHIFT_LENGTH_HOURS,
        MAX_CALCULATOR_SHIFTS,
        SLOTS_PER_DAY,
        DAYS_PER_WEEK,
        COVERAGE_MIN_PER_SLOT,
        COVERAGE_MAX_PER_SLOT,
        DEFAULT_LOCALE,
        SERVER_HOST,
        SERVER_PORT,
        MAX_UPLOAD_BYTES,
    ];
}
