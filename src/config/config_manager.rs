// ==========================================
// 防火隔离带规划系统 - 配置管理器
// ==========================================
// 职责: 定位、加载、校验引擎配置文件
// 存储: JSON 文件（缺失时使用内置默认值）
// 定位顺序: FIREBREAK_PLANNER_CONFIG 环境变量 → 系统配置目录/firebreak-planner/engine.json
// ==========================================

use crate::config::engine_config::EngineConfig;
use crate::config::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// 指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "FIREBREAK_PLANNER_CONFIG";

const APP_DIR_NAME: &str = "firebreak-planner";
const CONFIG_FILE_NAME: &str = "engine.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    path: Option<PathBuf>,
}

impl ConfigManager {
    /// 使用指定路径创建 ConfigManager
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// 按环境变量 / 系统配置目录定位配置文件
    pub fn from_env_or_default() -> Self {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(default_config_path);
        Self { path }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 加载引擎配置
    ///
    /// # 返回
    /// - Ok(EngineConfig): 文件内容（缺省键补齐默认值）；文件不存在时为内置默认值
    /// - Err(ConfigError): 读取失败、解析失败或取值非法
    #[instrument(skip(self), fields(path = ?self.path))]
    pub fn load(&self) -> ConfigResult<EngineConfig> {
        let path = match &self.path {
            Some(p) if p.exists() => p,
            _ => {
                info!("未找到配置文件，使用内置默认配置");
                return Ok(EngineConfig::default());
            }
        };

        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::FileReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = Self::parse_str(&raw, &path.display().to_string())?;
        debug!(?config, "配置加载完成");
        Ok(config)
    }

    /// 从 JSON 文本解析配置（补齐默认系数并校验）
    pub fn parse_str(raw: &str, origin: &str) -> ConfigResult<EngineConfig> {
        let mut config: EngineConfig =
            serde_json::from_str(raw).map_err(|e| ConfigError::ParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        config.factors = config.factors.with_builtin_fallback();
        config.validate()?;
        Ok(config)
    }
}

/// 系统配置目录下的默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}
