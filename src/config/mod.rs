// ==========================================
// 防火隔离带规划系统 - 配置层
// ==========================================
// 职责: 引擎配置（默认系数表 + 策略常量）的加载与校验
// 存储: JSON 配置文件
// ==========================================

pub mod config_manager;
pub mod engine_config;
pub mod error;

// 重导出核心配置类型
pub use config_manager::{default_config_path, ConfigManager, CONFIG_PATH_ENV};
pub use engine_config::{defaults, EngineConfig, FactorTable};
pub use error::{ConfigError, ConfigResult};
