// ==========================================
// 防火隔离带规划系统 - 核心库
// ==========================================
// 职责: 装备适配判定与工时/成本分析
// 技术栈: Rust + serde + tracing
// 系统定位: 决策支持系统 (规划人员最终决定装备选型)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 值对象与类型
pub mod domain;

// 配置层 - 默认系数表与策略常量
pub mod config;

// 引擎层 - 适配判定与工时/成本计算
pub mod engine;

// 导入层 - 装备目录
pub mod importer;

// API 层 - 请求校验与引擎调用
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{CompatibilityLevel, EquipmentType, TerrainLevel, VegetationClass};

// 领域对象
pub use domain::{
    AnalysisParameters, AnalysisRequest, AnalysisResult, CalculationResult, EffectiveEnvironment,
    EquipmentKind, EquipmentSpec, RouteInput, TrackProfile, VegetationProfile,
};

// 配置
pub use config::{ConfigManager, EngineConfig};

// 引擎
pub use engine::AnalysisEngine;

// 导入
pub use importer::EquipmentCatalogueImporter;

// API
pub use api::{AnalysisApi, ApiError};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "防火隔离带规划系统";
