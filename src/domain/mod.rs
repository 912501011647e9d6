// ==========================================
// 防火隔离带规划系统 - 领域模型层
// ==========================================
// 职责: 定义装备、路线剖面、分析请求/结果等值对象
// 红线: 不含文件读写逻辑,不含引擎逻辑
// ==========================================

pub mod analysis;
pub mod equipment;
pub mod profile;
pub mod types;

// 重导出核心类型
pub use analysis::{
    AnalysisParameters, AnalysisRequest, AnalysisResult, CalculationResult, EffectiveEnvironment,
    RouteInput, TIME_UNIT_HOURS,
};
pub use equipment::{EquipmentKind, EquipmentSpec};
pub use profile::{TrackProfile, VegetationProfile};
pub use types::{
    terrain_for_slope_bucket, CompatibilityLevel, EquipmentType, TerrainLevel, VegetationClass,
    SLOPE_BUCKET_TERRAIN,
};
