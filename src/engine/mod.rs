// ==========================================
// 防火隔离带规划系统 - 引擎层
// ==========================================
// 职责: 装备适配判定与工时/成本分析的纯计算
// 依赖顺序: 校验器 → 环境分级 → 适配判定 → 工时/成本 → 排序
// 红线: 引擎不做文件读写, 所有判定必须输出 note
// ==========================================

pub mod calculator;
pub mod compatibility;
pub mod environment;
pub mod orchestrator;
pub mod ranker;
pub mod validator;

// 重导出核心引擎
pub use calculator::{DropEstimate, TimeCostCalculator};
pub use compatibility::{
    CompatibilityEvaluator, MachineryAssessment, SlopeCheck, TerrainAssessment,
    NOTE_ENVIRONMENT_NOT_PERMITTED, NOTE_TOO_MUCH_DIFFICULT_TERRAIN,
};
pub use environment::EnvironmentClassifier;
pub use orchestrator::AnalysisEngine;
pub use ranker::ResultRanker;
pub use validator::EquipmentValidator;
